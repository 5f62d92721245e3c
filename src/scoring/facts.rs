use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidates submitted to an evaluation pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Objective facts extracted from one resume against one job posting.
///
/// Produced by the external extraction collaborator (an LLM returning
/// structured JSON) and immutable afterwards. Every ordinal field is a closed
/// enum, so a value outside the documented levels is rejected when the record
/// crosses the deserialization boundary instead of silently scoring zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFactRecord {
    pub technical_skills: TechnicalSkillFacts,
    pub experience: ExperienceFacts,
    pub education: EducationFacts,
    pub soft_skills: SoftSkillFacts,
    pub resume_quality: ResumeQualityFacts,
    pub bonus_factors: BonusFactorFacts,
}

/// Technology-related facts: which required technologies were found outright,
/// which near matches exist, and how deep the hands-on background runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkillFacts {
    pub required_techs_found: Vec<String>,
    pub similar_techs: Vec<String>,
    pub years_of_experience: f64,
    pub project_complexity: ProjectComplexity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceFacts {
    pub industry_match: IndustryMatch,
    pub role_match: RoleMatch,
    pub quantifiable_achievements: Vec<String>,
    pub career_progression: CareerProgression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationFacts {
    pub meets_requirement: EducationRequirement,
    pub relevance_to_role: EducationRelevance,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftSkillFacts {
    pub communication_evidence: EvidenceStrength,
    pub leadership_experience: LeadershipLevel,
    pub cultural_fit_indicators: Vec<String>,
    pub adaptability_evidence: EvidenceStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeQualityFacts {
    pub clarity: QualityLevel,
    pub completeness: QualityLevel,
}

/// Credit-only extras: skills transferable from other domains and preferred
/// qualifications the candidate already meets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusFactorFacts {
    pub transferable_skills: Vec<TransferableSkill>,
    pub preferred_qualifications_met: Vec<String>,
}

/// A skill earned in an unrelated domain, with the extractor's rationale for
/// why it carries over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferableSkill {
    pub skill: String,
    pub rationale: String,
}

/// Depth of project work demonstrated on the resume, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectComplexity {
    None,
    Learning,
    Basic,
    Medium,
    Enterprise,
}

impl ProjectComplexity {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::None,
            Self::Learning,
            Self::Basic,
            Self::Medium,
            Self::Enterprise,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Learning => "learning",
            Self::Basic => "basic",
            Self::Medium => "medium",
            Self::Enterprise => "enterprise",
        }
    }
}

/// How closely the candidate's industry background matches the posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryMatch {
    Unrelated,
    Transferable,
    SimilarRegulated,
    HealthcareRelated,
    Exact,
}

impl IndustryMatch {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Unrelated,
            Self::Transferable,
            Self::SimilarRegulated,
            Self::HealthcareRelated,
            Self::Exact,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Unrelated => "unrelated",
            Self::Transferable => "transferable",
            Self::SimilarRegulated => "similar_regulated",
            Self::HealthcareRelated => "healthcare_related",
            Self::Exact => "exact",
        }
    }
}

/// How closely prior roles match the advertised role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMatch {
    Unrelated,
    Transferable,
    Related,
    Similar,
    Exact,
}

impl RoleMatch {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Unrelated,
            Self::Transferable,
            Self::Related,
            Self::Similar,
            Self::Exact,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Unrelated => "unrelated",
            Self::Transferable => "transferable",
            Self::Related => "related",
            Self::Similar => "similar",
            Self::Exact => "exact",
        }
    }
}

/// Shape of the candidate's career trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerProgression {
    ConcerningPattern,
    GapsExplained,
    LateralMoves,
    SteadyGrowth,
    ClearAdvancement,
}

impl CareerProgression {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ConcerningPattern,
            Self::GapsExplained,
            Self::LateralMoves,
            Self::SteadyGrowth,
            Self::ClearAdvancement,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ConcerningPattern => "concerning_pattern",
            Self::GapsExplained => "gaps_explained",
            Self::LateralMoves => "lateral_moves",
            Self::SteadyGrowth => "steady_growth",
            Self::ClearAdvancement => "clear_advancement",
        }
    }
}

/// Whether the stated education requirement is satisfied. `RelatedField` is
/// the level that earns partial "related degree" credit during equivalence
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationRequirement {
    NotMet,
    Partial,
    RelatedField,
    Meets,
    Exceeds,
}

impl EducationRequirement {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NotMet,
            Self::Partial,
            Self::RelatedField,
            Self::Meets,
            Self::Exceeds,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::NotMet => "not_met",
            Self::Partial => "partial",
            Self::RelatedField => "related_field",
            Self::Meets => "meets",
            Self::Exceeds => "exceeds",
        }
    }
}

/// How relevant the candidate's education is to the advertised role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationRelevance {
    Unrelated,
    General,
    Related,
    HighlyRelevant,
}

impl EducationRelevance {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Unrelated,
            Self::General,
            Self::Related,
            Self::HighlyRelevant,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Unrelated => "unrelated",
            Self::General => "general",
            Self::Related => "related",
            Self::HighlyRelevant => "highly_relevant",
        }
    }
}

/// Strength of documentary evidence for a soft skill (communication,
/// adaptability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    None,
    Minimal,
    Clear,
    Strong,
}

impl EvidenceStrength {
    pub const fn ordered() -> [Self; 4] {
        [Self::None, Self::Minimal, Self::Clear, Self::Strong]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minimal => "minimal",
            Self::Clear => "clear",
            Self::Strong => "strong",
        }
    }
}

/// Highest level of leadership the resume evidences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipLevel {
    None,
    Informal,
    TeamLead,
    Management,
}

impl LeadershipLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::None, Self::Informal, Self::TeamLead, Self::Management]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Informal => "informal",
            Self::TeamLead => "team_lead",
            Self::Management => "management",
        }
    }
}

/// Five-step quality scale shared by the clarity and completeness facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Poor,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl QualityLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Poor,
            Self::BelowAverage,
            Self::Average,
            Self::Good,
            Self::Excellent,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::BelowAverage => "below_average",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}
