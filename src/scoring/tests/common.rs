use std::collections::BTreeMap;

use chrono::Utc;

use crate::scoring::{
    items_for, AbsoluteTier, BonusFactorFacts, CandidateId, CareerProgression, EducationFacts,
    EducationRelevance, EducationRequirement, EvaluationResult, EvidenceStrength, ExperienceFacts,
    ExtractedFactRecord, IndustryMatch, JobRequirements, JobType, LeadershipLevel,
    ProjectComplexity, QualityLevel, ResumeQualityFacts, RoleMatch, RubricItem, ScoreCategory,
    ScoringEngine, SoftSkillFacts, TechnicalSkillFacts, TransferableSkill,
};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) fn catalog_item(id: &str) -> RubricItem {
    ScoreCategory::ordered()
        .into_iter()
        .flat_map(items_for)
        .find(|item| item.id == id)
        .unwrap_or_else(|| panic!("catalog has no item `{id}`"))
}

pub(super) fn technical_job() -> JobRequirements {
    JobRequirements {
        title: "Senior Backend Engineer".to_string(),
        description: "Owns the scheduling services and their PostgreSQL storage.".to_string(),
        must_have: vec![
            "Rust".to_string(),
            "PostgreSQL".to_string(),
            "Docker".to_string(),
            "AWS".to_string(),
            "5+ years of software development".to_string(),
        ],
        nice_to_have: vec!["Kubernetes".to_string(), "Terraform".to_string()],
        job_type: JobType::Technical,
    }
}

pub(super) fn open_role_job() -> JobRequirements {
    JobRequirements {
        title: "Office Coordinator".to_string(),
        description: "Keeps the front office running.".to_string(),
        must_have: Vec::new(),
        nice_to_have: Vec::new(),
        job_type: JobType::General,
    }
}

pub(super) fn strong_facts() -> ExtractedFactRecord {
    ExtractedFactRecord {
        technical_skills: TechnicalSkillFacts {
            required_techs_found: vec![
                "Rust".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
                "AWS".to_string(),
            ],
            similar_techs: Vec::new(),
            years_of_experience: 10.0,
            project_complexity: ProjectComplexity::Enterprise,
        },
        experience: ExperienceFacts {
            industry_match: IndustryMatch::Exact,
            role_match: RoleMatch::Exact,
            quantifiable_achievements: vec![
                "cut deploy time from 40 to 6 minutes".to_string(),
                "scaled ingest to 3x volume with no added headcount".to_string(),
                "reduced infra spend 22% year over year".to_string(),
            ],
            career_progression: CareerProgression::ClearAdvancement,
        },
        education: EducationFacts {
            meets_requirement: EducationRequirement::Exceeds,
            relevance_to_role: EducationRelevance::HighlyRelevant,
            certifications: vec![
                "AWS Solutions Architect".to_string(),
                "CKA".to_string(),
                "PostgreSQL Professional".to_string(),
            ],
        },
        soft_skills: SoftSkillFacts {
            communication_evidence: EvidenceStrength::Strong,
            leadership_experience: LeadershipLevel::Management,
            cultural_fit_indicators: vec![
                "mentors junior engineers".to_string(),
                "organizes internal tech talks".to_string(),
                "long tenure at each employer".to_string(),
            ],
            adaptability_evidence: EvidenceStrength::Strong,
        },
        resume_quality: ResumeQualityFacts {
            clarity: QualityLevel::Excellent,
            completeness: QualityLevel::Excellent,
        },
        bonus_factors: BonusFactorFacts {
            transferable_skills: vec![
                TransferableSkill {
                    skill: "incident command".to_string(),
                    rationale: "ran the on-call program at two employers".to_string(),
                },
                TransferableSkill {
                    skill: "technical writing".to_string(),
                    rationale: "maintains a widely read engineering blog".to_string(),
                },
                TransferableSkill {
                    skill: "vendor negotiation".to_string(),
                    rationale: "owned the cloud contract renewal".to_string(),
                },
            ],
            preferred_qualifications_met: vec!["Kubernetes".to_string(), "Terraform".to_string()],
        },
    }
}

pub(super) fn weak_facts() -> ExtractedFactRecord {
    ExtractedFactRecord {
        technical_skills: TechnicalSkillFacts {
            required_techs_found: Vec::new(),
            similar_techs: Vec::new(),
            years_of_experience: 0.0,
            project_complexity: ProjectComplexity::None,
        },
        experience: ExperienceFacts {
            industry_match: IndustryMatch::Unrelated,
            role_match: RoleMatch::Unrelated,
            quantifiable_achievements: Vec::new(),
            career_progression: CareerProgression::ConcerningPattern,
        },
        education: EducationFacts {
            meets_requirement: EducationRequirement::NotMet,
            relevance_to_role: EducationRelevance::Unrelated,
            certifications: Vec::new(),
        },
        soft_skills: SoftSkillFacts {
            communication_evidence: EvidenceStrength::None,
            leadership_experience: LeadershipLevel::None,
            cultural_fit_indicators: Vec::new(),
            adaptability_evidence: EvidenceStrength::None,
        },
        resume_quality: ResumeQualityFacts {
            clarity: QualityLevel::Poor,
            completeness: QualityLevel::Poor,
        },
        bonus_factors: BonusFactorFacts {
            transferable_skills: Vec::new(),
            preferred_qualifications_met: Vec::new(),
        },
    }
}

pub(super) fn middling_facts() -> ExtractedFactRecord {
    ExtractedFactRecord {
        technical_skills: TechnicalSkillFacts {
            required_techs_found: vec!["PostgreSQL".to_string(), "Docker".to_string()],
            similar_techs: vec!["Go, close to Rust in this team's usage".to_string()],
            years_of_experience: 4.0,
            project_complexity: ProjectComplexity::Medium,
        },
        experience: ExperienceFacts {
            industry_match: IndustryMatch::Transferable,
            role_match: RoleMatch::Related,
            quantifiable_achievements: vec!["halved page load time".to_string()],
            career_progression: CareerProgression::SteadyGrowth,
        },
        education: EducationFacts {
            meets_requirement: EducationRequirement::Meets,
            relevance_to_role: EducationRelevance::Related,
            certifications: vec!["Scrum Master".to_string()],
        },
        soft_skills: SoftSkillFacts {
            communication_evidence: EvidenceStrength::Clear,
            leadership_experience: LeadershipLevel::Informal,
            cultural_fit_indicators: vec!["volunteers for cross-team work".to_string()],
            adaptability_evidence: EvidenceStrength::Minimal,
        },
        resume_quality: ResumeQualityFacts {
            clarity: QualityLevel::Average,
            completeness: QualityLevel::Good,
        },
        bonus_factors: BonusFactorFacts {
            transferable_skills: vec![TransferableSkill {
                skill: "customer support".to_string(),
                rationale: "two years on the front line before engineering".to_string(),
            }],
            preferred_qualifications_met: vec!["Kubernetes".to_string()],
        },
    }
}

pub(super) fn result_with_score(id: &str, overall: u8) -> EvaluationResult {
    EvaluationResult {
        candidate_id: CandidateId::new(id),
        overall_score: overall,
        category_scores: BTreeMap::new(),
        tier: AbsoluteTier::from_overall(overall),
        placement: None,
        evaluated_at: Utc::now(),
    }
}
