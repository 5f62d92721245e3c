use serde::{Deserialize, Serialize};

use super::weights::weight_profile;
use super::JobType;

/// One weighted dimension of evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    TechnicalSkills,
    Experience,
    Education,
    SoftSkills,
    ResumeQuality,
    RequiredQualifications,
    PreferredQualifications,
    TransferableSkills,
}

impl ScoreCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::TechnicalSkills,
            Self::Experience,
            Self::Education,
            Self::SoftSkills,
            Self::ResumeQuality,
            Self::RequiredQualifications,
            Self::PreferredQualifications,
            Self::TransferableSkills,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TechnicalSkills => "Technical Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::SoftSkills => "Soft Skills",
            Self::ResumeQuality => "Resume Quality",
            Self::RequiredQualifications => "Required Qualifications",
            Self::PreferredQualifications => "Preferred Qualifications",
            Self::TransferableSkills => "Transferable Skills",
        }
    }
}

/// Closed lookup table from a named condition to the points it earns.
///
/// There is no fallback entry: a condition the scorer computes but the guide
/// does not list scores zero with an explanatory reason, and the catalog test
/// suite keeps that from happening by accident.
#[derive(Debug, Clone)]
pub struct ScoringGuide {
    entries: Vec<(&'static str, f64)>,
}

impl ScoringGuide {
    pub fn new(entries: Vec<(&'static str, f64)>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, condition: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == condition)
            .map(|(_, points)| *points)
    }

    pub fn conditions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, points)| *points)
    }
}

/// One scorable sub-criterion with its discrete point lookup table.
#[derive(Debug, Clone)]
pub struct RubricItem {
    pub id: &'static str,
    pub description: &'static str,
    pub max_points: f64,
    pub scoring_guide: ScoringGuide,
}

/// All items for one category together with the weight the active job type
/// assigns it.
#[derive(Debug, Clone)]
pub struct CategoryRubric {
    pub category: ScoreCategory,
    pub weight: f64,
    pub items: Vec<RubricItem>,
}

/// Resolve the full rubric for a job type: the static item catalog combined
/// with that job type's weight profile.
pub fn category_rubrics(job_type: JobType) -> Vec<CategoryRubric> {
    let weights = weight_profile(job_type);
    ScoreCategory::ordered()
        .into_iter()
        .map(|category| CategoryRubric {
            category,
            weight: weights.get(&category).copied().unwrap_or(0.0),
            items: items_for(category),
        })
        .collect()
}

/// The static item catalog for one category. Pure data; every condition the
/// item scorer can emit for these items appears here.
pub fn items_for(category: ScoreCategory) -> Vec<RubricItem> {
    match category {
        ScoreCategory::TechnicalSkills => technical_skill_items(),
        ScoreCategory::Experience => experience_items(),
        ScoreCategory::Education => education_items(),
        ScoreCategory::SoftSkills => soft_skill_items(),
        ScoreCategory::ResumeQuality => resume_quality_items(),
        ScoreCategory::RequiredQualifications => required_qualification_items(),
        ScoreCategory::PreferredQualifications => preferred_qualification_items(),
        ScoreCategory::TransferableSkills => transferable_skill_items(),
    }
}

/// Coverage-bucket names in descending order, shared by every item scored on
/// the percentage of a requirement list that is satisfied.
const COVERAGE_CONDITIONS: [&str; 11] = [
    "all_met",
    "90_percent",
    "80_percent",
    "70_percent",
    "60_percent",
    "50_percent",
    "40_percent",
    "30_percent",
    "20_percent",
    "10_percent",
    "none_met",
];

fn coverage_guide(points: [f64; 11]) -> ScoringGuide {
    ScoringGuide::new(COVERAGE_CONDITIONS.into_iter().zip(points).collect())
}

fn technical_skill_items() -> Vec<RubricItem> {
    vec![
        RubricItem {
            id: "tech_exact_match",
            description: "Required technologies matched exactly",
            max_points: 40.0,
            scoring_guide: coverage_guide([
                40.0, 36.0, 32.0, 28.0, 24.0, 20.0, 16.0, 12.0, 8.0, 4.0, 0.0,
            ]),
        },
        RubricItem {
            id: "tech_years",
            description: "Years of relevant technical experience",
            max_points: 25.0,
            scoring_guide: ScoringGuide::new(vec![
                ("exceeds", 25.0),
                ("meets", 20.0),
                ("slightly_below", 12.0),
                ("significantly_below", 5.0),
                ("none", 0.0),
            ]),
        },
        RubricItem {
            id: "tech_complexity",
            description: "Highest project complexity demonstrated",
            max_points: 20.0,
            scoring_guide: ScoringGuide::new(vec![
                ("enterprise", 20.0),
                ("medium", 14.0),
                ("basic", 8.0),
                ("learning", 4.0),
                ("none", 0.0),
            ]),
        },
    ]
}

fn experience_items() -> Vec<RubricItem> {
    vec![
        RubricItem {
            id: "exp_industry",
            description: "Industry alignment with the posting",
            max_points: 30.0,
            scoring_guide: ScoringGuide::new(vec![
                ("exact", 30.0),
                ("healthcare_related", 24.0),
                ("similar_regulated", 18.0),
                ("transferable", 10.0),
                ("unrelated", 0.0),
            ]),
        },
        RubricItem {
            id: "exp_role",
            description: "Prior roles aligned with the advertised role",
            max_points: 25.0,
            scoring_guide: ScoringGuide::new(vec![
                ("exact", 25.0),
                ("similar", 20.0),
                ("related", 14.0),
                ("transferable", 8.0),
                ("unrelated", 0.0),
            ]),
        },
        RubricItem {
            id: "exp_achievements",
            description: "Quantifiable achievements cited",
            max_points: 25.0,
            scoring_guide: ScoringGuide::new(vec![
                ("multiple", 25.0),
                ("some", 17.0),
                ("few", 10.0),
                ("none", 0.0),
            ]),
        },
        RubricItem {
            id: "exp_progression",
            description: "Career progression pattern",
            max_points: 20.0,
            scoring_guide: ScoringGuide::new(vec![
                ("clear_advancement", 20.0),
                ("steady_growth", 16.0),
                ("lateral_moves", 10.0),
                ("gaps_explained", 6.0),
                ("concerning_pattern", 0.0),
            ]),
        },
    ]
}

fn education_items() -> Vec<RubricItem> {
    vec![
        RubricItem {
            id: "edu_requirement",
            description: "Meets the stated education requirement",
            max_points: 30.0,
            scoring_guide: ScoringGuide::new(vec![
                ("exceeds", 30.0),
                ("meets", 25.0),
                ("related_field", 15.0),
                ("partial", 8.0),
                ("not_met", 0.0),
            ]),
        },
        RubricItem {
            id: "edu_relevance",
            description: "Relevance of education to the role",
            max_points: 20.0,
            scoring_guide: ScoringGuide::new(vec![
                ("highly_relevant", 20.0),
                ("related", 14.0),
                ("general", 7.0),
                ("unrelated", 0.0),
            ]),
        },
        RubricItem {
            id: "edu_certifications",
            description: "Professional certifications held",
            max_points: 20.0,
            scoring_guide: ScoringGuide::new(vec![
                ("multiple", 20.0),
                ("some", 14.0),
                ("few", 8.0),
                ("none", 0.0),
            ]),
        },
    ]
}

fn soft_skill_items() -> Vec<RubricItem> {
    vec![
        RubricItem {
            id: "soft_communication",
            description: "Evidence of communication skills",
            max_points: 25.0,
            scoring_guide: ScoringGuide::new(vec![
                ("strong", 25.0),
                ("clear", 18.0),
                ("minimal", 8.0),
                ("none", 0.0),
            ]),
        },
        RubricItem {
            id: "soft_leadership",
            description: "Leadership experience evidenced",
            max_points: 25.0,
            scoring_guide: ScoringGuide::new(vec![
                ("management", 25.0),
                ("team_lead", 18.0),
                ("informal", 10.0),
                ("none", 0.0),
            ]),
        },
        RubricItem {
            id: "soft_cultural_fit",
            description: "Cultural fit indicators",
            max_points: 20.0,
            scoring_guide: ScoringGuide::new(vec![
                ("multiple", 20.0),
                ("some", 14.0),
                ("few", 8.0),
                ("none", 0.0),
            ]),
        },
        RubricItem {
            id: "soft_adaptability",
            description: "Evidence of adaptability",
            max_points: 15.0,
            scoring_guide: ScoringGuide::new(vec![
                ("strong", 15.0),
                ("clear", 10.0),
                ("minimal", 5.0),
                ("none", 0.0),
            ]),
        },
    ]
}

fn resume_quality_items() -> Vec<RubricItem> {
    let quality_guide = || {
        ScoringGuide::new(vec![
            ("excellent", 25.0),
            ("good", 20.0),
            ("average", 12.0),
            ("below_average", 6.0),
            ("poor", 0.0),
        ])
    };

    vec![
        RubricItem {
            id: "quality_clarity",
            description: "Clarity of writing and layout",
            max_points: 25.0,
            scoring_guide: quality_guide(),
        },
        RubricItem {
            id: "quality_completeness",
            description: "Completeness of the resume",
            max_points: 25.0,
            scoring_guide: quality_guide(),
        },
    ]
}

fn required_qualification_items() -> Vec<RubricItem> {
    vec![
        RubricItem {
            id: "req_exact_match",
            description: "Required qualifications met outright",
            max_points: 50.0,
            scoring_guide: coverage_guide([
                50.0, 45.0, 40.0, 35.0, 30.0, 25.0, 20.0, 15.0, 10.0, 5.0, 0.0,
            ]),
        },
        RubricItem {
            id: "req_partial_equivalents",
            description: "Equivalent credit toward unmet requirements",
            max_points: 30.0,
            scoring_guide: ScoringGuide::new(vec![
                ("strong_equivalents", 30.0),
                ("good_equivalents", 22.0),
                ("some_equivalents", 15.0),
                ("weak_equivalents", 7.0),
                ("no_equivalents", 0.0),
            ]),
        },
    ]
}

fn preferred_qualification_items() -> Vec<RubricItem> {
    vec![RubricItem {
        id: "pref_match",
        description: "Preferred qualifications met",
        max_points: 40.0,
        scoring_guide: coverage_guide([
            40.0, 36.0, 32.0, 28.0, 24.0, 20.0, 16.0, 12.0, 8.0, 4.0, 0.0,
        ]),
    }]
}

fn transferable_skill_items() -> Vec<RubricItem> {
    vec![RubricItem {
        id: "transfer_skills",
        description: "Transferable skills from other domains",
        max_points: 30.0,
        scoring_guide: ScoringGuide::new(vec![
            ("multiple", 30.0),
            ("some", 20.0),
            ("few", 12.0),
            ("none", 0.0),
        ]),
    }]
}
