use std::collections::BTreeMap;

use super::rubric::ScoreCategory;
use super::JobType;

/// How far a profile's weights may drift from summing to exactly 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

const TECHNICAL_WEIGHTS: [(ScoreCategory, f64); 8] = [
    (ScoreCategory::TechnicalSkills, 0.30),
    (ScoreCategory::Experience, 0.20),
    (ScoreCategory::Education, 0.10),
    (ScoreCategory::SoftSkills, 0.05),
    (ScoreCategory::ResumeQuality, 0.05),
    (ScoreCategory::RequiredQualifications, 0.15),
    (ScoreCategory::PreferredQualifications, 0.10),
    (ScoreCategory::TransferableSkills, 0.05),
];

const ENTRY_LEVEL_WEIGHTS: [(ScoreCategory, f64); 8] = [
    (ScoreCategory::TechnicalSkills, 0.10),
    (ScoreCategory::Experience, 0.10),
    (ScoreCategory::Education, 0.25),
    (ScoreCategory::SoftSkills, 0.20),
    (ScoreCategory::ResumeQuality, 0.10),
    (ScoreCategory::RequiredQualifications, 0.05),
    (ScoreCategory::PreferredQualifications, 0.05),
    (ScoreCategory::TransferableSkills, 0.15),
];

const OPERATIONAL_WEIGHTS: [(ScoreCategory, f64); 8] = [
    (ScoreCategory::TechnicalSkills, 0.05),
    (ScoreCategory::Experience, 0.30),
    (ScoreCategory::Education, 0.10),
    (ScoreCategory::SoftSkills, 0.15),
    (ScoreCategory::ResumeQuality, 0.05),
    (ScoreCategory::RequiredQualifications, 0.20),
    (ScoreCategory::PreferredQualifications, 0.05),
    (ScoreCategory::TransferableSkills, 0.10),
];

const GENERAL_WEIGHTS: [(ScoreCategory, f64); 8] = [
    (ScoreCategory::TechnicalSkills, 0.15),
    (ScoreCategory::Experience, 0.25),
    (ScoreCategory::Education, 0.10),
    (ScoreCategory::SoftSkills, 0.10),
    (ScoreCategory::ResumeQuality, 0.05),
    (ScoreCategory::RequiredQualifications, 0.15),
    (ScoreCategory::PreferredQualifications, 0.10),
    (ScoreCategory::TransferableSkills, 0.10),
];

pub const fn profile_entries(job_type: JobType) -> &'static [(ScoreCategory, f64); 8] {
    match job_type {
        JobType::Technical => &TECHNICAL_WEIGHTS,
        JobType::EntryLevel => &ENTRY_LEVEL_WEIGHTS,
        JobType::Operational => &OPERATIONAL_WEIGHTS,
        JobType::General => &GENERAL_WEIGHTS,
    }
}

/// The category weight profile for one job type. Every category carries a
/// weight and the weights sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
pub fn weight_profile(job_type: JobType) -> BTreeMap<ScoreCategory, f64> {
    profile_entries(job_type).iter().copied().collect()
}
