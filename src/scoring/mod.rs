//! Deterministic resume scoring: rubric catalog, weight profiles, item
//! scoring, weighted aggregation, and pool ranking.
//!
//! Everything in this module is a pure function over immutable inputs. The
//! only upstream collaborator is the fact extractor that produces an
//! [`ExtractedFactRecord`]; from there, identical facts and job requirements
//! always yield identical scores.

mod calculator;
mod facts;
mod insights;
mod item;
mod job;
mod ranking;
mod rubric;
mod weights;
mod years;

#[cfg(test)]
mod tests;

pub use calculator::{
    AbsoluteTier, CategoryBreakdown, EvaluationResult, ScoreBreakdown, ScoredCandidate,
    ScoringEngine,
};
pub use facts::{
    BonusFactorFacts, CandidateId, CareerProgression, EducationFacts, EducationRelevance,
    EducationRequirement, EvidenceStrength, ExperienceFacts, ExtractedFactRecord, IndustryMatch,
    LeadershipLevel, ProjectComplexity, QualityLevel, ResumeQualityFacts, RoleMatch,
    SoftSkillFacts, TechnicalSkillFacts, TransferableSkill,
};
pub use insights::{fit_summary, FitHighlight, FitSummary};
pub use item::{ItemScore, ItemScorer};
pub use job::{JobRequirements, JobType};
pub use ranking::{rank_batch, PoolPlacement, PoolQuartile};
pub use rubric::{
    category_rubrics, items_for, CategoryRubric, RubricItem, ScoreCategory, ScoringGuide,
};
pub use weights::{weight_profile, WEIGHT_SUM_TOLERANCE};
pub use years::YearsPolicy;
