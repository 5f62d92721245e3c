use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::facts::{CandidateId, ExtractedFactRecord};
use super::item::{ItemScore, ItemScorer};
use super::job::JobRequirements;
use super::ranking::PoolPlacement;
use super::rubric::{category_rubrics, CategoryRubric, ScoreCategory};
use super::years::YearsPolicy;

/// Absolute score-band label computed from one candidate's own overall score.
///
/// Shares its vocabulary with [`super::ranking::PoolQuartile`] but never looks
/// at the pool: a score of 75 is First Quartile even in a batch of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsoluteTier {
    FirstQuartile,
    SecondQuartile,
    ThirdQuartile,
    FourthQuartile,
}

impl AbsoluteTier {
    pub const fn from_overall(overall: u8) -> Self {
        if overall >= 75 {
            Self::FirstQuartile
        } else if overall >= 50 {
            Self::SecondQuartile
        } else if overall >= 25 {
            Self::ThirdQuartile
        } else {
            Self::FourthQuartile
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstQuartile => "First Quartile",
            Self::SecondQuartile => "Second Quartile",
            Self::ThirdQuartile => "Third Quartile",
            Self::FourthQuartile => "Fourth Quartile",
        }
    }
}

/// Final output for one candidate: rounded scores, the absolute tier, and the
/// pool placement once the candidate has been ranked within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub candidate_id: CandidateId,
    pub overall_score: u8,
    pub category_scores: BTreeMap<ScoreCategory, u8>,
    pub tier: AbsoluteTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<PoolPlacement>,
    pub evaluated_at: DateTime<Utc>,
}

/// Item-level audit trail behind one evaluation. Serialized alongside the
/// result so a reviewer can trace every point to a guide condition.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: ScoreCategory,
    pub category_label: &'static str,
    pub raw_points: f64,
    pub max_points: f64,
    pub weight: f64,
    pub weighted_contribution: f64,
    pub items: Vec<ItemScore>,
}

/// One candidate's result paired with the breakdown that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub result: EvaluationResult,
    pub breakdown: ScoreBreakdown,
}

/// Runs the full rubric for one candidate and aggregates the weighted overall
/// score. Stateless apart from the injected years policy, so one engine value
/// serves any number of concurrent evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    years: YearsPolicy,
}

impl ScoringEngine {
    pub fn new(years: YearsPolicy) -> Self {
        Self { years }
    }

    pub fn evaluate(
        &self,
        candidate_id: CandidateId,
        facts: &ExtractedFactRecord,
        job: &JobRequirements,
    ) -> ScoredCandidate {
        let rubrics = category_rubrics(job.job_type);
        let (overall, category_scores, breakdown) =
            score_categories(&rubrics, facts, job, self.years);
        let overall_score = overall.clamp(0.0, 100.0).round() as u8;
        let tier = AbsoluteTier::from_overall(overall_score);
        debug!(
            candidate = %candidate_id,
            overall = overall_score,
            tier = tier.label(),
            "candidate scored"
        );
        ScoredCandidate {
            result: EvaluationResult {
                candidate_id,
                overall_score,
                category_scores,
                tier,
                placement: None,
                evaluated_at: Utc::now(),
            },
            breakdown,
        }
    }
}

/// Aggregation over an explicit rubric set. Category scores are normalized to
/// 0..=100 before weighting; a category whose items sum to zero max points
/// contributes nothing rather than dividing by zero.
pub(crate) fn score_categories(
    rubrics: &[CategoryRubric],
    facts: &ExtractedFactRecord,
    job: &JobRequirements,
    years: YearsPolicy,
) -> (f64, BTreeMap<ScoreCategory, u8>, ScoreBreakdown) {
    let scorer = ItemScorer::new(facts, job, years);
    let mut overall = 0.0;
    let mut category_scores = BTreeMap::new();
    let mut categories = Vec::with_capacity(rubrics.len());

    for rubric in rubrics {
        let items: Vec<ItemScore> = rubric.items.iter().map(|item| scorer.score(item)).collect();
        let raw_points: f64 = items.iter().map(|score| score.points).sum();
        let max_points: f64 = items.iter().map(|score| score.max_points).sum();
        let normalized = if max_points > 0.0 {
            (100.0 * raw_points / max_points).clamp(0.0, 100.0)
        } else {
            0.0
        };
        let weighted_contribution = normalized * rubric.weight;
        overall += weighted_contribution;

        category_scores.insert(rubric.category, normalized.round() as u8);
        categories.push(CategoryBreakdown {
            category: rubric.category,
            category_label: rubric.category.label(),
            raw_points,
            max_points,
            weight: rubric.weight,
            weighted_contribution,
            items,
        });
    }

    (overall, category_scores, ScoreBreakdown { categories })
}
