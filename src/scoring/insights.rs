use serde::Serialize;

use super::calculator::ScoreBreakdown;

/// Share of available points at or above which an item reads as a strength.
const STRENGTH_FLOOR: f64 = 0.9;
/// Share of available points at or below which an item reads as a gap.
const GAP_CEILING: f64 = 0.25;

/// One rubric item surfaced to a reviewer, with the scorer's reason as the
/// supporting detail.
#[derive(Debug, Clone, Serialize)]
pub struct FitHighlight {
    pub item_id: &'static str,
    pub description: &'static str,
    pub detail: String,
}

/// Reviewer-facing digest of a breakdown: where the candidate is close to the
/// ceiling and where most of the points went missing.
#[derive(Debug, Clone, Serialize)]
pub struct FitSummary {
    pub strengths: Vec<FitHighlight>,
    pub gaps: Vec<FitHighlight>,
}

pub fn fit_summary(breakdown: &ScoreBreakdown) -> FitSummary {
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();

    for category in &breakdown.categories {
        for item in &category.items {
            if item.max_points <= 0.0 {
                continue;
            }
            let highlight = FitHighlight {
                item_id: item.item_id,
                description: item.description,
                detail: item.reason.clone(),
            };
            if item.points >= item.max_points * STRENGTH_FLOOR {
                strengths.push(highlight);
            } else if item.points <= item.max_points * GAP_CEILING {
                gaps.push(highlight);
            }
        }
    }

    FitSummary { strengths, gaps }
}
