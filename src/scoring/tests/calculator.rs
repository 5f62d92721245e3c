use super::common::*;
use crate::scoring::calculator::score_categories;
use crate::scoring::{
    rank_batch, AbsoluteTier, CandidateId, CategoryRubric, QualityLevel, ScoreCategory,
    YearsPolicy,
};

#[test]
fn ideal_senior_maxes_the_technical_category() {
    let outcome = engine().evaluate(CandidateId::new("cand-1"), &strong_facts(), &technical_job());

    assert_eq!(
        outcome.result.category_scores[&ScoreCategory::TechnicalSkills],
        100
    );
}

#[test]
fn overall_scores_stay_in_range_and_track_fact_quality() {
    let strong = engine()
        .evaluate(CandidateId::new("top"), &strong_facts(), &technical_job())
        .result;
    let weak = engine()
        .evaluate(CandidateId::new("bottom"), &weak_facts(), &technical_job())
        .result;

    assert_eq!(strong.overall_score, 100);
    assert_eq!(strong.tier, AbsoluteTier::FirstQuartile);
    assert_eq!(weak.overall_score, 0);
    assert_eq!(weak.tier, AbsoluteTier::FourthQuartile);
}

#[test]
fn tier_boundaries_are_inclusive_on_the_high_side() {
    assert_eq!(AbsoluteTier::from_overall(100), AbsoluteTier::FirstQuartile);
    assert_eq!(AbsoluteTier::from_overall(75), AbsoluteTier::FirstQuartile);
    assert_eq!(AbsoluteTier::from_overall(74), AbsoluteTier::SecondQuartile);
    assert_eq!(AbsoluteTier::from_overall(50), AbsoluteTier::SecondQuartile);
    assert_eq!(AbsoluteTier::from_overall(49), AbsoluteTier::ThirdQuartile);
    assert_eq!(AbsoluteTier::from_overall(25), AbsoluteTier::ThirdQuartile);
    assert_eq!(AbsoluteTier::from_overall(24), AbsoluteTier::FourthQuartile);
    assert_eq!(AbsoluteTier::from_overall(0), AbsoluteTier::FourthQuartile);
    assert_eq!(AbsoluteTier::from_overall(75).label(), "First Quartile");
}

#[test]
fn improving_one_category_never_lowers_the_overall() {
    let job = technical_job();
    let baseline = middling_facts();
    let base = engine()
        .evaluate(CandidateId::new("m"), &baseline, &job)
        .result
        .overall_score;

    let mut improved = baseline.clone();
    improved.resume_quality.clarity = QualityLevel::Excellent;
    improved.resume_quality.completeness = QualityLevel::Excellent;
    let lifted = engine()
        .evaluate(CandidateId::new("m"), &improved, &job)
        .result
        .overall_score;

    assert!(lifted >= base, "raising resume quality dropped {base} to {lifted}");
}

#[test]
fn zero_item_category_contributes_nothing() {
    let rubrics = vec![CategoryRubric {
        category: ScoreCategory::Education,
        weight: 1.0,
        items: Vec::new(),
    }];

    let (overall, scores, breakdown) = score_categories(
        &rubrics,
        &strong_facts(),
        &technical_job(),
        YearsPolicy::default(),
    );

    assert_eq!(overall, 0.0);
    assert_eq!(scores[&ScoreCategory::Education], 0);
    assert_eq!(breakdown.categories[0].max_points, 0.0);
}

#[test]
fn breakdown_accounts_for_every_point() {
    let outcome = engine().evaluate(CandidateId::new("audit"), &middling_facts(), &technical_job());

    assert_eq!(outcome.breakdown.categories.len(), 8);
    assert_eq!(outcome.result.category_scores.len(), 8);

    let mut recomputed = 0.0;
    for category in &outcome.breakdown.categories {
        let raw: f64 = category.items.iter().map(|item| item.points).sum();
        let max: f64 = category.items.iter().map(|item| item.max_points).sum();
        assert_eq!(raw, category.raw_points);
        assert_eq!(max, category.max_points);
        for item in &category.items {
            assert!(!item.reason.is_empty(), "`{}` has no reason", item.item_id);
        }
        recomputed += category.weighted_contribution;
    }

    assert_eq!(
        outcome.result.overall_score,
        recomputed.clamp(0.0, 100.0).round() as u8
    );
}

#[test]
fn placement_is_omitted_until_ranked() {
    let outcome = engine().evaluate(CandidateId::new("ser"), &middling_facts(), &technical_job());

    let value = serde_json::to_value(&outcome.result).expect("serializes");
    assert!(value.get("placement").is_none());

    let ranked = rank_batch(vec![outcome.result]);
    let value = serde_json::to_value(&ranked[0]).expect("serializes");
    assert_eq!(value["placement"]["rank"], 1);
    assert_eq!(value["placement"]["quartile"], "q1");
}

#[test]
fn identical_inputs_score_identically() {
    let first = engine().evaluate(CandidateId::new("same"), &middling_facts(), &technical_job());
    let second = engine().evaluate(CandidateId::new("same"), &middling_facts(), &technical_job());

    assert_eq!(first.result.overall_score, second.result.overall_score);
    assert_eq!(first.result.category_scores, second.result.category_scores);
    assert_eq!(first.result.tier, second.result.tier);
}
