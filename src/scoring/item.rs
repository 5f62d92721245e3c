use serde::Serialize;
use tracing::warn;

use super::facts::{EducationRequirement, ExtractedFactRecord};
use super::job::JobRequirements;
use super::rubric::RubricItem;
use super::years::YearsPolicy;

/// Outcome of scoring a single rubric item, kept for the audit breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ItemScore {
    pub item_id: &'static str,
    pub description: &'static str,
    pub points: f64,
    pub max_points: f64,
    pub reason: String,
}

/// Broad class of a must-have requirement. Routing happens once per entry and
/// decides both the exact-match test and the equivalence credit applied when
/// the exact test fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    Years,
    Education,
    Certification,
    Technology,
}

const DEGREE_MARKERS: [&str; 6] = [
    "degree",
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "diploma",
];

pub fn classify_requirement(policy: &YearsPolicy, requirement: &str) -> RequirementKind {
    if policy.mentions_years(requirement) {
        return RequirementKind::Years;
    }
    let lower = requirement.to_lowercase();
    if lower.contains("certif") || lower.contains("license") {
        return RequirementKind::Certification;
    }
    if DEGREE_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return RequirementKind::Education;
    }
    RequirementKind::Technology
}

/// Coverage percentages bucket downward: a pool of requirements that is 95%
/// covered lands in the 90 percent bucket, never the one above it.
pub fn coverage_bucket(percent: f64) -> &'static str {
    if percent >= 100.0 {
        "all_met"
    } else if percent >= 90.0 {
        "90_percent"
    } else if percent >= 80.0 {
        "80_percent"
    } else if percent >= 70.0 {
        "70_percent"
    } else if percent >= 60.0 {
        "60_percent"
    } else if percent >= 50.0 {
        "50_percent"
    } else if percent >= 40.0 {
        "40_percent"
    } else if percent >= 30.0 {
        "30_percent"
    } else if percent >= 20.0 {
        "20_percent"
    } else if percent >= 10.0 {
        "10_percent"
    } else {
        "none_met"
    }
}

pub fn cardinality_bucket(count: usize) -> &'static str {
    match count {
        0 => "none",
        1 => "few",
        2 => "some",
        _ => "multiple",
    }
}

pub fn equivalence_bucket(ratio: f64) -> &'static str {
    if ratio >= 0.8 {
        "strong_equivalents"
    } else if ratio >= 0.6 {
        "good_equivalents"
    } else if ratio >= 0.4 {
        "some_equivalents"
    } else if ratio >= 0.2 {
        "weak_equivalents"
    } else {
        "no_equivalents"
    }
}

/// Experience depth relative to the posting's stated minimum. No experience at
/// all is its own bucket regardless of the requirement, and a posting with no
/// stated minimum treats any experience as meeting it.
pub fn years_bucket(years: f64, required: u32) -> &'static str {
    if years <= 0.0 {
        return "none";
    }
    if required == 0 {
        return "meets";
    }
    let required = f64::from(required);
    if years >= required + 2.0 {
        "exceeds"
    } else if years >= required {
        "meets"
    } else if years >= required - 1.0 {
        "slightly_below"
    } else {
        "significantly_below"
    }
}

/// Case-insensitive match on whole-token boundaries: the shorter side's token
/// sequence must appear intact in the longer side's. Blank values never match,
/// and `Java` never matches `JavaScript`.
fn text_matches(left: &str, right: &str) -> bool {
    let left = tokens(left);
    let right = tokens(right);
    if left.is_empty() || right.is_empty() {
        return false;
    }
    let (needle, hay) = if left.len() <= right.len() {
        (&left, &right)
    } else {
        (&right, &left)
    };
    hay.windows(needle.len()).any(|run| run == needle.as_slice())
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Scores rubric items against one candidate's extracted facts and the job
/// posting they were extracted for.
///
/// Scoring never fails: a condition the active guide does not list earns zero
/// points with the mismatch recorded in the reason.
pub struct ItemScorer<'a> {
    facts: &'a ExtractedFactRecord,
    job: &'a JobRequirements,
    years: YearsPolicy,
}

impl<'a> ItemScorer<'a> {
    pub fn new(
        facts: &'a ExtractedFactRecord,
        job: &'a JobRequirements,
        years: YearsPolicy,
    ) -> Self {
        Self { facts, job, years }
    }

    pub fn score(&self, item: &RubricItem) -> ItemScore {
        let (condition, detail) = self.condition_for(item.id);
        match item.scoring_guide.lookup(condition) {
            Some(points) => ItemScore {
                item_id: item.id,
                description: item.description,
                points,
                max_points: item.max_points,
                reason: detail,
            },
            None => {
                warn!(
                    item = item.id,
                    condition, "scoring guide has no entry for computed condition"
                );
                ItemScore {
                    item_id: item.id,
                    description: item.description,
                    points: 0.0,
                    max_points: item.max_points,
                    reason: format!("{detail}; `{condition}` has no entry in the scoring guide"),
                }
            }
        }
    }

    fn condition_for(&self, item_id: &str) -> (&'static str, String) {
        let facts = self.facts;
        match item_id {
            "tech_exact_match" => self.tech_exact_condition(),
            "tech_years" => self.tech_years_condition(),
            "tech_complexity" => {
                let level = facts.technical_skills.project_complexity;
                (
                    level.key(),
                    format!("highest demonstrated project level is {}", level.key()),
                )
            }
            "exp_industry" => {
                let level = facts.experience.industry_match;
                (
                    level.key(),
                    format!("industry background is {}", level.key()),
                )
            }
            "exp_role" => {
                let level = facts.experience.role_match;
                (level.key(), format!("prior roles are {}", level.key()))
            }
            "exp_achievements" => {
                let count = facts.experience.quantifiable_achievements.len();
                (
                    cardinality_bucket(count),
                    format!("{count} quantifiable achievement(s) cited"),
                )
            }
            "exp_progression" => {
                let level = facts.experience.career_progression;
                (
                    level.key(),
                    format!("career trajectory shows {}", level.key()),
                )
            }
            "edu_requirement" => {
                let level = facts.education.meets_requirement;
                (
                    level.key(),
                    format!("education requirement assessed as {}", level.key()),
                )
            }
            "edu_relevance" => {
                let level = facts.education.relevance_to_role;
                (
                    level.key(),
                    format!("education relevance assessed as {}", level.key()),
                )
            }
            "edu_certifications" => {
                let count = facts.education.certifications.len();
                (
                    cardinality_bucket(count),
                    format!("{count} professional certification(s) held"),
                )
            }
            "soft_communication" => {
                let level = facts.soft_skills.communication_evidence;
                (
                    level.key(),
                    format!("communication evidence is {}", level.key()),
                )
            }
            "soft_leadership" => {
                let level = facts.soft_skills.leadership_experience;
                (
                    level.key(),
                    format!("leadership experience at {} level", level.key()),
                )
            }
            "soft_cultural_fit" => {
                let count = facts.soft_skills.cultural_fit_indicators.len();
                (
                    cardinality_bucket(count),
                    format!("{count} cultural fit indicator(s) found"),
                )
            }
            "soft_adaptability" => {
                let level = facts.soft_skills.adaptability_evidence;
                (
                    level.key(),
                    format!("adaptability evidence is {}", level.key()),
                )
            }
            "quality_clarity" => {
                let level = facts.resume_quality.clarity;
                (level.key(), format!("resume clarity is {}", level.key()))
            }
            "quality_completeness" => {
                let level = facts.resume_quality.completeness;
                (
                    level.key(),
                    format!("resume completeness is {}", level.key()),
                )
            }
            "req_exact_match" => self.required_match_condition(),
            "req_partial_equivalents" => self.equivalence_condition(),
            "pref_match" => self.preferred_match_condition(),
            "transfer_skills" => {
                let count = facts.bonus_factors.transferable_skills.len();
                (
                    cardinality_bucket(count),
                    format!("{count} transferable skill(s) identified"),
                )
            }
            other => ("unscored", format!("no scorer handles item `{other}`")),
        }
    }

    fn tech_exact_condition(&self) -> (&'static str, String) {
        let required: Vec<&String> = self
            .job
            .must_have
            .iter()
            .filter(|req| classify_requirement(&self.years, req) == RequirementKind::Technology)
            .collect();
        if required.is_empty() {
            return (
                "all_met",
                "posting lists no technology requirements".to_string(),
            );
        }
        let met = required
            .iter()
            .filter(|req| self.technology_found(req))
            .count();
        let percent = met as f64 / required.len() as f64 * 100.0;
        (
            coverage_bucket(percent),
            format!("{met} of {} required technologies present", required.len()),
        )
    }

    fn tech_years_condition(&self) -> (&'static str, String) {
        let required = self.years.required_years(&self.job.must_have);
        let years = self.facts.technical_skills.years_of_experience;
        let detail = if required == 0 {
            format!("{years} year(s) of experience, no minimum stated")
        } else {
            format!("{years} year(s) of experience against a {required} year minimum")
        };
        (years_bucket(years, required), detail)
    }

    fn required_match_condition(&self) -> (&'static str, String) {
        if self.job.must_have.is_empty() {
            return (
                "all_met",
                "posting lists no required qualifications".to_string(),
            );
        }
        let total = self.job.must_have.len();
        let met = self
            .job
            .must_have
            .iter()
            .filter(|req| self.requirement_met(req, classify_requirement(&self.years, req)))
            .count();
        let percent = met as f64 / total as f64 * 100.0;
        (
            coverage_bucket(percent),
            format!("{met} of {total} required qualifications met"),
        )
    }

    fn equivalence_condition(&self) -> (&'static str, String) {
        if self.job.must_have.is_empty() {
            return (
                "strong_equivalents",
                "posting lists no required qualifications".to_string(),
            );
        }
        let total = self.job.must_have.len();
        let credit: f64 = self
            .job
            .must_have
            .iter()
            .map(|req| self.equivalence_credit(req, classify_requirement(&self.years, req)))
            .sum();
        let ratio = credit / total as f64;
        (
            equivalence_bucket(ratio),
            format!("equivalence credit {ratio:.2} across {total} requirement(s)"),
        )
    }

    fn preferred_match_condition(&self) -> (&'static str, String) {
        if self.job.nice_to_have.is_empty() {
            return (
                "all_met",
                "posting lists no preferred qualifications".to_string(),
            );
        }
        let total = self.job.nice_to_have.len();
        let met = self
            .job
            .nice_to_have
            .iter()
            .filter(|pref| {
                self.facts
                    .bonus_factors
                    .preferred_qualifications_met
                    .iter()
                    .any(|held| text_matches(pref, held))
            })
            .count();
        let percent = met as f64 / total as f64 * 100.0;
        (
            coverage_bucket(percent),
            format!("{met} of {total} preferred qualifications met"),
        )
    }

    fn requirement_met(&self, requirement: &str, kind: RequirementKind) -> bool {
        match kind {
            RequirementKind::Years => {
                let needed = self.years.years_in(requirement).unwrap_or(0);
                self.facts.technical_skills.years_of_experience >= f64::from(needed)
            }
            RequirementKind::Education => matches!(
                self.facts.education.meets_requirement,
                EducationRequirement::Meets | EducationRequirement::Exceeds
            ),
            RequirementKind::Certification => self
                .facts
                .education
                .certifications
                .iter()
                .any(|held| text_matches(requirement, held)),
            RequirementKind::Technology => self.technology_found(requirement),
        }
    }

    /// Credit toward one unmet requirement, in [0, 1]. Exactly met earns full
    /// credit; otherwise the kind decides what counts as an equivalent.
    fn equivalence_credit(&self, requirement: &str, kind: RequirementKind) -> f64 {
        if self.requirement_met(requirement, kind) {
            return 1.0;
        }
        match kind {
            RequirementKind::Years => {
                let needed = f64::from(self.years.years_in(requirement).unwrap_or(0));
                if needed <= 0.0 {
                    0.0
                } else {
                    (self.facts.technical_skills.years_of_experience / needed).clamp(0.0, 0.8)
                }
            }
            RequirementKind::Education => {
                if self.facts.education.meets_requirement == EducationRequirement::RelatedField {
                    0.6
                } else {
                    0.0
                }
            }
            RequirementKind::Certification => 0.0,
            RequirementKind::Technology => {
                if self.similar_tech_found(requirement) {
                    0.7
                } else if self.transferable_covers(requirement) {
                    0.5
                } else {
                    0.0
                }
            }
        }
    }

    fn technology_found(&self, requirement: &str) -> bool {
        self.facts
            .technical_skills
            .required_techs_found
            .iter()
            .any(|found| text_matches(requirement, found))
    }

    fn similar_tech_found(&self, requirement: &str) -> bool {
        self.facts
            .technical_skills
            .similar_techs
            .iter()
            .any(|tech| text_matches(requirement, tech))
    }

    fn transferable_covers(&self, requirement: &str) -> bool {
        self.facts
            .bonus_factors
            .transferable_skills
            .iter()
            .any(|entry| text_matches(requirement, &entry.skill))
    }
}
