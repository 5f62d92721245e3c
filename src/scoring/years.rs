use std::sync::OnceLock;

use regex::Regex;

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+)\+?\s*years?").expect("years pattern is a valid regex")
    })
}

/// Policy object that pulls a required year count out of free-text
/// qualifications.
///
/// Kept separate from the item scorer so the pattern can be swapped or tested
/// on its own. The default policy matches phrases like "5 years", "5+ years",
/// or "3 year" anywhere in a requirement, case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearsPolicy;

impl YearsPolicy {
    /// Extract the year count from a single requirement, if one is stated.
    pub fn years_in(&self, text: &str) -> Option<u32> {
        years_pattern()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<u32>().ok())
    }

    /// Required years for a posting: the first match across the ordered
    /// must-have list. No stated requirement means zero, and any experience
    /// meets the bar.
    pub fn required_years(&self, must_have: &[String]) -> u32 {
        must_have
            .iter()
            .find_map(|requirement| self.years_in(requirement))
            .unwrap_or(0)
    }

    /// Whether a requirement states a year count at all.
    pub fn mentions_years(&self, text: &str) -> bool {
        years_pattern().is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_and_plus_forms() {
        let policy = YearsPolicy;
        assert_eq!(policy.years_in("5 years of Python"), Some(5));
        assert_eq!(policy.years_in("5+ years building services"), Some(5));
        assert_eq!(policy.years_in("at least 10 Years in operations"), Some(10));
        assert_eq!(policy.years_in("1 year of support work"), Some(1));
    }

    #[test]
    fn non_year_text_yields_nothing() {
        let policy = YearsPolicy;
        assert_eq!(policy.years_in("Bachelor's degree in nursing"), None);
        assert_eq!(policy.years_in("years of fun"), None);
    }

    #[test]
    fn first_match_in_ordered_list_wins() {
        let policy = YearsPolicy;
        let musts = vec![
            "Strong communication".to_string(),
            "3+ years of scheduling".to_string(),
            "7 years of management".to_string(),
        ];
        assert_eq!(policy.required_years(&musts), 3);
    }

    #[test]
    fn missing_requirement_defaults_to_zero() {
        let policy = YearsPolicy;
        assert_eq!(policy.required_years(&[]), 0);
        assert_eq!(policy.required_years(&["Team player".to_string()]), 0);
    }
}
