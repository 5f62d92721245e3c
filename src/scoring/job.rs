use serde::{Deserialize, Serialize};

/// The posting a candidate pool is evaluated against.
///
/// `must_have` and `nice_to_have` stay ordered free text; the scorer applies
/// its own matching heuristics rather than expecting pre-structured
/// requirements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobRequirements {
    pub title: String,
    pub description: String,
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub job_type: JobType,
}

/// Closed classification of postings used to select a weight profile.
///
/// Labels the upstream system sends that match none of the four known types
/// collapse to `General` here, in this one conversion, so callers never need
/// their own fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    EntryLevel,
    Technical,
    Operational,
    General,
}

impl JobType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::EntryLevel,
            Self::Technical,
            Self::Operational,
            Self::General,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "entry-level",
            Self::Technical => "technical",
            Self::Operational => "operational",
            Self::General => "general",
        }
    }

    /// Parse a job-type label, defaulting unknown values to `General`.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "entry-level" | "entry_level" | "entry" => Self::EntryLevel,
            "technical" => Self::Technical,
            "operational" => Self::Operational,
            _ => Self::General,
        }
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        value.label().to_string()
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
