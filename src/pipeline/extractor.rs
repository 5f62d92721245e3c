use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{CandidateId, ExtractedFactRecord, JobRequirements};

/// One resume queued for evaluation against a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSubmission {
    pub candidate_id: CandidateId,
    pub resume_text: String,
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The extraction backend could not be reached or refused the call.
    #[error("extraction backend unavailable: {0}")]
    Unavailable(String),
    /// The backend answered with data that does not satisfy the fact-record
    /// contract for this candidate.
    #[error("extraction response violates the fact contract: {0}")]
    Contract(String),
}

/// Boundary to the collaborator that turns resume text into structured facts.
///
/// Implementations are expected to be expensive, typically one model call per
/// candidate, which is why the batch service puts a cache and a concurrency
/// bound in front of them.
#[async_trait]
pub trait FactExtractor: Send + Sync {
    async fn extract(
        &self,
        job: &JobRequirements,
        submission: &ResumeSubmission,
    ) -> Result<ExtractedFactRecord, ExtractionError>;
}
