//! Batch evaluation pipeline: bounded concurrent fact extraction in front of
//! the synchronous scoring core, with per-candidate failure isolation.

mod cache;
mod extractor;

pub use cache::{CacheKey, ExtractionCache};
pub use extractor::{ExtractionError, FactExtractor, ResumeSubmission};

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::scoring::{
    rank_batch, CandidateId, EvaluationResult, JobRequirements, ScoreBreakdown, ScoringEngine,
};

/// A submission that never reached scoring, either because extraction failed
/// or because the candidate already appeared earlier in the batch. The rest
/// of the batch is scored and ranked without it.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedSubmission {
    pub candidate_id: CandidateId,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch worker panicked or was cancelled: {0}")]
    Worker(String),
}

/// Everything one batch run produces: ranked evaluations, the per-candidate
/// audit breakdowns, and the submissions that never made it to scoring.
#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub evaluations: Vec<EvaluationResult>,
    pub breakdowns: BTreeMap<CandidateId, ScoreBreakdown>,
    pub skipped: Vec<SkippedSubmission>,
    pub completed_at: DateTime<Utc>,
}

/// Evaluates whole candidate pools against one posting.
///
/// Extraction runs concurrently up to `max_concurrent` in-flight calls, with
/// results cached per (candidate, posting content, resume content). Scoring
/// and ranking happen after all extractions settle, since quartile placement
/// needs the full pool. One failed extraction skips that candidate, never the
/// batch.
pub struct BatchScoringService<E> {
    extractor: Arc<E>,
    cache: Arc<ExtractionCache>,
    engine: ScoringEngine,
    max_concurrent: usize,
}

impl<E> BatchScoringService<E>
where
    E: FactExtractor + 'static,
{
    pub fn new(
        extractor: Arc<E>,
        cache: Arc<ExtractionCache>,
        engine: ScoringEngine,
        max_concurrent: usize,
    ) -> Self {
        Self {
            extractor,
            cache,
            engine,
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub async fn evaluate_batch(
        &self,
        job: &JobRequirements,
        submissions: Vec<ResumeSubmission>,
    ) -> Result<BatchOutcome, BatchError> {
        let job = Arc::new(job.clone());
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));

        // A candidate holds one slot per batch; resubmissions are reported,
        // not ranked twice.
        let mut skipped = Vec::new();
        let mut seen = HashSet::with_capacity(submissions.len());
        let mut handles = Vec::with_capacity(submissions.len());
        for submission in submissions {
            if !seen.insert(submission.candidate_id.clone()) {
                warn!(
                    candidate = %submission.candidate_id,
                    "duplicate submission in batch, first occurrence kept"
                );
                skipped.push(SkippedSubmission {
                    candidate_id: submission.candidate_id,
                    error: "duplicate submission in batch; first occurrence kept".to_string(),
                });
                continue;
            }
            let extractor = Arc::clone(&self.extractor);
            let cache = Arc::clone(&self.cache);
            let job = Arc::clone(&job);
            let semaphore = Arc::clone(&semaphore);
            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let key = CacheKey::for_submission(&submission, &job);
                if let Some(record) = cache.get(&key) {
                    debug!(candidate = %submission.candidate_id, "extraction cache hit");
                    return (submission.candidate_id, Ok(record));
                }
                match extractor.extract(&job, &submission).await {
                    Ok(record) => {
                        cache.insert(key, record.clone());
                        (submission.candidate_id, Ok(record))
                    }
                    Err(error) => (submission.candidate_id, Err(error)),
                }
            }));
        }

        // Collected in submission order so tied scores rank deterministically.
        let mut evaluations = Vec::new();
        let mut breakdowns = BTreeMap::new();
        for handle in handles {
            let (candidate_id, extraction) = handle
                .await
                .map_err(|error| BatchError::Worker(error.to_string()))?;
            match extraction {
                Ok(record) => {
                    let scored = self.engine.evaluate(candidate_id.clone(), &record, &job);
                    breakdowns.insert(candidate_id, scored.breakdown);
                    evaluations.push(scored.result);
                }
                Err(error) => {
                    warn!(
                        candidate = %candidate_id,
                        %error,
                        "fact extraction failed, candidate skipped"
                    );
                    skipped.push(SkippedSubmission {
                        candidate_id,
                        error: error.to_string(),
                    });
                }
            }
        }

        let evaluations = rank_batch(evaluations);
        info!(
            scored = evaluations.len(),
            skipped = skipped.len(),
            "candidate batch evaluated"
        );
        Ok(BatchOutcome {
            evaluations,
            breakdowns,
            skipped,
            completed_at: Utc::now(),
        })
    }
}
