use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calculator::EvaluationResult;

/// Pool-relative rank band: where a candidate landed within one submitted
/// batch. Distinct from [`super::calculator::AbsoluteTier`], which bands the
/// candidate's own score without reference to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolQuartile {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl PoolQuartile {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }
}

/// A candidate's position within a specific ranked batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolPlacement {
    pub quartile: PoolQuartile,
    pub rank: usize,
    pub pool_size: usize,
}

/// Sorts a batch descending by overall score and stamps every result with its
/// 1-based rank, quartile band, and the pool size.
///
/// The sort is stable, so candidates tied on score keep their submission
/// order. Band bounds use ceiling arithmetic, giving Q1 exactly `ceil(N/4)`
/// members for any N. Placement depends only on current scores, never on
/// prior placement fields, so ranking already-ranked output reproduces the
/// same assignments.
pub fn rank_batch(mut results: Vec<EvaluationResult>) -> Vec<EvaluationResult> {
    let pool_size = results.len();
    if pool_size == 0 {
        return results;
    }

    results.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));

    let q1_end = pool_size.div_ceil(4);
    let q2_end = pool_size.div_ceil(2);
    let q3_end = (pool_size * 3).div_ceil(4);

    for (index, result) in results.iter_mut().enumerate() {
        let rank = index + 1;
        let quartile = if rank <= q1_end {
            PoolQuartile::Q1
        } else if rank <= q2_end {
            PoolQuartile::Q2
        } else if rank <= q3_end {
            PoolQuartile::Q3
        } else {
            PoolQuartile::Q4
        };
        result.placement = Some(PoolPlacement {
            quartile,
            rank,
            pool_size,
        });
    }

    debug!(pool_size, "candidate batch ranked");
    results
}
