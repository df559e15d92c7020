//! Best-k sweep: cluster the same pool for a range of k and keep the lowest SSE

use crate::error::{ConfigurationError, KMeansError};
use crate::model::KMeans;
use crate::point::PointPool;
use std::ops::RangeInclusive;

/// Outcome of a best-k sweep
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// k with the lowest best SSE; the smallest such k on ties
    pub best_k: usize,
    /// Best SSE reached by `best_k`
    pub best_sse: f64,
    /// (k, best SSE) for every k tried, in ascending k
    pub table: Vec<(usize, f64)>,
}

/// Run `base` once for every k in `ks` and report the k with the lowest SSE.
///
/// Seeds, RNG seed, pass bound and membership policy are taken from `base`;
/// only the cluster count changes between runs. The pool is left with the
/// assignments of the last run.
pub fn find_best_k(
    pool: &mut PointPool,
    ks: RangeInclusive<usize>,
    base: &KMeans,
) -> Result<Sweep, KMeansError> {
    let (from, to) = (*ks.start(), *ks.end());
    if from == 0 || from > to || to > pool.len() {
        return Err(ConfigurationError::InvalidSweep { from, to }.into());
    }

    let mut table = Vec::with_capacity(to - from + 1);
    let mut best: Option<(usize, f64)> = None;
    for k in ks {
        let result = base.clone().with_k(k).fit(pool)?;
        log::info!("{:<32}{:<32}", format!("k={k}"), format!("sse={:.6}", result.best_sse));
        if best.map_or(true, |(_, sse)| result.best_sse < sse) {
            best = Some((k, result.best_sse));
        }
        table.push((k, result.best_sse));
    }

    let (best_k, best_sse) = best.ok_or(ConfigurationError::InvalidSweep { from, to })?;
    Ok(Sweep {
        best_k,
        best_sse,
        table,
    })
}
