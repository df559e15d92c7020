//! K-Means clustering engine
//!
//! Clusters are seeded from explicit hints plus random fill, then every point
//! of the pool is swept in order and admitted into its nearest cluster. A
//! sweep is a pass; the run stops after the first pass that admits nothing.
//!
//! Centroids move as soon as a point is admitted, not at the end of a pass, so
//! later points in the same pass already see the updated centers.
//!
//! The reported SSE is the lowest total seen after any pass, which is not
//! necessarily the SSE of the final partition.

use crate::cluster::Cluster;
use crate::error::{ConfigurationError, KMeansError};
use crate::point::PointPool;
use crate::seeds::select_seeds;
use clap::ValueEnum;
use ndarray::ArrayView1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default bound on the number of passes in one run
pub const DEFAULT_MAX_PASSES: usize = 300;

/// How admission treats a point that already belongs to another cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Membership {
    /// A point leaves its previous cluster when admitted elsewhere
    #[default]
    Exclusive,
    /// A point is never released, so it may count toward several clusters
    Accumulate,
}

/// K-Means run configuration
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters
    k: usize,
    /// Explicit seed point indices, used before any random fill
    seeds: Vec<usize>,
    /// Seed for the random fill; drawn from entropy when unset
    rng_seed: Option<u64>,
    /// Upper bound on passes
    max_passes: usize,
    membership: Membership,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seeds: Vec::new(),
            rng_seed: None,
            max_passes: DEFAULT_MAX_PASSES,
            membership: Membership::default(),
        }
    }

    /// Change the cluster count, keeping every other setting.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set explicit seed point indices.
    pub fn with_seeds(mut self, seeds: Vec<usize>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Seed the random fill for reproducible runs.
    pub fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = Some(rng_seed);
        self
    }

    /// Bound the number of passes (at least one pass always runs).
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Cluster `pool`, drawing any random seeds from the configured RNG seed.
    pub fn fit(&self, pool: &mut PointPool) -> Result<Clustering, KMeansError> {
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.fit_with_rng(pool, &mut rng)
    }

    /// Cluster `pool`, drawing any random seeds from `rng`.
    ///
    /// Every previous assignment in the pool is cleared first. On success every
    /// point carries a cluster id in `0..k`.
    pub fn fit_with_rng<R: Rng>(
        &self,
        pool: &mut PointPool,
        rng: &mut R,
    ) -> Result<Clustering, KMeansError> {
        if pool.is_empty() {
            return Err(ConfigurationError::EmptyPool.into());
        }
        let seeds = select_seeds(self.k, &self.seeds, pool.len(), rng)?;

        pool.clear_assignments();
        let mut clusters: Vec<Cluster> = seeds
            .iter()
            .enumerate()
            .map(|(id, &seed)| Cluster::new(id, seed, pool))
            .collect();

        let mut sse_history = Vec::new();
        let mut best_sse = f64::INFINITY;
        let mut passes = 0;
        let mut converged = false;

        while passes < self.max_passes {
            let admissions = assign_pass(&mut clusters, pool, self.membership);
            passes += 1;

            let sse = total_sse(&clusters, pool);
            sse_history.push(sse);
            if sse < best_sse {
                best_sse = sse;
            }
            log::debug!("pass {passes:>4}  admissions {admissions:>6}  sse {sse:.6}");

            if admissions == 0 {
                converged = true;
                break;
            }
        }

        if converged {
            log::info!(
                "{:<32}{:<32}",
                "k-means converged",
                format!("k={} passes={}", self.k, passes)
            );
        } else {
            log::warn!(
                "k-means stopped after {} passes without converging (k={})",
                passes,
                self.k
            );
        }

        Ok(Clustering {
            clusters,
            best_sse,
            sse_history,
            passes,
            converged,
        })
    }
}

/// Result of one clustering run
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Clusters ordered by id
    pub clusters: Vec<Cluster>,
    /// Lowest total SSE observed after any pass
    pub best_sse: f64,
    /// Total SSE after each pass, in pass order
    pub sse_history: Vec<f64>,
    /// Number of passes performed, including the final quiet one
    pub passes: usize,
    /// Whether the last pass admitted nothing
    pub converged: bool,
}

impl Clustering {
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Get cluster sizes
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    /// Total SSE of the partition as it stands after the last pass
    pub fn final_sse(&self) -> f64 {
        self.sse_history.last().copied().unwrap_or(self.best_sse)
    }
}

/// Run k-means with `k` clusters over `pool`.
///
/// Explicit seeds are taken first; any shortfall is drawn from `rng`.
pub fn run_kmeans<R: Rng>(
    k: usize,
    pool: &mut PointPool,
    explicit_seeds: &[usize],
    rng: &mut R,
) -> Result<Clustering, KMeansError> {
    KMeans::new(k)
        .with_seeds(explicit_seeds.to_vec())
        .fit_with_rng(pool, rng)
}

/// Sweep the whole pool once, admitting each point into its nearest cluster.
///
/// Returns the number of admissions. A point that is already a member of its
/// nearest cluster is left alone.
pub fn assign_pass(
    clusters: &mut [Cluster],
    pool: &mut PointPool,
    membership: Membership,
) -> usize {
    let mut admissions = 0;
    for index in 0..pool.len() {
        let Some(winner) = nearest(clusters, pool.point(index)) else {
            return 0;
        };
        if clusters[winner].contains(index) {
            continue;
        }

        if membership == Membership::Exclusive {
            if let Some(previous) = pool.cluster_id(index).filter(|&p| p != winner) {
                if let Some(cluster) = clusters.get_mut(previous) {
                    cluster.release(index, pool);
                }
            }
        }
        clusters[winner].admit(index, pool);
        admissions += 1;
    }
    admissions
}

/// Index of the cluster with strictly smallest distance; the first wins ties.
fn nearest(clusters: &[Cluster], point: ArrayView1<'_, f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, cluster) in clusters.iter().enumerate() {
        let distance = cluster.distance(point);
        if best.map_or(true, |(_, b)| distance < b) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

fn total_sse(clusters: &[Cluster], pool: &PointPool) -> f64 {
    clusters.iter().map(|c| c.sse(pool)).sum()
}
