//! Command-line interface definitions and argument parsing

use crate::grid::{Seat, SeatGrid, SAMPLE_SEEDS};
use crate::model::{KMeans, Membership, DEFAULT_MAX_PASSES};
use clap::Parser;

/// Passenger seat clustering CLI using K-Means
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    #[arg(short, long, default_value = "data.csv")]
    pub input: String,

    /// Number of clusters for K-Means
    #[arg(short = 'k', long, default_value = "9")]
    pub clusters: usize,

    /// Explicit seed seat as row:aisle, repeatable
    /// Example: --seed 7:8 --seed 42:3
    #[arg(short, long = "seed", value_name = "ROW:AISLE")]
    pub seeds: Vec<Seat>,

    /// Use the nine sample seeds 7:8 42:3 1:1 2:9 13:2 18:9 33:2 38:9 51:10
    #[arg(long, conflicts_with = "seeds")]
    pub sample_seeds: bool,

    /// Seed for the random fill of missing seeds
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Number of seat rows in the input
    #[arg(long, default_value = "51")]
    pub rows: usize,

    /// Number of seats per row in the input
    #[arg(long, default_value = "10")]
    pub aisles: usize,

    /// Maximum passes over the data before giving up on convergence
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Whether a reassigned seat leaves its previous cluster
    #[arg(long, value_enum, default_value_t = Membership::Exclusive)]
    pub membership: Membership,

    /// Output path for the clustered CSV
    #[arg(short, long, default_value = "clustered.csv")]
    pub output: String,

    /// Sweep mode: try every k in --k-min..=--k-max and cluster with the best one
    #[arg(long)]
    pub sweep: bool,

    /// Smallest k tried in sweep mode
    #[arg(long, default_value = "2")]
    pub k_min: usize,

    /// Largest k tried in sweep mode
    #[arg(long, default_value = "39")]
    pub k_max: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn grid(&self) -> SeatGrid {
        SeatGrid::new(self.rows, self.aisles)
    }

    /// Seeds chosen on the command line, in the order given
    pub fn seed_seats(&self) -> Vec<Seat> {
        if self.sample_seeds {
            SAMPLE_SEEDS.to_vec()
        } else {
            self.seeds.clone()
        }
    }

    /// Build the k-means configuration for `k` clusters
    ///
    /// Seeds are translated into point indices of the grid, so a seat outside
    /// the grid is rejected here. `rng_seed` is the seed to use when none was
    /// given on the command line.
    pub fn kmeans(&self, k: usize, rng_seed: u64) -> crate::Result<KMeans> {
        let seeds = self.grid().indices(&self.seed_seats())?;
        Ok(KMeans::new(k)
            .with_seeds(seeds)
            .with_rng_seed(self.rng_seed.unwrap_or(rng_seed))
            .with_max_passes(self.max_passes)
            .with_membership(self.membership))
    }
}
