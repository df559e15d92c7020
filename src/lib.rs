//! seatforge: K-Means clustering of passenger seat measurements
//!
//! This library partitions a fixed row × aisle grid of seats into clusters
//! with an incremental k-means and reports the best sum of squared errors
//! observed during the run.

pub mod cli;
pub mod cluster;
pub mod data;
pub mod error;
pub mod grid;
pub mod model;
pub mod point;
pub mod report;
pub mod seeds;
pub mod sweep;

// Re-export public items for easier access
pub use cli::Args;
pub use cluster::Cluster;
pub use data::{export_clusters, load_points, load_seat_grid};
pub use error::{ConfigurationError, DataShapeError, KMeansError};
pub use grid::{Seat, SeatGrid};
pub use model::{assign_pass, run_kmeans, Clustering, KMeans, Membership};
pub use point::PointPool;
pub use seeds::select_seeds;
pub use sweep::{find_best_k, Sweep};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
