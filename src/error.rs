//! Error types for the clustering core

use thiserror::Error;

/// Invalid run parameters: cluster count, seeds or sweep bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The point pool holds no points.
    #[error("point pool is empty")]
    EmptyPool,
    /// Requested cluster count is zero or larger than the pool.
    #[error("cannot create {requested} clusters from {pool} points")]
    InvalidClusterCount { requested: usize, pool: usize },
    /// An explicit seed does not name a point of the pool.
    #[error("seed {seed} is out of range for a pool of {pool} points")]
    SeedOutOfRange { seed: usize, pool: usize },
    /// The same point was given twice as an explicit seed.
    #[error("seed {seed} was supplied more than once")]
    DuplicateSeed { seed: usize },
    /// The best-k sweep range is empty or exceeds the pool.
    #[error("invalid sweep range {from}..={to}")]
    InvalidSweep { from: usize, to: usize },
}

/// A point (or a whole pool) does not have the declared attribute shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataShapeError {
    /// No numeric attributes were declared.
    #[error("no attributes declared")]
    NoAttributes,
    /// A point record lacks one of the declared attributes.
    #[error("point {point} is missing attribute '{attribute}'")]
    MissingAttribute { point: usize, attribute: String },
    /// A point carries NaN, an infinity or a non-numeric cell.
    #[error("point {point} has a non-numeric or non-finite value for '{attribute}'")]
    NonFiniteValue { point: usize, attribute: String },
    /// Value matrix and attribute list disagree in width.
    #[error("shape mismatch: expected {expected} attributes, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    /// The input does not hold enough records to fill the seat grid.
    #[error("a {rows}x{aisles} grid needs {} points, found {points}", .rows * .aisles)]
    GridMismatch {
        rows: usize,
        aisles: usize,
        points: usize,
    },
}

/// Any error raised by the clustering core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KMeansError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    DataShape(#[from] DataShapeError),
}
