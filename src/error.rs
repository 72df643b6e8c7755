//! Error types.
//!
//! Only caller mistakes are errors: bad hyperparameters and malformed
//! distance matrices. Degenerate selection scores and unreachable site
//! pairs are handled inside the algorithm and never surface here.

use thiserror::Error;

/// Errors reported before an optimization run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A hyperparameter is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The distance matrix has no sites.
    #[error("distance matrix must contain at least one site")]
    EmptyMatrix,

    /// A row of the distance matrix has the wrong number of columns.
    #[error("distance matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat matrix data does not match the declared side length.
    #[error("distance data size mismatch: expected {expected} entries, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A distance entry is negative or NaN.
    #[error("invalid distance {value} from site {from} to site {to}")]
    InvalidDistance { from: usize, to: usize, value: f64 },
}
