//! Ant Colony Optimization for closed tours over a fixed set of sites.
//!
//! Given an N×N distance matrix, the colony searches for a short cyclic
//! tour visiting every site exactly once:
//!
//! - **[`aco`]**: Tour construction, evaluation, pheromone bookkeeping and
//!   the colony loop ([`run_aco`]).
//! - **[`distance`]**: The distance matrix contract consumed by the colony,
//!   plus a great-circle (haversine) builder for geographic sites.
//! - **[`error`]**: Configuration and input validation errors.
//!
//! # Architecture
//!
//! The optimizer consumes a plain in-memory matrix. Geocoding, routing
//! services and any rendering of the results live with the caller.
//!
//! # Example
//!
//! ```
//! use u_antcolony::{run_aco, AcoConfig, DistanceMatrix};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 2.0, 5.0, 3.0],
//!     vec![2.0, 0.0, 3.0, 5.0],
//!     vec![5.0, 3.0, 0.0, 2.0],
//!     vec![3.0, 5.0, 2.0, 0.0],
//! ])
//! .unwrap();
//!
//! let result = run_aco(&dm, &AcoConfig::default().with_seed(42)).unwrap();
//! assert!((result.best_length - 10.0).abs() < 1e-10);
//! assert_eq!(result.best_history.len(), 100);
//! ```

pub mod aco;
pub mod distance;
pub mod error;

pub use aco::{run_aco, AcoConfig, AcoResult, AcoRunner};
pub use distance::DistanceMatrix;
pub use error::AcoError;
