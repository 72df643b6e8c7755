//! Distance data consumed by the colony.
//!
//! The optimizer only ever reads a [`DistanceMatrix`]. Where the matrix
//! comes from (a routing service, a survey sheet, great-circle geometry)
//! is the caller's business; [`geo`] offers the geometric option.

pub mod geo;
mod matrix;

pub use geo::{haversine_km, GeoPoint};
pub use matrix::DistanceMatrix;
