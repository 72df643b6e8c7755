//! Tour length evaluation.

use super::config::DEFAULT_INFEASIBLE_PENALTY;
use crate::distance::DistanceMatrix;

/// Total cyclic length of `tour`, including the edge back to the start.
///
/// Each unreachable edge costs [`DEFAULT_INFEASIBLE_PENALTY`] instead of
/// infinity, so infeasible tours still rank against each other.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::tour_length;
/// use u_antcolony::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// assert!((tour_length(&[0, 1, 2], &dm) - 12.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    tour_length_with_penalty(tour, distances, DEFAULT_INFEASIBLE_PENALTY)
}

/// Like [`tour_length`], with an explicit per-edge penalty for unreachable edges.
pub fn tour_length_with_penalty(tour: &[usize], distances: &DistanceMatrix, penalty: f64) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| {
            let d = distances.get(tour[i], tour[(i + 1) % n]);
            if d.is_infinite() {
                penalty
            } else {
                d
            }
        })
        .sum()
}
