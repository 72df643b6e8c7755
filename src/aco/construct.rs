//! Tour construction for a single ant.

use super::pheromone::{PheromoneMatrix, Visibility};
use rand::Rng;

/// Builds one closed tour starting at `start`.
///
/// At every step the ant scores each unvisited site `j` as
/// `tau(current, j)^alpha * eta(current, j)^beta` and draws the next site
/// with probability proportional to its score. If every score is zero the
/// draw is uniform over the unvisited sites.
///
/// The returned tour is always a permutation of `0..n` beginning with
/// `start`, whatever the scores look like.
///
/// # Panics
///
/// Panics if `start` is out of range or the matrices differ in size.
pub fn construct_tour<R: Rng>(
    start: usize,
    pheromone: &PheromoneMatrix,
    visibility: &Visibility,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = pheromone.size();
    assert_eq!(n, visibility.size(), "pheromone/visibility size mismatch");
    assert!(start < n, "start site {start} out of range for {n} sites");

    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut unvisited: Vec<usize> = (0..n).filter(|&j| j != start).collect();
    let mut scores = Vec::with_capacity(unvisited.len());
    let mut current = start;

    while !unvisited.is_empty() {
        scores.clear();
        scores.extend(unvisited.iter().map(|&j| {
            let s = pheromone.get(current, j).powf(alpha) * visibility.get(current, j).powf(beta);
            if s.is_nan() {
                0.0
            } else {
                s
            }
        }));

        let pick = select_index(&scores, rng);
        let next = unvisited.swap_remove(pick);
        tour.push(next);
        current = next;
    }

    tour
}

/// Draws an index with probability proportional to `scores`.
///
/// Scores must be non-negative (NaN already filtered out). Infinite scores
/// dominate: the draw is uniform among them. An all-zero slice falls back
/// to a uniform draw over every index.
pub(crate) fn select_index<R: Rng>(scores: &[f64], rng: &mut R) -> usize {
    debug_assert!(!scores.is_empty());

    let max = scores.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return rng.random_range(0..scores.len());
    }
    if max.is_infinite() {
        let infinite: Vec<usize> = (0..scores.len())
            .filter(|&i| scores[i].is_infinite())
            .collect();
        return infinite[rng.random_range(0..infinite.len())];
    }

    // Scaling by the max keeps the total finite even for huge scores.
    let total: f64 = scores.iter().map(|s| s / max).sum();
    let mut remaining = rng.random_range(0.0..1.0) * total;
    let mut last_positive = 0;
    for (i, s) in scores.iter().enumerate() {
        let w = s / max;
        if w <= 0.0 {
            continue;
        }
        last_positive = i;
        if remaining < w {
            return i;
        }
        remaining -= w;
    }
    last_positive
}
