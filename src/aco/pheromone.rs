//! Pheromone trails and static visibility.

use crate::distance::DistanceMatrix;

/// Guards the reciprocal in [`Visibility::from_distances`].
pub const VISIBILITY_EPSILON: f64 = 1e-10;

/// Pheromone level every edge starts a run with.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Learned per-edge desirability, owned by a single run.
///
/// Deposits are always applied to both directions of an edge, so a matrix
/// that starts symmetric stays symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an n×n matrix with every entry set to `value`.
    pub fn uniform(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to both directions of every edge of the closed tour.
    pub fn reinforce_tour(&mut self, tour: &[usize], amount: f64) {
        let n = tour.len();
        for i in 0..n {
            let a = tour[i];
            let b = tour[(i + 1) % n];
            self.data[a * self.size + b] += amount;
            self.data[b * self.size + a] += amount;
        }
    }

    /// Deposits `q / length` for every tour with a usable length.
    ///
    /// Tours whose length is zero, infinite or NaN are skipped entirely.
    /// Returns the number of tours that deposited.
    pub fn deposit<'a, I>(&mut self, tours: I, q: f64) -> usize
    where
        I: IntoIterator<Item = (&'a [usize], f64)>,
    {
        let mut deposited = 0;
        for (tour, length) in tours {
            if length == 0.0 || !length.is_finite() {
                continue;
            }
            self.reinforce_tour(tour, q / length);
            deposited += 1;
        }
        deposited
    }

    /// Returns `true` if `(i, j)` equals `(j, i)` within `tol` for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Static per-edge desirability: the reciprocal of distance.
///
/// Zero-distance pairs (the diagonal included) get zero visibility, and
/// unreachable pairs get zero because `1 / inf == 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    data: Vec<f64>,
    size: usize,
}

impl Visibility {
    pub fn from_distances(distances: &DistanceMatrix) -> Self {
        let size = distances.size();
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let d = distances.get(i, j);
                data.push(if d == 0.0 {
                    0.0
                } else {
                    1.0 / (d + VISIBILITY_EPSILON)
                });
            }
        }
        Self { data, size }
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
