//! ACO colony loop.
//!
//! Each iteration is split into two phases:
//!
//! 1. **Construction** (parallelizable): every ant builds and measures a
//!    tour against an immutable pheromone snapshot.
//! 2. **Reduction** (sequential): best tracking, history, evaporation and
//!    deposit. The pheromone matrix is only mutated here, after every ant
//!    of the iteration has finished.

use super::config::AcoConfig;
use super::construct::construct_tour;
use super::evaluate::tour_length_with_penalty;
use super::pheromone::{PheromoneMatrix, Visibility, INITIAL_PHEROMONE};
use crate::distance::DistanceMatrix;
use crate::error::AcoError;
use log::{debug, info, warn};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use u_numflow::random::create_rng;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The shortest tour found during the entire run.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour` (unreachable edges counted at the penalty).
    pub best_length: f64,

    /// Shortest tour length within each iteration.
    ///
    /// Not monotone: one iteration's ants can all do worse than the last.
    pub best_history: Vec<f64>,

    /// Mean tour length within each iteration.
    pub mean_history: Vec<f64>,

    /// Best length found so far, after each iteration. Non-increasing.
    pub best_so_far_history: Vec<f64>,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of tours built and measured.
    pub evaluations: usize,
}

/// One step of the closed route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// 1-based position of this leg in the route.
    pub step: usize,
    pub from: usize,
    pub to: usize,
    /// Raw matrix entry, [`DistanceMatrix::UNREACHABLE`] included.
    pub distance: f64,
}

impl AcoResult {
    /// The best tour with its starting site appended at the end.
    pub fn closed_route(&self) -> Vec<usize> {
        let mut route = self.best_tour.clone();
        if let Some(&first) = self.best_tour.first() {
            route.push(first);
        }
        route
    }

    /// Leg-by-leg breakdown of the best tour, including the return leg.
    pub fn legs(&self, distances: &DistanceMatrix) -> Vec<Leg> {
        self.closed_route()
            .windows(2)
            .enumerate()
            .map(|(i, w)| Leg {
                step: i + 1,
                from: w[0],
                to: w[1],
                distance: distances.get(w[0], w[1]),
            })
            .collect()
    }
}

/// Per-iteration snapshot handed to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    pub best_length: f64,
    pub mean_length: f64,
    pub best_so_far: f64,
}

/// A tour built by one ant in one iteration.
#[derive(Debug, Clone)]
struct Ant {
    tour: Vec<usize>,
    length: f64,
}

/// Read-only state shared by all ants of an iteration.
struct Colony<'a> {
    distances: &'a DistanceMatrix,
    visibility: &'a Visibility,
    pheromone: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
    penalty: f64,
}

impl Colony<'_> {
    fn send_ant(&self, start: usize, seed: u64) -> Ant {
        let mut rng = create_rng(seed);
        let tour = construct_tour(
            start,
            self.pheromone,
            self.visibility,
            self.alpha,
            self.beta,
            &mut rng,
        );
        let length = tour_length_with_penalty(&tour, self.distances, self.penalty);
        Ant { tour, length }
    }

    #[cfg(feature = "parallel")]
    fn send_ants(&self, launches: &[(usize, u64)], parallel: bool) -> Vec<Ant> {
        if parallel {
            launches
                .par_iter()
                .map(|&(start, seed)| self.send_ant(start, seed))
                .collect()
        } else {
            self.send_ants_sequential(launches)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn send_ants(&self, launches: &[(usize, u64)], _parallel: bool) -> Vec<Ant> {
        self.send_ants_sequential(launches)
    }

    fn send_ants_sequential(&self, launches: &[(usize, u64)]) -> Vec<Ant> {
        launches
            .iter()
            .map(|&(start, seed)| self.send_ant(start, seed))
            .collect()
    }
}

/// Executes the ACO colony loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner};
/// use u_antcolony::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.5],
///     vec![2.0, 1.5, 0.0],
/// ])
/// .unwrap();
/// let config = AcoConfig::default().with_iterations(10).with_seed(42);
/// let result = AcoRunner::run(&dm, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 3);
/// assert!((result.best_length - 4.5).abs() < 1e-10);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony for `config.n_iterations` iterations.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(distances, config, |_| {})
    }

    /// Runs the colony, calling `observer` after every iteration.
    ///
    /// The observer sees statistics only and cannot affect the run.
    pub fn run_with_observer<F>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(&IterationStats),
    {
        config.validate()?;
        distances.validate()?;

        let n = distances.size();
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        let unreachable = distances.unreachable_count();
        if unreachable > 0 {
            warn!("distance matrix has {unreachable} unreachable pairs");
        }
        info!(
            "aco start: sites={n} ants={} iterations={} seed={seed}",
            config.n_ants, config.n_iterations
        );

        let penalty = config.penalty.resolve(distances);
        let visibility = Visibility::from_distances(distances);
        let mut pheromone = PheromoneMatrix::uniform(n, INITIAL_PHEROMONE);

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut best_history = Vec::with_capacity(config.n_iterations);
        let mut mean_history = Vec::with_capacity(config.n_iterations);
        let mut best_so_far_history = Vec::with_capacity(config.n_iterations);

        for iteration in 1..=config.n_iterations {
            // Starts and per-ant seeds come from the master generator so
            // the outcome does not depend on thread scheduling.
            let launches: Vec<(usize, u64)> = (0..config.n_ants)
                .map(|_| (rng.random_range(0..n), rng.random::<u64>()))
                .collect();

            let ants = Colony {
                distances,
                visibility: &visibility,
                pheromone: &pheromone,
                alpha: config.alpha,
                beta: config.beta,
                penalty,
            }
            .send_ants(&launches, config.parallel);

            let mut iter_best = f64::INFINITY;
            let mut sum = 0.0;
            for ant in &ants {
                if ant.length < best_length {
                    best_length = ant.length;
                    best_tour = ant.tour.clone();
                }
                iter_best = iter_best.min(ant.length);
                sum += ant.length;
            }
            let iter_mean = sum / ants.len() as f64;

            best_history.push(iter_best);
            mean_history.push(iter_mean);
            best_so_far_history.push(best_length);

            pheromone.evaporate(config.rho);
            pheromone.deposit(
                ants.iter().map(|ant| (ant.tour.as_slice(), ant.length)),
                config.q,
            );

            debug!(
                "aco iteration {iteration}: best={iter_best:.4} mean={iter_mean:.4} best_so_far={best_length:.4}"
            );
            observer(&IterationStats {
                iteration,
                best_length: iter_best,
                mean_length: iter_mean,
                best_so_far: best_length,
            });
        }

        info!("aco done: best_length={best_length:.4} tour={best_tour:?}");

        Ok(AcoResult {
            best_tour,
            best_length,
            best_history,
            mean_history,
            best_so_far_history,
            iterations: config.n_iterations,
            evaluations: config.n_iterations * config.n_ants,
        })
    }
}

/// Runs ACO on `distances` with the given configuration.
///
/// Shorthand for [`AcoRunner::run`].
pub fn run_aco(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
    AcoRunner::run(distances, config)
}

// ============================================================================
// Tests
// ============================================================================
