//! Ant Colony Optimization (ACO) for the closed-tour TSP.
//!
//! A population of ants repeatedly builds tours over a fixed set of
//! sites. Each ant picks its next site with probability proportional to
//! `tau^alpha * eta^beta`, where `tau` is the learned pheromone on the edge
//! and `eta` its visibility (inverse distance). After every iteration the
//! trails evaporate and each ant deposits `Q / length` on the edges it used,
//! so short tours attract later ants.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Hyperparameters (ants, iterations, alpha, beta, rho, Q)
//! - [`AcoRunner`]: Executes the colony loop
//! - [`AcoResult`]: Best tour, its length and the convergence history
//!
//! # Building Blocks
//!
//! - [`construct_tour`]: One ant's probabilistic tour
//! - [`tour_length`]: Cyclic tour length with infeasible-edge penalty
//! - [`PheromoneMatrix`] / [`Visibility`]: Per-edge signals
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29–41
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod config;
mod construct;
mod evaluate;
mod pheromone;
mod runner;

pub use config::{AcoConfig, InfeasiblePenalty, DEFAULT_INFEASIBLE_PENALTY};
pub use construct::construct_tour;
pub use evaluate::{tour_length, tour_length_with_penalty};
pub use pheromone::{PheromoneMatrix, Visibility, INITIAL_PHEROMONE, VISIBILITY_EPSILON};
pub use runner::{run_aco, AcoResult, AcoRunner, IterationStats, Leg};
