//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter that controls the colony loop.

use crate::distance::DistanceMatrix;
use crate::error::AcoError;

/// Default cost charged for an unreachable edge during evaluation.
pub const DEFAULT_INFEASIBLE_PENALTY: f64 = 1e6;

/// Cost substituted for an unreachable edge when measuring a tour.
///
/// A fixed penalty only ranks infeasible tours correctly if it dwarfs
/// every real distance, so it is tied to the unit of the matrix. The
/// scaled variant derives the penalty from the matrix itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfeasiblePenalty {
    /// Charge this exact amount per unreachable edge.
    Fixed(f64),

    /// Charge `factor` times the largest finite distance in the matrix.
    ///
    /// Falls back to [`DEFAULT_INFEASIBLE_PENALTY`] when the matrix has no
    /// finite positive distance.
    ScaledToMaxFinite(f64),
}

impl Default for InfeasiblePenalty {
    fn default() -> Self {
        InfeasiblePenalty::Fixed(DEFAULT_INFEASIBLE_PENALTY)
    }
}

impl InfeasiblePenalty {
    /// Resolves the per-edge penalty for a concrete matrix.
    pub fn resolve(&self, distances: &DistanceMatrix) -> f64 {
        match *self {
            InfeasiblePenalty::Fixed(value) => value,
            InfeasiblePenalty::ScaledToMaxFinite(factor) => distances
                .max_finite()
                .map_or(DEFAULT_INFEASIBLE_PENALTY, |max| max * factor),
        }
    }
}

/// Configuration for Ant Colony Optimization.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.n_ants, 30);
/// assert_eq!(config.n_iterations, 100);
/// assert!((config.rho - 0.32).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(50)
///     .with_iterations(200)
///     .with_alpha(1.5)
///     .with_beta(3.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants that build a tour in each iteration.
    pub n_ants: usize,

    /// Number of iterations. The colony always runs all of them.
    pub n_iterations: usize,

    /// Pheromone exponent (α). Higher values follow learned trails harder.
    pub alpha: f64,

    /// Visibility exponent (β). Higher values favour short hops.
    pub beta: f64,

    /// Evaporation rate (ρ) in `[0, 1)`: fraction of pheromone lost per iteration.
    pub rho: f64,

    /// Deposit constant (Q). Each ant deposits `Q / length` on its edges.
    pub q: f64,

    /// Cost substituted for unreachable edges.
    pub penalty: InfeasiblePenalty,

    /// Whether to build tours in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 30,
            n_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.32,
            q: 100.0,
            penalty: InfeasiblePenalty::default(),
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_penalty(mut self, penalty: InfeasiblePenalty) -> Self {
        self.penalty = penalty;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.n_ants == 0 {
            return Err(invalid("n_ants must be at least 1"));
        }
        if self.n_iterations == 0 {
            return Err(invalid("n_iterations must be at least 1"));
        }
        if !self.alpha.is_finite() {
            return Err(invalid(format!("alpha must be finite, got {}", self.alpha)));
        }
        if !self.beta.is_finite() {
            return Err(invalid(format!("beta must be finite, got {}", self.beta)));
        }
        if !(0.0..1.0).contains(&self.rho) {
            return Err(invalid(format!("rho must be in [0, 1), got {}", self.rho)));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(invalid(format!("q must be positive, got {}", self.q)));
        }
        match self.penalty {
            InfeasiblePenalty::Fixed(v) | InfeasiblePenalty::ScaledToMaxFinite(v) => {
                if !v.is_finite() || v <= 0.0 {
                    return Err(invalid(format!("penalty must be positive, got {v}")));
                }
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> AcoError {
    AcoError::InvalidConfig(msg.into())
}
