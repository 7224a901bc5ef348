//! Batch configuration.

use crate::ddspc::{GreedyConfig, Neighborhood, SolverMethod};
use crate::error::DdspcError;
use crate::grasp::{GraspConfig, DEFAULT_SEED};

/// Configuration for [`BatchRunner`](super::BatchRunner).
///
/// The seeds inside `grasp` and `greedy` are ignored; instance `i` is
/// solved with seed `base_seed + i`.
///
/// # Examples
///
/// ```
/// use ddspc_grasp::batch::BatchConfig;
/// use ddspc_grasp::ddspc::SolverMethod;
///
/// let config = BatchConfig::default()
///     .with_method(SolverMethod::Greedy)
///     .with_parallel(false)
///     .with_base_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Solver applied to every instance.
    pub method: SolverMethod,
    /// GRASP parameters (used when `method` is `Grasp`).
    pub grasp: GraspConfig,
    /// Local search neighborhood (used when `method` is `Grasp`).
    pub neighborhood: Neighborhood,
    /// Greedy parameters (used when `method` is `Greedy`).
    pub greedy: GreedyConfig,
    /// Solve instances in parallel using rayon (needs the `parallel` feature).
    pub parallel: bool,
    /// Seed of the first instance.
    pub base_seed: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            method: SolverMethod::Grasp,
            grasp: GraspConfig::default().with_max_iterations(200),
            neighborhood: Neighborhood::full(),
            greedy: GreedyConfig::default(),
            parallel: true,
            base_seed: DEFAULT_SEED,
        }
    }
}

impl BatchConfig {
    /// Sets the solver.
    pub fn with_method(mut self, method: SolverMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the GRASP parameters.
    pub fn with_grasp(mut self, grasp: GraspConfig) -> Self {
        self.grasp = grasp;
        self
    }

    /// Sets the local search neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the greedy parameters.
    pub fn with_greedy(mut self, greedy: GreedyConfig) -> Self {
        self.greedy = greedy;
        self
    }

    /// Enables or disables parallel solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the seed of the first instance.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Validates the configuration of the selected solver.
    pub fn validate(&self) -> Result<(), DdspcError> {
        match self.method {
            SolverMethod::Grasp => self.grasp.validate(),
            SolverMethod::Greedy => self.greedy.validate(),
        }
    }
}
