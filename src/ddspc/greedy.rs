//! Single-shot greedy randomized solver.
//!
//! Runs one construction and no local search. Useful as a cheap baseline
//! next to GRASP.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::construct::construct;
use super::graph::Graph;
use super::output::{DdspcOutput, SolverMethod};
use crate::error::DdspcError;
use crate::grasp::{Construction, DEFAULT_SEED};

/// Configuration for [`GreedySolver`].
///
/// # Examples
///
/// ```
/// use ddspc_grasp::ddspc::GreedyConfig;
///
/// let config = GreedyConfig::default().with_alpha(0.0).with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// RCL parameter in [0, 1].
    pub alpha: f64,
    /// Random seed. `None` uses the crate default seed.
    pub seed: Option<u64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            seed: None,
        }
    }
}

impl GreedyConfig {
    /// Sets the RCL parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DdspcError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(DdspcError::InvalidConfig(format!(
                "alpha must be in [0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// One greedy randomized construction, reported as [`SolverMethod::Greedy`].
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    config: GreedyConfig,
}

impl GreedySolver {
    /// Solver with the given configuration.
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// Constructs one solution, or `Ok(None)` if construction failed.
    pub fn solve(&self, graph: &Graph) -> Result<Option<DdspcOutput>, DdspcError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(DEFAULT_SEED));
        self.solve_with_rng(graph, &mut rng)
    }

    /// Like [`solve`](Self::solve) with a caller-owned RNG.
    pub fn solve_with_rng<R: Rng>(
        &self,
        graph: &Graph,
        rng: &mut R,
    ) -> Result<Option<DdspcOutput>, DdspcError> {
        self.config.validate()?;
        let start = Instant::now();
        match construct(graph, self.config.alpha, rng) {
            Construction::Feasible(s) => Ok(Some(DdspcOutput::new(
                s,
                graph.num_nodes(),
                SolverMethod::Greedy,
                start.elapsed(),
            ))),
            Construction::Infeasible(reason) => {
                debug!(?reason, "greedy construction infeasible");
                Ok(None)
            }
        }
    }
}
