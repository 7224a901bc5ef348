//! GRASP execution engine.
//!
//! # Algorithm
//!
//! 1. For each iteration `i` in `0..max_iterations`:
//!    a. Pick alpha for this iteration (fixed or swept)
//!    b. **Construct** a randomized greedy solution; skip the iteration if
//!    construction fails
//!    c. **Local search** the constructed solution
//!    d. Adopt it as the incumbent if its cost is strictly lower
//!    e. Stop if the incumbent reaches the problem's lower bound
//! 2. Return the incumbent (or nothing if every construction failed)
//!
//! # Reference
//!
//! Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive search
//! procedures", *Journal of Global Optimization* 6(2), 109-133.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::{GraspConfig, DEFAULT_SEED};
use super::types::{Construction, GraspProblem};

/// Result of a GRASP run.
#[derive(Debug, Clone)]
pub struct GraspResult<S: Clone> {
    /// Best solution found, or `None` if every construction failed.
    pub best: Option<S>,
    /// Cost of the best solution (`f64::INFINITY` when `best` is `None`).
    pub best_cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Iterations whose construction failed.
    pub infeasible_constructions: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: Option<usize>,
    /// Incumbent cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Whether the run stopped because the lower bound was reached.
    pub reached_lower_bound: bool,
    /// Whether the run stopped on the time limit.
    pub timed_out: bool,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// GRASP runner.
pub struct GraspRunner;

impl GraspRunner {
    /// Executes GRASP with an RNG seeded from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`GraspConfig::validate`] first to get a descriptive error).
    pub fn run<P: GraspProblem>(problem: &P, config: &GraspConfig) -> GraspResult<P::Solution> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Executes GRASP drawing every random choice from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns reproducibility.
    pub fn run_with_rng<P: GraspProblem, R: Rng>(
        problem: &P,
        config: &GraspConfig,
        rng: &mut R,
    ) -> GraspResult<P::Solution> {
        config.validate().expect("invalid GraspConfig");

        let start = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);
        let lower_bound = problem.lower_bound();

        let mut best: Option<P::Solution> = None;
        let mut best_cost = f64::INFINITY;
        let mut best_iteration = None;
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut infeasible_constructions = 0;
        let mut reached_lower_bound = false;
        let mut timed_out = false;
        let mut iterations = 0;

        for iteration in 0..config.max_iterations {
            if let Some(limit) = deadline {
                if start.elapsed() >= limit {
                    timed_out = true;
                    break;
                }
            }
            iterations += 1;

            let alpha = config.alpha_at(iteration);
            let constructed = match problem.construct(alpha, rng) {
                Construction::Feasible(s) => s,
                Construction::Infeasible(reason) => {
                    debug!(iteration, alpha, ?reason, "construction infeasible");
                    infeasible_constructions += 1;
                    cost_history.push(best_cost);
                    continue;
                }
            };

            let improved = problem.local_search(constructed, config.max_local_search_iterations);
            let cost = problem.cost(&improved);
            debug!(iteration, alpha, cost, "local optimum");

            if cost < best_cost {
                debug!(iteration, cost, previous = best_cost, "new incumbent");
                best = Some(improved);
                best_cost = cost;
                best_iteration = Some(iteration);
            }
            cost_history.push(best_cost);

            if let Some(bound) = lower_bound {
                if best_cost <= bound {
                    reached_lower_bound = true;
                    break;
                }
            }
        }

        let elapsed = start.elapsed();
        info!(
            best_cost,
            iterations,
            infeasible_constructions,
            reached_lower_bound,
            timed_out,
            elapsed_ms = elapsed.as_millis() as u64,
            "GRASP finished"
        );

        GraspResult {
            best,
            best_cost,
            iterations,
            infeasible_constructions,
            best_iteration,
            cost_history,
            reached_lower_bound,
            timed_out,
            elapsed,
        }
    }
}
