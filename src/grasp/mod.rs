//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! A multi-start metaheuristic. Each iteration builds a solution with a
//! randomized greedy rule driven by a restricted candidate list (RCL) and
//! then improves it with local search. The best solution over all
//! iterations (the incumbent) is returned.
//!
//! Construction may fail; failures are reported as
//! [`Construction::Infeasible`] and simply skipped by the runner.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive search
//!   procedures", *Journal of Global Optimization* 6(2), 109-133.
//! - Resende, M. G. C. & Ribeiro, C. C. (2016). *Optimization by GRASP*, Springer.

mod config;
mod runner;
mod types;

pub use config::{AlphaSchedule, GraspConfig, DEFAULT_SEED};
pub use runner::{GraspResult, GraspRunner};
pub use types::{Construction, GraspProblem};
