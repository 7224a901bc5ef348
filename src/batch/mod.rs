//! Batch solving of independent instances.
//!
//! Instances are embarrassingly parallel: each solve gets its own seeded
//! RNG and its own incumbent, so runs with `parallel` on or off return the
//! same results in the same order.

mod config;
mod runner;

pub use config::BatchConfig;
pub use runner::{load_dir, BatchEntry, BatchOutcome, BatchReport, BatchRunner, BatchSummary};
