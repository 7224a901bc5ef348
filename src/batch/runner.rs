//! Batch execution and aggregation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use super::config::BatchConfig;
use crate::ddspc::{DdspcOutput, DdspcSolver, GreedySolver, SolverMethod};
use crate::error::DdspcError;
use crate::instance::{load_text, DdspcInput};

/// What happened to one instance.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// A feasible solution was found.
    Solved(DdspcOutput),
    /// Every attempt was infeasible.
    NoSolution,
    /// The instance itself was malformed.
    Failed(String),
}

/// Result for one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// Position in the input list.
    pub index: usize,
    /// Instance name (or `instance_<index>`).
    pub name: String,
    /// Seed the instance was solved with.
    pub seed: u64,
    /// Outcome.
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    /// The output, if solved.
    pub fn output(&self) -> Option<&DdspcOutput> {
        match &self.outcome {
            BatchOutcome::Solved(out) => Some(out),
            _ => None,
        }
    }
}

/// Aggregates over a batch. Means cover solved instances only.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    /// Number of instances.
    pub instances: usize,
    /// Instances with a feasible solution.
    pub solved: usize,
    /// Instances where every attempt was infeasible.
    pub no_solution: usize,
    /// Malformed instances.
    pub failed: usize,
    /// Mean objective value.
    pub mean_value: Option<f64>,
    /// Mean runtime.
    pub mean_runtime: Option<Duration>,
    /// Mean gap over entries with a known optimum.
    pub mean_gap_percent: Option<f64>,
}

/// All entries of a batch, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Solver used.
    pub method: SolverMethod,
    /// One entry per instance.
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Fills `gap_percent` for solved entries whose name has a known optimum.
    pub fn apply_optima(&mut self, optima: &HashMap<String, usize>) {
        for entry in &mut self.entries {
            if let (Some(&optimal), BatchOutcome::Solved(out)) =
                (optima.get(&entry.name), &mut entry.outcome)
            {
                out.gap_percent = crate::ddspc::gap_percent(optimal, out.value);
            }
        }
    }

    /// Computes aggregate statistics.
    pub fn summary(&self) -> BatchSummary {
        let solved: Vec<&DdspcOutput> = self.entries.iter().filter_map(BatchEntry::output).collect();
        let count = |pred: fn(&BatchOutcome) -> bool| {
            self.entries.iter().filter(|e| pred(&e.outcome)).count()
        };
        let mean = |values: Vec<f64>| {
            (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
        };

        let mean_runtime = (!solved.is_empty())
            .then(|| solved.iter().map(|o| o.runtime).sum::<Duration>() / solved.len() as u32);

        BatchSummary {
            instances: self.entries.len(),
            solved: solved.len(),
            no_solution: count(|o| matches!(o, BatchOutcome::NoSolution)),
            failed: count(|o| matches!(o, BatchOutcome::Failed(_))),
            mean_value: mean(solved.iter().map(|o| o.value as f64).collect()),
            mean_runtime,
            mean_gap_percent: mean(solved.iter().filter_map(|o| o.gap_percent).collect()),
        }
    }
}

/// Solves many independent instances.
pub struct BatchRunner;

impl BatchRunner {
    /// Solves every instance with the configured method.
    ///
    /// Instance `i` uses seed `base_seed + i`, so results do not depend on
    /// `parallel` or on thread scheduling. Without the `parallel` feature
    /// the flag is ignored and instances run sequentially.
    pub fn run(instances: &[DdspcInput], config: &BatchConfig) -> Result<BatchReport, DdspcError> {
        config.validate()?;

        let solve = |(index, input): (usize, &DdspcInput)| solve_one(index, input, config);
        #[cfg(feature = "parallel")]
        let entries: Vec<BatchEntry> = if config.parallel {
            instances.par_iter().enumerate().map(solve).collect()
        } else {
            instances.iter().enumerate().map(solve).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let entries: Vec<BatchEntry> = instances.iter().enumerate().map(solve).collect();

        let report = BatchReport {
            method: config.method,
            entries,
        };
        let summary = report.summary();
        info!(
            method = %config.method,
            instances = summary.instances,
            solved = summary.solved,
            no_solution = summary.no_solution,
            failed = summary.failed,
            mean_value = ?summary.mean_value,
            "batch finished"
        );
        Ok(report)
    }
}

fn solve_one(index: usize, input: &DdspcInput, config: &BatchConfig) -> BatchEntry {
    let name = input
        .instance_name
        .clone()
        .unwrap_or_else(|| format!("instance_{index}"));
    let seed = config.base_seed.wrapping_add(index as u64);
    let mut rng = StdRng::seed_from_u64(seed);

    let result = input.to_graph().and_then(|graph| match config.method {
        SolverMethod::Grasp => DdspcSolver::new(config.grasp.clone())
            .with_neighborhood(config.neighborhood)
            .solve_with_rng(&graph, &mut rng),
        SolverMethod::Greedy => GreedySolver::new(config.greedy.clone()).solve_with_rng(&graph, &mut rng),
    });

    let outcome = match result {
        Ok(Some(out)) => BatchOutcome::Solved(out.with_graph_name(name.clone())),
        Ok(None) => {
            warn!(instance = %name, "no feasible solution found");
            BatchOutcome::NoSolution
        }
        Err(e) => {
            warn!(instance = %name, error = %e, "instance failed");
            BatchOutcome::Failed(e.to_string())
        }
    };

    BatchEntry {
        index,
        name,
        seed,
        outcome,
    }
}

/// Loads every instance file in `dir`, sorted by file name.
///
/// `.txt` files use the text format; `.json` files (with the `serde`
/// feature) use JSON. Unreadable files are logged and skipped.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<DdspcInput>, DdspcError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut instances = Vec::with_capacity(paths.len());
    for path in paths {
        let loaded = match path.extension().and_then(|e| e.to_str()) {
            Some("txt") => load_text(&path),
            #[cfg(feature = "serde")]
            Some("json") => crate::instance::load_json(&path).map(|mut input| {
                if input.instance_name.is_none() {
                    input.instance_name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
                }
                input
            }),
            _ => continue,
        };
        match loaded {
            Ok(input) => instances.push(input),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping instance"),
        }
    }
    Ok(instances)
}
