//! Solver output with reporting metadata.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use super::graph::NodeId;
use super::solution::Solution;

/// Which procedure produced an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverMethod {
    /// Repeated construction plus local search.
    Grasp,
    /// A single greedy randomized construction.
    Greedy,
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverMethod::Grasp => write!(f, "GRASP"),
            SolverMethod::Greedy => write!(f, "GREEDY"),
        }
    }
}

/// A feasible solution tagged with how and how fast it was found.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DdspcOutput {
    /// Number of nodes in the solved graph.
    pub num_nodes: usize,
    /// First dominating set.
    pub d1: BTreeSet<NodeId>,
    /// Second dominating set.
    pub d2: BTreeSet<NodeId>,
    /// `|D1| + |D2|`.
    pub value: usize,
    /// Producing method.
    pub solver: SolverMethod,
    /// Wall-clock time spent solving.
    pub runtime: Duration,
    /// Instance name, if the caller supplied one.
    pub graph_name: Option<String>,
    /// Gap to a known optimum in percent, if one was supplied.
    pub gap_percent: Option<f64>,
}

impl DdspcOutput {
    /// Wraps `solution` with metadata.
    pub fn new(solution: Solution, num_nodes: usize, solver: SolverMethod, runtime: Duration) -> Self {
        let value = solution.value();
        let (d1, d2) = solution.into_sets();
        Self {
            num_nodes,
            d1,
            d2,
            value,
            solver,
            runtime,
            graph_name: None,
            gap_percent: None,
        }
    }

    /// Attaches an instance name.
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    /// Records the gap to a known optimal value.
    pub fn with_optimum(mut self, optimal: usize) -> Self {
        self.gap_percent = gap_percent(optimal, self.value);
        self
    }

    /// Rebuilds the bare solution, e.g. to re-verify a stored result.
    pub fn solution(&self) -> Solution {
        Solution::new(self.d1.iter().copied(), self.d2.iter().copied())
    }
}

/// Relative gap `(heuristic − optimal) / optimal · 100`.
///
/// `None` when `optimal` is zero.
pub fn gap_percent(optimal: usize, heuristic: usize) -> Option<f64> {
    if optimal == 0 {
        return None;
    }
    Some((heuristic as f64 - optimal as f64) / optimal as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_percent() {
        assert_eq!(gap_percent(4, 4), Some(0.0));
        assert_eq!(gap_percent(4, 5), Some(25.0));
        assert_eq!(gap_percent(0, 3), None);
    }

    #[test]
    fn test_output_roundtrips_solution() {
        let s = Solution::new([0, 2], [1, 3]);
        let out = DdspcOutput::new(s.clone(), 5, SolverMethod::Grasp, Duration::from_millis(3))
            .with_graph_name("C5")
            .with_optimum(4);
        assert_eq!(out.value, 4);
        assert_eq!(out.solution(), s);
        assert_eq!(out.graph_name.as_deref(), Some("C5"));
        assert_eq!(out.gap_percent, Some(0.0));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(SolverMethod::Grasp.to_string(), "GRASP");
        assert_eq!(SolverMethod::Greedy.to_string(), "GREEDY");
    }
}
