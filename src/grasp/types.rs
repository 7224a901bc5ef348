//! Core trait and result type for GRASP.

use std::fmt;

use rand::Rng;

/// Outcome of one randomized greedy construction.
///
/// A failed construction is a distinct case rather than a solution with a
/// sentinel cost, so it can never be compared against the incumbent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construction<S, F> {
    /// A feasible solution.
    Feasible(S),
    /// The attempt failed; the payload says why.
    Infeasible(F),
}

impl<S, F> Construction<S, F> {
    /// Returns `true` for [`Construction::Feasible`].
    pub fn is_feasible(&self) -> bool {
        matches!(self, Construction::Feasible(_))
    }

    /// Converts into the feasible solution, discarding the failure reason.
    pub fn feasible(self) -> Option<S> {
        match self {
            Construction::Feasible(s) => Some(s),
            Construction::Infeasible(_) => None,
        }
    }

    /// Applies `f` to a feasible solution; failures pass through unchanged.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Construction<T, F> {
        match self {
            Construction::Feasible(s) => Construction::Feasible(f(s)),
            Construction::Infeasible(e) => Construction::Infeasible(e),
        }
    }
}

/// Defines a minimization problem solvable by GRASP.
///
/// The user supplies the randomized greedy constructor and the local
/// search; the runner handles iteration, alpha scheduling, incumbent
/// tracking and stopping rules.
pub trait GraspProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Why a construction can fail.
    type Failure: Clone + fmt::Debug + Send;

    /// Builds one solution with RCL parameter `alpha`, drawing all random
    /// choices from `rng`.
    fn construct<R: Rng>(
        &self,
        alpha: f64,
        rng: &mut R,
    ) -> Construction<Self::Solution, Self::Failure>;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Improves a feasible solution, performing at most `max_iterations`
    /// neighborhood scans.
    fn local_search(&self, solution: Self::Solution, max_iterations: usize) -> Self::Solution;

    /// A cost no solution can beat. When the incumbent reaches it the
    /// runner stops immediately.
    fn lower_bound(&self) -> Option<f64> {
        None
    }
}
