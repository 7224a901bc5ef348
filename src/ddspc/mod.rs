//! Disjoint Dominating Sets with Pairwise Conflicts (DDSPC).
//!
//! Given a graph and a set of conflicting node pairs, find two disjoint
//! dominating sets D1 and D2 such that no conflict pair has one endpoint in
//! each, minimizing `|D1| + |D2|`.
//!
//! - [`Graph`]: adjacency and conflict lists
//! - [`is_dominating_set`], [`is_valid_solution`]: exact feasibility checks
//! - [`construct`]: greedy randomized two-phase constructor
//! - [`Neighborhood`]: removal / addition / swap moves and first-improvement descent
//! - [`DdspcSolver`], [`solve`]: GRASP over the above
//! - [`GreedySolver`]: single construction baseline

mod construct;
mod feasibility;
mod graph;
mod greedy;
mod local_search;
mod output;
mod problem;
mod solution;

pub use construct::{construct, DdspcConstruction, Infeasibility};
pub use feasibility::{is_dominating_set, is_valid_solution};
pub use graph::{Graph, NodeId};
pub use greedy::{GreedyConfig, GreedySolver};
pub use local_search::{Move, Neighborhood};
pub use output::{gap_percent, DdspcOutput, SolverMethod};
pub use problem::{solve, DdspcProblem, DdspcSolver};
pub use solution::Solution;
