//! GRASP metaheuristic for Disjoint Dominating Sets with Pairwise Conflicts.
//!
//! Given a graph and a set of conflicting node pairs, DDSPC asks for two
//! disjoint dominating sets D1 and D2 with no conflict pair split between
//! them, minimizing `|D1| + |D2|`.
//!
//! - **GRASP**: a generic multi-start framework: randomized greedy
//!   construction with a restricted candidate list, followed by local
//!   search, keeping the best result across restarts.
//! - **DDSPC**: graph model, exact feasibility checks, the two-phase
//!   constructor, removal/addition/swap neighborhoods and the solvers.
//! - **Instances**: example graphs, random generators, text and JSON files.
//! - **Batch**: many independent solves, optionally in parallel.
//!
//! # Example
//!
//! ```
//! use ddspc_grasp::ddspc::{is_valid_solution, solve};
//! use ddspc_grasp::grasp::GraspConfig;
//! use ddspc_grasp::instance::DdspcInput;
//!
//! let input = DdspcInput::example_02();
//! let graph = input.to_graph().unwrap();
//! let output = solve(&graph, &GraspConfig::default().with_seed(7))
//!     .unwrap()
//!     .expect("solvable");
//! assert!(is_valid_solution(&output.solution(), &graph));
//! ```

pub mod batch;
pub mod ddspc;
pub mod error;
pub mod grasp;
pub mod instance;

pub use error::DdspcError;
