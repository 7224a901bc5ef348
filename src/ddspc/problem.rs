//! DDSPC as a GRASP problem, and the solver entry points.

use rand::Rng;
use tracing::debug;

use super::construct::{construct, DdspcConstruction, Infeasibility};
use super::feasibility::is_valid_solution;
use super::graph::Graph;
use super::local_search::Neighborhood;
use super::output::{DdspcOutput, SolverMethod};
use super::solution::Solution;
use crate::error::DdspcError;
use crate::grasp::{Construction, GraspConfig, GraspProblem, GraspResult, GraspRunner};

/// Binds a graph and a neighborhood to the GRASP framework.
#[derive(Debug, Clone, Copy)]
pub struct DdspcProblem<'g> {
    graph: &'g Graph,
    neighborhood: Neighborhood,
}

impl<'g> DdspcProblem<'g> {
    /// Problem over `graph` searched with `neighborhood`.
    pub fn new(graph: &'g Graph, neighborhood: Neighborhood) -> Self {
        Self {
            graph,
            neighborhood,
        }
    }
}

impl GraspProblem for DdspcProblem<'_> {
    type Solution = Solution;
    type Failure = Infeasibility;

    fn construct<R: Rng>(&self, alpha: f64, rng: &mut R) -> DdspcConstruction {
        let built = construct(self.graph, alpha, rng);
        if let Construction::Feasible(s) = &built {
            debug_assert!(is_valid_solution(s, self.graph));
        }
        built
    }

    fn cost(&self, solution: &Solution) -> f64 {
        solution.value() as f64
    }

    fn local_search(&self, solution: Solution, max_iterations: usize) -> Solution {
        self.neighborhood
            .local_search(self.graph, solution, max_iterations)
    }

    /// One node per set; the empty graph is solved by two empty sets.
    fn lower_bound(&self) -> Option<f64> {
        Some(if self.graph.num_nodes() == 0 { 0.0 } else { 2.0 })
    }
}

/// GRASP solver for DDSPC.
///
/// # Examples
///
/// ```
/// use ddspc_grasp::ddspc::{is_valid_solution, DdspcSolver, Graph, Neighborhood};
/// use ddspc_grasp::grasp::GraspConfig;
///
/// let graph = Graph::new(
///     5,
///     &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
///     &[(0, 2), (1, 3)],
/// )
/// .unwrap();
/// let solver = DdspcSolver::new(GraspConfig::default().with_seed(1))
///     .with_neighborhood(Neighborhood::removals_only());
/// let output = solver.solve(&graph).unwrap().expect("feasible");
/// assert!(is_valid_solution(&output.solution(), &graph));
/// assert!(output.value >= 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DdspcSolver {
    config: GraspConfig,
    neighborhood: Neighborhood,
}

impl DdspcSolver {
    /// Solver with the full neighborhood.
    pub fn new(config: GraspConfig) -> Self {
        Self {
            config,
            neighborhood: Neighborhood::full(),
        }
    }

    /// Sets the local search neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// GRASP configuration.
    pub fn config(&self) -> &GraspConfig {
        &self.config
    }

    /// Local search neighborhood.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Runs GRASP and returns the raw run statistics.
    pub fn run(&self, graph: &Graph) -> Result<GraspResult<Solution>, DdspcError> {
        self.config.validate()?;
        Ok(GraspRunner::run(
            &DdspcProblem::new(graph, self.neighborhood),
            &self.config,
        ))
    }

    /// Runs GRASP drawing from a caller-owned RNG.
    pub fn run_with_rng<R: Rng>(
        &self,
        graph: &Graph,
        rng: &mut R,
    ) -> Result<GraspResult<Solution>, DdspcError> {
        self.config.validate()?;
        Ok(GraspRunner::run_with_rng(
            &DdspcProblem::new(graph, self.neighborhood),
            &self.config,
            rng,
        ))
    }

    /// Best solution found, or `Ok(None)` when no iteration produced a
    /// feasible construction.
    pub fn solve(&self, graph: &Graph) -> Result<Option<DdspcOutput>, DdspcError> {
        let result = self.run(graph)?;
        Ok(into_output(result, graph))
    }

    /// Like [`solve`](Self::solve) with a caller-owned RNG.
    pub fn solve_with_rng<R: Rng>(
        &self,
        graph: &Graph,
        rng: &mut R,
    ) -> Result<Option<DdspcOutput>, DdspcError> {
        let result = self.run_with_rng(graph, rng)?;
        Ok(into_output(result, graph))
    }
}

fn into_output(result: GraspResult<Solution>, graph: &Graph) -> Option<DdspcOutput> {
    let elapsed = result.elapsed;
    match result.best {
        Some(best) => Some(DdspcOutput::new(
            best,
            graph.num_nodes(),
            SolverMethod::Grasp,
            elapsed,
        )),
        None => {
            debug!(
                iterations = result.iterations,
                "no feasible construction in any iteration"
            );
            None
        }
    }
}

/// Solves `graph` with GRASP and the full neighborhood.
///
/// Shorthand for `DdspcSolver::new(config.clone()).solve(graph)`.
pub fn solve(graph: &Graph, config: &GraspConfig) -> Result<Option<DdspcOutput>, DdspcError> {
    DdspcSolver::new(config.clone()).solve(graph)
}
