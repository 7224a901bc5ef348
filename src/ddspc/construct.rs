//! Greedy randomized construction of a DDSPC solution.
//!
//! # Algorithm
//!
//! Two phases, each building one dominating set greedily:
//!
//! 1. **D1**: while some node is uncovered, score every candidate `v` by
//!    `coverage(v) = 1 + |N(v) ∩ uncovered|`, keep the candidates whose score
//!    is at least `min + α·(max − min)` (the RCL), pick one uniformly at
//!    random and mark it and its neighbors covered.
//! 2. **D2**: same rule, but candidates exclude D1 and every node that
//!    conflicts with a member of D1.
//!
//! `α = 1` admits only maximum-coverage candidates; `α = 0` admits all.

use std::collections::BTreeSet;

use rand::Rng;

use super::graph::{Graph, NodeId};
use super::solution::Solution;
use crate::grasp::Construction;

/// Why a construction attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Infeasibility {
    /// Building D1 ran out of candidates with nodes still uncovered.
    /// Cannot happen on a well-formed graph; reported rather than hidden.
    Structural {
        /// Nodes left uncovered.
        uncovered: usize,
    },
    /// Building D2 ran out of candidates: every node that could still cover
    /// the remaining nodes is in D1 or conflicts with D1.
    Blocked {
        /// Nodes left uncovered.
        uncovered: usize,
    },
}

/// Result of [`construct`].
pub type DdspcConstruction = Construction<Solution, Infeasibility>;

/// Builds one solution with RCL parameter `alpha`, drawing every random
/// choice from `rng`.
///
/// # Examples
///
/// ```
/// use ddspc_grasp::ddspc::{construct, is_valid_solution, Graph};
/// use rand::SeedableRng;
///
/// let graph = Graph::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0)], &[]).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let solution = construct(&graph, 1.0, &mut rng).feasible().unwrap();
/// assert!(is_valid_solution(&solution, &graph));
/// ```
pub fn construct<R: Rng>(graph: &Graph, alpha: f64, rng: &mut R) -> DdspcConstruction {
    let n = graph.num_nodes();

    let d1 = match dominating_set(graph, alpha, &vec![false; n], rng) {
        Ok(set) => set,
        Err(uncovered) => return Construction::Infeasible(Infeasibility::Structural { uncovered }),
    };

    let mut excluded = vec![false; n];
    for &v in &d1 {
        excluded[v] = true;
        for &c in graph.conflicts_of(v) {
            excluded[c] = true;
        }
    }

    match dominating_set(graph, alpha, &excluded, rng) {
        Ok(d2) => Construction::Feasible(Solution::new(d1, d2)),
        Err(uncovered) => Construction::Infeasible(Infeasibility::Blocked { uncovered }),
    }
}

/// Greedy randomized dominating set avoiding `excluded` nodes.
///
/// Returns the number of nodes left uncovered if the candidates run out.
fn dominating_set<R: Rng>(
    graph: &Graph,
    alpha: f64,
    excluded: &[bool],
    rng: &mut R,
) -> Result<BTreeSet<NodeId>, usize> {
    let n = graph.num_nodes();
    let mut uncovered = vec![true; n];
    let mut remaining = n;
    let mut chosen = vec![false; n];
    let mut set = BTreeSet::new();
    let mut candidates: Vec<(NodeId, usize)> = Vec::with_capacity(n);
    let mut rcl: Vec<NodeId> = Vec::with_capacity(n);

    while remaining > 0 {
        candidates.clear();
        for v in (0..n).filter(|&v| !excluded[v] && !chosen[v]) {
            let coverage = 1 + graph.neighbors(v).filter(|&u| uncovered[u]).count();
            candidates.push((v, coverage));
        }
        if candidates.is_empty() {
            return Err(remaining);
        }

        let (min, max) = candidates
            .iter()
            .fold((usize::MAX, 0), |(lo, hi), &(_, c)| (lo.min(c), hi.max(c)));
        let threshold = min as f64 + alpha * (max - min) as f64;

        rcl.clear();
        rcl.extend(
            candidates
                .iter()
                .filter(|&&(_, c)| c as f64 >= threshold)
                .map(|&(v, _)| v),
        );
        let selected = rcl[rng.random_range(0..rcl.len())];

        chosen[selected] = true;
        set.insert(selected);
        for u in std::iter::once(selected).chain(graph.neighbors(selected)) {
            if uncovered[u] {
                uncovered[u] = false;
                remaining -= 1;
            }
        }
    }

    Ok(set)
}
