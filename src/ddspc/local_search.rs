//! Neighborhood moves and first-improvement local search.
//!
//! # Neighborhood
//!
//! Scanned in this order:
//!
//! 1. remove a node from D1 (value −1)
//! 2. remove a node from D2 (value −1)
//! 3. add a free node to D1 (value +1)
//! 4. add a free node to D2 (value +1)
//! 5. swap a D1 node with a D2 node (value unchanged)
//!
//! Each operator family can be switched off independently through
//! [`Neighborhood`]. Only strictly improving moves are ever accepted, so
//! additions and swaps are scanned but never taken; [`Neighborhood::removals_only`]
//! skips them.

use std::collections::BTreeSet;
use std::iter;

use super::construct::DdspcConstruction;
use super::feasibility::is_valid_solution;
use super::graph::{Graph, NodeId};
use super::solution::Solution;

/// A single neighborhood move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Remove the node from D1.
    RemoveD1(NodeId),
    /// Remove the node from D2.
    RemoveD2(NodeId),
    /// Add a free node to D1.
    AddD1(NodeId),
    /// Add a free node to D2.
    AddD2(NodeId),
    /// Move `from_d1` into D2 and `from_d2` into D1.
    Swap {
        /// Node leaving D1.
        from_d1: NodeId,
        /// Node leaving D2.
        from_d2: NodeId,
    },
}

impl Move {
    /// Change in objective value.
    pub fn delta(&self) -> isize {
        match self {
            Move::RemoveD1(_) | Move::RemoveD2(_) => -1,
            Move::AddD1(_) | Move::AddD2(_) => 1,
            Move::Swap { .. } => 0,
        }
    }

    /// Returns a new solution with the move applied; `solution` is untouched.
    pub fn apply(&self, solution: &Solution) -> Solution {
        let mut next = solution.clone();
        match *self {
            Move::RemoveD1(v) => {
                next.d1_mut().remove(&v);
            }
            Move::RemoveD2(v) => {
                next.d2_mut().remove(&v);
            }
            Move::AddD1(v) => {
                next.d1_mut().insert(v);
            }
            Move::AddD2(v) => {
                next.d2_mut().insert(v);
            }
            Move::Swap { from_d1, from_d2 } => {
                next.d1_mut().remove(&from_d1);
                next.d2_mut().remove(&from_d2);
                next.d1_mut().insert(from_d2);
                next.d2_mut().insert(from_d1);
            }
        }
        next
    }
}

/// Which move families local search explores.
///
/// # Examples
///
/// ```
/// use ddspc_grasp::ddspc::Neighborhood;
///
/// let n = Neighborhood::full().with_swaps(false);
/// assert!(n.removals && n.additions && !n.swaps);
/// assert_eq!(Neighborhood::default(), Neighborhood::full());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighborhood {
    /// Remove a node from D1 or D2.
    pub removals: bool,
    /// Add a free node to D1 or D2.
    pub additions: bool,
    /// Exchange one D1 node with one D2 node.
    pub swaps: bool,
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::full()
    }
}

impl Neighborhood {
    /// All move families.
    pub fn full() -> Self {
        Self {
            removals: true,
            additions: true,
            swaps: true,
        }
    }

    /// Removal moves only.
    pub fn removals_only() -> Self {
        Self {
            removals: true,
            additions: false,
            swaps: false,
        }
    }

    /// Enables or disables removal moves.
    pub fn with_removals(mut self, on: bool) -> Self {
        self.removals = on;
        self
    }

    /// Enables or disables addition moves.
    pub fn with_additions(mut self, on: bool) -> Self {
        self.additions = on;
        self
    }

    /// Enables or disables swap moves.
    pub fn with_swaps(mut self, on: bool) -> Self {
        self.swaps = on;
        self
    }

    /// Candidate moves around `solution`, in scan order.
    ///
    /// Moves are pre-filtered by the condition specific to their family
    /// (removal keeps the set dominating, addition and swap create no
    /// split conflict). Removal candidates are computed up front; additions
    /// and swaps are generated lazily.
    pub fn moves<'a>(
        &self,
        solution: &'a Solution,
        graph: &'a Graph,
    ) -> impl Iterator<Item = Move> + 'a {
        let (d1, d2) = (solution.d1(), solution.d2());

        let removals = self.removals.then(|| {
            let r1 = removable(d1, graph).into_iter().map(Move::RemoveD1);
            let r2 = removable(d2, graph).into_iter().map(Move::RemoveD2);
            r1.chain(r2)
        });

        let additions = self.additions.then(move || {
            let free = move || (0..graph.num_nodes()).filter(move |&v| !solution.contains(v));
            let a1 = free()
                .filter(move |&v| !graph.conflicts_of(v).iter().any(|c| d2.contains(c)))
                .map(Move::AddD1);
            let a2 = free()
                .filter(move |&v| !graph.conflicts_of(v).iter().any(|c| d1.contains(c)))
                .map(Move::AddD2);
            a1.chain(a2)
        });

        // after the swap, `a` sits in D2 facing D1 \ {a} and `b`; `b` sits in
        // D1 facing D2 \ {b}
        let swaps = self.swaps.then(move || {
            d1.iter().flat_map(move |&a| {
                d2.iter().filter_map(move |&b| {
                    let a_clashes = graph
                        .conflicts_of(a)
                        .iter()
                        .any(|&c| c == b || (c != a && d1.contains(&c)));
                    let b_clashes = graph
                        .conflicts_of(b)
                        .iter()
                        .any(|&c| c != b && d2.contains(&c));
                    (!a_clashes && !b_clashes).then_some(Move::Swap {
                        from_d1: a,
                        from_d2: b,
                    })
                })
            })
        });

        removals
            .into_iter()
            .flatten()
            .chain(additions.into_iter().flatten())
            .chain(swaps.into_iter().flatten())
    }

    /// Valid neighbor solutions of `solution`, in scan order.
    ///
    /// Every candidate passes [`is_valid_solution`] before it is yielded.
    pub fn neighbors<'a>(
        &self,
        solution: &'a Solution,
        graph: &'a Graph,
    ) -> impl Iterator<Item = (Move, Solution)> + 'a {
        self.moves(solution, graph)
            .map(move |mv| (mv, mv.apply(solution)))
            .filter(move |(_, candidate)| is_valid_solution(candidate, graph))
    }

    /// First-improvement descent from `solution`.
    ///
    /// Each scan accepts the first neighbor with a strictly lower value and
    /// restarts from it. Stops when a scan finds no improvement or after
    /// `max_iterations` scans.
    pub fn local_search(&self, graph: &Graph, solution: Solution, max_iterations: usize) -> Solution {
        let mut current = solution;
        for _ in 0..max_iterations {
            let value = current.value();
            let improving = self
                .neighbors(&current, graph)
                .map(|(_, candidate)| candidate)
                .find(|candidate| candidate.value() < value);
            match improving {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Runs [`local_search`](Self::local_search) on a feasible construction;
    /// an infeasible one is returned unchanged.
    pub fn improve(
        &self,
        graph: &Graph,
        construction: DdspcConstruction,
        max_iterations: usize,
    ) -> DdspcConstruction {
        construction.map(|s| self.local_search(graph, s, max_iterations))
    }
}

/// Members of `set` whose removal keeps `set` dominating.
///
/// `cover[u]` counts the members of `set` in the closed neighborhood of `u`;
/// a member can go iff every node it covers is covered at least twice.
fn removable(set: &BTreeSet<NodeId>, graph: &Graph) -> Vec<NodeId> {
    let mut cover = vec![0usize; graph.num_nodes()];
    for &v in set {
        for u in iter::once(v).chain(graph.neighbors(v)) {
            cover[u] += 1;
        }
    }
    set.iter()
        .copied()
        .filter(|&v| iter::once(v).chain(graph.neighbors(v)).all(|u| cover[u] >= 2))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grasp::Construction;
    use crate::ddspc::construct::Infeasibility;

    fn five_cycle() -> Graph {
        Graph::new(
            5,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
            &[(0, 2), (1, 3)],
        )
        .unwrap()
    }

    fn complete(n: usize) -> Graph {
        let edges: Vec<_> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        Graph::new(n, &edges, &[]).unwrap()
    }

    #[test]
    fn test_move_apply_builds_new_snapshot() {
        let s = Solution::new([0, 2], [1, 3]);
        let swapped = Move::Swap {
            from_d1: 0,
            from_d2: 1,
        }
        .apply(&s);
        assert_eq!(swapped, Solution::new([1, 2], [0, 3]));
        assert_eq!(s, Solution::new([0, 2], [1, 3]));
        assert_eq!(Move::RemoveD1(2).apply(&s), Solution::new([0], [1, 3]));
        assert_eq!(Move::AddD2(4).apply(&s), Solution::new([0, 2], [1, 3, 4]));
    }

    #[test]
    fn test_move_delta() {
        assert_eq!(Move::RemoveD2(0).delta(), -1);
        assert_eq!(Move::AddD1(0).delta(), 1);
        assert_eq!(
            Move::Swap {
                from_d1: 0,
                from_d2: 1
            }
            .delta(),
            0
        );
    }

    #[test]
    fn test_removes_redundant_node() {
        let g = five_cycle();
        let start = Solution::new([0, 2, 4], [1, 3]);
        assert!(is_valid_solution(&start, &g));

        let result = Neighborhood::full().local_search(&g, start, 100);

        // 0 is the first redundant member in scan order
        assert_eq!(result, Solution::new([2, 4], [1, 3]));
    }

    #[test]
    fn test_scan_order_starts_with_d1_removals() {
        let g = complete(4);
        let s = Solution::new([0, 1], [2, 3]);
        let moves: Vec<Move> = Neighborhood::full().moves(&s, &g).collect();
        assert_eq!(
            &moves[..4],
            &[
                Move::RemoveD1(0),
                Move::RemoveD1(1),
                Move::RemoveD2(2),
                Move::RemoveD2(3)
            ]
        );
        assert!(matches!(moves.last(), Some(Move::Swap { .. })));
    }

    #[test]
    fn test_removals_only_has_no_other_moves() {
        let g = complete(4);
        let s = Solution::new([0, 1], [2, 3]);
        assert!(Neighborhood::removals_only()
            .moves(&s, &g)
            .all(|m| matches!(m, Move::RemoveD1(_) | Move::RemoveD2(_))));
    }

    #[test]
    fn test_removal_requires_domination() {
        let g = five_cycle();
        let s = Solution::new([0, 2], [1, 3]);
        let removals = Neighborhood::removals_only().moves(&s, &g).count();
        assert_eq!(removals, 0);
    }

    #[test]
    fn test_additions_respect_conflicts() {
        let g = five_cycle();
        let s = Solution::new([0, 2], [1, 3]);
        let adds: Vec<Move> = Neighborhood::full()
            .with_removals(false)
            .with_swaps(false)
            .moves(&s, &g)
            .collect();
        // 4 is the only free node and conflicts with nobody
        assert_eq!(adds, vec![Move::AddD1(4), Move::AddD2(4)]);

        let g = Graph::new(
            5,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
            &[(4, 1)],
        )
        .unwrap();
        let adds: Vec<Move> = Neighborhood::full()
            .with_removals(false)
            .with_swaps(false)
            .moves(&s, &g)
            .collect();
        assert_eq!(adds, vec![Move::AddD2(4)]);
    }

    #[test]
    fn test_swaps_respect_conflicts() {
        let g = five_cycle();
        let s = Solution::new([0, 2], [1, 3]);
        let swaps: Vec<Move> = Neighborhood::full()
            .with_removals(false)
            .with_additions(false)
            .moves(&s, &g)
            .collect();
        // whichever of 0 or 2 moves to D2 is split from the other
        assert!(swaps.is_empty());
    }

    #[test]
    fn test_neighbors_are_all_valid() {
        let g = complete(5);
        let s = Solution::new([0, 1], [2, 3]);
        let neighbors: Vec<_> = Neighborhood::full().neighbors(&s, &g).collect();
        assert!(!neighbors.is_empty());
        for (mv, candidate) in &neighbors {
            assert!(is_valid_solution(candidate, &g), "{mv:?} gave invalid {candidate:?}");
            assert_eq!(candidate.value() as isize, s.value() as isize + mv.delta());
        }
    }

    #[test]
    fn test_iteration_cap() {
        let g = complete(4);
        let s = Solution::new([0, 1], [2, 3]);

        let capped = Neighborhood::full().local_search(&g, s.clone(), 1);
        assert_eq!(capped.value(), 3);

        let full = Neighborhood::full().local_search(&g, s, 100);
        assert_eq!(full, Solution::new([1], [3]));
    }

    #[test]
    fn test_improve_passes_infeasible_through() {
        let g = five_cycle();
        let failed = Construction::Infeasible(Infeasibility::Blocked { uncovered: 2 });
        assert_eq!(
            Neighborhood::full().improve(&g, failed.clone(), 10),
            failed
        );
    }
}
