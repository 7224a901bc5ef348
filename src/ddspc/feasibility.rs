//! Exact feasibility predicates for DDSPC solutions.

use super::graph::{Graph, NodeId};
use super::solution::Solution;

/// Whether every node is in `set` or adjacent to a member of `set`.
///
/// The empty set dominates only the empty graph. A set holding a node id
/// outside the graph dominates nothing.
pub fn is_dominating_set<'a, I>(set: I, graph: &Graph) -> bool
where
    I: IntoIterator<Item = &'a NodeId>,
{
    let n = graph.num_nodes();
    let mut dominated = vec![false; n];
    let mut count = 0;
    for &v in set {
        if v >= n {
            return false;
        }
        for u in std::iter::once(v).chain(graph.neighbors(v)) {
            if !dominated[u] {
                dominated[u] = true;
                count += 1;
            }
        }
    }
    count == n
}

/// Whether `solution` satisfies all DDSPC constraints on `graph`:
/// D1 and D2 are disjoint, both dominate the graph, and no conflict pair
/// is split between them. Stops at the first violated constraint.
pub fn is_valid_solution(solution: &Solution, graph: &Graph) -> bool {
    let (d1, d2) = (solution.d1(), solution.d2());
    if d1.iter().chain(d2).any(|&v| v >= graph.num_nodes()) {
        return false;
    }
    if !d1.is_disjoint(d2) {
        return false;
    }
    if !is_dominating_set(d1, graph) || !is_dominating_set(d2, graph) {
        return false;
    }
    // walk conflict lists of the smaller side
    let (small, large) = if d1.len() <= d2.len() { (d1, d2) } else { (d2, d1) };
    !small
        .iter()
        .any(|&a| graph.conflicts_of(a).iter().any(|b| large.contains(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_cycle() -> Graph {
        Graph::new(
            5,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
            &[(0, 2), (1, 3)],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_set_dominates_only_empty_graph() {
        let empty: [NodeId; 0] = [];
        assert!(is_dominating_set(&empty, &Graph::new(0, &[], &[]).unwrap()));
        assert!(!is_dominating_set(&empty, &Graph::new(1, &[], &[]).unwrap()));
        assert!(!is_dominating_set(&empty, &five_cycle()));
    }

    #[test]
    fn test_dominating_set_on_cycle() {
        let g = five_cycle();
        assert!(is_dominating_set(&[0, 2], &g));
        assert!(is_dominating_set(&[1, 3], &g));
        assert!(!is_dominating_set(&[0, 1], &g));
        assert!(!is_dominating_set(&[0], &g));
    }

    #[test]
    fn test_valid_solution() {
        let g = five_cycle();
        // both conflict pairs stay inside one set
        let s = Solution::new([0, 2], [1, 3]);
        assert!(is_valid_solution(&s, &g));
    }

    #[test]
    fn test_invalid_overlap() {
        let g = five_cycle();
        let s = Solution::new([0, 2], [2, 4]);
        assert!(!is_valid_solution(&s, &g));
    }

    #[test]
    fn test_invalid_not_dominating() {
        let g = five_cycle();
        let s = Solution::new([0, 2], [1]);
        assert!(!is_valid_solution(&s, &g));
    }

    #[test]
    fn test_invalid_conflict_either_direction() {
        let g = five_cycle();
        // 0 in D1, 2 in D2 violates (0,2)
        assert!(!is_valid_solution(&Solution::new([0, 3], [2, 4]), &g));
        // 2 in D1, 0 in D2 violates it as well
        assert!(!is_valid_solution(&Solution::new([2, 4], [0, 3]), &g));
    }

    #[test]
    fn test_out_of_range_member_is_invalid() {
        let g = five_cycle();
        assert!(!is_valid_solution(&Solution::new([0, 2, 9], [1, 3]), &g));
    }

    #[test]
    fn test_out_of_range_set_does_not_dominate() {
        let g = Graph::new(3, &[(0, 1), (1, 2)], &[]).unwrap();
        assert!(!is_dominating_set(&[5], &g));
        assert!(!is_dominating_set(&[1, 3], &g));
        assert!(is_dominating_set(&[1], &g));
    }

    #[test]
    fn test_valid_solution_is_pure() {
        let g = five_cycle();
        let s = Solution::new([0, 2], [1, 3]);
        let first = is_valid_solution(&s, &g);
        let second = is_valid_solution(&s, &g);
        assert_eq!(first, second);
    }
}
