//! Immutable graph with precomputed adjacency and conflict lists.

use std::collections::HashSet;

use crate::error::DdspcError;

/// Node identifier in `[0, num_nodes)`.
pub type NodeId = usize;

/// An undirected graph with a symmetric set of conflicting node pairs.
///
/// Adjacency and conflict lists are built once so that neighbor queries
/// are O(degree) and conflict queries are O(1).
#[derive(Debug, Clone)]
pub struct Graph {
    num_nodes: usize,
    edges: Vec<(NodeId, NodeId)>,
    conflicts: Vec<(NodeId, NodeId)>,
    /// adjacency[v]: sorted neighbors of v
    adjacency: Vec<Vec<NodeId>>,
    /// conflict_lists[v]: sorted nodes conflicting with v
    conflict_lists: Vec<Vec<NodeId>>,
    /// normalized (min, max) conflict pairs
    conflict_set: HashSet<(NodeId, NodeId)>,
}

impl Graph {
    /// Builds a graph, rejecting edges or conflicts with out-of-range ids.
    ///
    /// Self-loops and duplicate pairs are accepted and ignored. The graph is
    /// not checked for connectivity.
    pub fn new(
        num_nodes: usize,
        edges: &[(NodeId, NodeId)],
        conflicts: &[(NodeId, NodeId)],
    ) -> Result<Self, DdspcError> {
        let check = |v: NodeId| {
            if v < num_nodes {
                Ok(())
            } else {
                Err(DdspcError::NodeOutOfRange { node: v, num_nodes })
            }
        };
        for &(u, v) in edges.iter().chain(conflicts) {
            check(u)?;
            check(v)?;
        }

        let adjacency = Self::build_lists(num_nodes, edges);
        let conflict_lists = Self::build_lists(num_nodes, conflicts);
        let conflict_set = conflicts
            .iter()
            .filter(|(u, v)| u != v)
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();

        Ok(Self {
            num_nodes,
            edges: edges.to_vec(),
            conflicts: conflicts.to_vec(),
            adjacency,
            conflict_lists,
            conflict_set,
        })
    }

    /// builds sorted, deduplicated symmetric lists without self-loops
    fn build_lists(n: usize, pairs: &[(NodeId, NodeId)]) -> Vec<Vec<NodeId>> {
        let mut lists = vec![Vec::new(); n];
        for &(u, v) in pairs {
            if u != v {
                lists[u].push(v);
                lists[v].push(u);
            }
        }
        for l in &mut lists {
            l.sort_unstable();
            l.dedup();
        }
        lists
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Edge list as supplied.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Conflict list as supplied.
    pub fn conflicts(&self) -> &[(NodeId, NodeId)] {
        &self.conflicts
    }

    /// Lazily yields every node adjacent to `node`, in ascending order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency[node].iter().copied()
    }

    /// Whether `{a, b}` is a conflict pair (order does not matter).
    pub fn has_conflict(&self, a: NodeId, b: NodeId) -> bool {
        self.conflict_set.contains(&(a.min(b), a.max(b)))
    }

    /// Nodes conflicting with `node`, in ascending order.
    pub fn conflicts_of(&self, node: NodeId) -> &[NodeId] {
        &self.conflict_lists[node]
    }

    /// Whether every node can reach every other node through edges.
    pub fn is_connected(&self) -> bool {
        if self.num_nodes == 0 {
            return true;
        }
        let mut visited = vec![false; self.num_nodes];
        let mut stack = vec![0];
        let mut count = 0;
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            count += 1;
            stack.extend(self.neighbors(v).filter(|&u| !visited[u]));
        }
        count == self.num_nodes
    }
}
