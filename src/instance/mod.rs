//! Problem instances: the plain input record, generators and persistence.

mod generator;
mod io;

pub use generator::{GeneratorConfig, InstanceGenerator};
pub use io::{from_text, load_text, save_text, to_text};
#[cfg(feature = "serde")]
pub use io::{load_json, save_json};

use crate::ddspc::{Graph, NodeId};
use crate::error::DdspcError;

/// A DDSPC instance as exchanged with generators, loaders and batch runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DdspcInput {
    /// Number of nodes; ids are `0..num_nodes`.
    pub num_nodes: usize,
    /// Undirected edges.
    pub edges: Vec<(NodeId, NodeId)>,
    /// Conflicting node pairs (unordered).
    pub conflicts: Vec<(NodeId, NodeId)>,
    /// Optional instance name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub instance_name: Option<String>,
}

impl DdspcInput {
    /// Builds the searchable graph, checking node ids.
    pub fn to_graph(&self) -> Result<Graph, DdspcError> {
        Graph::new(self.num_nodes, &self.edges, &self.conflicts)
    }

    /// Whether the edges connect every node.
    pub fn is_connected(&self) -> Result<bool, DdspcError> {
        Ok(self.to_graph()?.is_connected())
    }

    /// 5-cycle with conflicts (0,2) and (1,3).
    pub fn example_01() -> Self {
        Self {
            num_nodes: 5,
            edges: vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
            conflicts: vec![(0, 2), (1, 3)],
            instance_name: Some("example_01".into()),
        }
    }

    /// 10-cycle with the five chords `i - i+5`, and five conflict pairs.
    pub fn example_02() -> Self {
        Self {
            num_nodes: 10,
            edges: vec![
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 8),
                (8, 9),
                (9, 0),
                (0, 5),
                (1, 6),
                (2, 7),
                (3, 8),
                (4, 9),
            ],
            conflicts: vec![(0, 2), (1, 3), (4, 6), (5, 7), (8, 0)],
            instance_name: Some("example_02".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_build_connected_graphs() {
        for input in [DdspcInput::example_01(), DdspcInput::example_02()] {
            let g = input.to_graph().unwrap();
            assert_eq!(g.num_nodes(), input.num_nodes);
            assert!(g.is_connected());
        }
    }

    #[test]
    fn test_bad_node_id() {
        let input = DdspcInput {
            num_nodes: 2,
            edges: vec![(0, 2)],
            ..DdspcInput::default()
        };
        assert!(input.to_graph().is_err());
        assert!(input.is_connected().is_err());
    }
}
