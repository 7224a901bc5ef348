//! Error types for graph construction, configuration and persistence.
//!
//! Search outcomes are not errors: a failed construction is reported as
//! [`Construction::Infeasible`](crate::grasp::Construction) and a run with no
//! feasible solution returns `None`.

use thiserror::Error;

/// Errors raised outside the search loop.
#[derive(Debug, Error)]
pub enum DdspcError {
    /// An edge or conflict references a node outside `[0, num_nodes)`.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange {
        /// Offending node id.
        node: usize,
        /// Number of nodes in the graph.
        num_nodes: usize,
    },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A text instance could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The connected-graph generator ran out of attempts.
    #[error("could not generate a connected graph after {attempts} attempts")]
    GenerationFailed {
        /// Number of attempts made.
        attempts: usize,
    },

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DdspcError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_node_out_of_range() {
        let err = DdspcError::NodeOutOfRange {
            node: 7,
            num_nodes: 5,
        };
        assert_eq!(
            err.to_string(),
            "node 7 is out of range for a graph with 5 nodes"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DdspcError = io.into();
        assert!(matches!(err, DdspcError::Io(_)));
    }

    #[test]
    fn test_parse_helper() {
        let err = DdspcError::parse(3, "expected two integers");
        assert_eq!(err.to_string(), "parse error at line 3: expected two integers");
    }
}
