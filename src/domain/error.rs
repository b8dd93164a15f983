//! Error types for graph construction, queries and mutation.

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by [`DirectedGraph`](super::graph::DirectedGraph).
///
/// Both kinds are detected before any state is touched, so a failed call
/// leaves the graph exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Negative vertex count, or an edge entry without exactly two endpoints
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A vertex id outside `[0, vertex_count)`
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: i64, vertex_count: usize },
}

impl GraphError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn out_of_range(vertex: i64, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex,
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = GraphError::out_of_range(-3, 4);
        assert_eq!(
            err.to_string(),
            "vertex -3 is out of range for a graph with 4 vertices"
        );

        let err = GraphError::invalid_argument("negative vertex count: -1");
        assert!(err.to_string().contains("negative vertex count"));
    }
}
