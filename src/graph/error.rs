//! Error types for graph queries.

/// Errors returned by graph traversal and ordering queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested source or target vertex was never inserted.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// Topological ordering was requested on a graph with a directed cycle.
    #[error("Graph contains a directed cycle; no topological order exists")]
    CycleDetected,

    /// An undirected-only query was run on a graph holding directed edges.
    #[error("Graph contains directed edges; connected components require undirected insertion")]
    DirectedEdges,
}

/// Result type alias for graph queries.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GraphError::VertexNotFound("99".to_string()).to_string(),
            "Vertex not found: 99"
        );
        assert!(GraphError::CycleDetected.to_string().contains("cycle"));
        assert!(GraphError::DirectedEdges.to_string().contains("directed"));
    }
}
