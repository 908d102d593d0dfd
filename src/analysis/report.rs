//! Structural summary of a loaded graph.
//!
//! Collects the per-vertex degree details and whole-graph statistics that
//! the exporters render.

use serde::Serialize;
use std::fmt::Display;

use super::degree::{extract_degree_sequence, is_graphical_sequence, validate_consistency};
use crate::graph::{Graph, Vertex};

/// Whether a graph was built from directed or undirected insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Every edge was inserted symmetrically
    #[default]
    Undirected,
    /// At least one one-way edge was inserted
    Directed,
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undirected => write!(f, "undirected"),
            Self::Directed => write!(f, "directed"),
        }
    }
}

/// One entry of a vertex's adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborSummary {
    pub vertex: String,
    pub weight: f64,
}

/// Degree details for a single vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexSummary {
    /// Vertex label
    pub vertex: String,
    /// Length of the vertex's adjacency list
    pub out_degree: usize,
    /// Number of adjacency entries pointing at the vertex
    pub in_degree: usize,
    /// Adjacency list in insertion order
    pub neighbors: Vec<NeighborSummary>,
}

/// Whole-graph statistics plus per-vertex details.
///
/// # Example
///
/// ```rust
/// use graphwalk::analysis::{GraphKind, GraphReport};
/// use graphwalk::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
///
/// let report = GraphReport::from_graph(&graph);
/// assert_eq!(report.kind, GraphKind::Undirected);
/// assert_eq!(report.vertex_count, 3);
/// assert_eq!(report.edge_count, 2);
/// assert_eq!(report.degree_sequence, vec![2, 1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    pub kind: GraphKind,
    pub vertex_count: usize,
    /// Undirected edges are counted once
    pub edge_count: usize,
    /// `None` when fewer than two vertices exist
    pub density: Option<f64>,
    /// Sorted by vertex
    pub vertices: Vec<VertexSummary>,
    pub degree_sequence: Vec<usize>,
    pub graphical: bool,
    pub consistent: bool,
}

impl GraphReport {
    /// Builds a report, classifying the graph by whether it holds any
    /// directed edge.
    pub fn from_graph<V>(graph: &Graph<V>) -> Self
    where
        V: Vertex + Ord + Display,
    {
        let kind = if graph.has_directed_edges() {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };

        let n = graph.vertex_count();
        let arcs = graph.edge_count();
        let loops = graph.self_loop_count();
        let (edge_count, max_edges) = match kind {
            // Every undirected edge is two arcs, except a self-loop which is one
            GraphKind::Undirected => ((arcs - loops) / 2 + loops, n * n.saturating_sub(1) / 2),
            GraphKind::Directed => (arcs, n * n.saturating_sub(1)),
        };
        let density = (max_edges > 0).then(|| edge_count as f64 / max_edges as f64);

        let mut sorted = graph.vertices();
        sorted.sort();

        let vertices = sorted
            .into_iter()
            .map(|vertex| VertexSummary {
                vertex: vertex.to_string(),
                out_degree: graph.out_degree(vertex).unwrap_or(0),
                in_degree: graph.in_degree(vertex).unwrap_or(0),
                neighbors: graph
                    .neighbors(vertex)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(neighbor, weight)| NeighborSummary {
                        vertex: neighbor.to_string(),
                        weight,
                    })
                    .collect(),
            })
            .collect();

        let adjacency = graph.to_adjacency();
        let degree_sequence = extract_degree_sequence(&adjacency);

        Self {
            kind,
            vertex_count: n,
            edge_count,
            density,
            vertices,
            graphical: is_graphical_sequence(&degree_sequence),
            consistent: validate_consistency(&adjacency),
            degree_sequence,
        }
    }

    /// Checks if the report describes an empty graph.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}
