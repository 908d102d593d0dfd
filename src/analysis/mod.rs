//! Structural analysis that sits beside the traversal queries.
//!
//! # Features
//!
//! - Havel–Hakimi test for graphical degree sequences
//! - Degree-sum parity check and degree-sequence extraction from an
//!   adjacency mapping
//! - Whole-graph statistics (edge count, density, per-vertex degrees)
//!
//! # Example
//!
//! ```
//! use graphwalk::analysis::{extract_degree_sequence, is_graphical_sequence};
//! use graphwalk::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! graph.add_edge(3, 1);
//!
//! let degrees = extract_degree_sequence(&graph.to_adjacency());
//! assert_eq!(degrees, vec![2, 2, 2]);
//! assert!(is_graphical_sequence(&degrees));
//! ```

pub mod degree;
pub mod report;

pub use degree::{extract_degree_sequence, is_graphical_sequence, validate_consistency};
pub use report::{GraphKind, GraphReport, NeighborSummary, VertexSummary};
