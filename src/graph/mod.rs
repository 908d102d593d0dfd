//! Graph module: storage plus traversal queries.
//!
//! This module provides the [`Graph`] multigraph, built by repeated edge
//! insertion, and the read-only traversal and ordering queries that run
//! over it.
//!
//! # Example
//!
//! ```rust
//! use graphwalk::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//!
//! assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2, 3]);
//! assert_eq!(graph.bfs_distances(&1).unwrap()[&3], 2);
//! ```

mod error;
mod multigraph;
mod traversal;

pub use error::{GraphError, GraphResult};
pub use multigraph::{AdjacencyList, Graph, Vertex, DEFAULT_WEIGHT};
