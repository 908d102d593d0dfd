//! Parser module for graphwalk.
//!
//! Loads plain-text edge lists into a [`Graph`](crate::graph::Graph) keyed
//! by string labels.
//!
//! # Format
//!
//! ```text
//! # comment
//! A B 2.5
//! B C
//! ```
//!
//! One edge per line, fields separated by spaces or tabs; the optional third
//! field is the weight (default 1.0).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use graphwalk::parser::{parse_file, EdgeMode};
//!
//! let graph = parse_file(Path::new("edges_directed.txt"), EdgeMode::Directed).unwrap();
//! println!("Loaded {} vertices", graph.vertex_count());
//! ```

pub mod edge_list;
pub mod types;

// Re-export commonly used types for convenience
pub use edge_list::{build_graph, parse_file, parse_records, parse_str, ParseError, ParseResult};

pub use types::{EdgeMode, EdgeRecord};
