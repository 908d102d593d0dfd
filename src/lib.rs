//! graphwalk - graph construction, traversal and degree-sequence analysis
//!
//! This crate provides an append-only multigraph with breadth-first and
//! depth-first traversal, shortest paths by edge count, directed-cycle
//! detection, topological ordering and connected components, plus a
//! Havel–Hakimi degree-sequence validator and an edge-list loader.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
