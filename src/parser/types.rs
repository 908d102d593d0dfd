//! Shared types for edge-list parsing.

use std::fmt;

use crate::graph::DEFAULT_WEIGHT;

/// One parsed edge line: `from to [weight]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    /// Source vertex label
    pub from: String,
    /// Target vertex label
    pub to: String,
    /// Edge weight, 1.0 when the line omits it
    pub weight: f64,
}

impl EdgeRecord {
    /// Creates an edge record with the default weight.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::weighted(from, to, DEFAULT_WEIGHT)
    }

    /// Creates an edge record with an explicit weight.
    pub fn weighted(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.weight)
    }
}

/// How the records of an edge list are inserted into a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Each line inserts a symmetric edge
    #[default]
    Undirected,
    /// Each line inserts a one-way edge
    Directed,
}

impl EdgeMode {
    /// Picks the mode from a `directed` flag.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }
}
