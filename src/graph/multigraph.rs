//! Graph storage using petgraph.
//!
//! Vertices are created implicitly the first time an edge names them. The
//! graph is append-only: there is no removal and no in-place edit of an
//! existing edge, so parallel insertions produce a multigraph.

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::error::{GraphError, GraphResult};

/// Weight used by the unweighted insertion methods.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Identity of a vertex.
///
/// Blanket-implemented for any cloneable, hashable, debuggable type, so both
/// integer ids and string labels work out of the box.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Ordered adjacency mapping: vertex -> ordered `(neighbor, weight)` list.
///
/// Keys appear in first-insertion order and each list keeps arc insertion
/// order.
pub type AdjacencyList<V> = IndexMap<V, Vec<(V, f64)>>;

/// An append-only multigraph supporting both directed and undirected edges.
///
/// Internally every edge is stored as one or two directed arcs in a
/// petgraph `DiGraph`. An undirected edge `(u, v)` stores `u -> v` and
/// `v -> u`; an undirected self-loop stores a single `v -> v` arc.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(1, 3);
/// graph.add_directed_edge(3, 4);
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.out_degree(&1), Some(2));
/// assert_eq!(graph.out_degree(&4), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    /// The underlying arc storage
    graph: DiGraph<V, f64>,
    /// Maps vertex identities to their node indices for O(1) lookup
    node_indices: HashMap<V, NodeIndex>,
    /// Number of directed (one-way) insertions performed
    directed_edges: usize,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            directed_edges: 0,
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertices` - Expected number of vertices
    /// * `arcs` - Expected number of stored arcs (two per undirected edge)
    pub fn with_capacity(vertices: usize, arcs: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(vertices, arcs),
            node_indices: HashMap::with_capacity(vertices),
            directed_edges: 0,
        }
    }

    /// Returns the node index for `vertex`, creating the vertex if absent.
    fn ensure_vertex(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&vertex) {
            return idx;
        }

        let idx = self.graph.add_node(vertex.clone());
        self.node_indices.insert(vertex, idx);
        idx
    }

    /// Adds an undirected edge of weight 1.0.
    ///
    /// Both endpoints are created if absent. Calling this twice for the same
    /// pair creates a parallel edge.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("a", "b");
    /// graph.add_edge("a", "b");
    ///
    /// assert_eq!(graph.out_degree(&"a"), Some(2));
    /// assert_eq!(graph.out_degree(&"b"), Some(2));
    /// ```
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Adds an undirected edge with an explicit weight.
    ///
    /// Appends `(v, weight)` to `u`'s list, then `(u, weight)` to `v`'s list.
    /// A self-loop `(v, v)` appends a single entry.
    pub fn add_weighted_edge(&mut self, u: V, v: V, weight: f64) {
        let a = self.ensure_vertex(u);
        let b = self.ensure_vertex(v);

        self.graph.add_edge(a, b, weight);
        if a != b {
            self.graph.add_edge(b, a, weight);
        }
    }

    /// Adds a directed edge `u -> v` of weight 1.0.
    pub fn add_directed_edge(&mut self, u: V, v: V) {
        self.add_weighted_directed_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Adds a directed edge `u -> v` with an explicit weight.
    ///
    /// Only `u`'s adjacency list grows, but `v` is still materialized as a
    /// vertex.
    pub fn add_weighted_directed_edge(&mut self, u: V, v: V, weight: f64) {
        let a = self.ensure_vertex(u);
        let b = self.ensure_vertex(v);

        self.graph.add_edge(a, b, weight);
        self.directed_edges += 1;
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of stored arcs (sum of adjacency-list lengths).
    ///
    /// An undirected edge counts twice unless it is a self-loop.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a vertex exists in the graph.
    pub fn contains(&self, vertex: &V) -> bool {
        self.node_indices.contains_key(vertex)
    }

    /// Returns `true` once any directed insertion has been performed.
    pub fn has_directed_edges(&self) -> bool {
        self.directed_edges > 0
    }

    /// Returns all vertices in first-insertion order.
    pub fn vertices(&self) -> Vec<&V> {
        self.graph.node_weights().collect()
    }

    /// Returns the ordered adjacency list of `vertex`.
    ///
    /// # Returns
    ///
    /// `Some` with `(neighbor, weight)` pairs in insertion order, or `None`
    /// if the vertex does not exist.
    pub fn neighbors(&self, vertex: &V) -> Option<Vec<(&V, f64)>> {
        let &idx = self.node_indices.get(vertex)?;
        Some(
            self.arcs(idx)
                .into_iter()
                .map(|(target, weight)| (&self.graph[target], weight))
                .collect(),
        )
    }

    /// Returns the length of `vertex`'s adjacency list.
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        let &idx = self.node_indices.get(vertex)?;
        Some(self.graph.edges_directed(idx, Direction::Outgoing).count())
    }

    /// Returns the number of adjacency entries pointing at `vertex`.
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        let &idx = self.node_indices.get(vertex)?;
        Some(self.graph.edges_directed(idx, Direction::Incoming).count())
    }

    /// Returns the number of arcs whose source and target coincide.
    ///
    /// An undirected self-loop is stored as one arc, so it counts once.
    pub fn self_loop_count(&self) -> usize {
        self.graph
            .edge_references()
            .filter(|edge| edge.source() == edge.target())
            .count()
    }

    /// Exports the graph as an ordered adjacency mapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_weighted_edge("a", "b", 2.5);
    ///
    /// let adjacency = graph.to_adjacency();
    /// assert_eq!(adjacency["a"], vec![("b", 2.5)]);
    /// assert_eq!(adjacency["b"], vec![("a", 2.5)]);
    /// ```
    pub fn to_adjacency(&self) -> AdjacencyList<V> {
        self.graph
            .node_indices()
            .map(|idx| {
                let list = self
                    .arcs(idx)
                    .into_iter()
                    .map(|(target, weight)| (self.graph[target].clone(), weight))
                    .collect();
                (self.graph[idx].clone(), list)
            })
            .collect()
    }

    /// Looks up a vertex, failing with `VertexNotFound` if it was never inserted.
    pub(crate) fn index_of(&self, vertex: &V) -> GraphResult<NodeIndex> {
        self.node_indices
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", vertex)))
    }

    /// Outgoing arcs of `idx` in insertion order.
    ///
    /// petgraph walks a node's edge list newest-first; edge indices grow
    /// monotonically because nothing is ever removed, so sorting by index
    /// restores insertion order.
    pub(crate) fn arcs(&self, idx: NodeIndex) -> Vec<(NodeIndex, f64)> {
        let mut arcs: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target(), *edge.weight()))
            .collect();
        arcs.sort_by_key(|&(id, _, _)| id);
        arcs.into_iter()
            .map(|(_, target, weight)| (target, weight))
            .collect()
    }

    /// Successor indices of `idx` in insertion order.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.arcs(idx).into_iter().map(|(target, _)| target).collect()
    }

    /// All node indices in first-insertion order.
    pub(crate) fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Resolves a node index back to its vertex.
    pub(crate) fn vertex(&self, idx: NodeIndex) -> &V {
        &self.graph[idx]
    }
}
