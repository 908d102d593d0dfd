//! Traversal and ordering queries over a [`Graph`].
//!
//! Every query is read-only and allocates its own visited/queue/stack state.
//! Neighbors are always explored in adjacency-list insertion order, which
//! makes every result reproducible for a given insertion history.

use petgraph::graph::NodeIndex;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use tracing::{debug, trace};

use super::error::{GraphError, GraphResult};
use super::multigraph::{Graph, Vertex};

/// Vertex state for three-color cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet reached
    Unvisited,
    /// On the current traversal path
    InProgress,
    /// Fully explored
    Finished,
}

impl<V: Vertex> Graph<V> {
    /// Breadth-first discovery order starting at `source`.
    ///
    /// # Errors
    ///
    /// `GraphError::VertexNotFound` if `source` was never inserted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(1, 3);
    /// graph.add_edge(2, 4);
    ///
    /// assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2, 3, 4]);
    /// assert!(graph.bfs(&99).is_err());
    /// ```
    pub fn bfs(&self, source: &V) -> GraphResult<Vec<V>> {
        let start = self.index_of(source)?;
        trace!(?source, "bfs");

        let mut visited = vec![false; self.vertex_count()];
        let order = self.bfs_walk(start, &mut visited, |_, _| {});
        Ok(self.to_vertices(order))
    }

    /// Edge-count distance from `source` to every reachable vertex.
    ///
    /// Unreachable vertices are absent from the mapping.
    pub fn bfs_distances(&self, source: &V) -> GraphResult<HashMap<V, usize>> {
        let start = self.index_of(source)?;
        trace!(?source, "bfs_distances");

        let mut distances = vec![None; self.vertex_count()];
        distances[start.index()] = Some(0usize);

        let mut visited = vec![false; self.vertex_count()];
        self.bfs_walk(start, &mut visited, |from, to| {
            distances[to.index()] = distances[from.index()].map(|d| d + 1);
        });

        Ok(self
            .indices()
            .filter_map(|idx| distances[idx.index()].map(|d| (self.vertex(idx).clone(), d)))
            .collect())
    }

    /// Shortest path by edge count from `source` to `target`, both inclusive.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if `target` is unreachable. When `source == target` the path
    /// is the single vertex.
    ///
    /// # Errors
    ///
    /// `GraphError::VertexNotFound` if either endpoint was never inserted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(2, 3);
    /// graph.add_edge(4, 5);
    ///
    /// assert_eq!(graph.bfs_shortest_path(&1, &3).unwrap(), Some(vec![1, 2, 3]));
    /// assert_eq!(graph.bfs_shortest_path(&1, &5).unwrap(), None);
    /// ```
    pub fn bfs_shortest_path(&self, source: &V, target: &V) -> GraphResult<Option<Vec<V>>> {
        let start = self.index_of(source)?;
        let goal = self.index_of(target)?;
        trace!(?source, ?target, "bfs_shortest_path");

        let mut predecessors = HashMap::new();
        let mut visited = vec![false; self.vertex_count()];
        self.bfs_walk(start, &mut visited, |from, to| {
            predecessors.insert(to, from);
        });

        if !visited[goal.index()] {
            return Ok(None);
        }

        // The source is the only discovered vertex without a predecessor.
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&previous) = predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        Ok(Some(self.to_vertices(path)))
    }

    /// Depth-first discovery order in the recursive formulation.
    ///
    /// The call stack is simulated with explicit frames, each holding the
    /// remaining neighbors of one vertex on the active path, so deep graphs
    /// cannot overflow the thread stack.
    pub fn dfs_recursive(&self, source: &V) -> GraphResult<Vec<V>> {
        let start = self.index_of(source)?;
        trace!(?source, "dfs_recursive");

        let mut visited = vec![false; self.vertex_count()];
        visited[start.index()] = true;
        let mut order = vec![start];
        let mut frames = vec![self.successors(start).into_iter()];

        while let Some(pending) = frames.last_mut() {
            match pending.next() {
                Some(next) if !visited[next.index()] => {
                    visited[next.index()] = true;
                    order.push(next);
                    frames.push(self.successors(next).into_iter());
                }
                Some(_) => {}
                None => {
                    frames.pop();
                }
            }
        }

        Ok(self.to_vertices(order))
    }

    /// Depth-first discovery order using a vertex stack.
    ///
    /// Neighbors are pushed in reverse insertion order so they pop in
    /// forward order; the result matches [`Graph::dfs_recursive`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(1, 3);
    /// graph.add_edge(2, 4);
    ///
    /// let iterative = graph.dfs_iterative(&1).unwrap();
    /// assert_eq!(iterative, vec![1, 2, 4, 3]);
    /// assert_eq!(iterative, graph.dfs_recursive(&1).unwrap());
    /// ```
    pub fn dfs_iterative(&self, source: &V) -> GraphResult<Vec<V>> {
        let start = self.index_of(source)?;
        trace!(?source, "dfs_iterative");

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            order.push(current);

            for next in self.successors(current).into_iter().rev() {
                if !visited[next.index()] {
                    stack.push(next);
                }
            }
        }

        Ok(self.to_vertices(order))
    }

    /// Checks whether any directed cycle exists anywhere in the graph.
    ///
    /// Every vertex is used as a root once, so disconnected parts are covered.
    /// A cycle is an arc reaching a vertex still on the active path, which
    /// includes self-loops. Undirected edges are stored as two opposing arcs
    /// and therefore also count as cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_directed_edge(1, 2);
    /// graph.add_directed_edge(2, 3);
    /// assert!(!graph.has_cycle_directed());
    ///
    /// graph.add_directed_edge(3, 1);
    /// assert!(graph.has_cycle_directed());
    /// ```
    pub fn has_cycle_directed(&self) -> bool {
        let mut color = vec![Color::Unvisited; self.vertex_count()];

        for root in self.indices() {
            if color[root.index()] != Color::Unvisited {
                continue;
            }

            color[root.index()] = Color::InProgress;
            let mut frames = vec![(root, self.successors(root).into_iter())];

            while let Some((node, pending)) = frames.last_mut() {
                let node = *node;
                match pending.next() {
                    Some(next) => match color[next.index()] {
                        Color::InProgress => {
                            debug!(from = ?self.vertex(node), to = ?self.vertex(next), "back edge");
                            return true;
                        }
                        Color::Unvisited => {
                            color[next.index()] = Color::InProgress;
                            frames.push((next, self.successors(next).into_iter()));
                        }
                        Color::Finished => {}
                    },
                    None => {
                        color[node.index()] = Color::Finished;
                        frames.pop();
                    }
                }
            }
        }

        false
    }

    /// Topological order by in-degree elimination.
    ///
    /// Among vertices that become ready at the same time, the earliest
    /// inserted is emitted first.
    ///
    /// # Errors
    ///
    /// `GraphError::CycleDetected` if vertices remain once no zero-in-degree
    /// vertex is left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::{Graph, GraphError};
    ///
    /// let mut dag = Graph::new();
    /// dag.add_directed_edge(1, 2);
    /// dag.add_directed_edge(1, 3);
    /// dag.add_directed_edge(2, 4);
    /// dag.add_directed_edge(3, 4);
    /// assert_eq!(dag.topological_sort().unwrap(), vec![1, 2, 3, 4]);
    ///
    /// dag.add_directed_edge(4, 1);
    /// assert_eq!(dag.topological_sort(), Err(GraphError::CycleDetected));
    /// ```
    pub fn topological_sort(&self) -> GraphResult<Vec<V>> {
        let mut in_degree = vec![0usize; self.vertex_count()];
        for idx in self.indices() {
            for next in self.successors(idx) {
                in_degree[next.index()] += 1;
            }
        }

        let mut ready: BinaryHeap<Reverse<NodeIndex>> = self
            .indices()
            .filter(|idx| in_degree[idx.index()] == 0)
            .map(Reverse)
            .collect();

        let mut order = Vec::with_capacity(self.vertex_count());
        while let Some(Reverse(idx)) = ready.pop() {
            order.push(idx);
            for next in self.successors(idx) {
                in_degree[next.index()] -= 1;
                if in_degree[next.index()] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        if order.len() < self.vertex_count() {
            debug!(
                eliminated = order.len(),
                vertices = self.vertex_count(),
                "topological sort stalled on a cycle"
            );
            return Err(GraphError::CycleDetected);
        }

        Ok(self.to_vertices(order))
    }

    /// Partitions the vertices into connected components.
    ///
    /// Seeds are taken in vertex insertion order; each component lists its
    /// vertices in BFS discovery order from its seed.
    ///
    /// # Errors
    ///
    /// `GraphError::DirectedEdges` if the graph holds any directed edge.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(1, 2);
    /// graph.add_edge(3, 4);
    /// graph.add_edge(5, 6);
    ///
    /// let components = graph.find_connected_components().unwrap();
    /// assert_eq!(components, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    /// ```
    pub fn find_connected_components(&self) -> GraphResult<Vec<Vec<V>>> {
        if self.has_directed_edges() {
            return Err(GraphError::DirectedEdges);
        }

        let mut visited = vec![false; self.vertex_count()];
        let mut components = Vec::new();

        for seed in self.indices() {
            if visited[seed.index()] {
                continue;
            }
            let members = self.bfs_walk(seed, &mut visited, |_, _| {});
            components.push(self.to_vertices(members));
        }

        Ok(components)
    }

    /// Breadth-first walk from `start`, skipping anything already `visited`.
    ///
    /// Calls `on_discover(parent, child)` the first time each child is seen
    /// and returns the discovery order, `start` first.
    fn bfs_walk<F>(
        &self,
        start: NodeIndex,
        visited: &mut [bool],
        mut on_discover: F,
    ) -> Vec<NodeIndex>
    where
        F: FnMut(NodeIndex, NodeIndex),
    {
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for next in self.successors(current) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    on_discover(current, next);
                    queue.push_back(next);
                }
            }
        }

        order
    }

    fn to_vertices(&self, indices: Vec<NodeIndex>) -> Vec<V> {
        indices
            .into_iter()
            .map(|idx| self.vertex(idx).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Graph<u32> {
        // 1-2, 1-3, 2-4, 2-5, 3-6, 5-7
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(2, 5);
        graph.add_edge(3, 6);
        graph.add_edge(5, 7);
        graph
    }

    fn diamond() -> Graph<u32> {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        graph.add_edge(4, 5);
        graph
    }

    #[test]
    fn test_bfs_insertion_order_tie_break() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);

        assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs_tree_order() {
        assert_eq!(tree().bfs(&1).unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_bfs_missing_vertex() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);

        assert_eq!(
            graph.bfs(&99),
            Err(GraphError::VertexNotFound("99".to_string()))
        );
    }

    #[test]
    fn test_bfs_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(matches!(graph.bfs(&1), Err(GraphError::VertexNotFound(_))));
        assert!(matches!(graph.bfs_distances(&1), Err(GraphError::VertexNotFound(_))));
        assert!(matches!(graph.dfs_recursive(&1), Err(GraphError::VertexNotFound(_))));
        assert!(matches!(graph.dfs_iterative(&1), Err(GraphError::VertexNotFound(_))));
    }

    #[test]
    fn test_self_loop_single_vertex() {
        let mut graph = Graph::new();
        graph.add_edge(1, 1);

        assert_eq!(graph.bfs(&1).unwrap(), vec![1]);
        assert_eq!(graph.dfs_recursive(&1).unwrap(), vec![1]);
        assert_eq!(graph.dfs_iterative(&1).unwrap(), vec![1]);
    }

    #[test]
    fn test_bfs_disconnected_only_reachable() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);

        assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_bfs_distances() {
        let distances = tree().bfs_distances(&1).unwrap();

        assert_eq!(distances[&1], 0);
        assert_eq!(distances[&2], 1);
        assert_eq!(distances[&3], 1);
        assert_eq!(distances[&5], 2);
        assert_eq!(distances[&7], 3);
        assert_eq!(distances.len(), 7);
    }

    #[test]
    fn test_bfs_distances_omit_unreachable() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);

        let distances = graph.bfs_distances(&1).unwrap();
        assert_eq!(distances.len(), 2);
        assert!(!distances.contains_key(&3));
    }

    #[test]
    fn test_shortest_path_diamond() {
        let path = diamond().bfs_shortest_path(&1, &5).unwrap().unwrap();

        assert_eq!(path, vec![1, 2, 4, 5]);
        assert_eq!(path.len() - 1, 3);
    }

    #[test]
    fn test_shortest_path_same_vertex() {
        assert_eq!(tree().bfs_shortest_path(&3, &3).unwrap(), Some(vec![3]));
    }

    #[test]
    fn test_shortest_path_missing_target() {
        assert_eq!(
            tree().bfs_shortest_path(&1, &42),
            Err(GraphError::VertexNotFound("42".to_string()))
        );
    }

    #[test]
    fn test_shortest_path_respects_direction() {
        let mut graph = Graph::new();
        graph.add_directed_edge(1, 2);

        assert_eq!(graph.bfs_shortest_path(&2, &1).unwrap(), None);
        assert_eq!(graph.bfs_shortest_path(&1, &2).unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_dfs_tree_order() {
        let graph = tree();
        let expected = vec![1, 2, 4, 5, 7, 3, 6];

        assert_eq!(graph.dfs_recursive(&1).unwrap(), expected);
        assert_eq!(graph.dfs_iterative(&1).unwrap(), expected);
    }

    #[test]
    fn test_dfs_orders_agree_on_cycle_with_parallel_edges() {
        // 1-2-3-4-1 square plus a chord and a parallel edge
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph.add_edge(4, 1);
        graph.add_edge(1, 3);
        graph.add_edge(1, 2);

        let recursive = graph.dfs_recursive(&1).unwrap();
        assert_eq!(recursive, vec![1, 2, 3, 4]);
        assert_eq!(graph.dfs_iterative(&1).unwrap(), recursive);
    }

    #[test]
    fn test_dfs_deep_chain_does_not_overflow() {
        let mut graph = Graph::new();
        for i in 0..100_000u32 {
            graph.add_directed_edge(i, i + 1);
        }

        let order = graph.dfs_recursive(&0).unwrap();
        assert_eq!(order.len(), 100_001);
        assert_eq!(order.last(), Some(&100_000));
        assert!(!graph.has_cycle_directed());
    }

    #[test]
    fn test_has_cycle_directed() {
        let mut graph = Graph::new();
        graph.add_directed_edge(1, 2);
        graph.add_directed_edge(2, 3);
        graph.add_directed_edge(3, 1);
        graph.add_directed_edge(3, 4);

        assert!(graph.has_cycle_directed());
        assert_eq!(graph.topological_sort(), Err(GraphError::CycleDetected));
    }

    #[test]
    fn test_directed_self_loop_is_cycle() {
        let mut graph = Graph::new();
        graph.add_directed_edge(1, 1);

        assert!(graph.has_cycle_directed());
        assert!(graph.topological_sort().is_err());
    }

    #[test]
    fn test_cycle_in_second_component() {
        let mut graph = Graph::new();
        graph.add_directed_edge(1, 2);
        graph.add_directed_edge(3, 4);
        graph.add_directed_edge(4, 3);

        assert!(graph.has_cycle_directed());
    }

    #[test]
    fn test_converging_paths_are_not_cycles() {
        let mut graph = Graph::new();
        graph.add_directed_edge(1, 2);
        graph.add_directed_edge(1, 3);
        graph.add_directed_edge(2, 4);
        graph.add_directed_edge(3, 4);

        assert!(!graph.has_cycle_directed());
        let order = graph.topological_sort().unwrap();
        assert_eq!(order.first(), Some(&1));
        assert_eq!(order.last(), Some(&4));
    }

    #[test]
    fn test_topological_sort_insertion_tie_break() {
        let mut graph = Graph::new();
        graph.add_directed_edge("shirt", "tie");
        graph.add_directed_edge("socks", "shoes");
        graph.add_directed_edge("pants", "shoes");
        graph.add_directed_edge("tie", "jacket");

        assert_eq!(
            graph.topological_sort().unwrap(),
            vec!["shirt", "tie", "socks", "pants", "shoes", "jacket"]
        );
    }

    #[test]
    fn test_topological_sort_parallel_edges() {
        let mut graph = Graph::new();
        graph.add_directed_edge(1, 2);
        graph.add_directed_edge(1, 2);

        assert_eq!(graph.topological_sort().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_topological_sort_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert_eq!(graph.topological_sort().unwrap(), Vec::<u32>::new());
        assert!(!graph.has_cycle_directed());
    }

    #[test]
    fn test_connected_components() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(4, 5);
        graph.add_edge(6, 7);
        graph.add_edge(7, 8);
        graph.add_edge(9, 9);

        let components = graph.find_connected_components().unwrap();
        assert_eq!(
            components,
            vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8], vec![9]]
        );
    }

    #[test]
    fn test_connected_components_reject_directed() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_directed_edge(2, 3);

        assert_eq!(
            graph.find_connected_components(),
            Err(GraphError::DirectedEdges)
        );
    }
}
