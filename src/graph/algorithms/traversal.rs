//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal over any graph
//! implementing [`Successors`]. Both traversals are iterative: they keep an explicit
//! stack or queue plus a visited set, so very deep graphs cannot overflow the call stack.
//!
//! # Algorithms
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`reachable_count`] - Number of distinct vertices reachable from a start vertex

use std::collections::{HashSet, VecDeque};

use crate::graph::{Successors, VertexId};

/// Depth-first search iterator over graph vertices.
///
/// Visits each vertex reachable from the start vertex exactly once, in pre-order, with
/// successors explored in edge insertion order.
///
/// # Examples
///
/// ```rust
/// use roadgraph::{algorithms::dfs, Digraph, VertexId};
///
/// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
/// let mut graph: Digraph<char, ()> = Digraph::new();
/// graph.add_vertex(a, 'A')?;
/// graph.add_vertex(b, 'B')?;
/// graph.add_vertex(c, 'C')?;
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let visited: Vec<VertexId> = dfs(&graph, a).collect();
/// assert_eq!(visited, vec![a, b, c]);
/// # Ok::<(), roadgraph::Error>(())
/// ```
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<VertexId>,
    visited: HashSet<VertexId>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();
        if graph.contains_vertex(start) {
            visited.insert(start);
            stack.push(start);
        }

        DfsIterator {
            graph,
            stack,
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;

        // Push unvisited successors in reverse so they are visited in insertion order
        let successors: Vec<VertexId> = self.graph.successors(vertex).collect();
        for &succ in successors.iter().rev() {
            if self.visited.insert(succ) {
                self.stack.push(succ);
            }
        }

        Some(vertex)
    }
}

/// Returns a depth-first search iterator starting from the given vertex.
///
/// Vertices not reachable from `start` are not visited. If `start` is not in the graph the
/// iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and stack
pub fn dfs<G: Successors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph vertices.
///
/// Visits every vertex at distance d (in edges) from the start before any vertex at
/// distance d+1.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<VertexId>,
    visited: HashSet<VertexId>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        if graph.contains_vertex(start) {
            visited.insert(start);
            queue.push_back(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for succ in self.graph.successors(vertex) {
            if self.visited.insert(succ) {
                self.queue.push_back(succ);
            }
        }

        Some(vertex)
    }
}

/// Returns a breadth-first search iterator starting from the given vertex.
///
/// If `start` is not in the graph the iterator is empty.
pub fn bfs<G: Successors>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Counts the distinct vertices reachable from `start` by following outgoing edges,
/// including `start` itself.
///
/// Returns 0 if `start` is not in the graph.
pub fn reachable_count<G: Successors>(graph: &G, start: VertexId) -> usize {
    dfs(graph, start).count()
}
