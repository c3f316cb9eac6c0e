//! Core directed graph implementation.
//!
//! This module provides [`Digraph`], a mutable adjacency-list graph keyed by caller-assigned
//! [`VertexId`]s. Each vertex record owns its payload and an insertion-ordered list of
//! outgoing edge records; edges are addressed by their ordered `(from, to)` pair, of which at
//! most one may exist.
//!
//! Every mutating operation validates all of its preconditions before changing anything, so
//! a returned [`Error`] always leaves the graph untouched.

use std::collections::BTreeMap;

use crate::{
    graph::{
        algorithms::{self, ShortestPathTree},
        traits::{GraphBase, Successors},
        vertex::VertexId,
    },
    Error, Result,
};

/// Internal storage for one outgoing edge.
#[derive(Debug, Clone, PartialEq)]
struct EdgeData<E> {
    /// Target vertex of the edge
    target: VertexId,
    /// User-provided edge payload
    data: E,
}

/// Internal storage for one vertex and its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
struct VertexData<V, E> {
    /// User-provided vertex payload
    data: V,
    /// Outgoing edges in insertion order
    outgoing: Vec<EdgeData<E>>,
}

impl<V, E> VertexData<V, E> {
    fn edge_position(&self, target: VertexId) -> Option<usize> {
        self.outgoing.iter().position(|edge| edge.target == target)
    }
}

/// A directed graph with caller-assigned vertex identifiers and typed payloads.
///
/// `Digraph` supports:
///
/// - Generic vertex payloads (`V`) and edge payloads (`E`), never interpreted by the graph
/// - Sparse, arbitrary `i64` vertex identifiers (see [`VertexId`])
/// - Insertion and removal of vertices and edges, with cascading removal of incident edges
/// - Strong-connectivity checks and Dijkstra single-source shortest paths
///
/// # Memory Layout
///
/// Vertices live in a [`BTreeMap`] keyed by identifier, so enumeration is always in
/// ascending identifier order. Each vertex owns a `Vec` of `(target, payload)` records for
/// its outgoing edges. Incoming edges are not indexed; removing a vertex therefore scans
/// every other vertex's outgoing list.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` / `vertex_info` | O(log V) |
/// | `add_edge` / `remove_edge` / `edge_info` | O(log V + out-degree) |
/// | `remove_vertex` | O(V + E) |
/// | `is_strongly_connected` | O(V + E) |
/// | `find_shortest_paths` | O((V + E) log V) |
///
/// # Ownership
///
/// The graph exclusively owns every vertex and edge record. [`Clone`] produces a fully
/// independent deep copy, and [`take`](Self::take) moves the contents out, leaving the
/// source empty. Payload accessors return clones rather than references into the graph.
///
/// # Thread Safety
///
/// `Digraph<V, E>` is [`Send`] and [`Sync`] when both `V` and `E` are. Queries take `&self`
/// and never modify the graph; concurrent mutation must be synchronized by the caller.
///
/// # Examples
///
/// ```rust
/// use roadgraph::{Digraph, VertexId};
///
/// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
///
/// let mut graph: Digraph<&str, f64> = Digraph::new();
/// graph.add_vertex(a, "A")?;
/// graph.add_vertex(b, "B")?;
/// graph.add_vertex(c, "C")?;
///
/// graph.add_edge(a, b, 1.0)?;
/// graph.add_edge(b, c, 1.0)?;
/// assert!(!graph.is_strongly_connected());
///
/// graph.add_edge(c, a, 1.0)?;
/// assert!(graph.is_strongly_connected());
///
/// let predecessors = graph.find_shortest_paths(a, |w| *w)?;
/// assert_eq!(predecessors[&c], b);
/// # Ok::<(), roadgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Digraph<V, E> {
    /// Vertex records keyed by identifier
    vertices: BTreeMap<VertexId, VertexData<V, E>>,
    /// Total number of edges across all vertices
    edge_count: usize,
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Digraph<V, E> {
    /// Creates a new, empty directed graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::Digraph;
    ///
    /// let graph: Digraph<String, ()> = Digraph::new();
    /// assert!(graph.is_empty());
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Digraph {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Adds a vertex with the given identifier and payload.
    ///
    /// The new vertex starts without outgoing edges.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The caller-chosen identifier for the vertex
    /// * `data` - The payload to associate with the vertex
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertex`] if a vertex with this identifier already exists.
    /// The existing vertex and its payload are left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::{Digraph, Error, VertexId};
    ///
    /// let mut graph: Digraph<&str, ()> = Digraph::new();
    /// graph.add_vertex(VertexId::new(4), "Tustin")?;
    ///
    /// let result = graph.add_vertex(VertexId::new(4), "Orange");
    /// assert!(matches!(result, Err(Error::DuplicateVertex(_))));
    /// assert_eq!(graph.vertex_info(VertexId::new(4))?, "Tustin");
    /// # Ok::<(), roadgraph::Error>(())
    /// ```
    pub fn add_vertex(&mut self, vertex: VertexId, data: V) -> Result<()> {
        if self.vertices.contains_key(&vertex) {
            return Err(Error::DuplicateVertex(vertex));
        }

        self.vertices.insert(
            vertex,
            VertexData {
                data,
                outgoing: Vec::new(),
            },
        );
        Ok(())
    }

    /// Adds a directed edge from `from` to `to` with the given payload.
    ///
    /// The edge is appended to the end of `from`'s outgoing edge list. Self-loops are
    /// allowed.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `from` or `to` does not exist (`from` is checked first)
    /// - [`Error::DuplicateEdge`] if an edge `from -> to` already exists
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::{Digraph, Error, VertexId};
    ///
    /// let (a, b) = (VertexId::new(1), VertexId::new(2));
    /// let mut graph: Digraph<(), u32> = Digraph::new();
    /// graph.add_vertex(a, ())?;
    /// graph.add_vertex(b, ())?;
    ///
    /// graph.add_edge(a, b, 10)?;
    /// assert!(matches!(graph.add_edge(a, b, 20), Err(Error::DuplicateEdge { .. })));
    /// assert_eq!(graph.edge_info(a, b)?, 10);
    /// # Ok::<(), roadgraph::Error>(())
    /// ```
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, data: E) -> Result<()> {
        if !self.vertices.contains_key(&to) {
            if !self.vertices.contains_key(&from) {
                return Err(Error::VertexNotFound(from));
            }
            return Err(Error::VertexNotFound(to));
        }
        let source = self
            .vertices
            .get_mut(&from)
            .ok_or(Error::VertexNotFound(from))?;

        if source.edge_position(to).is_some() {
            return Err(Error::DuplicateEdge { from, to });
        }

        source.outgoing.push(EdgeData { target: to, data });
        self.edge_count += 1;
        Ok(())
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Both the vertex's outgoing edges and all edges from other vertices pointing at it
    /// are deleted, so no enumeration of edges can reference the removed identifier
    /// afterward.
    ///
    /// # Returns
    ///
    /// The payload of the removed vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex does not exist.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<V> {
        let removed = self
            .vertices
            .remove(&vertex)
            .ok_or(Error::VertexNotFound(vertex))?;

        let mut dropped = removed.outgoing.len();
        for record in self.vertices.values_mut() {
            let before = record.outgoing.len();
            record.outgoing.retain(|edge| edge.target != vertex);
            dropped += before - record.outgoing.len();
        }
        self.edge_count -= dropped;

        log::trace!("removed vertex {vertex} and {dropped} incident edges");
        Ok(removed.data)
    }

    /// Removes the edge `from -> to`.
    ///
    /// The relative order of the remaining outgoing edges of `from` is preserved.
    ///
    /// # Returns
    ///
    /// The payload of the removed edge.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `from` or `to` does not exist
    /// - [`Error::EdgeNotFound`] if both exist but are not joined by an edge in this direction
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<E> {
        if !self.vertices.contains_key(&to) {
            if !self.vertices.contains_key(&from) {
                return Err(Error::VertexNotFound(from));
            }
            return Err(Error::VertexNotFound(to));
        }
        let source = self
            .vertices
            .get_mut(&from)
            .ok_or(Error::VertexNotFound(from))?;

        let position = source
            .edge_position(to)
            .ok_or(Error::EdgeNotFound { from, to })?;

        self.edge_count -= 1;
        Ok(source.outgoing.remove(position).data)
    }

    /// Returns a copy of the payload stored for the given vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex does not exist.
    pub fn vertex_info(&self, vertex: VertexId) -> Result<V>
    where
        V: Clone,
    {
        self.vertices
            .get(&vertex)
            .map(|record| record.data.clone())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// Returns a copy of the payload stored for the edge `from -> to`.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `from` or `to` does not exist
    /// - [`Error::EdgeNotFound`] if there is no edge `from -> to`
    pub fn edge_info(&self, from: VertexId, to: VertexId) -> Result<E>
    where
        E: Clone,
    {
        let source = self.vertices.get(&from).ok_or(Error::VertexNotFound(from))?;
        if !self.vertices.contains_key(&to) {
            return Err(Error::VertexNotFound(to));
        }

        source
            .outgoing
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.data.clone())
            .ok_or(Error::EdgeNotFound { from, to })
    }

    /// Returns the identifiers of all vertices, in ascending order.
    #[must_use]
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// Returns every edge as a `(from, to)` pair.
    ///
    /// Edges are grouped by source vertex in ascending identifier order; within one source
    /// they appear in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::{Digraph, VertexId};
    ///
    /// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
    /// let mut graph: Digraph<(), ()> = Digraph::new();
    /// for v in [a, b, c] {
    ///     graph.add_vertex(v, ())?;
    /// }
    /// graph.add_edge(b, c, ())?;
    /// graph.add_edge(a, c, ())?;
    /// graph.add_edge(a, b, ())?;
    ///
    /// assert_eq!(graph.edges(), vec![(a, c), (a, b), (b, c)]);
    /// # Ok::<(), roadgraph::Error>(())
    /// ```
    #[must_use]
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.vertices
            .iter()
            .flat_map(|(&from, record)| record.outgoing.iter().map(move |edge| (from, edge.target)))
            .collect()
    }

    /// Returns the outgoing edges of one vertex as `(from, to)` pairs, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex does not exist.
    pub fn edges_from(&self, vertex: VertexId) -> Result<Vec<(VertexId, VertexId)>> {
        let record = self
            .vertices
            .get(&vertex)
            .ok_or(Error::VertexNotFound(vertex))?;

        Ok(record
            .outgoing
            .iter()
            .map(|edge| (vertex, edge.target))
            .collect())
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the total number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of edges outgoing from the given vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex does not exist.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.vertices
            .get(&vertex)
            .map(|record| record.outgoing.len())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// Returns `true` if a vertex with this identifier exists.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// Returns `true` if the edge `from -> to` exists.
    ///
    /// Missing endpoints simply yield `false`.
    #[must_use]
    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(&from)
            .is_some_and(|record| record.edge_position(to).is_some())
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// Moves all vertices and edges into a new graph, leaving `self` empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::{Digraph, VertexId};
    ///
    /// let mut source: Digraph<&str, ()> = Digraph::new();
    /// source.add_vertex(VertexId::new(1), "A")?;
    ///
    /// let moved = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(moved.vertex_count(), 1);
    /// # Ok::<(), roadgraph::Error>(())
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns an iterator over the successors of a vertex, in edge insertion order.
    ///
    /// A vertex that does not exist has no successors.
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(&vertex)
            .into_iter()
            .flat_map(|record| record.outgoing.iter().map(|edge| edge.target))
    }

    /// Iterates the outgoing edges of a vertex as `(target, &payload)`, in insertion order.
    pub(crate) fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, &E)> + '_ {
        self.vertices
            .get(&vertex)
            .into_iter()
            .flat_map(|record| record.outgoing.iter().map(|edge| (edge.target, &edge.data)))
    }
}

// Algorithm convenience methods
impl<V, E> Digraph<V, E> {
    /// Returns `true` if every vertex is reachable from every other vertex.
    ///
    /// Empty graphs and single-vertex graphs are strongly connected. A disconnected graph
    /// is not an error; it simply yields `false`.
    ///
    /// See [`algorithms::is_strongly_connected`] for details.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        algorithms::is_strongly_connected(self)
    }

    /// Computes the strongly connected components of the graph.
    ///
    /// See [`algorithms::strongly_connected_components`] for ordering guarantees.
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<VertexId>> {
        algorithms::strongly_connected_components(self)
    }

    /// Runs Dijkstra's algorithm from `start` and returns the predecessor map.
    ///
    /// The result maps every vertex in the graph to its predecessor on a minimum-weight
    /// path from `start`. The start vertex and every vertex that cannot be reached map to
    /// themselves.
    ///
    /// # Arguments
    ///
    /// * `start` - The vertex all paths begin at
    /// * `weight` - Extracts a non-negative weight from an edge payload
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `start` does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::{Digraph, VertexId};
    ///
    /// let ids: Vec<VertexId> = (1..=4).map(VertexId::new).collect();
    /// let mut graph: Digraph<(), f64> = Digraph::new();
    /// for &v in &ids {
    ///     graph.add_vertex(v, ())?;
    /// }
    /// graph.add_edge(ids[0], ids[1], 1.0)?;
    /// graph.add_edge(ids[1], ids[2], 1.0)?;
    /// graph.add_edge(ids[2], ids[0], 1.0)?;
    ///
    /// let predecessors = graph.find_shortest_paths(ids[0], |w| *w)?;
    /// assert_eq!(predecessors[&ids[0]], ids[0]); // start
    /// assert_eq!(predecessors[&ids[1]], ids[0]);
    /// assert_eq!(predecessors[&ids[2]], ids[1]);
    /// assert_eq!(predecessors[&ids[3]], ids[3]); // unreachable
    /// # Ok::<(), roadgraph::Error>(())
    /// ```
    pub fn find_shortest_paths<F>(
        &self,
        start: VertexId,
        weight: F,
    ) -> Result<BTreeMap<VertexId, VertexId>>
    where
        F: Fn(&E) -> f64,
    {
        Ok(algorithms::shortest_path_tree(self, start, weight)?.into_predecessors())
    }

    /// Runs Dijkstra's algorithm from `start` and returns the full shortest-path tree,
    /// including distances and path reconstruction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `start` does not exist.
    pub fn shortest_path_tree<F>(&self, start: VertexId, weight: F) -> Result<ShortestPathTree>
    where
        F: Fn(&E) -> f64,
    {
        algorithms::shortest_path_tree(self, start, weight)
    }
}

impl<V, E> GraphBase for Digraph<V, E> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.vertices.keys().copied()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }
}

impl<V, E> Successors for Digraph<V, E> {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.vertices
            .get(&vertex)
            .into_iter()
            .flat_map(|record| record.outgoing.iter().map(|edge| edge.target))
    }
}
