//! Trait definitions for graph abstractions.
//!
//! The traversal and connectivity algorithms are written against these traits rather than
//! against [`Digraph`](crate::graph::Digraph) directly, so they only see the read-only view
//! they need and can run over any adjacency structure keyed by [`VertexId`].
//!
//! - [`GraphBase`] - Core properties: vertex count, vertex enumeration and membership
//! - [`Successors`] - Forward edge traversal (outgoing edges)

use crate::graph::VertexId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use roadgraph::{Digraph, GraphBase, VertexId};
///
/// let mut graph: Digraph<&str, ()> = Digraph::new();
/// graph.add_vertex(VertexId::new(5), "A")?;
/// graph.add_vertex(VertexId::new(9), "B")?;
///
/// assert_eq!(GraphBase::vertex_count(&graph), 2);
/// assert!(graph.contains_vertex(VertexId::new(9)));
/// # Ok::<(), roadgraph::Error>(())
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in the graph.
    ///
    /// Implementations in this crate yield identifiers in ascending order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;

    /// Returns `true` if a vertex with this identifier exists.
    fn contains_vertex(&self, vertex: VertexId) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use roadgraph::{Digraph, Successors, VertexId};
///
/// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
/// let mut graph: Digraph<(), ()> = Digraph::new();
/// for v in [a, b, c] {
///     graph.add_vertex(v, ())?;
/// }
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let successors: Vec<VertexId> = Successors::successors(&graph, a).collect();
/// assert_eq!(successors, vec![b, c]);
/// # Ok::<(), roadgraph::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor vertices of the given vertex.
    ///
    /// For a directed edge `(u, v)`, vertex `v` is a successor of `u`. Successors are
    /// yielded in edge insertion order. A vertex that is not in the graph has no
    /// successors.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
