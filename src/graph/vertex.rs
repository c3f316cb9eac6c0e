//! Vertex identifier implementation for directed graphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed identifier for vertices
//! within a [`Digraph`](crate::graph::Digraph). Unlike positional indices, vertex identifiers
//! are chosen by the caller: they need not be contiguous, zero-based, or even positive.

use std::fmt;

use serde::Serialize;

/// A strongly-typed, caller-assigned identifier for a vertex.
///
/// `VertexId` wraps an `i64`, preventing accidental mixing of vertex identifiers with
/// distances, counts, or other integers. The graph never invents identifiers on its own;
/// every `VertexId` originates from a call to
/// [`Digraph::add_vertex`](crate::graph::Digraph::add_vertex).
///
/// Identifiers are ordered by their numeric value, which is also the order in which a
/// [`Digraph`](crate::graph::Digraph) enumerates its vertices.
///
/// # Examples
///
/// ```rust
/// use roadgraph::VertexId;
/// use std::collections::BTreeMap;
///
/// let a = VertexId::new(10);
/// let b = VertexId::new(-2);
///
/// assert!(b < a);
/// assert_eq!(a.value(), 10);
///
/// let mut names: BTreeMap<VertexId, &str> = BTreeMap::new();
/// names.insert(a, "Irvine");
/// assert_eq!(names.get(&a), Some(&"Irvine"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) i64);

impl VertexId {
    /// Creates a new `VertexId` from a raw integer value.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier chosen by the caller
    #[must_use]
    #[inline]
    pub const fn new(value: i64) -> Self {
        VertexId(value)
    }

    /// Returns the raw integer value of this identifier.
    #[must_use]
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    /// Formats the identifier as its bare number, matching how callers assigned it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VertexId {
    #[inline]
    fn from(value: i64) -> Self {
        VertexId(value)
    }
}

impl From<VertexId> for i64 {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
