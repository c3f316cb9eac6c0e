//! Generic directed graph storage and algorithms.
//!
//! This module provides [`Digraph`], a directed graph whose vertices are addressed by
//! caller-assigned [`VertexId`]s and which carries arbitrary payloads on vertices and edges.
//! The graph never interprets payloads; algorithms that need numbers from them (such as
//! Dijkstra) take a closure that extracts one.
//!
//! # Architecture
//!
//! - [`Digraph`] - Mutable adjacency-list storage with atomic, validated mutations
//! - [`VertexId`] - Strongly-typed vertex identifier
//! - [`GraphBase`] / [`Successors`] - Read-only views the algorithms are written against
//! - [`algorithms`] - Traversal, strong connectivity and shortest paths
//!
//! # Examples
//!
//! ```rust
//! use roadgraph::graph::{Digraph, VertexId};
//!
//! let mut graph: Digraph<&str, f64> = Digraph::new();
//! let irvine = VertexId::new(0);
//! let tustin = VertexId::new(1);
//! graph.add_vertex(irvine, "Irvine")?;
//! graph.add_vertex(tustin, "Tustin")?;
//! graph.add_edge(irvine, tustin, 6.5)?;
//! graph.add_edge(tustin, irvine, 6.5)?;
//!
//! assert!(graph.is_strongly_connected());
//! assert_eq!(graph.find_shortest_paths(irvine, |miles| *miles)?[&tustin], irvine);
//! # Ok::<(), roadgraph::Error>(())
//! ```

pub mod algorithms;
mod digraph;
mod traits;
mod vertex;

pub use digraph::Digraph;
pub use traits::{GraphBase, Successors};
pub use vertex::VertexId;
