// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # roadgraph
//!
//! A generic directed graph with caller-assigned vertex identifiers, typed vertex and edge
//! payloads, strong-connectivity checks and Dijkstra shortest paths, plus a small road map
//! trip planner built on top of it.
//!
//! ## Features
//!
//! - **Sparse identifiers** - Vertices are named by arbitrary `i64` identifiers chosen by the caller
//! - **Atomic mutations** - Every failed operation leaves the graph exactly as it was
//! - **Strong connectivity** - Linear-time check plus Tarjan's strongly connected components
//! - **Shortest paths** - Dijkstra with a caller-supplied weight function over edge payloads
//! - **Road maps** - Parse location/road/trip input and render turn-by-turn trip reports
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use roadgraph::prelude::*;
//!
//! let (a, b) = (VertexId::new(1), VertexId::new(2));
//! let mut graph: Digraph<&str, f64> = Digraph::new();
//! graph.add_vertex(a, "A")?;
//! graph.add_vertex(b, "B")?;
//! graph.add_edge(a, b, 3.0)?;
//!
//! assert!(!graph.is_strongly_connected());
//! assert_eq!(graph.find_shortest_paths(a, |w| *w)?[&b], a);
//! # Ok::<(), roadgraph::Error>(())
//! ```
//!
//! ### Planning Trips
//!
//! ```rust
//! use roadgraph::roadmap::{plan_trip, RoadMapInput};
//!
//! let input = RoadMapInput::parse(
//!     "2\n0 Irvine\n1 Tustin\n2\n0 1 6.5 55\n1 0 6.5 55\n1\n1 0 t\n",
//! )?;
//!
//! if input.map.is_strongly_connected() {
//!     for trip in &input.trips {
//!         if let Some(report) = plan_trip(&input.map, trip)? {
//!             println!("{report}\n");
//!         }
//!     }
//! }
//! # Ok::<(), roadgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`Digraph`] store, [`VertexId`], the graph traits and [`algorithms`]
//! - [`roadmap`] - Road map types, the input reader and trip reports
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use roadgraph::{Digraph, Error, VertexId};
//!
//! let graph: Digraph<(), ()> = Digraph::new();
//! match graph.vertex_info(VertexId::new(3)) {
//!     Ok(()) => println!("found"),
//!     Err(Error::VertexNotFound(id)) => println!("no vertex {id}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`](https://docs.rs/log) facade: query summaries at
//! `debug`, per-vertex detail at `trace`, and suspicious input such as negative edge
//! weights at `warn`. Install any logger (the `roadgraph` CLI uses `env_logger`) to see them.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use roadgraph::prelude::*;
///
/// let mut graph: Digraph<String, RoadSegment> = Digraph::new();
/// graph.add_vertex(VertexId::new(0), "Irvine".to_string())?;
/// # Ok::<(), roadgraph::Error>(())
/// ```
pub mod prelude;

/// Generic directed graph storage and algorithms.
///
/// # Key Types
///
/// - [`graph::Digraph`] - The graph store
/// - [`graph::VertexId`] - Caller-assigned vertex identifier
/// - [`graph::GraphBase`] / [`graph::Successors`] - Read-only graph views
/// - [`graph::algorithms`] - Traversal, connectivity and shortest paths
pub mod graph;

/// Road map trip planning.
///
/// Location names on vertices, [`roadmap::RoadSegment`]s on edges, trips measured by
/// distance or driving time.
pub mod roadmap;

/// `roadgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `roadgraph` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

pub use graph::{algorithms, Digraph, GraphBase, Successors, VertexId};
