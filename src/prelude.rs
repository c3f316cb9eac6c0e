//! # roadgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the roadgraph library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all roadgraph operations
pub use crate::Error;

/// The result type used throughout roadgraph
pub use crate::Result;

// ================================================================================================
// Graph
// ================================================================================================

/// The directed graph store and its vertex identifier
pub use crate::graph::{Digraph, VertexId};

/// Read-only graph views used by the generic algorithms
pub use crate::graph::{GraphBase, Successors};

/// Shortest-path query result
pub use crate::graph::algorithms::ShortestPathTree;

// ================================================================================================
// Road Maps
// ================================================================================================

/// Road map types
pub use crate::roadmap::{RoadMap, RoadSegment, Trip, TripMetric};

/// Road map input and trip reports
pub use crate::roadmap::{plan_trip, RoadMapInput, TripReport};
