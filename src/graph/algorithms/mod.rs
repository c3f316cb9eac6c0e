//! Graph algorithms over [`Digraph`](crate::graph::Digraph) and the graph traits.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs`] - Breadth-first search traversal
//! - [`reachable_count`] - Number of vertices reachable from a start vertex
//!
//! ## Connectivity
//!
//! - [`is_strongly_connected`] - Check whether every vertex reaches every other vertex
//! - [`strongly_connected_components`] - Tarjan's SCC algorithm
//!
//! ## Shortest Paths
//!
//! - [`shortest_path_tree`] - Dijkstra single-source shortest paths
//! - [`ShortestPathTree`] - Result of a shortest path computation
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Strong connectivity | O(V + E) | Validating a road map before routing |
//! | SCC | O(V + E) | Locating unreachable regions |
//! | Dijkstra | O((V + E) log V) | Shortest distance or travel time |
//!
//! Traversal and connectivity work on any [`Successors`](crate::graph::Successors)
//! implementation. Dijkstra needs edge payloads and therefore operates on
//! [`Digraph`](crate::graph::Digraph) directly.

mod connectivity;
mod shortest_path;
mod traversal;

pub use connectivity::{is_strongly_connected, strongly_connected_components};
pub use shortest_path::{shortest_path_tree, ShortestPathTree};
pub use traversal::{bfs, dfs, reachable_count, BfsIterator, DfsIterator};
