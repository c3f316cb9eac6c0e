//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! Edge weights are not stored in the graph. The caller passes a closure that derives a
//! non-negative `f64` weight from each edge payload, so the same graph can be searched by
//! different metrics (distance, travel time, cost, ...).
//!
//! The result is a [`ShortestPathTree`]: for every vertex in the graph, its predecessor on
//! a minimum-weight path from the start vertex, plus the distances of every reached vertex.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap, HashMap, HashSet},
};

use crate::{
    graph::{Digraph, VertexId},
    Error, Result,
};

/// The shortest-path tree produced by a single Dijkstra run.
///
/// The tree covers every vertex that was in the graph when it was computed. The start
/// vertex and every vertex that cannot be reached from it are their own predecessors in
/// [`predecessors`](Self::predecessors); [`is_reachable`](Self::is_reachable) tells the two
/// cases apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    start: VertexId,
    predecessors: BTreeMap<VertexId, VertexId>,
    distances: BTreeMap<VertexId, f64>,
}

impl ShortestPathTree {
    /// Returns the vertex the search started from.
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the predecessor map, keyed by every vertex in the graph.
    #[must_use]
    pub fn predecessors(&self) -> &BTreeMap<VertexId, VertexId> {
        &self.predecessors
    }

    /// Consumes the tree and returns only the predecessor map.
    #[must_use]
    pub fn into_predecessors(self) -> BTreeMap<VertexId, VertexId> {
        self.predecessors
    }

    /// Returns the predecessor of `vertex` on its shortest path.
    ///
    /// Returns `None` for the start vertex, for unreachable vertices and for vertices
    /// that were not in the graph.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors
            .get(&vertex)
            .copied()
            .filter(|&pred| pred != vertex)
    }

    /// Returns the total weight of the shortest path to `vertex`, or `None` if it was not
    /// reached.
    #[must_use]
    pub fn distance_to(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    /// Returns `true` if `vertex` is reachable from the start vertex.
    ///
    /// The start vertex is always reachable from itself.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// Reconstructs the shortest path from the start vertex to `vertex`.
    ///
    /// The returned path begins with the start vertex and ends with `vertex`. Returns
    /// `None` if `vertex` is not reachable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadgraph::{Digraph, VertexId};
    ///
    /// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
    /// let mut graph: Digraph<(), f64> = Digraph::new();
    /// for v in [a, b, c] {
    ///     graph.add_vertex(v, ())?;
    /// }
    /// graph.add_edge(a, b, 2.0)?;
    /// graph.add_edge(b, c, 2.0)?;
    /// graph.add_edge(a, c, 5.0)?;
    ///
    /// let tree = graph.shortest_path_tree(a, |w| *w)?;
    /// assert_eq!(tree.path_to(c), Some(vec![a, b, c]));
    /// assert_eq!(tree.distance_to(c), Some(4.0));
    /// # Ok::<(), roadgraph::Error>(())
    /// ```
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.start {
            current = *self.predecessors.get(&current)?;
            path.push(current);
            // A chain longer than the vertex count means the predecessors form a cycle,
            // which only negative weights can produce.
            if path.len() > self.predecessors.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// An entry in the Dijkstra priority queue.
///
/// Ordered so that [`BinaryHeap`] (a max-heap) pops the smallest tentative distance first,
/// breaking ties by the smaller vertex identifier.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Computes single-source shortest paths from `start` using Dijkstra's algorithm.
///
/// # Algorithm
///
/// 1. The start vertex gets distance 0, every other vertex is unreached
/// 2. Repeatedly take the unfinalized vertex with the smallest tentative distance (ties go
///    to the smaller identifier) and mark it final
/// 3. For each outgoing edge, relax the target if `distance + weight` is strictly smaller
///    than its current tentative distance, recording the finalized vertex as predecessor
/// 4. Stop when no reachable unfinalized vertex remains
///
/// The priority queue uses lazy deletion: a vertex may be queued several times, and stale
/// entries are skipped when popped.
///
/// # Weights
///
/// `weight` must return a non-negative value for every edge. Negative weights are not
/// rejected, but the resulting tree is unspecified and a warning is logged. Every vertex
/// starts at an infinite distance and is only updated by a strictly smaller candidate, so
/// a `NaN` weight, or a path whose length overflows to infinity, leaves its target
/// unreached.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the queue in the worst case
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn shortest_path_tree<V, E, F>(
    graph: &Digraph<V, E>,
    start: VertexId,
    weight: F,
) -> Result<ShortestPathTree>
where
    F: Fn(&E) -> f64,
{
    if !graph.contains_vertex(start) {
        return Err(Error::VertexNotFound(start));
    }

    let mut distances: HashMap<VertexId, f64> = HashMap::new();
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
    let mut finalized: HashSet<VertexId> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut stale = 0usize;
    let mut warned_negative = false;

    distances.insert(start, 0.0);
    queue.push(QueueEntry {
        distance: 0.0,
        vertex: start,
    });

    while let Some(QueueEntry { distance, vertex }) = queue.pop() {
        if !finalized.insert(vertex) {
            stale += 1;
            continue;
        }

        for (target, payload) in graph.outgoing(vertex) {
            let edge_weight = weight(payload);
            if edge_weight < 0.0 && !warned_negative {
                log::warn!(
                    "negative edge weight {edge_weight} on {vertex} -> {target}; \
                     shortest paths are unspecified"
                );
                warned_negative = true;
            }

            // Unreached vertices sit at +inf, so an overflowing or NaN candidate never relaxes
            let candidate = distance + edge_weight;
            let current = distances.get(&target).copied().unwrap_or(f64::INFINITY);

            if candidate < current {
                distances.insert(target, candidate);
                predecessors.insert(target, vertex);
                queue.push(QueueEntry {
                    distance: candidate,
                    vertex: target,
                });
            }
        }
    }

    log::debug!(
        "dijkstra from {start}: reached {} of {} vertices, skipped {stale} stale queue entries",
        finalized.len(),
        graph.vertex_count()
    );

    let predecessors = graph
        .vertices()
        .into_iter()
        .map(|vertex| {
            let pred = if vertex == start {
                start
            } else {
                predecessors.get(&vertex).copied().unwrap_or(vertex)
            };
            (vertex, pred)
        })
        .collect();

    Ok(ShortestPathTree {
        start,
        predecessors,
        distances: distances.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{create_weighted_graph as build, v};

    fn preds(pairs: &[(i64, i64)]) -> BTreeMap<VertexId, VertexId> {
        pairs.iter().map(|&(a, b)| (v(a), v(b))).collect()
    }

    #[test]
    fn test_cycle_with_isolated_vertex() {
        let graph = build(
            &[1, 2, 3, 4],
            &[(1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)],
        );
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();

        assert_eq!(
            tree.predecessors(),
            &preds(&[(1, 1), (2, 1), (3, 2), (4, 4)])
        );
        assert!(!tree.is_reachable(v(4)));
        assert_eq!(tree.distance_to(v(3)), Some(2.0));
        assert_eq!(tree.distance_to(v(4)), None);
    }

    #[test]
    fn test_prefers_lighter_indirect_path() {
        let graph = build(
            &[1, 2, 3],
            &[(1, 3, 10.0), (1, 2, 2.0), (2, 3, 3.0)],
        );
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();

        assert_eq!(tree.predecessor(v(3)), Some(v(2)));
        assert_eq!(tree.distance_to(v(3)), Some(5.0));
        assert_eq!(tree.path_to(v(3)), Some(vec![v(1), v(2), v(3)]));
    }

    #[test]
    fn test_equal_paths_keep_first_found() {
        // Both 1->2->4 and 1->3->4 weigh 2; vertex 2 is finalized first and wins
        let graph = build(
            &[1, 2, 3, 4],
            &[(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0), (3, 4, 1.0)],
        );
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        assert_eq!(tree.predecessor(v(4)), Some(v(2)));
    }

    #[test]
    fn test_ties_resolved_by_identifier() {
        // Inserting the edge to 3 first must not change the outcome
        let graph = build(
            &[1, 2, 3, 4],
            &[(1, 3, 1.0), (1, 2, 1.0), (3, 4, 1.0), (2, 4, 1.0)],
        );
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        assert_eq!(tree.predecessor(v(4)), Some(v(2)));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let graph = build(
            &[1, 2, 3, 4, 5],
            &[
                (1, 2, 1.0),
                (1, 3, 1.0),
                (2, 4, 2.0),
                (3, 4, 2.0),
                (4, 5, 0.0),
                (2, 5, 3.0),
            ],
        );
        let first = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        for _ in 0..10 {
            assert_eq!(shortest_path_tree(&graph, v(1), |w| *w).unwrap(), first);
        }
    }

    #[test]
    fn test_single_vertex() {
        let graph = build(&[7], &[]);
        let tree = shortest_path_tree(&graph, v(7), |w| *w).unwrap();

        assert_eq!(tree.predecessors(), &preds(&[(7, 7)]));
        assert_eq!(tree.distance_to(v(7)), Some(0.0));
        assert_eq!(tree.path_to(v(7)), Some(vec![v(7)]));
        assert_eq!(tree.predecessor(v(7)), None);
    }

    #[test]
    fn test_missing_start() {
        let graph = build(&[1, 2], &[(1, 2, 1.0)]);
        assert!(matches!(
            shortest_path_tree(&graph, v(3), |w| *w),
            Err(Error::VertexNotFound(id)) if id == v(3)
        ));
    }

    #[test]
    fn test_cycle_back_to_start_keeps_start_as_root() {
        let graph = build(&[1, 2], &[(1, 2, 1.0), (2, 1, 1.0)]);
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        assert_eq!(tree.predecessors()[&v(1)], v(1));
    }

    #[test]
    fn test_weight_function_selects_metric() {
        // Payload: (miles, minutes)
        let mut graph: Digraph<(), (f64, f64)> = Digraph::new();
        for id in 1..=3 {
            graph.add_vertex(v(id), ()).unwrap();
        }
        graph.add_edge(v(1), v(3), (5.0, 30.0)).unwrap();
        graph.add_edge(v(1), v(2), (4.0, 5.0)).unwrap();
        graph.add_edge(v(2), v(3), (4.0, 5.0)).unwrap();

        let by_distance = shortest_path_tree(&graph, v(1), |e| e.0).unwrap();
        let by_time = shortest_path_tree(&graph, v(1), |e| e.1).unwrap();

        assert_eq!(by_distance.predecessor(v(3)), Some(v(1)));
        assert_eq!(by_time.predecessor(v(3)), Some(v(2)));
    }

    #[test]
    fn test_unreachable_path_is_none() {
        let graph = build(&[1, 2], &[(2, 1, 1.0)]);
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        assert_eq!(tree.path_to(v(2)), None);
        assert_eq!(tree.predecessors()[&v(2)], v(2));
    }

    #[test]
    fn test_nan_weight_is_ignored() {
        let graph = build(&[1, 2], &[(1, 2, f64::NAN)]);
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        assert!(!tree.is_reachable(v(2)));
    }

    #[test]
    fn test_infinite_distance_leaves_vertex_unreached() {
        let graph = build(&[1, 2, 3], &[(1, 2, 1e308), (2, 3, 1e308)]);
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();

        assert_eq!(tree.predecessor(v(2)), Some(v(1)));
        assert_eq!(tree.predecessors()[&v(3)], v(3));
        assert!(!tree.is_reachable(v(3)));
        assert_eq!(tree.path_to(v(3)), None);
    }

    #[test]
    fn test_infinite_edge_weight_is_not_a_road() {
        let graph = build(&[1, 2], &[(1, 2, f64::INFINITY)]);
        let tree = shortest_path_tree(&graph, v(1), |w| *w).unwrap();
        assert_eq!(tree.predecessors(), &preds(&[(1, 1), (2, 2)]));
    }

    #[test]
    fn test_queue_entry_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry { distance: 3.0, vertex: v(1) });
        heap.push(QueueEntry { distance: 1.0, vertex: v(9) });
        heap.push(QueueEntry { distance: 1.0, vertex: v(2) });

        assert_eq!(heap.pop().map(|e| e.vertex), Some(v(2)));
        assert_eq!(heap.pop().map(|e| e.vertex), Some(v(9)));
        assert_eq!(heap.pop().map(|e| e.vertex), Some(v(1)));
    }
}
