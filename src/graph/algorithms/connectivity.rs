//! Strong connectivity analysis.
//!
//! A directed graph is strongly connected when every vertex can reach every other vertex.
//! This module answers that question directly with [`is_strongly_connected`] and, for
//! graphs that are not, breaks them down with [`strongly_connected_components`].
//!
//! # Use Cases
//!
//! - **Route planning**: a road map must be strongly connected before every trip request
//!   can be answered
//! - **Diagnostics**: the components of a disconnected map show which regions are cut off

use std::collections::{HashMap, HashSet};

use crate::graph::{algorithms::reachable_count, GraphBase, Successors, VertexId};

/// Returns `true` if every vertex of the graph is reachable from every other vertex.
///
/// Empty graphs and single-vertex graphs are strongly connected.
///
/// # Algorithm
///
/// 1. Pick any seed vertex and count the vertices reachable from it along outgoing edges
/// 2. If that count is below the vertex count, the graph is not strongly connected
/// 3. Otherwise count the vertices reachable from the seed along *reversed* edges; every
///    vertex reaches the seed exactly when that count equals the vertex count
///
/// Together the two passes show that every vertex reaches the seed and the seed reaches
/// every vertex, which is equivalent to restarting a reachability search from every vertex.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the reversed adjacency
///
/// # Examples
///
/// ```rust
/// use roadgraph::{algorithms::is_strongly_connected, Digraph, VertexId};
///
/// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
/// let mut graph: Digraph<(), ()> = Digraph::new();
/// for v in [a, b, c] {
///     graph.add_vertex(v, ())?;
/// }
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// assert!(!is_strongly_connected(&graph));
///
/// graph.add_edge(c, a, ())?;
/// assert!(is_strongly_connected(&graph));
/// # Ok::<(), roadgraph::Error>(())
/// ```
pub fn is_strongly_connected<G>(graph: &G) -> bool
where
    G: Successors,
{
    let total = graph.vertex_count();
    let Some(seed) = graph.vertex_ids().next() else {
        return true;
    };

    let forward = reachable_count(graph, seed);
    if forward < total {
        log::debug!("vertex {seed} reaches only {forward} of {total} vertices");
        return false;
    }

    let reversed = ReversedGraph::new(graph);
    let backward = reachable_count(&reversed, seed);
    if backward < total {
        log::debug!("only {backward} of {total} vertices reach vertex {seed}");
        return false;
    }

    true
}

/// Computes the strongly connected components of a directed graph.
///
/// Uses Tarjan's algorithm with an explicit work stack instead of recursion. Each vertex is
/// assigned a discovery index and a "lowlink" value; when a vertex's lowlink equals its
/// index, it is the root of a component and the component is popped off the vertex stack.
///
/// # Returns
///
/// The components in **reverse topological order** (if an edge leads from component A to
/// component B, B appears before A). Vertices inside each component are sorted ascending.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use roadgraph::{algorithms::strongly_connected_components, Digraph, VertexId};
///
/// let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));
/// let mut graph: Digraph<(), ()> = Digraph::new();
/// for v in [a, b, c] {
///     graph.add_vertex(v, ())?;
/// }
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let sccs = strongly_connected_components(&graph);
/// assert_eq!(sccs, vec![vec![c], vec![a, b]]);
/// # Ok::<(), roadgraph::Error>(())
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<VertexId>>
where
    G: Successors,
{
    let mut state = TarjanState::default();

    for root in graph.vertex_ids() {
        if !state.marks.contains_key(&root) {
            state.visit(graph, root);
        }
    }

    state.sccs
}

/// The reversed adjacency of a graph, materialized for a single query.
struct ReversedGraph {
    vertices: Vec<VertexId>,
    predecessors: HashMap<VertexId, Vec<VertexId>>,
}

impl ReversedGraph {
    fn new<G: Successors>(graph: &G) -> Self {
        // Other implementations may enumerate in any order; lookups binary search
        let mut vertices: Vec<VertexId> = graph.vertex_ids().collect();
        vertices.sort_unstable();
        let mut predecessors: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
        for &from in &vertices {
            for to in graph.successors(from) {
                predecessors.entry(to).or_default().push(from);
            }
        }

        ReversedGraph {
            vertices,
            predecessors,
        }
    }
}

impl GraphBase for ReversedGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.vertices.iter().copied()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }
}

impl Successors for ReversedGraph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.predecessors
            .get(&vertex)
            .into_iter()
            .flat_map(|sources| sources.iter().copied())
    }
}

/// Discovery index and lowlink of a visited vertex.
#[derive(Clone, Copy)]
struct TarjanMark {
    index: usize,
    lowlink: usize,
}

/// One suspended vertex on the explicit DFS work stack.
struct Frame {
    vertex: VertexId,
    successors: Vec<VertexId>,
    next: usize,
}

/// Internal state for Tarjan's algorithm.
#[derive(Default)]
struct TarjanState {
    /// Index and lowlink for every discovered vertex
    marks: HashMap<VertexId, TarjanMark>,
    /// Vertices currently on the component stack
    on_stack: HashSet<VertexId>,
    /// The component stack
    stack: Vec<VertexId>,
    /// Next discovery index
    next_index: usize,
    /// Collected components
    sccs: Vec<Vec<VertexId>>,
}

impl TarjanState {
    fn discover<G: Successors>(&mut self, graph: &G, vertex: VertexId) -> Frame {
        self.marks.insert(
            vertex,
            TarjanMark {
                index: self.next_index,
                lowlink: self.next_index,
            },
        );
        self.next_index += 1;
        self.stack.push(vertex);
        self.on_stack.insert(vertex);

        Frame {
            vertex,
            successors: graph.successors(vertex).collect(),
            next: 0,
        }
    }

    fn lower(&mut self, vertex: VertexId, candidate: usize) {
        if let Some(mark) = self.marks.get_mut(&vertex) {
            mark.lowlink = mark.lowlink.min(candidate);
        }
    }

    fn visit<G: Successors>(&mut self, graph: &G, root: VertexId) {
        let mut work = vec![self.discover(graph, root)];

        while let Some(frame) = work.last_mut() {
            let vertex = frame.vertex;

            if let Some(&succ) = frame.successors.get(frame.next) {
                frame.next += 1;

                match self.marks.get(&succ).copied() {
                    None => {
                        let child = self.discover(graph, succ);
                        work.push(child);
                    }
                    Some(mark) if self.on_stack.contains(&succ) => {
                        self.lower(vertex, mark.index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            work.pop();
            let Some(mark) = self.marks.get(&vertex).copied() else {
                continue;
            };

            if let Some(parent) = work.last() {
                self.lower(parent.vertex, mark.lowlink);
            }

            if mark.lowlink == mark.index {
                let mut component = Vec::new();
                while let Some(member) = self.stack.pop() {
                    self.on_stack.remove(&member);
                    component.push(member);
                    if member == vertex {
                        break;
                    }
                }
                component.sort_unstable();
                self.sccs.push(component);
            }
        }
    }
}
