use crate::graph::{Digraph, VertexId};

/// Shorthand for building a vertex identifier in tests.
pub fn v(id: i64) -> VertexId {
    VertexId::new(id)
}

/// Creates a payload-free graph from a vertex list and an edge list.
pub fn create_graph(vertices: &[i64], edges: &[(i64, i64)]) -> Digraph<(), ()> {
    let mut graph = Digraph::new();
    for &id in vertices {
        graph.add_vertex(v(id), ()).unwrap();
    }
    for &(from, to) in edges {
        graph.add_edge(v(from), v(to), ()).unwrap();
    }
    graph
}

/// Creates a graph whose edge payloads are `f64` weights.
pub fn create_weighted_graph(vertices: &[i64], edges: &[(i64, i64, f64)]) -> Digraph<(), f64> {
    let mut graph = Digraph::new();
    for &id in vertices {
        graph.add_vertex(v(id), ()).unwrap();
    }
    for &(from, to, weight) in edges {
        graph.add_edge(v(from), v(to), weight).unwrap();
    }
    graph
}
