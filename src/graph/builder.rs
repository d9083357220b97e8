//! Fluent API for building ValueGraph instances.

use super::ValueGraph;

/// Whether a recorded edge is one-way or both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeKind {
    Directed,
    Undirected,
}

/// Fluent builder for constructing a [`ValueGraph`].
///
/// Vertices and edges may be declared in any order: `build` applies every
/// vertex first, then every edge in the order it was recorded, so an edge
/// may reference a vertex declared after it. Edge application uses the
/// graph's default silent semantics, so an edge whose endpoint never gets
/// declared is simply dropped.
pub struct GraphBuilder<D> {
    vertices: Vec<(String, D)>,
    edges: Vec<(String, String, EdgeKind)>,
}

impl<D: Clone> GraphBuilder<D> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(mut self, id: impl Into<String>, data: D) -> Self {
        self.vertices.push((id.into(), data));
        self
    }

    /// Declare an undirected edge between two vertices.
    pub fn edge(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.edges.push((a.into(), b.into(), EdgeKind::Undirected));
        self
    }

    /// Declare a directed edge between two vertices.
    pub fn directed_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into(), EdgeKind::Directed));
        self
    }

    /// Build the final graph. Always succeeds.
    pub fn build(self) -> ValueGraph<D> {
        let mut graph = ValueGraph::new();
        for (id, data) in self.vertices {
            graph = graph.add_vertex(id, data);
        }
        for (a, b, kind) in self.edges {
            graph = match kind {
                EdgeKind::Directed => graph.add_directed_edge(&a, &b),
                EdgeKind::Undirected => graph.add_edge(&a, &b),
            };
        }
        graph
    }
}

impl<D: Clone> Default for GraphBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
