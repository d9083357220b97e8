//! Core graph structure — vertices + adjacency with value semantics.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// An immutable graph over string-identified vertices carrying payloads of
/// type `D`.
///
/// Every operation that would mutate the graph instead returns a brand-new,
/// fully independent `ValueGraph`; the receiver is never altered. A graph
/// value is therefore frozen once published and safe to share across threads
/// (it is `Send + Sync` whenever `D` is).
///
/// Undirected edges are stored as two directed adjacency entries kept
/// consistent at insertion time; there is no separate edge entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueGraph<D> {
    /// Vertex ids in insertion order. Hash maps do not preserve insertion
    /// order, so it is tracked explicitly.
    order: Vec<String>,
    /// Per-vertex neighbor lists, ordered by edge insertion, no duplicates.
    adjacency: HashMap<String, Vec<String>>,
    /// Vertex id -> opaque payload. The graph never inspects payloads.
    vertices: HashMap<String, D>,
}

impl<D: Clone> ValueGraph<D> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            vertices: HashMap::new(),
        }
    }

    /// Create a graph from pre-existing adjacency and vertex data.
    ///
    /// Both parts are used as-is: this constructor does NOT validate that the
    /// two key sets match or that neighbor ids resolve. Callers are
    /// responsible for mutual consistency; every other constructor and
    /// operation maintains it automatically. Insertion order is taken from
    /// the `vertices` sequence, the canonical source of vertex existence.
    pub fn from_parts(
        adjacency: Vec<(String, Vec<String>)>,
        vertices: Vec<(String, D)>,
    ) -> Self {
        let order = vertices.iter().map(|(id, _)| id.clone()).collect();
        Self {
            order,
            adjacency: adjacency.into_iter().collect(),
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Create a graph from vertex data alone, deriving an empty neighbor
    /// list for every vertex.
    pub fn from_vertices(vertices: Vec<(String, D)>) -> Self {
        let adjacency = vertices
            .iter()
            .map(|(id, _)| (id.clone(), Vec::new()))
            .collect();
        let order = vertices.iter().map(|(id, _)| id.clone()).collect();
        Self {
            order,
            adjacency,
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed adjacency entries. An undirected edge contributes
    /// two entries, a self-loop one.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True iff `id` is present in both the adjacency and the vertex-data
    /// maps. Gates edge insertion; also usable as an external query.
    pub fn vertex_exists(&self, id: &str) -> bool {
        self.adjacency.contains_key(id) && self.vertices.contains_key(id)
    }

    /// Get a vertex payload by id (borrowed).
    pub fn data(&self, id: &str) -> Option<&D> {
        self.vertices.get(id)
    }

    /// Get a vertex's neighbor list by id (borrowed).
    pub fn neighbors(&self, id: &str) -> Option<&[String]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// A deep, independent copy of the adjacency map. Mutating the returned
    /// value cannot affect this graph.
    pub fn adjacency(&self) -> HashMap<String, Vec<String>> {
        self.adjacency.clone()
    }

    /// A deep, independent copy of the vertex-data map.
    pub fn vertex_data(&self) -> HashMap<String, D> {
        self.vertices.clone()
    }

    /// All vertex ids in insertion order.
    ///
    /// Existence is read off the vertex-data side rather than the adjacency
    /// side: in a directed graph a vertex with no outgoing edges has an
    /// empty neighbor list either way, and vertex data is the canonical
    /// record that a vertex exists.
    pub fn ids(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Add a vertex, returning the new graph.
    ///
    /// Upsert semantics: an existing `id` keeps its insertion-order position,
    /// its payload is overwritten and its neighbor list reset to empty.
    /// Never fails.
    pub fn add_vertex(&self, id: impl Into<String>, data: D) -> Self {
        let id = id.into();
        let mut next = self.clone();
        if !next.vertices.contains_key(&id) {
            next.order.push(id.clone());
        }
        next.adjacency.insert(id.clone(), Vec::new());
        next.vertices.insert(id, data);
        next
    }

    /// Add a directed edge `from -> to`, returning the new graph.
    ///
    /// If either endpoint does not exist the operation is a silent no-op and
    /// an equal graph is returned. Re-inserting an existing edge is a no-op
    /// as well; neighbor lists never contain duplicates.
    pub fn add_directed_edge(&self, from: &str, to: &str) -> Self {
        if !self.vertex_exists(from) || !self.vertex_exists(to) {
            log::debug!("dropping edge {from} -> {to}: missing endpoint");
            return self.clone();
        }
        let mut next = self.clone();
        Self::connect(&mut next.adjacency, from, to);
        next
    }

    /// Add an undirected edge between `a` and `b`, returning the new graph.
    ///
    /// Stored as two independent directed entries, each with its own
    /// duplicate check, so a self-loop produces a single entry. Same silent
    /// no-op policy as [`add_directed_edge`](Self::add_directed_edge) when an
    /// endpoint is missing.
    pub fn add_edge(&self, a: &str, b: &str) -> Self {
        if !self.vertex_exists(a) || !self.vertex_exists(b) {
            log::debug!("dropping edge {a} <-> {b}: missing endpoint");
            return self.clone();
        }
        let mut next = self.clone();
        Self::connect(&mut next.adjacency, a, b);
        Self::connect(&mut next.adjacency, b, a);
        next
    }

    /// Strict variant of [`add_directed_edge`](Self::add_directed_edge):
    /// fails with [`GraphError::VertexNotFound`] naming the first missing
    /// endpoint instead of silently returning the graph unchanged.
    pub fn try_add_directed_edge(&self, from: &str, to: &str) -> GraphResult<Self> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        Ok(self.add_directed_edge(from, to))
    }

    /// Strict variant of [`add_edge`](Self::add_edge).
    pub fn try_add_edge(&self, a: &str, b: &str) -> GraphResult<Self> {
        self.require_vertex(a)?;
        self.require_vertex(b)?;
        Ok(self.add_edge(a, b))
    }

    fn require_vertex(&self, id: &str) -> GraphResult<()> {
        if self.vertex_exists(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id.to_string()))
        }
    }

    /// Append `to` to `from`'s neighbor list unless already present.
    fn connect(adjacency: &mut HashMap<String, Vec<String>>, from: &str, to: &str) {
        if let Some(neighbors) = adjacency.get_mut(from) {
            if !neighbors.iter().any(|n| n == to) {
                neighbors.push(to.to_string());
            }
        }
    }
}

impl<D: Clone + Default> ValueGraph<D> {
    /// Create a graph from an adjacency map alone, deriving a default
    /// payload for every key. Insertion order is taken from the given
    /// sequence.
    pub fn from_adjacency(adjacency: Vec<(String, Vec<String>)>) -> Self {
        let vertices = adjacency
            .iter()
            .map(|(id, _)| (id.clone(), D::default()))
            .collect();
        let order = adjacency.iter().map(|(id, _)| id.clone()).collect();
        Self {
            order,
            adjacency: adjacency.into_iter().collect(),
            vertices,
        }
    }
}

impl<D: Clone> Default for ValueGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}
