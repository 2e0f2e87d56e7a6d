//! Typed directed mesh-adjacency graph.
//!
//! Vertices and edges are owned by two independent id-keyed tables; all
//! cross-references (a vertex's incident edges, an edge's endpoints) are
//! ids, never pointers, so the graph has no ownership cycles.

use crate::error::GraphInvariantViolation;
use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use std::fmt;

/// Strongly-typed identifier for a graph vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw integer as a vertex id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer backing this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Strongly-typed identifier for a graph edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(u64);

impl EdgeId {
    /// Wraps a raw integer as an edge id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer backing this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

struct Vertex<V> {
    incident: HashSet<EdgeId>,
    payload: V,
}

/// An edge's endpoints and payload, as stored by the graph.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<E> {
    source: VertexId,
    target: VertexId,
    /// The edge's payload.
    pub payload: E,
}

impl<E> Edge<E> {
    /// Id of the edge's source vertex.
    #[must_use]
    pub const fn source(&self) -> VertexId {
        self.source
    }

    /// Id of the edge's target vertex.
    #[must_use]
    pub const fn target(&self) -> VertexId {
        self.target
    }

    /// Given one endpoint, returns the other. `None` if `from` is neither
    /// endpoint, or if the edge is a self-loop (both endpoints equal).
    #[must_use]
    pub fn other_end(&self, from: VertexId) -> Option<VertexId> {
        if self.source == self.target {
            return None;
        }
        if from == self.source {
            Some(self.target)
        } else if from == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

/// A directed graph over vertex payload `V` and edge payload `E`, either of
/// which may be `()`.
///
/// Invariants maintained by the public API alone (see module docs):
/// every edge id in a vertex's incident set refers to an edge present in
/// the graph, and every edge's endpoints refer to vertices present in the
/// graph.
pub struct Graph<V = (), E = ()> {
    vertices: HashMap<VertexId, Vertex<V>>,
    edges: HashMap<EdgeId, Edge<E>>,
    // Order vertices were first inserted in, so `first_vertex` (and hence
    // the assembler's BFS root) is deterministic rather than depending on
    // hash-bucket order.
    insertion_order: Vec<VertexId>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Whether the graph has no vertices (and hence no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inserts a vertex with the given payload.
    ///
    /// If `id` already names a vertex, this is a no-op unless `overwrite`
    /// is set, in which case the old vertex (and every edge incident to
    /// it) is erased first.
    pub fn insert_vertex(&mut self, id: VertexId, payload: V, overwrite: bool) -> &V {
        if self.vertices.contains_key(&id) {
            if overwrite {
                self.erase_vertex(id);
            } else {
                return &self.vertices[&id].payload;
            }
        }
        self.insertion_order.push(id);
        self.vertices.entry(id).or_insert_with(|| Vertex {
            incident: HashSet::new(),
            payload,
        });
        &self.vertices[&id].payload
    }

    /// Inserts an edge between `source` and `target`.
    ///
    /// Endpoints missing from the graph are auto-created with a
    /// default-valued payload. If `id` already names an edge, this is a
    /// no-op unless `overwrite` is set.
    pub fn insert_edge(
        &mut self,
        id: EdgeId,
        source: VertexId,
        target: VertexId,
        payload: E,
        overwrite: bool,
    ) -> &Edge<E>
    where
        V: Default,
    {
        if self.edges.contains_key(&id) {
            if overwrite {
                self.erase_edge(id);
            } else {
                return &self.edges[&id];
            }
        }

        if !self.vertices.contains_key(&source) {
            self.insertion_order.push(source);
        }
        self.vertices.entry(source).or_insert_with(|| Vertex {
            incident: HashSet::new(),
            payload: V::default(),
        });
        if !self.vertices.contains_key(&target) {
            self.insertion_order.push(target);
        }
        self.vertices.entry(target).or_insert_with(|| Vertex {
            incident: HashSet::new(),
            payload: V::default(),
        });

        self.vertices.get_mut(&source).expect("just inserted").incident.insert(id);
        self.vertices.get_mut(&target).expect("just inserted").incident.insert(id);

        self.edges.entry(id).or_insert(Edge {
            source,
            target,
            payload,
        })
    }

    /// Inserts an edge, failing instead of auto-creating missing endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GraphInvariantViolation::DanglingEndpoint`] if `source` or
    /// `target` does not already name a vertex in the graph.
    pub fn insert_edge_strict(
        &mut self,
        id: EdgeId,
        source: VertexId,
        target: VertexId,
        payload: E,
        overwrite: bool,
    ) -> Result<&Edge<E>, GraphInvariantViolation> {
        if !self.vertices.contains_key(&source) {
            return Err(GraphInvariantViolation::DanglingEndpoint {
                edge: id,
                vertex: source,
            });
        }
        if !self.vertices.contains_key(&target) {
            return Err(GraphInvariantViolation::DanglingEndpoint {
                edge: id,
                vertex: target,
            });
        }

        if self.edges.contains_key(&id) {
            if overwrite {
                self.erase_edge(id);
            } else {
                return Ok(&self.edges[&id]);
            }
        }

        self.vertices.get_mut(&source).expect("checked above").incident.insert(id);
        self.vertices.get_mut(&target).expect("checked above").incident.insert(id);

        Ok(self.edges.entry(id).or_insert(Edge {
            source,
            target,
            payload,
        }))
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Returns whether a vertex was actually present.
    pub fn erase_vertex(&mut self, id: VertexId) -> bool {
        let Some(vertex) = self.vertices.remove(&id) else {
            return false;
        };
        self.insertion_order.retain(|&v| v != id);
        for edge_id in vertex.incident {
            if let Some(edge) = self.edges.get(&edge_id) {
                let other = if edge.source == id {
                    edge.target
                } else {
                    edge.source
                };
                if let Some(other_vertex) = self.vertices.get_mut(&other) {
                    other_vertex.incident.remove(&edge_id);
                }
            }
            self.edges.remove(&edge_id);
        }
        true
    }

    /// Removes an edge, clearing its id from both endpoints' incident sets.
    ///
    /// Returns whether an edge was actually present.
    pub fn erase_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.remove(&id) else {
            return false;
        };
        if let Some(vertex) = self.vertices.get_mut(&edge.source) {
            vertex.incident.remove(&id);
        }
        if let Some(vertex) = self.vertices.get_mut(&edge.target) {
            vertex.incident.remove(&id);
        }
        true
    }

    /// Looks up a vertex's payload.
    #[must_use]
    pub fn find_vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(&id).map(|v| &v.payload)
    }

    /// Looks up an edge.
    #[must_use]
    pub fn find_edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(&id)
    }

    /// Ids of edges incident to `id`, in no particular order.
    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|vertex| vertex.incident.iter().copied())
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> {
        self.vertices.iter().map(|(&id, v)| (id, &v.payload))
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.edges.iter().map(|(&id, e)| (id, e))
    }

    /// The first-inserted vertex still present in the graph, used as the
    /// BFS root by the assembler.
    #[must_use]
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.insertion_order.first().copied()
    }
}
