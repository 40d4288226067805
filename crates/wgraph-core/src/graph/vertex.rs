use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of graph tags; zero is never handed out
static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_graph_tag() -> u64 {
    NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Opaque handle identifying a vertex inside a [`WeightedGraph`].
///
/// Handles are arena indices tagged with the graph that issued them; two
/// vertices with equal payloads still get distinct handles. A handle that
/// was never issued by a graph, including one issued by a different graph,
/// is rejected by that graph with `UnknownVertex`. A cloned graph keeps its
/// tag, so handles stay valid in the clone.
///
/// [`WeightedGraph`]: crate::graph::WeightedGraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: u64,
    index: usize,
}

impl VertexId {
    pub(crate) fn new(graph: u64, index: usize) -> Self {
        VertexId { graph, index }
    }

    /// Arena index backing this handle
    pub fn index(self) -> usize {
        self.index
    }

    /// Tag of the graph that issued this handle
    pub(crate) fn graph_tag(self) -> u64 {
        self.graph
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index as u64)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

/// A graph node: a payload plus the weights of its outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    data: V,
    adjacent: HashMap<VertexId, f64>,
}

impl<V> Vertex<V> {
    pub fn new(data: V) -> Self {
        Self {
            data,
            adjacent: HashMap::new(),
        }
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    /// Record the weight of the edge to `destination`.
    /// A later call for the same destination replaces the earlier weight.
    pub fn add_adjacent_vertex(&mut self, destination: VertexId, weight: f64) {
        self.adjacent.insert(destination, weight);
    }

    /// Map of adjacent vertices and their edge weights
    pub fn adjacent_vertices(&self) -> &HashMap<VertexId, f64> {
        &self.adjacent
    }

    /// Weight of the edge to `destination`, if one was added
    pub fn weight_to(&self, destination: VertexId) -> Option<f64> {
        self.adjacent.get(&destination).copied()
    }
}

impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_weight_last_write_wins() {
        let mut vertex = Vertex::new("A");
        let b = VertexId::new(0, 1);
        vertex.add_adjacent_vertex(b, 2.0);
        vertex.add_adjacent_vertex(b, 7.5);

        assert_eq!(vertex.weight_to(b), Some(7.5));
        assert_eq!(vertex.adjacent_vertices().len(), 1);
        assert_eq!(vertex.weight_to(VertexId::new(0, 2)), None);
    }

    #[test]
    fn test_vertex_display_uses_payload() {
        let vertex = Vertex::new("Berlin");
        assert_eq!(vertex.to_string(), "Berlin");
        assert_eq!(*vertex.data(), "Berlin");
    }

    #[test]
    fn test_vertex_id_display_and_index() {
        let id = VertexId::new(0, 3);
        assert_eq!(id.index(), 3);
        assert_eq!(id.to_string(), "v3");
    }
}
