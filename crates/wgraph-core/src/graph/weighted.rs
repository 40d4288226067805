//! Directed weighted graph backed by a vertex arena

use crate::error::{GraphError, Result};
use crate::graph::vertex::{next_graph_tag, Vertex, VertexId};
use serde::Serialize;
use std::fmt;

/// A directed edge with its current weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: f64,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} -> {}, weight: {})",
            self.source, self.destination, self.weight
        )
    }
}

/// Directed graph with `f64` edge weights.
///
/// Vertices live in an arena and are addressed by [`VertexId`]. Each source
/// keeps its destinations in insertion order, while the weight for a
/// `(source, destination)` pair is stored on the source vertex itself.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    tag: u64,
    vertices: Vec<Vertex<V>>,
    adjacency: Vec<Vec<VertexId>>,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedGraph<V> {
    pub fn new() -> Self {
        Self {
            tag: next_graph_tag(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Register a vertex holding `data` and return its handle
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId::new(self.tag, self.vertices.len());
        self.vertices.push(Vertex::new(data));
        self.adjacency.push(Vec::new());
        tracing::debug!(vertex = %id, "add_vertex");
        id
    }

    /// Add a directed edge from `source` to `destination`.
    ///
    /// Both endpoints must already be registered. Adding the same pair twice
    /// lists the destination twice, and the weight lookup returns the most
    /// recent weight. Negative, NaN and infinite weights are rejected; on any
    /// error the graph is left unchanged. Path sums that overflow `f64` still
    /// come out infinite, so such targets are reported unreachable.
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: f64) -> Result<()> {
        self.validate(&[source, destination])?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }

        self.vertices[source.index()].add_adjacent_vertex(destination, weight);
        self.adjacency[source.index()].push(destination);
        tracing::debug!(%source, %destination, weight, "add_edge");
        Ok(())
    }

    /// One-hop destinations of `vertex`, in the order the edges were added
    pub fn adjacent_vertices(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.validate(&[vertex])?;
        Ok(&self.adjacency[vertex.index()])
    }

    /// Weight of the edge from `source` to `destination`
    pub fn weight(&self, source: VertexId, destination: VertexId) -> Result<f64> {
        self.validate(&[source, destination])?;
        self.vertices[source.index()]
            .weight_to(destination)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: source,
                to: destination,
            })
    }

    /// All registered vertices, in registration order
    pub fn vertices(&self) -> Vec<VertexId> {
        (0..self.vertices.len())
            .map(|index| VertexId::new(self.tag, index))
            .collect()
    }

    /// Every adjacency entry with its current weight, grouped by source in
    /// registration order
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (index, destinations) in self.adjacency.iter().enumerate() {
            let vertex = &self.vertices[index];
            for &destination in destinations {
                if let Some(weight) = vertex.weight_to(destination) {
                    edges.push(Edge {
                        source: VertexId::new(self.tag, index),
                        destination,
                        weight,
                    });
                }
            }
        }
        edges
    }

    pub fn vertex(&self, vertex: VertexId) -> Result<&Vertex<V>> {
        self.validate(&[vertex])?;
        Ok(&self.vertices[vertex.index()])
    }

    /// Payload stored on `vertex`
    pub fn data(&self, vertex: VertexId) -> Result<&V> {
        self.vertex(vertex).map(Vertex::data)
    }

    /// True if `vertex` was issued by this graph
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.graph_tag() == self.tag && vertex.index() < self.vertices.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of adjacency entries, duplicates included
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn validate(&self, vertices: &[VertexId]) -> Result<()> {
        match vertices.iter().find(|v| !self.contains(**v)) {
            Some(&vertex) => Err(GraphError::unknown_vertex(vertex)),
            None => Ok(()),
        }
    }
}

impl<V: fmt::Display> WeightedGraph<V> {
    /// Display label for `vertex`, falling back to the handle for foreign ids
    pub fn label(&self, vertex: VertexId) -> String {
        match self.vertex(vertex) {
            Ok(v) => v.to_string(),
            Err(_) => vertex.to_string(),
        }
    }
}
