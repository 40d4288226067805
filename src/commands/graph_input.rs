//! Build a labelled graph from command-line arguments

use std::collections::HashMap;

use wgraph_core::error::{GraphError, Result};
use wgraph_core::graph::{VertexId, WeightedGraph};

use crate::cli::GraphArgs;

/// Graph whose vertices carry their command-line names
#[derive(Debug, Default)]
pub struct LabelledGraph {
    pub graph: WeightedGraph<String>,
    ids: HashMap<String, VertexId>,
}

impl LabelledGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `--vertex` names first, then edge endpoints in order of appearance
    pub fn from_args(args: &GraphArgs) -> Result<Self> {
        let mut labelled = Self::new();
        for name in &args.vertices {
            if name.trim().is_empty() {
                wgraph_core::bail_usage!("vertex names cannot be empty");
            }
            labelled.vertex(name);
        }
        for edge in &args.edges {
            labelled.edge(&edge.source, &edge.destination, edge.weight)?;
        }
        tracing::debug!(
            vertices = labelled.graph.vertex_count(),
            edges = labelled.graph.edge_count(),
            "build_graph"
        );
        Ok(labelled)
    }

    /// Handle for `name`, registering it on first sight
    pub fn vertex(&mut self, name: &str) -> VertexId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.graph.add_vertex(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn edge(&mut self, source: &str, destination: &str, weight: f64) -> Result<()> {
        let source = self.vertex(source);
        let destination = self.vertex(destination);
        self.graph.add_edge(source, destination, weight)
    }

    /// Look up an existing vertex by name
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(name))
    }
}

/// Sample graph used by `wgraph demo`
pub fn demo_graph() -> Result<LabelledGraph> {
    let mut labelled = LabelledGraph::new();
    for name in ["A", "B", "C", "D", "E", "F"] {
        labelled.vertex(name);
    }

    let edges = [
        ("A", "B", 2.0),
        ("A", "C", 4.0),
        ("B", "D", 3.0),
        ("B", "E", 1.0),
        ("C", "D", 2.0),
        ("D", "E", 2.0),
        ("D", "F", 4.0),
        ("E", "F", 1.0),
    ];
    for (source, destination, weight) in edges {
        labelled.edge(source, destination, weight)?;
    }
    Ok(labelled)
}
