use crate::error::{GraphError, Result};
use crate::graph::{ShortestPaths, VertexId, WeightedGraph};
use serde::Serialize;
use std::fmt;

/// BFS traversal output, labelled with vertex payloads
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub start: String,
    pub order: Vec<String>,
    pub visited: usize,
}

impl TraversalResult {
    pub fn new<V: fmt::Display>(
        graph: &WeightedGraph<V>,
        start: VertexId,
        order: &[VertexId],
    ) -> Self {
        TraversalResult {
            start: graph.label(start),
            order: order.iter().map(|v| graph.label(*v)).collect(),
            visited: order.len(),
        }
    }
}

/// Path result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub vertices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub path_length: usize,
}

impl PathResult {
    /// Build the path report for `to`; an unreachable target yields `found: false`
    pub fn new<V: fmt::Display>(
        graph: &WeightedGraph<V>,
        paths: &ShortestPaths,
        to: VertexId,
    ) -> Result<Self> {
        let from = graph.label(paths.source());
        let (vertices, distance) = match paths.shortest_path(to) {
            Ok(path) => (path, Some(paths.shortest_distance(to)?)),
            Err(GraphError::NoPath { .. }) => (Vec::new(), None),
            Err(e) => return Err(e),
        };

        Ok(PathResult {
            from,
            to: graph.label(to),
            found: !vertices.is_empty(),
            path_length: vertices.len().saturating_sub(1),
            vertices: vertices.iter().map(|v| graph.label(*v)).collect(),
            distance,
        })
    }
}

/// Distance entry for one vertex of a Dijkstra run
#[derive(Debug, Clone, Serialize)]
pub struct DistanceEntry {
    pub vertex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl DistanceEntry {
    /// One entry per registered vertex; unreachable vertices carry no distance
    pub fn collect<V: fmt::Display>(
        graph: &WeightedGraph<V>,
        paths: &ShortestPaths,
    ) -> Result<Vec<Self>> {
        graph
            .vertices()
            .into_iter()
            .map(|vertex| {
                let distance = paths.shortest_distance(vertex)?;
                let previous = paths.previous_vertex(vertex)?;
                Ok(DistanceEntry {
                    vertex: graph.label(vertex),
                    distance: distance.is_finite().then_some(distance),
                    previous: previous.map(|p| graph.label(p)),
                })
            })
            .collect()
    }
}

/// Edge listing entry, labelled with vertex payloads
#[derive(Debug, Clone, Serialize)]
pub struct EdgeEntry {
    pub source: String,
    pub destination: String,
    pub weight: f64,
}

impl EdgeEntry {
    pub fn collect<V: fmt::Display>(graph: &WeightedGraph<V>) -> Vec<Self> {
        graph
            .edges()
            .iter()
            .map(|edge| EdgeEntry {
                source: graph.label(edge.source),
                destination: graph.label(edge.destination),
                weight: edge.weight,
            })
            .collect()
    }
}

impl fmt::Display for EdgeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} -> {}, weight: {})",
            self.source, self.destination, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BreadthFirstSearch, DijkstraSearch, Search};

    fn line_graph() -> (WeightedGraph<&'static str>, VertexId, VertexId, VertexId) {
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        graph.add_edge(a, b, 1.5).unwrap();
        (graph, a, b, c)
    }

    #[test]
    fn test_traversal_result_labels() {
        let (graph, a, _, _) = line_graph();
        let order = BreadthFirstSearch::new(&graph).traverse(a).unwrap();
        let result = TraversalResult::new(&graph, a, &order);

        assert_eq!(result.start, "A");
        assert_eq!(result.order, vec!["A", "B"]);
        assert_eq!(result.visited, 2);
    }

    #[test]
    fn test_path_result_found() {
        let (graph, a, b, _) = line_graph();
        let paths = DijkstraSearch::new(&graph).traverse(a).unwrap();
        let result = PathResult::new(&graph, &paths, b).unwrap();

        assert!(result.found);
        assert_eq!(result.vertices, vec!["A", "B"]);
        assert_eq!(result.distance, Some(1.5));
        assert_eq!(result.path_length, 1);
    }

    #[test]
    fn test_path_result_not_found_serializes_without_distance() {
        let (graph, a, _, c) = line_graph();
        let paths = DijkstraSearch::new(&graph).traverse(a).unwrap();
        let result = PathResult::new(&graph, &paths, c).unwrap();

        assert!(!result.found);
        assert!(result.vertices.is_empty());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["found"], false);
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn test_path_result_unknown_target() {
        let (graph, a, _, _) = line_graph();
        let paths = DijkstraSearch::new(&graph).traverse(a).unwrap();
        assert!(PathResult::new(&graph, &paths, VertexId::new(0, 8)).is_err());
    }

    #[test]
    fn test_distance_entries() {
        let (graph, a, _, _) = line_graph();
        let paths = DijkstraSearch::new(&graph).traverse(a).unwrap();
        let entries = DistanceEntry::collect(&graph, &paths).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].distance, Some(0.0));
        assert_eq!(entries[0].previous, None);
        assert_eq!(entries[1].previous.as_deref(), Some("A"));
        assert_eq!(entries[2].distance, None);
    }

    #[test]
    fn test_edge_entries() {
        let (graph, _, _, _) = line_graph();
        let entries = EdgeEntry::collect(&graph);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, "A");
        assert_eq!(entries[0].destination, "B");
        assert_eq!(entries[0].weight, 1.5);
        assert_eq!(entries[0].to_string(), "(A -> B, weight: 1.5)");
    }
}
