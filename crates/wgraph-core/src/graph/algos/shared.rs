use crate::error::{GraphError, Result};
use crate::graph::{VertexId, WeightedGraph};

/// Fail with `UnknownVertex` unless `start` belongs to `graph`
pub fn ensure_registered<V>(graph: &WeightedGraph<V>, start: VertexId) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(GraphError::unknown_vertex(start))
    }
}

/// Membership set over the vertices of a single graph, addressed by index
#[derive(Debug, Clone)]
pub struct VisitedSet {
    flags: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    /// Create an empty set able to hold `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            flags: vec![false; vertex_count],
            len: 0,
        }
    }

    /// Mark `vertex` visited. Returns false if it was already marked.
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        match self.flags.get_mut(vertex.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.flags.get(vertex.index()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visited_set_insert_once() {
        let mut visited = VisitedSet::new(3);
        let v = VertexId::new(0, 1);

        assert!(visited.is_empty());
        assert!(visited.insert(v));
        assert!(!visited.insert(v));
        assert!(visited.contains(v));
        assert!(!visited.contains(VertexId::new(0, 0)));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_visited_set_ignores_out_of_range() {
        let mut visited = VisitedSet::new(2);
        assert!(!visited.insert(VertexId::new(0, 5)));
        assert!(!visited.contains(VertexId::new(0, 5)));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_ensure_registered() {
        let mut graph = WeightedGraph::new();
        let a = graph.add_vertex('a');

        assert!(ensure_registered(&graph, a).is_ok());
        assert!(matches!(
            ensure_registered(&graph, VertexId::new(0, 1)),
            Err(GraphError::UnknownVertex { .. })
        ));
    }
}
