use crate::error::Result;
use crate::graph::algos::shared::{ensure_registered, VisitedSet};
use crate::graph::{Search, VertexId, WeightedGraph};
use std::collections::VecDeque;

/// State tracked during BFS traversal
struct BfsState {
    visited: VisitedSet,
    queue: VecDeque<VertexId>,
    order: Vec<VertexId>,
}

impl BfsState {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: VisitedSet::new(vertex_count),
            queue: VecDeque::new(),
            order: Vec::new(),
        }
    }

    /// Mark a vertex found and queue it for expansion
    fn discover(&mut self, vertex: VertexId) {
        if self.visited.insert(vertex) {
            self.order.push(vertex);
            self.queue.push_back(vertex);
        }
    }
}

/// Unweighted level-order traversal
#[derive(Debug)]
pub struct BreadthFirstSearch<'g, V> {
    graph: &'g WeightedGraph<V>,
}

impl<'g, V> BreadthFirstSearch<'g, V> {
    pub fn new(graph: &'g WeightedGraph<V>) -> Self {
        Self { graph }
    }
}

impl<V> Search<V> for BreadthFirstSearch<'_, V> {
    /// Vertices in the order they were discovered
    type Output = Vec<VertexId>;

    fn graph(&self) -> &WeightedGraph<V> {
        self.graph
    }

    /// Perform BFS traversal from `start`.
    ///
    /// Every vertex reachable from `start` appears exactly once; vertices at
    /// hop distance `k` come before those at `k + 1`, and neighbors are taken
    /// in adjacency-list order.
    #[tracing::instrument(skip(self), fields(start = %start, vertices = self.graph.vertex_count()))]
    fn traverse(&self, start: VertexId) -> Result<Vec<VertexId>> {
        ensure_registered(self.graph, start)?;

        let mut state = BfsState::new(self.graph.vertex_count());
        state.discover(start);

        // Main BFS loop
        while let Some(current) = state.queue.pop_front() {
            for &neighbor in self.graph.adjacent_vertices(current)? {
                state.discover(neighbor);
            }
        }

        tracing::debug!(visited = state.visited.len(), "bfs_complete");
        Ok(state.order)
    }
}
