use crate::error::{GraphError, Result};
use crate::graph::algos::shared::ensure_registered;
use crate::graph::{Search, VertexId, WeightedGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(vertex_count: usize) -> Self {
        Self {
            distances: vec![f64::INFINITY; vertex_count],
            predecessors: vec![None; vertex_count],
            heap: BinaryHeap::new(),
        }
    }

    fn push(&mut self, vertex: VertexId, distance: f64) {
        self.heap.push(Reverse(HeapEntry { vertex, distance }));
    }

    /// Relax the edge `current -> neighbor`. Returns true if the neighbor improved.
    fn relax(&mut self, current: VertexId, neighbor: VertexId, weight: f64) -> bool {
        let candidate = self.distances[current.index()] + weight;
        if candidate < self.distances[neighbor.index()] {
            self.distances[neighbor.index()] = candidate;
            self.predecessors[neighbor.index()] = Some(current);
            self.push(neighbor, candidate);
            true
        } else {
            false
        }
    }
}

/// Single-source shortest paths over non-negative edge weights
#[derive(Debug)]
pub struct DijkstraSearch<'g, V> {
    graph: &'g WeightedGraph<V>,
}

impl<'g, V> DijkstraSearch<'g, V> {
    pub fn new(graph: &'g WeightedGraph<V>) -> Self {
        Self { graph }
    }
}

impl<V> Search<V> for DijkstraSearch<'_, V> {
    type Output = ShortestPaths;

    fn graph(&self) -> &WeightedGraph<V> {
        self.graph
    }

    /// Compute shortest distances and predecessors from `start` to every vertex.
    ///
    /// The frontier uses lazy deletion: a relaxed vertex is pushed again with
    /// its new distance, and any popped entry whose distance is larger than
    /// the recorded best is skipped as stale.
    #[tracing::instrument(skip(self), fields(start = %start, vertices = self.graph.vertex_count()))]
    fn traverse(&self, start: VertexId) -> Result<ShortestPaths> {
        ensure_registered(self.graph, start)?;

        // Initialize distances and set start vertex distance to 0
        let mut state = DijkstraState::new(self.graph.vertex_count());
        state.distances[start.index()] = 0.0;
        state.push(start, 0.0);

        let mut settled = 0usize;

        // Main Dijkstra loop
        while let Some(Reverse(HeapEntry { vertex, distance })) = state.heap.pop() {
            if distance > state.distances[vertex.index()] {
                tracing::trace!(%vertex, distance, "skip_stale_entry");
                continue;
            }
            settled += 1;

            for &neighbor in self.graph.adjacent_vertices(vertex)? {
                let weight = self.graph.weight(vertex, neighbor)?;
                if state.relax(vertex, neighbor, weight) {
                    tracing::trace!(from = %vertex, to = %neighbor, weight, "relax");
                }
            }
        }

        tracing::debug!(settled, "dijkstra_complete");
        Ok(ShortestPaths {
            source: start,
            distances: state.distances,
            predecessors: state.predecessors,
        })
    }
}

/// Distances and predecessor links produced by one Dijkstra run.
///
/// The result is detached from the graph it was computed on; it can be kept
/// and queried after the graph changes, but then reflects the old graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    /// The start vertex of the run
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, or infinity if `vertex` is unreachable
    pub fn shortest_distance(&self, vertex: VertexId) -> Result<f64> {
        Ok(self.distances[self.slot(vertex)?])
    }

    /// Vertex preceding `vertex` on its shortest path
    pub fn previous_vertex(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        Ok(self.predecessors[self.slot(vertex)?])
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.shortest_distance(vertex).is_ok_and(|d| d.is_finite())
    }

    /// Shortest path from the source to `destination`, both ends included.
    ///
    /// Returns `NoPath` when `destination` cannot be reached.
    pub fn shortest_path(&self, destination: VertexId) -> Result<Vec<VertexId>> {
        if !self.shortest_distance(destination)?.is_finite() {
            return Err(GraphError::NoPath {
                from: self.source,
                to: destination,
            });
        }

        // Traverse backwards from destination to source
        let mut path = vec![destination];
        let mut current = destination;
        while current != self.source {
            match self.predecessors[current.index()] {
                Some(previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => {
                    return Err(GraphError::NoPath {
                        from: self.source,
                        to: destination,
                    });
                }
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Every vertex of the graph paired with its distance, in registration order
    pub fn distances(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        let tag = self.source.graph_tag();
        self.distances
            .iter()
            .enumerate()
            .map(move |(index, distance)| (VertexId::new(tag, index), *distance))
    }

    /// Index of `vertex` in the result vectors; handles from other graphs are rejected
    fn slot(&self, vertex: VertexId) -> Result<usize> {
        let same_graph = vertex.graph_tag() == self.source.graph_tag();
        if same_graph && vertex.index() < self.distances.len() {
            Ok(vertex.index())
        } else {
            Err(GraphError::unknown_vertex(vertex))
        }
    }
}
