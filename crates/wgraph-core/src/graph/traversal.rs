use crate::error::Result;
use crate::graph::{VertexId, WeightedGraph};

/// Trait for algorithms that traverse a [`WeightedGraph`] from a start vertex
pub trait Search<V> {
    /// What a completed traversal produces
    type Output;

    /// The graph this search reads from
    fn graph(&self) -> &WeightedGraph<V>;

    /// Run the traversal starting at `start`
    fn traverse(&self, start: VertexId) -> Result<Self::Output>;
}
