use crate::domain::graph::{DirectedGraph, SccResult};

pub trait SccDetector {
    fn compute_scc(&self, graph: &DirectedGraph) -> SccResult;
}

/// Supplies the raw vertex count and edge list a graph is built from.
///
/// Values are unvalidated; `DirectedGraph::from_edges` rejects bad ones.
pub trait EdgeSource {
    fn vertex_count(&self) -> i64;
    fn edges(&self) -> &[Vec<i64>];
}
