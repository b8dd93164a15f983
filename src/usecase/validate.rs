use crate::domain::graph::DirectedGraph;
use crate::domain::traits::EdgeSource;
use anyhow::{Context, Result};

/// Runs every construction check on `source` and returns `(vertices, edges)`.
pub fn validate_graph(source: &dyn EdgeSource) -> Result<(usize, usize)> {
    let graph = DirectedGraph::from_edges(source.vertex_count(), source.edges())
        .context("building graph from input")?;
    Ok((graph.vertex_count(), graph.edge_count()))
}
