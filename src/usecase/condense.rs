use crate::domain::graph::DirectedGraph;
use crate::domain::traits::{EdgeSource, SccDetector};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::CondenseStats;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// Builds the graph described by `source` and condenses it.
pub async fn condense_graph(
    source: &dyn EdgeSource,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(DirectedGraph, CondenseStats)> {
    let mut stats = CondenseStats::default();

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = DirectedGraph::from_edges(source.vertex_count(), source.edges())
        .context("building graph from input")?;
    stats.vertices = graph.vertex_count();
    stats.edges = graph.edge_count();
    emit(
        &sink,
        AppEvent::GraphLoaded {
            vertices: stats.vertices,
            edges: stats.edges,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc_res = scc.compute_scc(&graph);
    stats.components = scc_res.components.len();
    stats.cyclic_components = scc_res.cyclic_component.iter().filter(|&&b| b).count();
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: stats.vertices,
            edges: stats.edges,
            components: stats.components,
            cyclic_components: stats.cyclic_components,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    let supergraph = scc_res.condensation;
    stats.supergraph_vertices = supergraph.vertex_count();
    stats.supergraph_edges = supergraph.edge_count();
    emit(
        &sink,
        AppEvent::SupergraphBuilt {
            vertices: stats.supergraph_vertices,
            edges: stats.supergraph_edges,
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((supergraph, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
