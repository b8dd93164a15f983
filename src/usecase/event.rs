use crate::usecase::stats::CondenseStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        vertices: usize,
        edges: usize,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    SupergraphBuilt {
        vertices: usize,
        edges: usize,
    },

    Finished {
        stats: CondenseStats,
    },
}
