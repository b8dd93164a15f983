use crate::domain::condensation::Condensation;
use crate::domain::graph::{DirectedGraph, SccResult};
use crate::domain::traits::SccDetector;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &DirectedGraph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &DirectedGraph) -> SccResult {
    let condensation = Condensation::build(graph);
    let component_of = condensation.component_of().to_vec();

    let mut components: Vec<Vec<usize>> = vec![Vec::new(); condensation.component_count()];
    // ascending v keeps each member list sorted
    for (v, &c) in component_of.iter().enumerate() {
        components[c].push(v);
    }

    let mut cyclic_component = vec![false; components.len()];

    for (cid, comp) in components.iter().enumerate() {
        if comp.len() > 1 {
            cyclic_component[cid] = true;
            continue;
        }
        let only = comp[0];
        if graph.neighbors(only).iter().any(|&v| v == only) {
            cyclic_component[cid] = true;
        }
    }

    SccResult {
        component_of,
        components,
        cyclic_component,
        condensation: condensation.into_supergraph(),
    }
}
