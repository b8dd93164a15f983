//! Kosaraju's two-pass SCC algorithm and the condensation ("supergraph").
//!
//! Pass one runs over the graph in natural order. Pass two runs over the
//! transpose in reverse finish order. After pass two, two vertices share a
//! tree root iff they are in the same SCC, and every edge between different
//! SCCs shows up as a cross edge of the transposed traversal.

use crate::domain::dfs::DfsRun;
use crate::domain::graph::DirectedGraph;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Condensation {
    supergraph: DirectedGraph,
    component_of: Vec<usize>,
}

impl Condensation {
    pub fn build(graph: &DirectedGraph) -> Self {
        let n = graph.vertex_count();

        let natural: Vec<usize> = (0..n).collect();
        let first = DfsRun::traverse(graph, &natural);

        let mut order: Vec<usize> = first.finish_order().to_vec();
        order.reverse();

        let transposed = graph.transpose();
        let (_, roots, cross_edges) = DfsRun::traverse(&transposed, &order).into_parts();

        // Every vertex is in `order`, so every vertex has a root.
        let roots: Vec<usize> = roots
            .into_iter()
            .enumerate()
            .map(|(v, r)| r.unwrap_or(v))
            .collect();

        let distinct: BTreeSet<usize> = roots.iter().copied().collect();
        let mut dense = vec![usize::MAX; n];
        for (i, &root) in distinct.iter().enumerate() {
            dense[root] = i;
        }

        let mut supergraph = DirectedGraph::new(distinct.len());
        let mut last_target: Vec<Option<usize>> = vec![None; distinct.len()];

        // A cross edge (u, v) of the transpose is the original edge v -> u.
        for &(u, v) in &cross_edges {
            let from = dense[roots[v]];
            let to = dense[roots[u]];

            // Skip only an immediate repeat of the last target added from `from`.
            if last_target[from] == Some(to) {
                continue;
            }
            supergraph.push_edge(from, to);
            last_target[from] = Some(to);
        }

        let component_of = roots.iter().map(|&r| dense[r]).collect();

        Self {
            supergraph,
            component_of,
        }
    }

    pub fn supergraph(&self) -> &DirectedGraph {
        &self.supergraph
    }

    pub fn into_supergraph(self) -> DirectedGraph {
        self.supergraph
    }

    /// Supergraph vertex of each original vertex.
    pub fn component_of(&self) -> &[usize] {
        &self.component_of
    }

    pub fn component_count(&self) -> usize {
        self.supergraph.vertex_count()
    }
}

impl DirectedGraph {
    /// Condensation of this graph: one vertex per SCC, ordered by the
    /// smallest-id tree root of the transposed pass, with an edge for each
    /// pair of SCCs joined by at least one original edge.
    pub fn build_condensation(&self) -> DirectedGraph {
        Condensation::build(self).into_supergraph()
    }
}
