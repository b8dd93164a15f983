use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CondenseStats {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub supergraph_vertices: usize,
    pub supergraph_edges: usize,
}
