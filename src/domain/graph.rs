use crate::domain::error::{GraphError, GraphResult};

/// Directed multigraph over the vertex ids `0..vertex_count`.
///
/// Adjacency lists keep insertion order. Parallel edges and self-loops are
/// stored as given, since traversal order downstream depends on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DirectedGraph {
    /// Graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Validated factory for counts that come from untrusted input.
    pub fn create_empty(vertex_count: i64) -> GraphResult<Self> {
        let n = usize::try_from(vertex_count).map_err(|_| {
            GraphError::invalid_argument(format!("negative vertex count: {vertex_count}"))
        })?;

        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency.try_reserve_exact(n).map_err(|_| {
            GraphError::invalid_argument(format!("vertex count {vertex_count} is too large"))
        })?;
        adjacency.resize_with(n, Vec::new);

        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Builds a graph by adding `edges` in list order.
    ///
    /// Every entry must name exactly two endpoints; that is checked for the
    /// whole list before any edge is added. Endpoints outside the vertex range
    /// fail with [`GraphError::OutOfRange`].
    pub fn from_edges<E: AsRef<[i64]>>(vertex_count: i64, edges: &[E]) -> GraphResult<Self> {
        let mut graph = Self::create_empty(vertex_count)?;

        if let Some((i, bad)) = edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.as_ref().len() != 2)
        {
            return Err(GraphError::invalid_argument(format!(
                "edge #{} has {} endpoints, expected exactly 2",
                i + 1,
                bad.as_ref().len()
            )));
        }

        for edge in edges {
            let pair = edge.as_ref();
            let u = graph.vertex_from_i64(pair[0])?;
            let v = graph.vertex_from_i64(pair[1])?;
            graph.add_edge(u, v)?;
        }

        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_adjacent(&self, u: usize, v: usize) -> GraphResult<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacency[u].contains(&v))
    }

    /// Neighbors of `u` in insertion order.
    pub fn adjacency_of(&self, u: usize) -> GraphResult<&[usize]> {
        self.check_vertex(u)?;
        Ok(&self.adjacency[u])
    }

    /// Appends `v` to `u`'s adjacency. No deduplication.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes the first `u -> v` edge if there is one; otherwise does nothing.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if let Some(pos) = self.adjacency[u].iter().position(|&w| w == v) {
            self.adjacency[u].remove(pos);
            self.edge_count -= 1;
        }
        Ok(())
    }

    /// Reversed graph. Edges are added walking `u` ascending and each
    /// adjacency list in order, which fixes the result's adjacency order.
    pub fn transpose(&self) -> DirectedGraph {
        let mut rev = DirectedGraph::new(self.vertex_count());
        for (u, outs) in self.adjacency.iter().enumerate() {
            for &v in outs {
                rev.adjacency[v].push(u);
            }
        }
        rev.edge_count = self.edge_count;
        rev
    }

    /// Iterates all edges as `(u, v)` pairs, grouped by source in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
    }

    /// Unchecked append for ids the caller derived from this graph's own range.
    pub(crate) fn push_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.vertex_count() && v < self.vertex_count());
        self.adjacency[u].push(v);
        self.edge_count += 1;
    }

    pub(crate) fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub(crate) fn check_vertex(&self, u: usize) -> GraphResult<()> {
        if u < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(
                i64::try_from(u).unwrap_or(i64::MAX),
                self.vertex_count(),
            ))
        }
    }

    fn vertex_from_i64(&self, raw: i64) -> GraphResult<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&u| u < self.vertex_count())
            .ok_or_else(|| GraphError::out_of_range(raw, self.vertex_count()))
    }
}

/// Strongly connected components of a graph together with its condensation.
#[derive(Debug, Clone)]
pub struct SccResult {
    /// Dense component index for every vertex of the input graph.
    pub component_of: Vec<usize>,
    /// Members of each component, sorted ascending.
    pub components: Vec<Vec<usize>>,
    /// A component is cyclic if it has more than one vertex or a self-loop.
    pub cyclic_component: Vec<bool>,
    /// One vertex per component; vertex `c` stands for `components[c]`.
    pub condensation: DirectedGraph,
}
