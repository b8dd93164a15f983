//! Depth-first traversal with finish ordering, tree-root labels and
//! cross-edge detection.
//!
//! The traversal runs on an explicit stack of `(vertex, next neighbor index)`
//! frames. A frame advances one neighbor at a time, so neighbors are examined
//! in the same order a recursive visit would examine them, and the finish
//! order, roots and cross edges match the recursive formulation exactly.

use crate::domain::error::GraphResult;
use crate::domain::graph::DirectedGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Outcome of one traversal. The coloring used during the run is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsRun {
    finish_order: Vec<usize>,
    roots: Vec<Option<usize>>,
    cross_edges: Vec<(usize, usize)>,
}

impl DfsRun {
    /// Traverses `graph`, starting a new tree at each still-unvisited vertex
    /// of `order`, in that order.
    ///
    /// `order` does not have to cover every vertex; vertices never reached
    /// have no root and are absent from the finish order.
    pub fn run(graph: &DirectedGraph, order: &[usize]) -> GraphResult<Self> {
        for &u in order {
            graph.check_vertex(u)?;
        }
        Ok(Self::traverse(graph, order))
    }

    /// Vertices in the order their exploration completed.
    pub fn finish_order(&self) -> &[usize] {
        &self.finish_order
    }

    /// Start vertex of the tree that first discovered `v`.
    pub fn root_of(&self, v: usize) -> Option<usize> {
        self.roots.get(v).copied().flatten()
    }

    pub fn roots(&self) -> &[Option<usize>] {
        &self.roots
    }

    /// Edges `(u, v)` seen while exploring `u` whose target was already
    /// finished under a different root.
    pub fn cross_edges(&self) -> &[(usize, usize)] {
        &self.cross_edges
    }

    pub(crate) fn into_parts(self) -> (Vec<usize>, Vec<Option<usize>>, Vec<(usize, usize)>) {
        (self.finish_order, self.roots, self.cross_edges)
    }

    /// `order` must only hold valid vertex ids.
    pub(crate) fn traverse(graph: &DirectedGraph, order: &[usize]) -> Self {
        let n = graph.vertex_count();
        let mut color = vec![Color::Unvisited; n];
        let mut run = DfsRun {
            finish_order: Vec::with_capacity(n),
            roots: vec![None; n],
            cross_edges: Vec::new(),
        };
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for &start in order {
            if color[start] != Color::Unvisited {
                continue;
            }

            run.roots[start] = Some(start);
            color[start] = Color::InProgress;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (u, next_i) = *frame;
                let outs = graph.neighbors(u);

                if next_i == outs.len() {
                    stack.pop();
                    color[u] = Color::Done;
                    run.finish_order.push(u);
                    continue;
                }

                frame.1 += 1;
                let v = outs[next_i];
                match color[v] {
                    Color::Unvisited => {
                        run.roots[v] = run.roots[u];
                        color[v] = Color::InProgress;
                        stack.push((v, 0));
                    }
                    Color::Done if run.roots[u] != run.roots[v] => {
                        run.cross_edges.push((u, v));
                    }
                    // back edge, or finished in the same tree
                    _ => {}
                }
            }
        }

        run
    }
}
