//! Checks over a deterministic family of pseudo-random graphs.

use kosaraju_supergraph::domain::condensation::Condensation;
use kosaraju_supergraph::domain::dfs::DfsRun;
use kosaraju_supergraph::domain::graph::DirectedGraph;
use std::collections::BTreeSet;

struct Lcg(u64);

impl Lcg {
    fn step(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.step() % bound
    }
}

fn graph_family() -> Vec<DirectedGraph> {
    let mut rng = Lcg(0x5eed);
    let mut out = Vec::new();
    for n in 0..12i64 {
        for _ in 0..8 {
            let m = if n == 0 { 0 } else { rng.below((n * n) as u64 + 1) };
            let edges: Vec<[i64; 2]> = (0..m)
                .map(|_| [rng.below(n as u64) as i64, rng.below(n as u64) as i64])
                .collect();
            out.push(DirectedGraph::from_edges(n, &edges).expect("graph"));
        }
    }
    out
}

/// reach[u][v]: v is reachable from u (every vertex reaches itself).
fn reachability(g: &DirectedGraph) -> Vec<Vec<bool>> {
    let n = g.vertex_count();
    let mut reach = vec![vec![false; n]; n];
    for (s, row) in reach.iter_mut().enumerate() {
        let mut stack = vec![s];
        row[s] = true;
        while let Some(u) = stack.pop() {
            for &v in g.adjacency_of(u).expect("adj") {
                if !row[v] {
                    row[v] = true;
                    stack.push(v);
                }
            }
        }
    }
    reach
}

fn second_pass(g: &DirectedGraph) -> DfsRun {
    let natural: Vec<usize> = (0..g.vertex_count()).collect();
    let first = DfsRun::run(g, &natural).expect("first pass");
    let order: Vec<usize> = first.finish_order().iter().rev().copied().collect();
    DfsRun::run(&g.transpose(), &order).expect("second pass")
}

#[test]
fn finish_order_is_a_permutation() {
    for g in graph_family() {
        let natural: Vec<usize> = (0..g.vertex_count()).collect();
        let run = DfsRun::run(&g, &natural).expect("run");
        let mut seen = run.finish_order().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, natural);
    }
}

#[test]
fn second_pass_roots_match_mutual_reachability() {
    for g in graph_family() {
        let reach = reachability(&g);
        let run = second_pass(&g);
        let n = g.vertex_count();
        for x in 0..n {
            for y in 0..n {
                let same_scc = reach[x][y] && reach[y][x];
                assert_eq!(
                    run.root_of(x) == run.root_of(y),
                    same_scc,
                    "vertices {x} and {y} in {g:?}"
                );
            }
        }
    }
}

#[test]
fn condensation_has_exactly_the_crossing_pairs() {
    for g in graph_family() {
        let c = Condensation::build(&g);
        let comp = c.component_of();

        let expected: BTreeSet<(usize, usize)> = g
            .edges()
            .map(|(u, v)| (comp[u], comp[v]))
            .filter(|(a, b)| a != b)
            .collect();
        let actual: Vec<(usize, usize)> = c.supergraph().edges().collect();
        let actual_set: BTreeSet<(usize, usize)> = actual.iter().copied().collect();

        assert!(actual.iter().all(|(a, b)| a != b), "self-loop in {g:?}");
        assert_eq!(actual.len(), actual_set.len(), "parallel edge in {g:?}");
        assert_eq!(actual_set, expected);
    }
}

#[test]
fn component_ids_are_dense() {
    for g in graph_family() {
        let c = Condensation::build(&g);
        let ids: BTreeSet<usize> = c.component_of().iter().copied().collect();
        assert_eq!(ids, (0..c.component_count()).collect());
    }
}

#[test]
fn transpose_is_an_involution_on_edge_multisets() {
    for g in graph_family() {
        let mut a: Vec<(usize, usize)> = g.edges().collect();
        let mut b: Vec<(usize, usize)> = g.transpose().transpose().edges().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
