//! Random instances shared by the unit tests

use std::ops::Range;

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::{gens::GeneratorSubstructures, prelude::*};

/// Creates a list of at most `m_ub` random edges for nodes `0..n`: normalized, sorted,
/// without duplicates and without loops
pub fn random_simple_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
        .filter(|e| !e.is_loop())
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// A random tree on `n` nodes (labels shuffled) plus up to `extra` further random edges
pub fn random_connected_graph<R: Rng>(rng: &mut R, n: NumNodes, extra: NumEdges) -> WeightedGraph {
    let mut labels = (0..n).collect_vec();
    labels.shuffle(rng);

    let mut graph = WeightedGraph::new(n);
    for v in 1..n {
        let u = rng.random_range(0..v);
        graph.add_edge(labels[u as usize], labels[v as usize]);
    }

    for Edge(u, v) in random_simple_edges(rng, n, extra) {
        graph.try_add_edge(u, v);
    }

    graph
}

/// A connected graph with only even degrees on `n >= 3` nodes: a Hamiltonian cycle in random
/// order plus up to `triangles` random triangles sharing no edge with the rest of the graph
pub fn random_eulerian_graph<R: Rng>(rng: &mut R, n: NumNodes, triangles: NumNodes) -> WeightedGraph {
    assert!(n >= 3);

    let mut order = (0..n).collect_vec();
    order.shuffle(rng);

    let mut graph = WeightedGraph::new(n);
    graph.connect_cycle(order);

    for _ in 0..triangles {
        let mut corners = (0..3).map(|_| rng.random_range(0..n)).collect_vec();
        corners.sort_unstable();
        corners.dedup();
        if corners.len() < 3 {
            continue;
        }

        let sides = corners.iter().copied().tuple_combinations().collect_vec();
        if sides.iter().any(|&(u, v)| graph.has_edge(u, v)) {
            continue;
        }
        graph.add_edges(sides);
    }

    graph
}

/// Assigns a uniform random weight from `range` to every edge
pub fn assign_random_weights<R: Rng>(rng: &mut R, graph: &mut WeightedGraph, range: Range<Weight>) {
    graph.assign_weights(|_| rng.random_range(range.clone()));
}

/// Routes `tracing` output of the library into the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
