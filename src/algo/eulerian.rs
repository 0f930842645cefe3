/*!
# Eulerian Circuits

A graph has an Eulerian circuit (a closed walk using every edge exactly once) iff every node
has even degree and all nodes with at least one edge lie in a single connected component.
Isolated nodes do not matter. A graph without edges has the empty circuit.

Circuits are constructed with Hierholzer's algorithm: walk along unused edges until the walk
closes, then splice in closed sub-walks at nodes that still have unused edges. The
implementation keeps the current walk on an explicit stack and emits edges when backtracking,
which performs the splicing implicitly.
*/

use super::*;

/// Eulerian circuit detection and construction
pub trait Eulerian: EdgeWeights + Sized {
    /// Returns *true* if the graph has an Eulerian circuit
    fn has_eulerian_circuit(&self) -> bool {
        if self.degrees().any(|d| d % 2 == 1) {
            return false;
        }
        let mut components = ConnectedComponents::new(self, true);
        components.next();
        components.next().is_none()
    }

    /// Returns an Eulerian circuit as a sequence of edges in walking direction, or `None`
    /// if none exists. The walk starts at the smallest non-isolated node.
    fn eulerian_circuit(&self) -> Option<Vec<Edge>> {
        Hierholzer::new(self).compute()
    }
}

impl<G> Eulerian for G where G: EdgeWeights + Sized {}

/// Configurable Hierholzer search
pub struct Hierholzer<'a, G>
where
    G: EdgeWeights,
{
    graph: &'a G,
    start: Option<Node>,
}

impl<'a, G> Hierholzer<'a, G>
where
    G: EdgeWeights,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph, start: None }
    }

    /// Sets the node the circuit starts and ends at. If the node is isolated
    /// while the graph has edges, no circuit through it exists and `compute` returns `None`.
    pub fn set_start(&mut self, start: Node) {
        self.start = Some(start);
    }

    pub fn start(mut self, start: Node) -> Self {
        self.set_start(start);
        self
    }

    /// Runs the search; `None` if the graph has no Eulerian circuit (through the start node)
    pub fn compute(self) -> Option<Vec<Edge>> {
        if !self.graph.has_eulerian_circuit() {
            return None;
        }

        let m = self.graph.number_of_edges();
        if m == 0 {
            return Some(Vec::new());
        }

        let start = match self.start {
            Some(u) if !self.graph.has_vertex(u) || self.graph.is_singleton(u) => return None,
            Some(u) => u,
            None => self.graph.vertices_no_singletons().next()?,
        };

        // local copy of the incidence lists; `cursor[u]` skips entries that are already used
        let incidences: Vec<Vec<(Node, EdgeId)>> = self
            .graph
            .vertices()
            .map(|u| self.graph.incident_edges(u).collect())
            .collect();
        let mut cursor = vec![0usize; incidences.len()];
        let mut used = EdgeBitSet::new(m);

        // walk stack of (node, node we came from)
        let mut stack: Vec<(Node, Option<Node>)> = vec![(start, None)];
        let mut circuit = Vec::with_capacity(m as usize);

        while let Some(&(u, _)) = stack.last() {
            let nbs = &incidences[u as usize];
            let pos = &mut cursor[u as usize];
            while *pos < nbs.len() && used.get_bit(nbs[*pos].1) {
                *pos += 1;
            }

            if let Some(&(v, id)) = nbs.get(*pos) {
                used.set_bit(id);
                stack.push((v, Some(u)));
            } else if let Some((v, Some(from))) = stack.pop() {
                circuit.push(Edge(from, v));
            }
        }

        circuit.reverse();
        trace!(start, len = circuit.len(), "eulerian circuit");
        debug_assert_eq!(circuit.len(), m as usize);
        Some(circuit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Checks that `circuit` is a closed walk using every edge of `graph` exactly once
    fn assert_valid_circuit(graph: &WeightedGraph, circuit: &[Edge]) {
        assert_eq!(circuit.len(), graph.number_of_edges() as usize);

        for (a, b) in circuit.iter().circular_tuple_windows() {
            assert_eq!(a.1, b.0, "walk is not contiguous: {circuit:?}");
        }

        let mut seen = FxHashSet::default();
        for e in circuit {
            assert!(graph.has_edge(e.0, e.1));
            assert!(seen.insert(e.normalized()), "edge {e} used twice");
        }
    }

    #[test]
    fn triangle() {
        let graph = complete_graph(3);
        assert!(graph.has_eulerian_circuit());

        let circuit = graph.eulerian_circuit().unwrap();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit[0].0, 0);
        assert_eq!(circuit[2].1, 0);
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn odd_degrees() {
        assert!(!path_graph(3).has_eulerian_circuit());
        assert!(!complete_graph(4).has_eulerian_circuit());
        assert_eq!(complete_graph(4).eulerian_circuit(), None);

        let graph = crate::gens::build(&[3, 3, 2, 2, 1, 1]).unwrap();
        assert!(!graph.has_eulerian_circuit());
    }

    #[test]
    fn disconnected_even_graph() {
        let graph = WeightedGraph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert!(!graph.has_eulerian_circuit());
        assert_eq!(graph.eulerian_circuit(), None);
    }

    #[test]
    fn isolated_nodes_are_ignored() {
        let mut graph = WeightedGraph::new(6);
        graph.connect_cycle([1, 3, 5]);
        assert!(graph.has_eulerian_circuit());

        let circuit = graph.eulerian_circuit().unwrap();
        assert_eq!(circuit[0].0, 1);
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn edgeless_graphs() {
        assert_eq!(WeightedGraph::new(0).eulerian_circuit(), Some(vec![]));
        assert_eq!(WeightedGraph::new(4).eulerian_circuit(), Some(vec![]));
    }

    #[test]
    fn needs_splicing() {
        // three triangles hanging off node 0; one walk cannot close over all of them
        let graph = WeightedGraph::from_edges(
            7,
            [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0), (0, 5), (5, 6), (6, 0)],
        );
        assert!(graph.has_eulerian_circuit());
        let circuit = graph.eulerian_circuit().unwrap();
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn custom_start() {
        let graph = cycle_graph(5);
        let circuit = Hierholzer::new(&graph).start(3).compute().unwrap();
        assert_eq!(circuit[0].0, 3);
        assert_valid_circuit(&graph, &circuit);

        let mut graph = WeightedGraph::new(4);
        graph.connect_cycle([0, 1, 2]);
        assert_eq!(Hierholzer::new(&graph).start(3).compute(), None);
        assert_eq!(Hierholzer::new(&graph).start(9).compute(), None);
    }

    #[test]
    fn random_even_graphs() {
        init_tracing();
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [3 as NumNodes, 5, 10, 30] {
            for _ in 0..20 {
                let graph = random_eulerian_graph(rng, n, n);
                assert!(graph.degrees().all(|d| d % 2 == 0));
                assert!(graph.has_eulerian_circuit());

                let circuit = graph.eulerian_circuit().unwrap();
                assert_valid_circuit(&graph, &circuit);
            }
        }
    }

    #[test]
    fn random_graphs_with_odd_degrees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for n in [4 as NumNodes, 8, 16] {
            for _ in 0..20 {
                let graph = random_connected_graph(rng, n, n);
                let all_even = graph.degrees().all(|d| d % 2 == 0);
                assert_eq!(graph.has_eulerian_circuit(), all_even);
            }
        }
    }
}
