use super::*;

/// A simple undirected graph with optional integer weights on its edges.
///
/// Edges are stored normalized in insertion order; the index into that table is the
/// edge's [`EdgeId`]. Weights start out unset and are assigned via
/// [`EdgeWeights::set_weight`] after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    nbs: Vec<Vec<(Node, EdgeId)>>,
    edges: Vec<Edge>,
    weights: Vec<Option<Weight>>,
}

impl WeightedGraph {
    /// Adds the edge {u,v} with a weight already assigned.
    /// ** Panics under the same conditions as [`GraphEdgeEditing::add_edge`] **
    pub fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> EdgeId {
        self.add_edge(u, v);
        let id = (self.edges.len() - 1) as EdgeId;
        self.weights[id as usize] = Some(weight);
        id
    }

    /// Creates a graph from a list of weighted edges
    pub fn from_weighted_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = (E, Weight)>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        for (edge, weight) in edges {
            let Edge(u, v) = edge.into();
            graph.add_weighted_edge(u, v, weight);
        }
        graph
    }

    /// Assigns weights to all edges in id order by querying `weight_of` once per edge.
    /// This is the single pass in which an external collaborator supplies weights.
    pub fn assign_weights<F>(&mut self, mut weight_of: F)
    where
        F: FnMut(Edge) -> Weight,
    {
        for (edge, weight) in self.edges.iter().zip(self.weights.iter_mut()) {
            *weight = Some(weight_of(*edge));
        }
    }

    /// Like [`WeightedGraph::assign_weights`] but the supplier may fail; stops at the first error.
    pub fn try_assign_weights<F, Err>(&mut self, mut weight_of: F) -> std::result::Result<(), Err>
    where
        F: FnMut(Edge) -> std::result::Result<Weight, Err>,
    {
        for (edge, weight) in self.edges.iter().zip(self.weights.iter_mut()) {
            *weight = Some(weight_of(*edge)?);
        }
        Ok(())
    }
}

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for WeightedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for WeightedGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_id(u, v).is_some()
    }
}

impl GraphNew for WeightedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            edges: Vec::new(),
            weights: Vec::new(),
        }
    }
}

impl GraphEdgeEditing for WeightedGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(u != v, "self-loop ({u},{v}) in a simple graph");
        assert!(self.has_vertex(u) && self.has_vertex(v));

        if self.has_edge(u, v) {
            return true;
        }

        let id = self.edges.len() as EdgeId;
        self.edges.push(Edge(u, v).normalized());
        self.weights.push(None);
        self.nbs[u as usize].push((v, id));
        self.nbs[v as usize].push((u, id));
        false
    }
}

impl EdgeWeights for WeightedGraph {
    fn edge_at(&self, id: EdgeId) -> Edge {
        self.edges[id as usize]
    }

    fn weight_at(&self, id: EdgeId) -> Option<Weight> {
        self.weights[id as usize]
    }

    fn set_weight_at(&mut self, id: EdgeId, weight: Weight) {
        self.weights[id as usize] = Some(weight);
    }

    fn incident_edges(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Option<Weight>)> + '_ {
        self.edges.iter().copied().zip(self.weights.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn graph_new() {
        for n in 0..20 {
            let graph = WeightedGraph::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.degrees().all(|d| d == 0));
        }
    }

    #[test]
    fn adjacency_matches_edge_list() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5 as NumNodes, 10, 30] {
            for _ in 0..10 {
                let edges = random_simple_edges(rng, n, n * 3);
                let graph = WeightedGraph::from_edges(n, edges.iter());

                assert_eq!(graph.number_of_edges() as usize, edges.len());
                assert_eq!(graph.ordered_edges(true), edges);

                for u in 0..n {
                    let expected = edges.iter().filter(|e| e.is_incident_to(u)).count();
                    assert_eq!(graph.degree_of(u) as usize, expected);
                }

                for &Edge(u, v) in &edges {
                    assert!(graph.has_edge(u, v));
                    assert!(graph.has_edge(v, u));
                    let id = graph.edge_id(v, u).unwrap();
                    assert_eq!(graph.edge_at(id), Edge(u, v));
                }
            }
        }
    }

    #[test]
    fn duplicate_edges_are_reported() {
        let mut graph = WeightedGraph::new(3);
        assert!(!graph.try_add_edge(0, 1));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    #[should_panic]
    fn loops_are_rejected() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(2, 2);
    }

    #[test]
    fn weights_start_unset_and_can_be_assigned() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut graph = WeightedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        assert!(!graph.is_fully_weighted());
        assert_eq!(graph.weight(0, 1), Ok(None));
        assert_eq!(graph.total_weight(), 4 * DEFAULT_WEIGHT);

        let assigned: Vec<Weight> = (0..4).map(|_| rng.random_range(0..100)).collect();
        graph.assign_weights(|e| assigned[e.0 as usize]);

        assert!(graph.is_fully_weighted());
        assert_eq!(graph.weight(1, 0), Ok(Some(assigned[0])));
        assert_eq!(graph.weight(0, 3), Ok(Some(assigned[0])));

        graph.set_weight(3, 2, -7).unwrap();
        assert_eq!(graph.weight(2, 3), Ok(Some(-7)));

        assert_eq!(
            graph.set_weight(0, 2, 1),
            Err(GraphError::MissingEdge { edge: Edge(0, 2) })
        );
        assert!(graph.weight(0, 2).is_err());
    }

    #[test]
    fn fallible_weight_assignment_stops_early() {
        let mut graph = WeightedGraph::from_edges(3, [(0, 1), (1, 2)]);
        let res: std::result::Result<(), &str> =
            graph.try_assign_weights(|e| if e.0 == 0 { Ok(3) } else { Err("bad input") });

        assert_eq!(res, Err("bad input"));
        assert_eq!(graph.weight(0, 1), Ok(Some(3)));
        assert_eq!(graph.weight(1, 2), Ok(None));
    }
}
