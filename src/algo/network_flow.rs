/*!
# Disjoint Paths via Unit-Capacity Flow

Menger's theorem ties connectivity to disjoint paths: the number of edge-disjoint (resp.
internally vertex-disjoint) `s`-`t` paths equals the size of a minimum `s`-`t` edge (resp. vertex) cut.
This module counts such paths with the Edmonds–Karp augmenting path algorithm.

- [`ResidualMatrix`] is the residual network. It is built either for **edge-disjoint** paths
  (every undirected edge becomes two unit arcs) or for **vertex-disjoint** paths (every vertex
  other than `s` and `t` is split into `v_in -> v_out` with unit capacity).
- [`EdmondsKarp`] augments along shortest residual paths and yields one path per augmentation.

Capacities are stored as a dense matrix of counters; graphs handled here are small and
undirected arcs need residual capacities above one after cancellation.
*/

use super::*;

/// Residual network with integer capacities on a dense `n x n` matrix.
///
/// Nodes may be auxiliary (split vertices); [`ResidualMatrix::label`] maps every node back
/// to the graph vertex it represents.
#[derive(Debug, Clone)]
pub struct ResidualMatrix {
    s: Node,
    t: Node,
    capacity: Vec<Vec<u32>>,
    labels: Vec<Node>,
}

impl ResidualMatrix {
    /// Residual network for **edge-disjoint** `s`-`t` paths in an undirected graph
    pub fn edge_disjoint<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: AdjacencyList,
    {
        let n = graph.len();
        let mut capacity = vec![vec![0; n]; n];
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                capacity[u as usize][v as usize] += 1;
            }
        }

        Self {
            s,
            t,
            capacity,
            labels: graph.vertices().collect(),
        }
    }

    /// Residual network for **internally vertex-disjoint** `s`-`t` paths in an undirected graph.
    ///
    /// Node `v` acts as `v_in` and node `n + v` as `v_out`. `s` and `t` are not split, so
    /// arcs leaving them start at `s`/`t` directly.
    pub fn vertex_disjoint<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: AdjacencyList,
    {
        let n = graph.number_of_nodes();
        let labels: Vec<_> = graph.vertices().chain(graph.vertices()).collect();

        let mut capacity = vec![vec![0; 2 * n as usize]; 2 * n as usize];
        for v in graph.vertices() {
            let v_out = if v == s || v == t {
                v
            } else {
                capacity[v as usize][(n + v) as usize] = 1;
                n + v
            };

            for u in graph.neighbors_of(v) {
                capacity[v_out as usize][u as usize] = 1;
            }
        }

        Self {
            s,
            t,
            capacity,
            labels,
        }
    }

    pub fn source(&self) -> Node {
        self.s
    }

    pub fn target(&self) -> Node {
        self.t
    }

    /// Graph vertex represented by residual node `u`
    pub fn label(&self, u: Node) -> Node {
        self.labels[u as usize]
    }

    /// Pushes one unit of flow along arc `(u, v)`
    /// ** Panics if the arc has no residual capacity **
    pub fn push_unit(&mut self, u: Node, v: Node) {
        assert!(self.capacity[u as usize][v as usize] > 0);
        self.capacity[u as usize][v as usize] -= 1;
        self.capacity[v as usize][u as usize] += 1;
    }
}

impl GraphNodeOrder for ResidualMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.capacity.len() as NumNodes
    }
}

impl AdjacencyList for ResidualMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.capacity[u as usize]
            .iter()
            .enumerate()
            .filter_map(|(v, &c)| (c > 0).then_some(v as Node))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }
}

/// Edmonds–Karp: repeatedly augments one unit of flow along a shortest residual
/// `s`-`t` path. As an iterator it yields each augmenting path as a list of graph vertices
/// (auxiliary split nodes collapsed), so counting the items counts the disjoint paths.
pub struct EdmondsKarp {
    residual_network: ResidualMatrix,
    predecessor: Vec<Node>,
}

impl EdmondsKarp {
    pub fn new(residual_network: ResidualMatrix) -> Self {
        let n = residual_network.len();
        Self {
            residual_network,
            predecessor: vec![INVALID_NODE; n],
        }
    }

    /// BFS from the source; fills the predecessor array and returns whether the target was reached.
    fn bfs(&mut self) -> bool {
        let s = self.residual_network.source();
        let t = self.residual_network.target();

        self.predecessor.fill(INVALID_NODE);
        self.residual_network
            .bfs_with_predecessor(s)
            .stop_at(t)
            .parent_array_into(self.predecessor.as_mut_slice());
        self.predecessor[t as usize] != INVALID_NODE
    }

    /// Returns the maximum number of disjoint paths between source and target
    pub fn num_disjoint(&mut self) -> usize {
        self.count()
    }

    /// Returns the number of disjoint paths, but stops once `k` paths have been found
    pub fn count_num_disjoint_upto(&mut self, k: NumNodes) -> NumNodes {
        self.take(k as usize).count() as NumNodes
    }

    /// Returns a maximum set of disjoint paths. Paths found later may reroute earlier ones
    /// through cancellation; the returned paths are the augmenting paths, so only their number
    /// is guaranteed to be maximum.
    pub fn disjoint_paths(&mut self) -> Vec<Vec<Node>> {
        self.collect()
    }

    pub fn residual_network(&self) -> &ResidualMatrix {
        &self.residual_network
    }
}

impl Iterator for EdmondsKarp {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs() {
            return None;
        }

        let s = self.residual_network.source();
        let t = self.residual_network.target();
        let mut path = vec![t];
        let mut v = t;
        while v != s {
            let u = self.predecessor[v as usize];
            // arcs inside a split vertex do not add a vertex to the path
            if self.residual_network.label(u) != self.residual_network.label(v) {
                path.push(u);
            }
            self.residual_network.push_unit(u, v);
            v = u;
        }

        trace!(len = path.len(), "augmenting path");

        Some(
            path.iter()
                .rev()
                .map(|&v| self.residual_network.label(v))
                .collect(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    const EDGES: [(Node, Node); 11] = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 2),
        (2, 3),
        (2, 6),
        (3, 6),
        (4, 2),
        (4, 7),
        (5, 1),
        (6, 7),
    ];

    #[test]
    fn edmonds_karp_edge_disjoint() {
        let g = WeightedGraph::from_edges(8, EDGES);
        let mut ek = EdmondsKarp::new(ResidualMatrix::edge_disjoint(&g, 0, 7));
        // 7 has degree 2
        assert_eq!(ek.num_disjoint(), 2);
    }

    #[test]
    fn edmonds_karp_vertex_disjoint() {
        let g = WeightedGraph::from_edges(8, EDGES);
        let mut ek = EdmondsKarp::new(ResidualMatrix::vertex_disjoint(&g, 0, 6));
        // 0 reaches 6 via 2 or 3 only
        let paths = ek.disjoint_paths();
        assert_eq!(paths.len(), 2);
        for path in paths {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&6));
        }
    }

    #[test]
    fn cancellation_on_undirected_arcs() {
        // two edge-disjoint paths exist, but a shortest first augmentation
        // through the middle edge has to be partially cancelled
        let g = WeightedGraph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 4), (3, 5), (4, 5), (2, 5)]);
        let mut ek = EdmondsKarp::new(ResidualMatrix::edge_disjoint(&g, 0, 5));
        assert_eq!(ek.num_disjoint(), 2);
    }

    #[test]
    fn complete_graph_paths() {
        let g = complete_graph(6);
        let mut ek = EdmondsKarp::new(ResidualMatrix::edge_disjoint(&g, 0, 5));
        assert_eq!(ek.num_disjoint(), 5);

        // s and t are adjacent: the direct edge plus one path through every other vertex
        let mut ek = EdmondsKarp::new(ResidualMatrix::vertex_disjoint(&g, 0, 5));
        assert_eq!(ek.num_disjoint(), 5);
    }

    #[test]
    fn count_num_disjoint_upto() {
        let g = complete_graph(6);
        for k in 0..8 {
            let mut ek = EdmondsKarp::new(ResidualMatrix::edge_disjoint(&g, 1, 4));
            assert_eq!(ek.count_num_disjoint_upto(k), k.min(5));
        }
    }

    #[test]
    fn unreachable_target() {
        let g = WeightedGraph::from_edges(4, [(0, 1), (2, 3)]);
        let mut ek = EdmondsKarp::new(ResidualMatrix::edge_disjoint(&g, 0, 3));
        assert_eq!(ek.num_disjoint(), 0);
        let mut ek = EdmondsKarp::new(ResidualMatrix::vertex_disjoint(&g, 0, 3));
        assert_eq!(ek.num_disjoint(), 0);
    }
}
