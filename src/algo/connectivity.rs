/*!
# Connectivity

Connected components and the two classical connectivity measures of an undirected graph:

- **vertex connectivity** `κ(G)`: the minimum number of vertices whose removal disconnects the
  graph or leaves a single vertex. Computed exactly with Menger's theorem: for a non-complete
  connected graph it is the minimum, over all non-adjacent pairs `s, t`, of the number of
  internally vertex-disjoint `s`-`t` paths. Complete graphs `K_n` have `κ = n - 1`.
- **edge connectivity** `λ(G)`: the minimum number of edges whose removal disconnects the graph.
  Any minimum edge cut separates node `0` from some `t`, so `λ = min_t maxflow(0, t)`.

Graphs with at most one node and disconnected graphs have both values `0`.

[`Connectivity::removal_vertex_connectivity`] offers the cheaper component-counting estimate
(remove each vertex once and count components). It only distinguishes `0` from `1` and
reports `0` for every graph without a cut vertex, even if its true connectivity is higher.
*/

use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + AdjacencyTest + GraphEdgeOrder + Sized {
    /// Iterates the connected components of the graph
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, false)
    }

    /// Iterates the connected components, skipping isolated nodes
    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self, true)
    }

    /// Iterates the connected components of the graph with the nodes in `ignore` deleted
    fn connected_components_exclude_nodes<I>(
        &self,
        skip_trivial: bool,
        ignore: I,
    ) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        ConnectedComponents::new(self, skip_trivial).exclude_nodes(ignore)
    }

    /// Returns *true* if the graph has at most one connected component.
    /// The graph without nodes counts as connected.
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none()
    }

    /// Vertex connectivity computed via vertex-disjoint paths
    fn vertex_connectivity(&self) -> NumNodes {
        let n = self.number_of_nodes();
        if n <= 1 || !self.is_connected() {
            return 0;
        }

        if self.number_of_edges() as u64 == (n as u64) * (n as u64 - 1) / 2 {
            return n - 1;
        }

        if !self.compute_articulation_points().is_empty() {
            return 1;
        }

        // non-complete graphs have a separator of at most n - 2 nodes
        let mut best = n - 2;
        for (s, t) in self.vertices_range().tuple_combinations() {
            if best <= 2 {
                // no cut vertex, so two is optimal
                break;
            }
            if self.has_edge(s, t) {
                continue;
            }

            let paths = EdmondsKarp::new(ResidualMatrix::vertex_disjoint(self, s, t))
                .count_num_disjoint_upto(best);
            if paths < best {
                trace!(s, t, paths, "smaller vertex separator");
                best = paths;
            }
        }

        debug!(n, connectivity = best, "vertex connectivity");
        best
    }

    /// Edge connectivity computed via edge-disjoint paths
    fn edge_connectivity(&self) -> NumEdges {
        let n = self.number_of_nodes();
        if n <= 1 || !self.is_connected() {
            return 0;
        }

        if self.has_bridge() {
            return 1;
        }

        // the edges around a minimum degree node form a cut
        let mut best = self.min_degree();
        for t in 1..n {
            if best <= 2 {
                // bridgeless, so two is optimal
                break;
            }
            let paths = EdmondsKarp::new(ResidualMatrix::edge_disjoint(self, 0, t))
                .count_num_disjoint_upto(best);
            best = best.min(paths);
        }

        debug!(n, connectivity = best, "edge connectivity");
        best as NumEdges
    }

    /// The largest `k` such that the graph is `k`-vertex- and `k`-edge-connected,
    /// i.e. `min(vertex_connectivity, edge_connectivity)`.
    fn k_connected(&self) -> NumNodes {
        self.vertex_connectivity()
            .min(self.edge_connectivity() as NumNodes)
    }

    /// Component-counting estimate of the vertex connectivity: `1` if deleting some single
    /// vertex leaves more than one component, otherwise `0`. Underestimates every graph
    /// whose vertex connectivity is at least two.
    fn removal_vertex_connectivity(&self) -> NumNodes {
        let splits = self.vertices().any(|u| {
            self.connected_components_exclude_nodes(false, [u])
                .nth(1)
                .is_some()
        });
        splits as NumNodes
    }
}

impl<G> Connectivity for G where G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + Sized {}

/// Iterator over the connected components of an undirected graph; each item lists the
/// nodes of one component in BFS order. Components are emitted in order of their smallest node.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G, skip_trivial: bool) -> Self {
        if graph.is_empty() {
            return Self { bfs: None };
        }

        let mut bfs = BFS::new_unstarted(graph);
        if skip_trivial {
            bfs.exclude_nodes(graph.vertices().filter(|&u| graph.is_singleton(u)));
        }
        Self { bfs: Some(bfs) }
    }

    pub fn set_exclude_nodes<I>(&mut self, exclude: I)
    where
        I: IntoIterator<Item = Node>,
    {
        if let Some(bfs) = self.bfs.as_mut() {
            bfs.exclude_nodes(exclude);
        }
    }

    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        if !bfs.try_restart_at_unvisited() {
            return None;
        }
        Some(bfs.by_ref().collect_vec())
    }
}
