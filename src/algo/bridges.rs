use super::*;

/// Bridges are edges whose removal increases the number of connected components
pub trait Bridges {
    /// Returns all bridges, normalized and sorted
    fn compute_bridges(&self) -> Vec<Edge>;

    /// Returns *true* if the graph has at least one bridge
    fn has_bridge(&self) -> bool {
        !self.compute_bridges().is_empty()
    }
}

impl<G> Bridges for G
where
    G: AdjacencyList,
{
    fn compute_bridges(&self) -> Vec<Edge> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut bridges = BridgeSearch::new(self).compute();
        bridges.sort_unstable();
        bridges
    }
}

struct BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices_no_singletons() {
            if self.visited.set_bit(u) {
                continue;
            }

            self.compute_node(u, u);
        }

        self.bridges
    }

    fn compute_node(&mut self, parent: Node, u: Node) -> NodeInfo {
        self.time += 1;

        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                let info_v = self.compute_node(u, v);

                self.nodes_info[u as usize].update_low(info_v.low);

                if info_v.low > self.nodes_info[u as usize].discovery {
                    self.bridges.push(Edge(u, v).normalized());
                }
            } else if v != self.nodes_info[u as usize].parent {
                let v_disc = self.nodes_info[v as usize].discovery;
                self.nodes_info[u as usize].update_low(v_disc);
            }
        }

        self.nodes_info[u as usize]
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
    parent: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
