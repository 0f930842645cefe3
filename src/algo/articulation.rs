use super::*;

/// Articulation points (cut vertices) are nodes whose removal increases the number of
/// connected components
pub trait ArticulationPoint {
    /// Returns all articulation points in ascending order
    fn compute_articulation_points(&self) -> Vec<Node>;
}

impl<G> ArticulationPoint for G
where
    G: AdjacencyList,
{
    fn compute_articulation_points(&self) -> Vec<Node> {
        if self.is_empty() {
            return Vec::new();
        }
        ArticulationPointSearch::new(self).compute()
    }
}

/// Hopcroft–Tarjan low-point search over every component of the graph
pub struct ArticulationPointSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    low_point: Vec<Node>,
    dfs_num: Vec<Node>,
    visited: NodeBitSet,
    articulation_points: NodeBitSet,
    current_dfs_num: Node,
    parent: Vec<Option<OptionalNode>>,
}

impl<'a, G> ArticulationPointSearch<'a, G>
where
    G: AdjacencyList,
{
    /// ** Panics if the graph has no nodes **
    pub fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            low_point: vec![0; n],
            dfs_num: vec![0; n],
            visited: graph.vertex_bitset_unset(),
            parent: vec![None; n],
            articulation_points: graph.vertex_bitset_unset(),
            current_dfs_num: 0,
        }
    }

    pub fn compute(mut self) -> Vec<Node> {
        for u in self.graph.vertices_no_singletons() {
            if !self.visited.get_bit(u) {
                self.compute_recursive(u);
            }
        }
        self.articulation_points.iter_set_bits().collect()
    }

    fn compute_recursive(&mut self, u: Node) {
        self.visited.set_bit(u);
        self.current_dfs_num += 1;
        self.dfs_num[u as usize] = self.current_dfs_num;
        self.low_point[u as usize] = self.current_dfs_num;

        let parent = self.parent[u as usize].map(|p| p.get());

        // counts number of tree neighbors
        let mut tree_neighbors = 0;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.get_bit(v) {
                tree_neighbors += 1;
                self.parent[v as usize] = OptionalNode::new(u);
                self.compute_recursive(v);
                self.low_point[u as usize] =
                    self.low_point[u as usize].min(self.low_point[v as usize]);

                if parent.is_some() && self.low_point[v as usize] >= self.dfs_num[u as usize] {
                    self.articulation_points.set_bit(u);
                }
            } else if parent != Some(v) {
                // back edge
                self.low_point[u as usize] =
                    self.low_point[u as usize].min(self.dfs_num[v as usize]);
            }
        }

        if parent.is_none() && tree_neighbors > 1 {
            self.articulation_points.set_bit(u);
        }
    }
}
