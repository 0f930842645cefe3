/*!
# Minimum Spanning Trees

[`Prim`] grows a minimum spanning tree from a root: a binary heap holds the candidate
edges leaving the current tree keyed by `(weight, edge id)`; edges whose far endpoint
has already joined the tree are dropped when popped.

On a disconnected graph the result only spans the component of the root. The returned
[`SpanningTree`] records which nodes it spans together with parent pointers and depths,
so that tree paths can be read off without searching.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// A tree grown from a root inside a graph.
///
/// Holds an independent copy of the tree edges (with the weights used to pick them) on the
/// node set of the original graph. Nodes outside the root's component are not spanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    tree: WeightedGraph,
    root: Option<Node>,
    parent: Vec<Option<OptionalNode>>,
    depth: Vec<NumNodes>,
}

impl SpanningTree {
    /// The tree without edges and without spanned nodes on `n` nodes
    fn empty(n: NumNodes) -> Self {
        Self {
            tree: WeightedGraph::new(n),
            root: None,
            parent: vec![None; n as usize],
            depth: vec![0; n as usize],
        }
    }

    /// The node the tree was grown from; `None` for the graph without nodes
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// Returns the tree as a graph on the node set of the original graph
    pub fn as_graph(&self) -> &WeightedGraph {
        &self.tree
    }

    /// Number of nodes of the underlying graph (spanned or not)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.tree.number_of_nodes()
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.tree.number_of_edges()
    }

    /// Iterates over the (normalized) tree edges in the order they were added
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.weighted_edges().map(|(e, _)| e)
    }

    /// Iterates over the tree edges with their weights in the order they were added
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        self.tree
            .weighted_edges()
            .map(|(e, w)| (e, w.unwrap_or(DEFAULT_WEIGHT)))
    }

    /// Sum of the tree's edge weights; saturates like [`EdgeWeights::total_weight`]
    pub fn total_weight(&self) -> Weight {
        self.tree.total_weight()
    }

    /// Returns *true* if {u,v} is a tree edge
    pub fn contains_edge(&self, u: Node, v: Node) -> bool {
        self.tree.has_edge(u, v)
    }

    /// Returns *true* if `u` is part of the tree
    pub fn spans(&self, u: Node) -> bool {
        self.root == Some(u) || self.parent.get(u as usize).is_some_and(|p| p.is_some())
    }

    /// Iterates over all spanned nodes in ascending order
    pub fn spanned_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.tree.vertices().filter(|&u| self.spans(u))
    }

    /// Returns *true* if every node of the graph is spanned
    pub fn is_spanning(&self) -> bool {
        self.tree.vertices().all(|u| self.spans(u))
    }

    /// Parent of `u` in the tree rooted at [`SpanningTree::root`]
    pub fn parent(&self, u: Node) -> Option<Node> {
        self.parent.get(u as usize).copied().flatten().map(|p| p.get())
    }

    /// Number of edges between `u` and the root, or `None` if `u` is not spanned
    pub fn depth(&self, u: Node) -> Option<NumNodes> {
        self.spans(u).then(|| self.depth[u as usize])
    }

    /// Returns the unique tree path from `u` to `v` (both included), or `None` if one
    /// of them is not spanned. The lower endpoint climbs until both meet at their lowest
    /// common ancestor.
    pub fn path(&self, u: Node, v: Node) -> Option<Vec<Node>> {
        let (mut du, mut dv) = (self.depth(u)?, self.depth(v)?);

        let mut from_u = vec![u];
        let mut from_v = vec![v];
        let (mut a, mut b) = (u, v);

        while a != b {
            if du >= dv {
                a = self.parent(a)?;
                du -= 1;
                from_u.push(a);
            } else {
                b = self.parent(b)?;
                dv -= 1;
                from_v.push(b);
            }
        }

        // the meeting point is the last entry of both halves
        from_v.pop();
        from_u.extend(from_v.into_iter().rev());
        Some(from_u)
    }
}

/// Heap entry `(weight, edge id, node outside the tree)`, smallest first
type Candidate = Reverse<(Weight, EdgeId, Node)>;

/// Configurable Prim search
pub struct Prim<'a, G>
where
    G: EdgeWeights,
{
    graph: &'a G,
    root: Node,
    default_weight: Weight,
}

impl<'a, G> Prim<'a, G>
where
    G: EdgeWeights,
{
    /// Prim search rooted at node `0`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            root: 0,
            default_weight: DEFAULT_WEIGHT,
        }
    }

    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the node the tree is grown from
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Sets the weight used for edges without an assigned weight
    pub fn set_default_weight(&mut self, weight: Weight) {
        self.default_weight = weight;
    }

    pub fn default_weight(mut self, weight: Weight) -> Self {
        self.set_default_weight(weight);
        self
    }

    /// Computes the minimum spanning tree of the root's component.
    /// The graph without nodes yields the empty tree; otherwise fails with
    /// `UnknownVertex` if the root is not a node.
    pub fn compute(&self) -> Result<SpanningTree> {
        if self.graph.is_empty() {
            return Ok(SpanningTree::empty(0));
        }
        self.graph.check_vertex(self.root)?;
        Ok(self.grow())
    }

    fn grow(&self) -> SpanningTree {
        let graph = self.graph;
        let mut tree = SpanningTree::empty(graph.number_of_nodes());
        tree.root = Some(self.root);

        let mut in_tree = graph.vertex_bitset_unset();
        let mut heap: BinaryHeap<Candidate> = BinaryHeap::new();

        let push_candidates = |heap: &mut BinaryHeap<Candidate>, u: Node| {
            for (v, id) in graph.incident_edges(u) {
                let weight = graph.effective_weight_at(id, self.default_weight);
                heap.push(Reverse((weight, id, v)));
            }
        };

        in_tree.set_bit(self.root);
        push_candidates(&mut heap, self.root);

        while let Some(Reverse((weight, id, v))) = heap.pop() {
            if in_tree.set_bit(v) {
                continue;
            }

            let u = graph.edge_at(id).opposite(v);
            tree.tree.add_weighted_edge(u, v, weight);
            tree.parent[v as usize] = OptionalNode::new(u);
            tree.depth[v as usize] = tree.depth[u as usize] + 1;

            push_candidates(&mut heap, v);
        }

        debug!(
            root = self.root,
            edges = tree.number_of_edges(),
            total_weight = tree.total_weight(),
            "prim finished"
        );

        tree
    }
}

pub trait MinimumSpanningTree: EdgeWeights + Sized {
    /// Minimum spanning tree grown from node `0`. On a disconnected graph only the
    /// component of node `0` is spanned.
    fn minimum_spanning_tree(&self) -> SpanningTree {
        if self.is_empty() {
            SpanningTree::empty(0)
        } else {
            Prim::new(self).grow()
        }
    }
}

impl<G> MinimumSpanningTree for G where G: EdgeWeights + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// Minimum weight over all edge subsets of size `n - 1` that connect the graph
    fn brute_force_mst_weight(graph: &WeightedGraph) -> Weight {
        let n = graph.number_of_nodes();
        let edges = graph.weighted_edges().collect_vec();
        edges
            .iter()
            .combinations(n as usize - 1)
            .filter(|subset| WeightedGraph::from_edges(n, subset.iter().map(|(e, _)| e)).is_connected())
            .map(|subset| {
                subset
                    .iter()
                    .map(|(_, w)| w.unwrap_or(DEFAULT_WEIGHT))
                    .sum::<Weight>()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn triangle() {
        let tree = complete_graph(3).minimum_spanning_tree();
        assert_eq!(tree.number_of_edges(), 2);
        assert_eq!(tree.total_weight(), 2);
        assert!(tree.is_spanning());
    }

    #[test]
    fn weighted_triangle() {
        let graph = WeightedGraph::from_weighted_edges(3, [((0, 1), 1), ((1, 2), 2), ((0, 2), 3)]);
        let tree = graph.minimum_spanning_tree();

        assert_eq!(tree.root(), Some(0));
        assert_eq!(tree.weighted_edges().collect_vec(), vec![(Edge(0, 1), 1), (Edge(1, 2), 2)]);
        assert!(tree.contains_edge(2, 1));
        assert!(!tree.contains_edge(0, 2));
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.depth(2), Some(2));
        assert_eq!(tree.path(2, 0), Some(vec![2, 1, 0]));
    }

    #[test]
    fn negative_weights_are_fine() {
        let graph = WeightedGraph::from_weighted_edges(3, [((0, 1), -4), ((1, 2), 2), ((0, 2), -1)]);
        let tree = graph.minimum_spanning_tree();
        assert_eq!(tree.total_weight(), -5);
        assert!(tree.contains_edge(0, 1));
        assert!(tree.contains_edge(0, 2));
    }

    #[test]
    fn extreme_weights_saturate() {
        let graph = WeightedGraph::from_weighted_edges(3, [((0, 1), Weight::MAX), ((1, 2), 1)]);
        let tree = graph.minimum_spanning_tree();
        assert_eq!(tree.number_of_edges(), 2);
        assert_eq!(tree.total_weight(), Weight::MAX);
        assert_eq!(graph.total_weight(), Weight::MAX);

        let graph = WeightedGraph::from_weighted_edges(3, [((0, 1), Weight::MIN), ((1, 2), -1)]);
        assert_eq!(graph.minimum_spanning_tree().total_weight(), Weight::MIN);
    }

    #[test]
    fn disconnected_graph_spans_root_component() {
        let graph = WeightedGraph::from_weighted_edges(5, [((0, 1), 1), ((1, 2), 1), ((3, 4), 1)]);

        let tree = graph.minimum_spanning_tree();
        assert_eq!(tree.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2)]);
        assert!(!tree.is_spanning());
        assert_eq!(tree.spanned_nodes().collect_vec(), vec![0, 1, 2]);
        assert_eq!(tree.path(0, 3), None);

        let tree = Prim::new(&graph).root(4).compute().unwrap();
        assert_eq!(tree.edges().collect_vec(), vec![Edge(3, 4)]);
        assert_eq!(tree.depth(3), Some(1));
        assert_eq!(tree.depth(0), None);
    }

    #[test]
    fn degenerate_graphs() {
        let tree = WeightedGraph::new(0).minimum_spanning_tree();
        assert_eq!(tree.root(), None);
        assert_eq!(tree.number_of_edges(), 0);
        assert!(tree.is_spanning());

        let tree = WeightedGraph::new(1).minimum_spanning_tree();
        assert_eq!(tree.number_of_edges(), 0);
        assert_eq!(tree.path(0, 0), Some(vec![0]));

        assert_eq!(
            Prim::new(&WeightedGraph::new(2)).root(2).compute(),
            Err(GraphError::UnknownVertex { node: 2, n: 2 })
        );
    }

    #[test]
    fn tree_paths() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);
        let graph = random_connected_graph(rng, 20, 20);
        let tree = graph.minimum_spanning_tree();

        for (u, v) in graph.vertices_range().tuple_combinations() {
            let path = tree.path(u, v).unwrap();
            assert_eq!(path.first(), Some(&u));
            assert_eq!(path.last(), Some(&v));
            assert!(path.iter().all_unique());
            for (&a, &b) in path.iter().tuple_windows() {
                assert!(tree.contains_edge(a, b));
            }
        }
    }

    #[test]
    fn random_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for n in 2..=6 {
            for _ in 0..20 {
                let mut graph = random_connected_graph(rng, n, n);
                assign_random_weights(rng, &mut graph, -5..10);

                for root in graph.vertices() {
                    let tree = Prim::new(&graph).root(root).compute().unwrap();
                    assert_eq!(tree.number_of_edges(), n - 1);
                    assert!(tree.is_spanning());
                    assert!(tree.as_graph().is_connected());
                    assert_eq!(tree.total_weight(), brute_force_mst_weight(&graph));

                    for (Edge(u, v), w) in tree.weighted_edges() {
                        assert_eq!(graph.weight(u, v), Ok(Some(w)));
                    }
                }
            }
        }
    }
}
