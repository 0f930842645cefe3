/*!
Breadth-first traversal and traversal-derived utilities.

This module provides:
- A lazy BFS iterator ([`BreadthFirstSearch`]), with or without predecessor tracking.
- Node exclusion (nodes treated as deleted) and restarting at unvisited nodes, which is what
  component counting after vertex removal needs.
- [`TraversalTree`] to turn a traversal into parent pointers or depths.
- A high-level [`Traversal`] trait exposing traversals directly as methods on graphs.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Items yielded by a traversal: either a plain [`Node`] or a [`PredecessorOfNode`]
/// that also records the node it was discovered from.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a root is encoded with both entries equal.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Lazy breadth-first search. Nodes are marked visited when they are enqueued, so each node
/// is yielded at most once.
pub struct BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<I>,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS iterator yielding nodes
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node>;

/// A BFS iterator yielding `(predecessor, node)` pairs
pub type BFSWithPredecessor<'a, G> = BreadthFirstSearch<'a, G, PredecessorOfNode>;

impl<'a, G, I> BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new traversal starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut bfs = Self::new_unstarted(graph);
        bfs.visited.set_bit(start);
        bfs.queue.push_back(I::new_without_predecessor(start));
        bfs
    }

    /// Creates a traversal with an empty queue. Use [`Self::try_restart_at_unvisited`]
    /// to start it, typically after excluding some nodes.
    /// ** Panics if the graph has no nodes **
    pub fn new_unstarted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            queue: VecDeque::new(),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Once `stopper` is dequeued, the traversal ends
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Treats `u` as deleted: it will neither be yielded nor expanded.
    /// Has no effect on nodes already in the queue.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Restarts the search at the smallest node neither visited nor excluded.
    /// Returns *false* if there is no such node.
    /// ** Panics if the previous search did not run to completion **
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.queue.push_back(I::new_without_predecessor(u));
                true
            }
        }
    }
}

impl<G, I> Iterator for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.queue.push_back(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }
}

/// Turns a traversal with predecessor tracking into tree structures
pub trait TraversalTree: Iterator<Item = PredecessorOfNode> + Sized {
    /// Consumes the traversal and stores the parent of each visited node in `tree`.
    /// Roots point to themselves; unvisited entries are left untouched.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for (pred, u) in self.by_ref() {
            tree[u as usize] = pred;
        }
    }

    /// Like [`Self::parent_array_into`]; unvisited nodes map to `INVALID_NODE`
    fn parent_array(&mut self, n: NumNodes) -> Vec<Node> {
        let mut tree = vec![INVALID_NODE; n as usize];
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the traversal and returns the depth of each visited node, or `None` if unvisited.
    /// Relies on predecessors being yielded before their successors.
    fn depths(&mut self, n: NumNodes) -> Vec<Option<NumNodes>> {
        let mut depths = vec![None; n as usize];
        for (pred, u) in self.by_ref() {
            depths[u as usize] = Some(if pred == u {
                0
            } else {
                depths[pred as usize].map_or(0, |d| d + 1)
            });
        }
        depths
    }
}

impl<G> TraversalTree for BFSWithPredecessor<'_, G> where G: AdjacencyList {}

/// Traversal algorithms available directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first order from `start`
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing `(predecessor, node)` pairs in breadth-first order
    /// ** Panics if `start >= n` **
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
