/*!
# Node Representation

Vertices are plain `u32` identifiers `0..n`, assigned by position in the degree sequence
the graph was realized from. Keeping them as raw integers lets the spanning tree and every
derived structure refer to vertices by index without borrowing the graph.
*/

use std::num::NonZero;

use crate::bitset::IndexBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// A graph holds at most `2^32 - 1` nodes
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = IndexBitSet;

/// Space-efficient replacement for `Option<Node>` in large tables (parent pointers for example).
/// The value `N` plays the role of `None` which lets `Option<OptionalNodeImpl<N>>`
/// use the niche of the `NonZero` inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` never occurs as a real vertex and is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Converts a vertex count given as `usize` (e.g. the length of a degree sequence)
/// into `NumNodes`, returning `None` if it does not fit.
pub fn num_nodes_from_len(len: usize) -> Option<NumNodes> {
    NumNodes::try_from(len).ok().filter(|&n| n != INVALID_NODE)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_node_roundtrip() {
        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn num_nodes_conversion() {
        assert_eq!(num_nodes_from_len(0), Some(0));
        assert_eq!(num_nodes_from_len(6), Some(6));
        assert_eq!(num_nodes_from_len(INVALID_NODE as usize), None);
    }
}
