use std::fmt::{Debug, Display};

use crate::{Node, bitset::IndexBitSet};

/// An undirected edge between two distinct nodes.
///
/// Graphs store edges normalized (smaller endpoint first). Walks such as Eulerian circuits
/// or fundamental circuits return edges oriented in walking direction instead.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Stable index of an edge inside a graph's edge table (insertion order)
pub type EdgeId = NumEdges;

/// A BitSet over edge ids
pub type EdgeBitSet = IndexBitSet;

/// Integral edge weight. Weights may be negative; only shortest-path computation rejects them.
pub type Weight = i64;

/// Weight used by every algorithm for an edge whose weight was never assigned
pub const DEFAULT_WEIGHT: Weight = 1;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }

    /// Returns the endpoint opposite to `u`.
    /// ** Panics in debug-builds if `u` is not an endpoint **
    pub fn opposite(&self, u: Node) -> Node {
        debug_assert!(self.is_incident_to(u));
        if self.0 == u { self.1 } else { self.0 }
    }

    /// Returns true if both edges connect the same pair of nodes, ignoring orientation
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.normalized() == other.normalized()
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
