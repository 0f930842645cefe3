use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over all nodes. The range does not borrow `self` and may be used
    /// while `self` is mutated.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` is a node of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Err(UnknownVertex)` if `u` is not a node of the graph
    fn check_vertex(&self, u: Node) -> Result<()> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                node: u,
                n: self.number_of_nodes(),
            })
        }
    }

    /// Returns empty bitset with one entry per node
    /// ** Panics if the graph has no nodes **
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        assert!(!self.is_empty());
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if `u` has no neighbors
    fn is_singleton(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over the degrees of all nodes in node order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_no_singletons(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| !self.is_singleton(u))
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Trait to test existence of edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge {u,v} exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges. Graphs are simple: neither loops nor parallel
/// edges can be inserted.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *{u,v}* to the graph.
    /// ** Panics if `u >= n || v >= n`, `u == v` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v))
    }

    /// Adds the edge *{u,v}* to the graph.
    /// Returns *true* exactly if the edge was present previously (and thus not added again).
    /// ** Panics if `u >= n || v >= n` or `u == v` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Access to the edge table of a graph: stable edge ids, per-edge weights and
/// incidence lists carrying edge ids.
pub trait EdgeWeights: AdjacencyList + GraphEdgeOrder {
    /// Returns the (normalized) edge stored under `id`.
    /// ** Panics if `id >= m` **
    fn edge_at(&self, id: EdgeId) -> Edge;

    /// Returns the weight assigned to edge `id`, or `None` if it was never assigned.
    /// ** Panics if `id >= m` **
    fn weight_at(&self, id: EdgeId) -> Option<Weight>;

    /// Assigns a weight to edge `id`, overwriting any previous assignment.
    /// ** Panics if `id >= m` **
    fn set_weight_at(&mut self, id: EdgeId, weight: Weight);

    /// Returns an iterator over `(neighbor, edge id)` pairs incident to `u`
    /// ** Panics if `u >= n` **
    fn incident_edges(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_;

    /// Returns the id of edge {u,v} if present
    fn edge_id(&self, u: Node, v: Node) -> Option<EdgeId> {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return None;
        }
        let (a, b) = if self.degree_of(u) <= self.degree_of(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.incident_edges(a)
            .find_map(|(w, id)| (w == b).then_some(id))
    }

    /// Returns the weight of edge {u,v} (`None` if unset).
    /// Fails with `MissingEdge` if the edge does not exist.
    fn weight(&self, u: Node, v: Node) -> Result<Option<Weight>> {
        self.edge_id(u, v)
            .map(|id| self.weight_at(id))
            .ok_or(GraphError::MissingEdge { edge: Edge(u, v) })
    }

    /// Assigns a weight to edge {u,v}.
    /// Fails with `MissingEdge` if the edge does not exist.
    fn set_weight(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        let id = self
            .edge_id(u, v)
            .ok_or(GraphError::MissingEdge { edge: Edge(u, v) })?;
        self.set_weight_at(id, weight);
        Ok(())
    }

    /// Weight of edge `id` as seen by the algorithms: unset weights count as `default`
    fn effective_weight_at(&self, id: EdgeId, default: Weight) -> Weight {
        self.weight_at(id).unwrap_or(default)
    }

    /// Returns an iterator over all (normalized) edges with their weights in id order
    fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Option<Weight>)> + '_ {
        (0..self.number_of_edges()).map(|id| (self.edge_at(id), self.weight_at(id)))
    }

    /// Returns *true* if every edge has an assigned weight
    fn is_fully_weighted(&self) -> bool {
        (0..self.number_of_edges()).all(|id| self.weight_at(id).is_some())
    }

    /// Sum of all effective edge weights. Saturates at `Weight::MIN`/`Weight::MAX`,
    /// the same way shortest path distances do.
    fn total_weight(&self) -> Weight {
        (0..self.number_of_edges())
            .map(|id| self.effective_weight_at(id, DEFAULT_WEIGHT))
            .fold(0, Weight::saturating_add)
    }
}
