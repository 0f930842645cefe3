/*!
# Weighted Shortest Paths

Single-source shortest distances with Dijkstra's algorithm on a binary heap. Stale heap
entries are skipped when popped instead of being decreased in place.

Weights must be non-negative. Every edge in the component of the source is relaxed exactly
once from each side, so a negative weight anywhere in that component is reported as
[`GraphError::InvalidWeight`]. Edges without an assigned weight count as
[`DEFAULT_WEIGHT`] unless configured otherwise via [`Dijkstra::default_weight`].

Distances saturate at `Weight::MAX` instead of overflowing, matching
[`EdgeWeights::total_weight`].
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Minimum total weight from a fixed source to every reachable node.
/// Unreachable nodes have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: Node,
    distances: Vec<Option<Weight>>,
}

impl DistanceMap {
    pub fn source(&self) -> Node {
        self.source
    }

    /// Distance to `u`, or `None` if `u` is unreachable (or not a node)
    pub fn get(&self, u: Node) -> Option<Weight> {
        self.distances.get(u as usize).copied().flatten()
    }

    /// Returns *true* if `u` is reachable from the source
    pub fn contains(&self, u: Node) -> bool {
        self.get(u).is_some()
    }

    /// Number of reachable nodes (including the source)
    pub fn len(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(node, distance)` for all reachable nodes in node order
    pub fn iter(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(u, d)| d.map(|d| (u as Node, d)))
    }
}

/// Configurable Dijkstra search
pub struct Dijkstra<'a, G>
where
    G: EdgeWeights,
{
    graph: &'a G,
    default_weight: Weight,
}

/// Distances and shortest-path-tree parents of one Dijkstra run
struct SearchResult {
    distances: Vec<Option<Weight>>,
    parents: Vec<Node>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: EdgeWeights,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            default_weight: DEFAULT_WEIGHT,
        }
    }

    /// Sets the weight used for edges without an assigned weight
    pub fn set_default_weight(&mut self, weight: Weight) {
        self.default_weight = weight;
    }

    pub fn default_weight(mut self, weight: Weight) -> Self {
        self.set_default_weight(weight);
        self
    }

    /// Computes the distances from `source` to all reachable nodes
    pub fn distances(&self, source: Node) -> Result<DistanceMap> {
        let result = self.search(source, None)?;
        Ok(DistanceMap {
            source,
            distances: result.distances,
        })
    }

    /// Computes a shortest path from `source` to `target` and its total weight.
    /// Returns `Ok(None)` if `target` is unreachable.
    ///
    /// The search stops once `target` is settled, so negative weights outside the
    /// explored region are not reported.
    pub fn shortest_path(&self, source: Node, target: Node) -> Result<Option<(Weight, Vec<Node>)>> {
        self.graph.check_vertex(target)?;
        let result = self.search(source, Some(target))?;

        let Some(distance) = result.distances[target as usize] else {
            return Ok(None);
        };

        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = result.parents[u as usize];
            path.push(u);
        }
        path.reverse();

        Ok(Some((distance, path)))
    }

    fn search(&self, source: Node, stop_at: Option<Node>) -> Result<SearchResult> {
        self.graph.check_vertex(source)?;

        let n = self.graph.len();
        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut parents = vec![INVALID_NODE; n];
        let mut settled = self.graph.vertex_bitset_unset();

        let mut heap = BinaryHeap::new();
        distances[source as usize] = Some(0);
        heap.push(Reverse((0 as Weight, source)));

        while let Some(Reverse((dist, u))) = heap.pop() {
            if settled.set_bit(u) {
                continue;
            }
            if stop_at == Some(u) {
                break;
            }

            for (v, id) in self.graph.incident_edges(u) {
                let weight = self.graph.effective_weight_at(id, self.default_weight);
                if weight < 0 {
                    return Err(GraphError::InvalidWeight {
                        edge: self.graph.edge_at(id),
                        weight,
                    });
                }

                if settled.get_bit(v) {
                    continue;
                }

                let new_dist = dist.saturating_add(weight);
                if distances[v as usize].is_none_or(|d| new_dist < d) {
                    distances[v as usize] = Some(new_dist);
                    parents[v as usize] = u;
                    heap.push(Reverse((new_dist, v)));
                }
            }
        }

        debug!(
            source,
            reachable = distances.iter().filter(|d| d.is_some()).count(),
            "dijkstra finished"
        );

        Ok(SearchResult { distances, parents })
    }
}

/// Weighted shortest paths with the default configuration
pub trait ShortestPaths: EdgeWeights + Sized {
    /// Minimum total weight from `source` to every reachable node.
    /// Fails with `UnknownVertex` for an invalid source and `InvalidWeight`
    /// if a negative weight is relaxed.
    fn shortest_distances(&self, source: Node) -> Result<DistanceMap> {
        Dijkstra::new(self).distances(source)
    }

    /// A shortest path between two nodes and its total weight; `Ok(None)` if unreachable
    fn shortest_path(&self, source: Node, target: Node) -> Result<Option<(Weight, Vec<Node>)>> {
        Dijkstra::new(self).shortest_path(source, target)
    }
}

impl<G> ShortestPaths for G where G: EdgeWeights + Sized {}
