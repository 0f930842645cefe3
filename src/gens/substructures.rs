/*!
# Substructure Generators

Helpers to insert common motifs (paths, cycles, cliques) into an existing graph, mostly used to
set up graphs with known connectivity or known Eulerian structure.

```rust
use seqgraph::{prelude::*, gens::*};

let mut g = WeightedGraph::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and
    /// the last node is connected back to the first.
    /// ** Panics if fewer than three nodes are given **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**. Edges already present are kept.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        assert!(nodes.len() >= 3, "a simple cycle needs at least three nodes");

        for (&u, &v) in nodes.iter().circular_tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.iter().copied().tuple_combinations() {
            self.try_add_edge(u, v);
        }
    }
}

/// Complete graph on `n` nodes
pub fn complete_graph(n: NumNodes) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n);
    graph.connect_clique(0..n);
    graph
}

/// Cycle on `n >= 3` nodes
pub fn cycle_graph(n: NumNodes) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n);
    graph.connect_cycle(0..n);
    graph
}

/// Path on `n` nodes
pub fn path_graph(n: NumNodes) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n);
    graph.connect_path(0..n);
    graph
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn motifs() {
        let g = complete_graph(5);
        assert_eq!(g.number_of_edges(), 10);
        assert!(g.degrees().all(|d| d == 4));

        let g = cycle_graph(6);
        assert_eq!(g.number_of_edges(), 6);
        assert!(g.degrees().all(|d| d == 2));

        let g = path_graph(4);
        assert_eq!(g.ordered_edges(true), vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
    }

    #[test]
    fn clique_keeps_existing_edges() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1);
        g.connect_clique([0, 1, 2]);
        assert_eq!(g.ordered_edges(true), vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]);
    }
}
