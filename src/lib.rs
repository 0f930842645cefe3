/*!
`seqgraph` realizes a **degree sequence** as a simple undirected graph and analyzes the result.

# Pipeline

1. [`is_graphical`] decides with the Havel–Hakimi reduction whether some simple graph has
   exactly the given degrees,
2. [`build`] / [`realize`] construct such a graph ([`WeightedGraph`](crate::repr::WeightedGraph)),
   where vertex `i` gets degree `sequence[i]`,
3. edge weights are assigned afterwards (unset weights count as [`DEFAULT_WEIGHT`]),
4. the analyzers in [`algo`] compute structural properties of the weighted graph:
   Eulerian circuits, shortest distances, a minimum spanning tree, the fundamental circuits of
   that tree and vertex/edge connectivity.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as graphs are undirected, edges are
stored normalized (smaller endpoint first) and get a stable [`EdgeId`] in insertion order.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided
graph. Alternatively, the commonly used functionalities are implemented via traits on the graph
itself, making them usable without configuring the algorithm beforehand.

# Usage

```
use seqgraph::{prelude::*, algo::*};

let mut graph = seqgraph::realize(&[2, 2, 2]).unwrap();
graph.set_weight(0, 2, 5).unwrap();

assert!(graph.has_eulerian_circuit());
assert_eq!(graph.shortest_distances(0).unwrap().get(2), Some(2));
assert_eq!(graph.minimum_spanning_tree().total_weight(), 2);
assert_eq!(graph.vertex_connectivity(), 2);
assert_eq!(graph.edge_connectivity(), 2);
```

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, the graph representation and the error type,
- [`algo`] includes the analyzers, implemented as traits on graphs,
- [`gens`] includes the Havel–Hakimi builder and deterministic substructures such as paths/cycles/cliques,
- [`io`] writes graphs and spanning trees in the DOT format for rendering.

The crate logs via [`tracing`] and never installs a subscriber itself.
*/

pub mod algo;
pub mod bitset;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod sequence;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, Result};
pub use gens::{build, realize};
pub use node::*;
pub use sequence::is_graphical;

/// `seqgraph::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// the graph representation as well as the error type.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
