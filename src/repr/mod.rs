/*!
# Graph Representation

The only representation needed here is [`WeightedGraph`]: an arena of vertices `0..n`
and an edge table indexed by [`EdgeId`]. Each vertex keeps its incident `(neighbor, edge id)`
pairs so that algorithms can reach both the neighbor and the edge's weight in one step.

Derived structures (the spanning tree, distance maps, circuits) only ever store node and
edge indices, never references into the graph.
*/

use crate::{ops::*, *};

mod weighted;

pub use weighted::*;
