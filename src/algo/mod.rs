/*!
# Graph Algorithms

The analyzers run on a realized graph. All of them are re-exported here, so
```rust
use seqgraph::{prelude::*, algo::*};
```
gives access to Eulerian circuits, shortest paths, spanning trees, fundamental circuits and
connectivity, plus the traversal and flow routines they are built from.

Commonly used operations are implemented as traits on the graph itself
(`graph.eulerian_circuit()`, `graph.minimum_spanning_tree()`, ...). Where an algorithm has
options, a configurable struct ([`Hierholzer`], [`Dijkstra`], [`Prim`]) is available as well.
If possible, results are provided as **iterators**, making it easy to consume them lazily.
*/

mod articulation;
mod bridges;
mod connectivity;
mod eulerian;
mod fundamental;
mod network_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{error::*, prelude::*};
use tracing::{debug, trace};

pub use articulation::*;
pub use bridges::*;
pub use connectivity::*;
pub use eulerian::*;
pub use fundamental::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
