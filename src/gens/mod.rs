/*!
# Graph Generators

Deterministic constructions of graphs:
- [`HavelHakimi`]: realizes a graphical degree sequence as a simple graph (see also [`build`] and [`realize`]),
- [`GeneratorSubstructures`]: inserts paths, cycles and cliques into an existing graph.

Generators follow the builder pattern: configure a struct, then call `build()` / `generate()`.
*/

use crate::prelude::*;

mod havel_hakimi;
mod substructures;

pub use havel_hakimi::*;
pub use substructures::*;
