/*!
# Havel–Hakimi Construction

Builds one concrete simple graph realizing a graphical degree sequence.

The reduction repeatedly takes the vertex with the largest remaining degree `d` and connects it
to the `d` vertices with the next-largest remaining degrees, decrementing each of them.
Every entry carries its original node id, so edges are labelled by sequence position and not
by sorted position. Ties are broken by node id which makes the result deterministic.

# Examples

```
use seqgraph::{prelude::*, gens::*};

let graph = HavelHakimi::new().degrees(&[3, 3, 2, 2, 1, 1]).build().unwrap();
assert_eq!(graph.degrees().collect::<Vec<_>>(), vec![3, 3, 2, 2, 1, 1]);
```
*/

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{error::*, sequence::is_graphical};

use super::*;

/// Configurable Havel–Hakimi graph builder.
#[derive(Debug, Clone, Default)]
pub struct HavelHakimi {
    degrees: Vec<i64>,
}

impl HavelHakimi {
    /// Creates a builder for the empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree sequence to realize
    pub fn set_degrees(&mut self, degrees: &[i64]) {
        self.degrees = degrees.to_vec();
    }

    /// Sets the degree sequence to realize
    pub fn degrees(mut self, degrees: &[i64]) -> Self {
        self.set_degrees(degrees);
        self
    }

    /// Number of nodes of the resulting graph
    pub fn number_of_nodes(&self) -> Result<NumNodes> {
        num_nodes_from_len(self.degrees.len())
            .ok_or_else(|| GraphError::construction("degree sequence has too many entries"))
    }

    /// Runs the reduction and returns the edges of the realizing graph, normalized,
    /// in the order they were chosen.
    ///
    /// Fails with `Construction` if the reduction gets stuck, which only happens for
    /// sequences that are not graphical.
    pub fn generate(&self) -> Result<Vec<Edge>> {
        let n = self.number_of_nodes()?;
        let max_degree = n.saturating_sub(1) as i64;

        let mut remaining: Vec<(i64, Node)> = Vec::with_capacity(self.degrees.len());
        for (u, &d) in self.degrees.iter().enumerate() {
            if d < 0 {
                return Err(GraphError::construction(format!(
                    "node {u} has negative degree {d}"
                )));
            }
            if d > max_degree {
                return Err(GraphError::construction(format!(
                    "node {u} has degree {d} but only {max_degree} other nodes exist"
                )));
            }
            if d > 0 {
                remaining.push((d, u as Node));
            }
        }

        let mut edges = Vec::new();

        while !remaining.is_empty() {
            remaining.sort_unstable_by(|(da, ua), (db, ub)| db.cmp(da).then(ua.cmp(ub)));

            let (d, u) = remaining.remove(0);
            if d as usize > remaining.len() {
                return Err(GraphError::construction(format!(
                    "node {u} needs {d} neighbors but only {} candidates remain",
                    remaining.len()
                )));
            }

            for (dv, v) in &mut remaining[..d as usize] {
                trace!(u, v = *v, "havel-hakimi edge");
                edges.push(Edge(u, *v).normalized());
                *dv -= 1;
            }

            remaining.retain(|&(d, _)| d > 0);
        }

        Ok(edges)
    }

    /// Runs the reduction and returns the realizing graph with all weights unset
    pub fn build(&self) -> Result<WeightedGraph> {
        let n = self.number_of_nodes()?;
        let mut graph = WeightedGraph::new(n);

        for Edge(u, v) in self.generate()? {
            if u == v || graph.try_add_edge(u, v) {
                return Err(GraphError::construction(format!(
                    "reduction produced invalid edge ({u},{v})"
                )));
            }
        }

        debug!(
            n,
            m = graph.number_of_edges(),
            "built graph from degree sequence"
        );
        debug_assert!(
            graph
                .degrees()
                .zip_eq(self.degrees.iter())
                .all(|(a, &b)| a as i64 == b)
        );

        Ok(graph)
    }
}

/// Builds a graph realizing `sequence`. The sequence should have passed [`is_graphical`];
/// otherwise this fails with `Construction`.
pub fn build(sequence: &[i64]) -> Result<WeightedGraph> {
    HavelHakimi::new().degrees(sequence).build()
}

/// Checks `sequence` first and fails with `NotGraphical` if it is not realizable,
/// otherwise behaves like [`build`].
pub fn realize(sequence: &[i64]) -> Result<WeightedGraph> {
    if !is_graphical(sequence) {
        return Err(GraphError::NotGraphical);
    }
    build(sequence)
}
