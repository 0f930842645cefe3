/*!
# Fundamental Cutsets and Circuits

Given a spanning tree `T` of a graph, every graph edge `{u,v}` outside of `T` whose
endpoints are both spanned is a *chord*. Adding a chord to `T` closes exactly one cycle,
its *fundamental circuit*: the tree path from `u` to `v` followed by the chord itself.

Chords are reported in edge-id order of the graph; `cutsets[i]` is the i-th chord and
`circuits[i]` its circuit as a closed walk of oriented edges. Edges not touching the spanned
component of the tree are skipped.
*/

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Chords of a spanning tree and their fundamental circuits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundamentalSets {
    /// The chords, normalized
    pub cutsets: Vec<Edge>,
    /// `circuits[i]` starts at `cutsets[i].0`, walks the tree to `cutsets[i].1` and
    /// returns along the chord
    pub circuits: Vec<Vec<Edge>>,
}

impl FundamentalSets {
    pub fn len(&self) -> usize {
        self.cutsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cutsets.is_empty()
    }

    /// Iterates over `(chord, circuit)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &[Edge])> + '_ {
        self.cutsets
            .iter()
            .copied()
            .zip(self.circuits.iter().map(|c| c.as_slice()))
    }
}

pub trait FundamentalCycles: EdgeWeights + Sized {
    /// Computes the chords of `tree` in this graph and their fundamental circuits.
    /// `tree` is expected to be a spanning tree of (a component of) this graph.
    fn fundamental_sets(&self, tree: &SpanningTree) -> FundamentalSets {
        let tree_edges: FxHashSet<Edge> = tree.edges().collect();
        let mut sets = FundamentalSets::default();

        for (chord, _) in self.weighted_edges() {
            let Edge(u, v) = chord;
            if tree_edges.contains(&chord) || !tree.spans(u) || !tree.spans(v) {
                continue;
            }

            let Some(path) = tree.path(u, v) else {
                continue;
            };

            let mut circuit = path
                .into_iter()
                .tuple_windows()
                .map(|(a, b)| Edge(a, b))
                .collect_vec();
            circuit.push(Edge(v, u));

            trace!(%chord, len = circuit.len(), "fundamental circuit");
            sets.cutsets.push(chord);
            sets.circuits.push(circuit);
        }

        debug!(chords = sets.len(), "fundamental sets");
        sets
    }
}

impl<G> FundamentalCycles for G where G: EdgeWeights + Sized {}
