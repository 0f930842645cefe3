//! Error type shared by graph construction and the analyzers.
//!
//! Every variant is a distinct kind so callers can branch (re-prompt for a new sequence,
//! reject a source vertex, ...) without inspecting the message.

use thiserror::Error;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The degree sequence cannot be realized by a simple graph
    #[error("degree sequence is not graphical")]
    NotGraphical,

    /// Havel–Hakimi construction reached an inconsistent state
    #[error("graph construction failed: {reason}")]
    Construction { reason: String },

    #[error("vertex {node} is not part of the graph with {n} vertices")]
    UnknownVertex { node: Node, n: NumNodes },

    /// A negative weight was met while computing shortest distances
    #[error("edge {edge} has negative weight {weight}")]
    InvalidWeight { edge: Edge, weight: Weight },

    #[error("edge {edge} is not part of the graph")]
    MissingEdge { edge: Edge },
}

impl GraphError {
    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        GraphError::Construction {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
