//! Error type shared by the graph, the priority queue and the searches.
//!
//! "No path" is not an error, see [`SearchOutcome`].
//!
//! [`SearchOutcome`]: crate::search::SearchOutcome
use thiserror::Error;

use crate::constants::Weight;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Edge weight is negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be finite and non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },

    #[error("dequeue called on an empty priority queue")]
    EmptyQueue,

    /// Search was started from a vertex that is not part of the graph.
    #[error("unknown vertex {0}")]
    UnknownVertex(String),

    #[error("malformed grid: {0}")]
    MalformedGrid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
