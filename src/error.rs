//! Error types (§7).

use thiserror::Error;

use crate::protocol::{Action, Protocol};

/// Rejected before any variable is emitted.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("path length must be non-negative, got {0}")]
    NegativeLength(i64),
    #[error("network has no nodes")]
    EmptyNetwork,
    #[error("source node {0} is out of range for a network of {1} nodes")]
    SourceOutOfRange(usize, usize),
    #[error("destination node {0} is out of range for a network of {1} nodes")]
    DestinationOutOfRange(usize, usize),
}

/// A model passed to the decoder does not satisfy φ(L); since a genuine
/// satisfying model cannot exhibit this, it is a contract violation rather
/// than something the decoder attempts to repair.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("position {0}: no node occupies (position, height) in the model")]
    NoOccupant(usize),
    #[error("position {0}: more than one (node, height) pair is occupied in the model")]
    AmbiguousOccupant(usize),
    #[error("hop {0}: stack top moved by {1}, which is not a valid action delta")]
    InvalidDelta(usize, i64),
}

/// The decoded path violates the abstract stack machine it is replayed
/// against (§4.L). Distinct from [`DecodeError`]: this operates purely on a
/// step sequence, independent of any model.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("step {0}: {1} requires the top of stack to be {2}")]
    PreconditionViolated(usize, Action, Protocol),
    #[error("step {0}: cannot pop from an empty stack")]
    PopFromEmpty(usize),
}
