//! Contract violations detected while composing or consuming a sequence.
//!
//! Running out of elements is not an error anywhere in this crate: it is the
//! `None` returned by [`Producer::next`](crate::Producer::next). The variants
//! below describe calls whose preconditions were not met by the caller.

use thiserror::Error;

/// A precondition of a sequence operation was violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// `step_by` was called with a step of zero.
    #[error("the step must be at least 1")]
    ZeroStep,

    /// A seedless fold (`fold_first`, `sum`, `product`) ran over an empty sequence.
    #[error("`{op}` needs at least one element but the sequence is empty")]
    Empty { op: &'static str },

    /// A bidirectional operation that trims from the back needs `len()`,
    /// but the producer cannot report its length in O(1).
    #[error("`{op}` requires a producer with fast length")]
    NoFastLength { op: &'static str },
}

/// Result alias for fallible sequence operations.
pub type Result<T, E = SeqError> = core::result::Result<T, E>;
