//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BackProducer, Bidi, Forward, IntoProducer, Producer, SeqError};

// Most common constructors
pub use crate::build::{
    from_bidirectional, from_bidirectional_ref, from_exact, from_fn, from_forward,
    from_forward_ref, from_iter, once, range, range_from, repeat, repeat_n, Slot,
};
