//! Building sequences from scratch
//!
//! This module provides the source factories that seed every pipeline:
//! containers and iterators, numeric ranges, and single or repeated values.

mod container;
mod func;
mod range;
mod slot;

// Re-export building blocks
pub use container::{
    ExactProducer, IterProducer, Slots, from_bidirectional, from_bidirectional_ref, from_exact,
    from_forward, from_forward_ref, from_iter,
};
pub use func::{FromFn, Once, Repeat, from_fn, once, repeat, repeat_n};
pub use range::{Counter, RangeProducer, range, range_from};
pub use slot::Slot;
