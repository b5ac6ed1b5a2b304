//! Core traits for single-pass element producers.
//!
//! A [`Producer`] is a stateful cursor over a sequence: every call to
//! [`next`](Producer::next) either hands out the next element or returns `None`
//! once the sequence is exhausted. A [`BackProducer`] can additionally be pulled
//! from its tail, which is what makes [`rev`](crate::Bidi::rev) and the
//! bidirectional forms of `take` and `step_by` possible.
//!
//! # Capabilities
//!
//! Every producer declares, as an associated constant, whether it can report
//! its remaining length in O(1):
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares = range(0u32, 10).map(|x| x * x);
//! assert_eq!(squares.len(), Some(10));
//!
//! let even = range(0u32, 10).filter(|x| x % 2 == 0);
//! assert_eq!(even.len(), None);
//! ```
//!
//! The flag is folded through composition at compile time: zipping and
//! chaining AND the flags of both operands, filtering clears it, and every
//! other adaptor inherits it from its upstream.

use either::Either;

/// A single-pass cursor that yields elements front to back.
///
/// Cloning a producer clones its cursor state: the clone continues
/// independently from the same position.
pub trait Producer {
    /// Type of each element.
    type Item;

    /// `true` iff [`len`](Producer::len) is exact and O(1).
    const FAST_LEN: bool;

    /// Return the next element and advance, or `None` once exhausted.
    ///
    /// After the first `None`, every later call also returns `None`.
    fn next(&mut self) -> Option<Self::Item>;

    /// Remaining number of elements.
    ///
    /// Only meaningful when [`FAST_LEN`](Producer::FAST_LEN) is `true`; other
    /// producers report `0`.
    fn len(&self) -> usize {
        0
    }

    /// Discard up to `n` elements from the front.
    ///
    /// Returns how many were actually discarded, which is less than `n` only
    /// when the producer ran out.
    fn advance_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next().is_none() {
                return skipped;
            }
        }
        n
    }
}

/// A producer that can also be pulled from the back.
///
/// `next` and `next_back` each signal their own exhaustion; the sequence is
/// spent once the two ends meet.
pub trait BackProducer: Producer {
    /// Return the last remaining element and retract the end, or `None`.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Discard up to `n` elements from the back, returning how many were discarded.
    fn advance_back_by(&mut self, n: usize) -> usize {
        for skipped in 0..n {
            if self.next_back().is_none() {
                return skipped;
            }
        }
        n
    }
}

/// Conversion of a sequence wrapper back into its producer.
///
/// Binary adaptors (`zip`, `chain`) accept anything implementing this trait,
/// so a [`Forward`](crate::Forward) can be combined with a
/// [`Bidi`](crate::Bidi) and vice versa where the tiers allow it.
pub trait IntoProducer {
    type Producer: Producer;

    fn into_producer(self) -> Self::Producer;
}

impl<L, R> Producer for Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;
    const FAST_LEN: bool = L::FAST_LEN && R::FAST_LEN;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Either::Left(l) => l.len(),
            Either::Right(r) => r.len(),
        }
    }

    fn advance_by(&mut self, n: usize) -> usize {
        match self {
            Either::Left(l) => l.advance_by(n),
            Either::Right(r) => r.advance_by(n),
        }
    }
}

impl<L, R> BackProducer for Either<L, R>
where
    L: BackProducer,
    R: BackProducer<Item = L::Item>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.next_back(),
            Either::Right(r) => r.next_back(),
        }
    }

    fn advance_back_by(&mut self, n: usize) -> usize {
        match self {
            Either::Left(l) => l.advance_back_by(n),
            Either::Right(r) => r.advance_back_by(n),
        }
    }
}
