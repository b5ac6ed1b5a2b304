//! The forward-only sequence wrapper.
//!
//! [`Forward`] owns one [`Producer`] and exposes the adaptor and terminal
//! operations over it. Every adaptor consumes the wrapper and returns a new
//! one around a composite producer; clone a wrapper first to keep an
//! independent cursor at the current position.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let list = std::collections::LinkedList::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! let picked = from_forward(&list).skip(2).step_by(2).take(3);
//! assert_eq!(picked.to_vec(), vec![3, 5, 7]);
//! ```

use alloc::vec::Vec;
use core::ops::{Add, Mul};

use crate::build::{ExactProducer, from_exact};
use crate::compose::{self, Chain, Enumerate, Filter, Map, StepBy, Take, Zip};
use crate::error::{Result, SeqError};
use crate::iter::Cursor;
use crate::{Bidi, IntoProducer, Producer, consume};

/// A forward-only lazy sequence.
#[derive(Debug, Clone)]
pub struct Forward<P> {
    producer: P,
}

impl<P: Producer> Forward<P> {
    /// `true` iff [`len`](Forward::len) is available.
    pub const FAST_LEN: bool = P::FAST_LEN;

    /// Wrap a producer.
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Unwrap the producer at its current position.
    pub fn into_producer(self) -> P {
        self.producer
    }

    /// Pull the next element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<P::Item> {
        self.producer.next()
    }

    /// Remaining length, if the producer can report it in O(1).
    pub fn len(&self) -> Option<usize> {
        P::FAST_LEN.then(|| self.producer.len())
    }

    /// A live cursor at the current position, pulling from a clone.
    pub fn begin(&self) -> Cursor<P>
    where
        P: Clone,
    {
        Cursor::begin(self.producer.clone())
    }

    /// The end-of-sequence sentinel matching [`begin`](Forward::begin).
    pub fn end(&self) -> Cursor<P> {
        Cursor::end()
    }

    // --- Adaptors ---

    /// Discard the next `n` elements now.
    ///
    /// Leaves the sequence exhausted if fewer than `n` remain.
    pub fn skip(mut self, n: usize) -> Self {
        let skipped = self.producer.advance_by(n);
        tracing::trace!(requested = n, skipped, "skip");
        self
    }

    /// Yield at most `n` more elements.
    pub fn take(self, n: usize) -> Forward<Take<P>> {
        Forward::new(compose::take(self.producer, n))
    }

    /// Yield every `step`-th element, starting with the next one.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero; see [`try_step_by`](Forward::try_step_by).
    #[track_caller]
    pub fn step_by(self, step: usize) -> Forward<StepBy<P>> {
        or_panic(self.try_step_by(step))
    }

    /// Like [`step_by`](Forward::step_by), but a zero step is an error.
    pub fn try_step_by(self, step: usize) -> Result<Forward<StepBy<P>>> {
        compose::step_by(self.producer, step).map(Forward::new)
    }

    /// Pair elements with another sequence; stops at the shorter one.
    pub fn zip<Q: IntoProducer>(self, other: Q) -> Forward<Zip<P, Q::Producer>> {
        Forward::new(compose::zip(self.producer, other.into_producer()))
    }

    /// Continue with `other` once this sequence is exhausted.
    pub fn chain<Q>(self, other: Q) -> Forward<Chain<P, Q::Producer>>
    where
        Q: IntoProducer,
        Q::Producer: Producer<Item = P::Item>,
    {
        Forward::new(compose::chain(self.producer, other.into_producer()))
    }

    /// Transform every element with `f`.
    pub fn map<U, F>(self, f: F) -> Forward<Map<P, F>>
    where
        F: FnMut(P::Item) -> U,
    {
        Forward::new(compose::map(self.producer, f))
    }

    /// Keep only the elements for which `predicate` holds.
    pub fn filter<F>(self, predicate: F) -> Forward<Filter<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Forward::new(compose::filter(self.producer, predicate))
    }

    /// Pair each element with its index, as `(index, element)`.
    pub fn enumerate(self) -> Forward<Enumerate<P>> {
        self.enumerate_from(0)
    }

    /// Like [`enumerate`](Forward::enumerate), counting from `start`.
    pub fn enumerate_from(self, start: usize) -> Forward<Enumerate<P>> {
        Forward::new(compose::enumerate(self.producer, start))
    }

    /// Collect the rest of the sequence so it can be walked from both ends.
    ///
    /// This is how a forward sequence is reversed: `seq.materialize().rev()`.
    /// It costs O(n) memory.
    pub fn materialize(self) -> Bidi<ExactProducer<alloc::vec::IntoIter<P::Item>>> {
        let items = self.to_vec();
        tracing::debug!(len = items.len(), "materialized forward sequence");
        from_exact(items)
    }

    // --- Terminal operations ---

    /// Element `n` positions ahead (0-based), or `None` if out of range.
    pub fn nth(self, n: usize) -> Option<P::Item> {
        consume::nth(self.producer, n)
    }

    /// The final element, found by draining the sequence.
    pub fn last(self) -> Option<P::Item> {
        consume::last(self.producer)
    }

    /// Left fold of every remaining element, seeded with `init`.
    pub fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, P::Item) -> B,
    {
        consume::fold(self.producer, init, f)
    }

    /// Fold seeded with the first element.
    ///
    /// # Panics
    ///
    /// Panics on an empty sequence; see [`try_fold_first`](Forward::try_fold_first).
    #[track_caller]
    pub fn fold_first<F>(self, f: F) -> P::Item
    where
        F: FnMut(P::Item, P::Item) -> P::Item,
    {
        or_panic(self.try_fold_first(f))
    }

    /// Like [`fold_first`](Forward::fold_first), but an empty sequence is an error.
    pub fn try_fold_first<F>(self, f: F) -> Result<P::Item>
    where
        F: FnMut(P::Item, P::Item) -> P::Item,
    {
        consume::fold_first(self.producer, f, "fold_first")
    }

    /// Sum of every remaining element.
    ///
    /// # Panics
    ///
    /// Panics on an empty sequence.
    #[track_caller]
    pub fn sum(self) -> P::Item
    where
        P::Item: Add<Output = P::Item>,
    {
        or_panic(self.try_sum())
    }

    /// Like [`sum`](Forward::sum), but an empty sequence is an error.
    pub fn try_sum(self) -> Result<P::Item>
    where
        P::Item: Add<Output = P::Item>,
    {
        consume::sum(self.producer)
    }

    /// Product of every remaining element.
    ///
    /// # Panics
    ///
    /// Panics on an empty sequence.
    #[track_caller]
    pub fn product(self) -> P::Item
    where
        P::Item: Mul<Output = P::Item>,
    {
        or_panic(self.try_product())
    }

    /// Like [`product`](Forward::product), but an empty sequence is an error.
    pub fn try_product(self) -> Result<P::Item>
    where
        P::Item: Mul<Output = P::Item>,
    {
        consume::product(self.producer)
    }

    /// Number of remaining elements; O(1) when [`FAST_LEN`](Forward::FAST_LEN).
    pub fn count(self) -> usize {
        consume::count(self.producer)
    }

    /// Drain into any default-constructible, extendable container.
    pub fn collect<C>(self) -> C
    where
        C: Default + Extend<P::Item>,
    {
        consume::collect(self.producer)
    }

    /// Drain into a `Vec`, in traversal order.
    pub fn to_vec(self) -> Vec<P::Item> {
        self.collect()
    }

    /// Call `f` on every remaining element.
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(P::Item),
    {
        consume::for_each(self.producer, f)
    }
}

/// Unwrap a fallible terminal result, turning a contract violation into a panic.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T, SeqError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<P: Producer> IntoProducer for Forward<P> {
    type Producer = P;

    fn into_producer(self) -> P {
        self.producer
    }
}

impl<P: Producer> IntoIterator for Forward<P> {
    type Item = P::Item;
    type IntoIter = Cursor<P>;

    fn into_iter(self) -> Cursor<P> {
        Cursor::begin(self.producer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, range, repeat};
    use crate::test_utils::init_test_logging;

    fn letters() -> Forward<crate::build::IterProducer<core::str::Chars<'static>>> {
        from_iter("abcdef".chars())
    }

    #[test]
    fn test_skip_then_next() {
        init_test_logging();
        let mut seq = letters().skip(2);
        assert_eq!(seq.next(), Some('c'));
    }

    #[test]
    fn test_skip_past_end_exhausts() {
        let mut seq = letters().skip(100);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_take_is_lazy() {
        let mut pulled = 0;
        let seq = from_iter(core::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        }))
        .take(3);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_clone_is_independent_cursor() {
        let mut seq = letters();
        seq.next();
        let copy = seq.clone();
        assert_eq!(seq.to_vec(), vec!['b', 'c', 'd', 'e', 'f']);
        assert_eq!(copy.to_vec(), vec!['b', 'c', 'd', 'e', 'f']);
    }

    #[test]
    fn test_len_only_with_fast_len() {
        assert_eq!(letters().len(), None);
        assert_eq!(range(0u8, 4).forward().len(), Some(4));
        assert_eq!(range(0u8, 4).forward().take(2).len(), Some(2));
        assert!(!Forward::<crate::build::Repeat<u8>>::FAST_LEN);
    }

    #[test]
    fn test_nth() {
        assert_eq!(letters().nth(0), Some('a'));
        assert_eq!(letters().nth(5), Some('f'));
        assert_eq!(letters().nth(6), None);
    }

    #[test]
    fn test_zip_accepts_either_tier() {
        let pairs = letters().zip(range(1u8, 10)).to_vec();
        assert_eq!(pairs[..2], [('a', 1), ('b', 2)]);
        assert_eq!(pairs.len(), 6);
    }

    #[test]
    fn test_chain_forward_sources() {
        let seq = from_iter(vec![1, 2]).chain(from_iter(vec![3]));
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_enumerate_from_offset() {
        let seq = letters().take(2).enumerate_from(10);
        assert_eq!(seq.to_vec(), vec![(10, 'a'), (11, 'b')]);
    }

    #[test]
    fn test_materialize_then_reverse() {
        init_test_logging();
        let reversed = letters().filter(|c| *c != 'c').materialize().rev();
        assert_eq!(reversed.len(), Some(5));
        assert_eq!(reversed.to_vec(), vec!['f', 'e', 'd', 'b', 'a']);
    }

    #[test]
    fn test_fold_first_and_sum() {
        assert_eq!(range(1u32, 5).forward().fold_first(|a, b| a.max(b)), 4);
        assert_eq!(from_iter([1.5, 2.5]).sum(), 4.0);
        assert_eq!(range(1u64, 6).forward().product(), 120);
    }

    #[test]
    #[should_panic(expected = "`sum` needs at least one element")]
    fn test_sum_of_empty_panics() {
        from_iter(Vec::<i32>::new()).sum();
    }

    #[test]
    #[should_panic(expected = "the step must be at least 1")]
    fn test_step_by_zero_panics() {
        let _ = repeat(1).step_by(0);
    }

    #[test]
    fn test_try_variants_report_errors() {
        assert_eq!(
            from_iter(Vec::<i32>::new()).try_product(),
            Err(SeqError::Empty { op: "product" })
        );
        assert!(matches!(repeat(1).try_step_by(0), Err(SeqError::ZeroStep)));
    }

    #[test]
    fn test_count_without_fast_len_drains() {
        assert_eq!(letters().filter(|c| c.is_ascii_lowercase()).count(), 6);
    }

    #[test]
    fn test_for_loop() {
        let mut out = String::new();
        for c in letters().step_by(2) {
            out.push(c);
        }
        assert_eq!(out, "ace");
    }
}
