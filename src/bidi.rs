//! The bidirectional sequence wrapper.
//!
//! [`Bidi`] mirrors [`Forward`] for producers that can also be pulled from the
//! back, and adds [`rev`](Bidi::rev) and [`next_back`](Bidi::next_back).
//!
//! The one behavioral difference between the tiers is `take`: on `Bidi` it is
//! eager and trims the excess from the back as soon as it is called, which
//! requires the producer to know its length in O(1).

use alloc::vec::Vec;
use core::ops::{Add, Mul};

use crate::compose::{self, Chain, Enumerate, Filter, Map, Rev, StepBy, Zip};
use crate::error::{Result, SeqError};
use crate::forward::or_panic;
use crate::iter::Cursor;
use crate::{BackProducer, Forward, IntoProducer, Producer, consume};

/// A lazy sequence that can be consumed from both ends.
#[derive(Debug, Clone)]
pub struct Bidi<P> {
    producer: P,
}

impl<P: BackProducer> Bidi<P> {
    /// `true` iff [`len`](Bidi::len) is available.
    pub const FAST_LEN: bool = P::FAST_LEN;

    /// Wrap a producer.
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Unwrap the producer at its current position.
    pub fn into_producer(self) -> P {
        self.producer
    }

    /// Give up the back end and continue as a forward-only sequence.
    pub fn forward(self) -> Forward<P> {
        Forward::new(self.producer)
    }

    /// Pull the next element from the front.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<P::Item> {
        self.producer.next()
    }

    /// Pull the next element from the back.
    pub fn next_back(&mut self) -> Option<P::Item> {
        self.producer.next_back()
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

    /// The end-of-sequence sentinel matching [`begin`](Bidi::begin).
    pub fn end(&self) -> Cursor<P> {
        Cursor::end()
    }

    // --- Adaptors ---

    /// Discard the next `n` elements from the front now.
    pub fn skip(mut self, n: usize) -> Self {
        let skipped = self.producer.advance_by(n);
        tracing::trace!(requested = n, skipped, "skip");
        self
    }

    /// Keep only the first `n` elements by draining the rest from the back.
    ///
    /// The drain happens here, not during traversal.
    ///
    /// # Panics
    ///
    /// Panics if the producer has no fast length; see [`try_take`](Bidi::try_take).
    #[track_caller]
    pub fn take(self, n: usize) -> Self {
        or_panic(self.try_take(n))
    }

    /// Fails with [`SeqError::NoFastLength`] unless the producer has fast length.
    pub fn try_take(mut self, n: usize) -> Result<Self> {
        if !P::FAST_LEN {
            return Err(SeqError::NoFastLength { op: "take" });
        }
        let len = self.producer.len();
        if len > n {
            let drained = self.producer.advance_back_by(len - n);
            tracing::trace!(len, keep = n, drained, "take: drained tail");
        }
        Ok(self)
    }

    /// Yield every `step`-th element; each end strides on its own.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero; see [`try_step_by`](Bidi::try_step_by).
    #[track_caller]
    pub fn step_by(self, step: usize) -> Bidi<StepBy<P>> {
        or_panic(self.try_step_by(step))
    }

    /// Like [`step_by`](Bidi::step_by), but a zero step is an error.
    pub fn try_step_by(self, step: usize) -> Result<Bidi<StepBy<P>>> {
        compose::step_by(self.producer, step).map(Bidi::new)
    }

    /// Pair elements with another bidirectional sequence.
    pub fn zip<Q>(self, other: Q) -> Bidi<Zip<P, Q::Producer>>
    where
        Q: IntoProducer,
        Q::Producer: BackProducer,
    {
        Bidi::new(compose::zip(self.producer, other.into_producer()))
    }

    /// Continue with `other` once this sequence is exhausted.
    ///
    /// From the back, `other` is drained first.
    pub fn chain<Q>(self, other: Q) -> Bidi<Chain<P, Q::Producer>>
    where
        Q: IntoProducer,
        Q::Producer: BackProducer<Item = P::Item>,
    {
        Bidi::new(compose::chain(self.producer, other.into_producer()))
    }

    /// Transform every element with `f`.
    pub fn map<U, F>(self, f: F) -> Bidi<Map<P, F>>
    where
        F: FnMut(P::Item) -> U,
    {
        Bidi::new(compose::map(self.producer, f))
    }

    /// Keep only the elements for which `predicate` holds.
    pub fn filter<F>(self, predicate: F) -> Bidi<Filter<P, F>>
    where
        F: FnMut(&P::Item) -> bool,
    {
        Bidi::new(compose::filter(self.producer, predicate))
    }

    /// Pair each element with its index, as `(index, element)`.
    ///
    /// Pulling from the back reports the element's true index only when the
    /// producer has fast length.
    pub fn enumerate(self) -> Bidi<Enumerate<P>> {
        self.enumerate_from(0)
    }

    /// Like [`enumerate`](Bidi::enumerate), counting from `start`.
    pub fn enumerate_from(self, start: usize) -> Bidi<Enumerate<P>> {
        Bidi::new(compose::enumerate(self.producer, start))
    }

    /// Walk the sequence back to front.
    pub fn rev(self) -> Bidi<Rev<P>> {
        Bidi::new(compose::rev(self.producer))
    }

    // --- Terminal operations ---

    /// Element `n` positions ahead (0-based), or `None` if out of range.
    pub fn nth(self, n: usize) -> Option<P::Item> {
        consume::nth(self.producer, n)
    }

    /// The last element, pulled directly from the back.
    pub fn last(mut self) -> Option<P::Item> {
        self.producer.next_back()
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
    /// Panics on an empty sequence.
    #[track_caller]
    pub fn fold_first<F>(self, f: F) -> P::Item
    where
        F: FnMut(P::Item, P::Item) -> P::Item,
    {
        or_panic(self.try_fold_first(f))
    }

    /// Like [`fold_first`](Bidi::fold_first), but an empty sequence is an error.
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

    /// Like [`sum`](Bidi::sum), but an empty sequence is an error.
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

    /// Like [`product`](Bidi::product), but an empty sequence is an error.
    pub fn try_product(self) -> Result<P::Item>
    where
        P::Item: Mul<Output = P::Item>,
    {
        consume::product(self.producer)
    }

    /// Number of remaining elements; O(1) with fast length.
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

impl<P: BackProducer> IntoProducer for Bidi<P> {
    type Producer = P;

    fn into_producer(self) -> P {
        self.producer
    }
}

impl<P: BackProducer> From<Bidi<P>> for Forward<P> {
    fn from(seq: Bidi<P>) -> Self {
        seq.forward()
    }
}

impl<P: BackProducer> IntoIterator for Bidi<P> {
    type Item = P::Item;
    type IntoIter = Cursor<P>;

    fn into_iter(self) -> Cursor<P> {
        Cursor::begin(self.producer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_bidirectional, once, range};
    use crate::test_utils::init_test_logging;

    #[test]
    fn test_take_drains_back_eagerly() {
        init_test_logging();
        let mut seq = range(0u32, 10).take(3);
        assert_eq!(seq.len(), Some(3));
        assert_eq!(seq.next_back(), Some(2));
        assert_eq!(seq.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_take_more_than_length_keeps_everything() {
        assert_eq!(range(0u8, 3).take(10).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_without_fast_len_is_rejected() {
        let filtered = range(0u8, 10).filter(|x| x % 2 == 0);
        assert_eq!(filtered.try_take(2).err(), Some(SeqError::NoFastLength { op: "take" }));
    }

    #[test]
    #[should_panic(expected = "`take` requires a producer with fast length")]
    fn test_take_without_fast_len_panics() {
        let _ = range(0u8, 10).filter(|_| true).take(2);
    }

    #[test]
    fn test_skip_then_take() {
        let seq = range(0u32, 10).skip(2).take(3);
        assert_eq!(seq.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_rev_of_chain() {
        let seq = from_bidirectional(&[1, 2]).chain(from_bidirectional(&[3, 4]));
        assert_eq!(seq.clone().to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(seq.rev().to_vec(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_step_by_from_back() {
        let mut seq = range(0u32, 10).step_by(3);
        assert_eq!(seq.len(), Some(4));
        assert_eq!(seq.next_back(), Some(9));
        assert_eq!(seq.next(), Some(0));
    }

    #[test]
    fn test_enumerate_reversed() {
        let seq = from_bidirectional(&['a', 'b', 'c']).enumerate().rev();
        assert_eq!(seq.to_vec(), vec![(2, 'c'), (1, 'b'), (0, 'a')]);
    }

    #[test]
    fn test_last_pulls_from_back() {
        assert_eq!(range(0u64, u64::MAX).last(), Some(u64::MAX - 1));
        assert_eq!(range(0u64, 0).last(), None);
    }

    #[test]
    fn test_forward_keeps_position() {
        let mut seq = range(0u8, 5);
        seq.next();
        seq.next_back();
        let fwd: Forward<_> = seq.into();
        assert_eq!(fwd.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_once_chain_range() {
        let seq = once(100u8).chain(range(0u8, 2));
        assert_eq!(seq.len(), Some(3));
        assert_eq!(seq.rev().to_vec(), vec![1, 0, 100]);
    }
}
