//! Producers over Rust iterators and containers.
//!
//! Containers are reached through their borrowing `IntoIterator` impls, so
//! anything from a fixed-size array to a `LinkedList` can seed a sequence.
//! The forward factories never claim fast length; the bidirectional ones
//! need a double-ended, exact-size iterator and always provide it.

use core::iter::{Cloned, Fuse, Map};

use crate::build::Slot;
use crate::{BackProducer, Bidi, Forward, Producer};

/// Forward producer over any Rust iterator.
///
/// The iterator is fused, so the producer stays exhausted after its first `None`
/// even when the iterator itself would resume.
#[derive(Debug, Clone)]
pub struct IterProducer<I>(Fuse<I>);

impl<I: Iterator> Producer for IterProducer<I> {
    type Item = I::Item;
    const FAST_LEN: bool = false;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

/// Bidirectional producer over a double-ended, exact-size iterator.
///
/// Fused like [`IterProducer`].
#[derive(Debug, Clone)]
pub struct ExactProducer<I>(Fuse<I>);

impl<I> Producer for ExactProducer<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    type Item = I::Item;
    const FAST_LEN: bool = true;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.0.len());
        if skipped > 0 {
            self.0.nth(skipped - 1);
        }
        skipped
    }
}

impl<I> BackProducer for ExactProducer<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<I::Item> {
        self.0.next_back()
    }

    fn advance_back_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.0.len());
        if skipped > 0 {
            self.0.nth_back(skipped - 1);
        }
        skipped
    }
}

/// Element iterator of a borrowed container, turned into [`Slot`]s.
pub type Slots<'a, I, T> = Map<I, fn(&'a mut T) -> Slot<'a, T>>;

/// Wrap an arbitrary iterator as a forward sequence without fast length.
///
/// This is the begin/end pair of a sequential container in iterator form.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = from_iter("a bb ccc".split(' ')).map(str::len);
/// assert_eq!(words.len(), None);
/// assert_eq!(words.to_vec(), vec![1, 2, 3]);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> Forward<IterProducer<I::IntoIter>> {
    Forward::new(IterProducer(iter.into_iter().fuse()))
}

/// Wrap a double-ended, exact-size iterator as a bidirectional sequence.
pub fn from_exact<I>(iter: I) -> Bidi<ExactProducer<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
{
    Bidi::new(ExactProducer(iter.into_iter().fuse()))
}

/// Forward sequence of clones of a container's elements.
pub fn from_forward<'a, C, T>(container: &'a C) -> Forward<IterProducer<Cloned<<&'a C as IntoIterator>::IntoIter>>>
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
{
    from_iter(container.into_iter().cloned())
}

/// Forward sequence of [`Slot`]s aliasing a container's elements.
pub fn from_forward_ref<'a, C, T>(container: &'a mut C) -> Forward<IterProducer<Slots<'a, <&'a mut C as IntoIterator>::IntoIter, T>>>
where
    C: ?Sized,
    &'a mut C: IntoIterator<Item = &'a mut T>,
    T: 'a,
{
    let to_slot: fn(&'a mut T) -> Slot<'a, T> = Slot::new;
    from_iter(container.into_iter().map(to_slot))
}

/// Bidirectional sequence of clones of a container's elements.
///
/// Accepts arrays, slices, `Vec`, `VecDeque`, `LinkedList` and any other
/// container whose borrowing iterator is double-ended and exact-size.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_bidirectional(&[1, 2, 3]);
/// assert_eq!(seq.len(), Some(3));
/// assert_eq!(seq.rev().to_vec(), vec![3, 2, 1]);
/// ```
pub fn from_bidirectional<'a, C, T>(container: &'a C) -> Bidi<ExactProducer<Cloned<<&'a C as IntoIterator>::IntoIter>>>
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    <&'a C as IntoIterator>::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    T: Clone + 'a,
{
    from_exact(container.into_iter().cloned())
}

/// Bidirectional sequence of [`Slot`]s aliasing a container's elements.
pub fn from_bidirectional_ref<'a, C, T>(container: &'a mut C) -> Bidi<ExactProducer<Slots<'a, <&'a mut C as IntoIterator>::IntoIter, T>>>
where
    C: ?Sized,
    &'a mut C: IntoIterator<Item = &'a mut T>,
    <&'a mut C as IntoIterator>::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    T: 'a,
{
    let to_slot: fn(&'a mut T) -> Slot<'a, T> = Slot::new;
    from_exact(container.into_iter().map(to_slot))
}
