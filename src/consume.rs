//! Terminal operations.
//!
//! Each function consumes a producer to a single value or a container. The
//! wrappers expose them as methods; they are free functions here so both tiers
//! share one implementation.

use core::ops::{Add, Mul};

use crate::Producer;
use crate::error::{Result, SeqError};

/// Left fold of every remaining element into an accumulator.
pub fn fold<P, B, F>(mut producer: P, init: B, mut f: F) -> B
where
    P: Producer,
    F: FnMut(B, P::Item) -> B,
{
    let mut acc = init;
    while let Some(item) = producer.next() {
        acc = f(acc, item);
    }
    acc
}

/// Left fold seeded with the first element.
///
/// `op` names the calling operation in the error for an empty producer.
pub fn fold_first<P, F>(mut producer: P, f: F, op: &'static str) -> Result<P::Item>
where
    P: Producer,
    F: FnMut(P::Item, P::Item) -> P::Item,
{
    let first = producer.next().ok_or(SeqError::Empty { op })?;
    Ok(fold(producer, first, f))
}

pub fn sum<P>(producer: P) -> Result<P::Item>
where
    P: Producer,
    P::Item: Add<Output = P::Item>,
{
    fold_first(producer, |a, b| a + b, "sum")
}

pub fn product<P>(producer: P) -> Result<P::Item>
where
    P: Producer,
    P::Item: Mul<Output = P::Item>,
{
    fold_first(producer, |a, b| a * b, "product")
}

/// Number of remaining elements: O(1) with fast length, otherwise a full drain.
pub fn count<P: Producer>(producer: P) -> usize {
    if P::FAST_LEN {
        return producer.len();
    }
    fold(producer, 0, |n, _| n + 1)
}

/// Drain into a freshly constructed container, in traversal order.
pub fn collect<P, C>(producer: P) -> C
where
    P: Producer,
    C: Default + Extend<P::Item>,
{
    let mut container = C::default();
    container.extend(Drain(producer));
    container
}

/// Discard `n` elements, then return the next one.
pub fn nth<P: Producer>(mut producer: P, n: usize) -> Option<P::Item> {
    if producer.advance_by(n) < n {
        return None;
    }
    producer.next()
}

pub fn last<P: Producer>(producer: P) -> Option<P::Item> {
    fold(producer, None, |_, item| Some(item))
}

pub fn for_each<P, F>(producer: P, mut f: F)
where
    P: Producer,
    F: FnMut(P::Item),
{
    fold(producer, (), |(), item| f(item));
}

/// Feeds a producer to `Extend` without the one-element lookahead of
/// [`Cursor`](crate::iter::Cursor).
struct Drain<P>(P);

impl<P: Producer> Iterator for Drain<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if P::FAST_LEN {
            let len = self.0.len();
            (len, Some(len))
        } else {
            (0, None)
        }
    }
}
