use crate::build::{RangeProducer, range_from};
use crate::{BackProducer, Producer};

/// Pairs the elements of two producers positionally.
///
/// Stops as soon as either side runs out. Fast length requires both sides
/// to have it and is the shorter of the two lengths.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// An enumerated producer: a [`Zip`] of a counting range with the elements,
/// yielding `(index, element)`.
pub type Enumerate<P> = Zip<RangeProducer<usize>, P>;

/// Pair the elements of `a` and `b`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let pairs = from_bidirectional(&[1, 2, 3]).zip(from_bidirectional(&[10, 9, 8, 7, 6]));
/// assert_eq!(pairs.len(), Some(3));
/// assert_eq!(pairs.to_vec(), vec![(1, 10), (2, 9), (3, 8)]);
/// ```
pub fn zip<A: Producer, B: Producer>(a: A, b: B) -> Zip<A, B> {
    Zip { a, b }
}

/// Number every element of `producer`, starting at `start`.
pub fn enumerate<P: Producer>(producer: P, start: usize) -> Enumerate<P> {
    zip(range_from(start).into_producer(), producer)
}

impl<A: Producer, B: Producer> Producer for Zip<A, B> {
    type Item = (A::Item, B::Item);
    const FAST_LEN: bool = A::FAST_LEN && B::FAST_LEN;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((a, b))
    }

    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }
}

impl<A: BackProducer, B: BackProducer> BackProducer for Zip<A, B> {
    /// Pull the last pair.
    ///
    /// With fast length on both sides, the longer side is first trimmed so the
    /// tails line up. Without it, each side yields its own tail.
    ///
    /// Trimming matches lengths, not positions. An operand whose back end does
    /// not visit the same elements as its front end, such as
    /// [`StepBy`](crate::compose::StepBy), pairs different elements from the
    /// back than from the front.
    fn next_back(&mut self) -> Option<Self::Item> {
        if Self::FAST_LEN {
            let (len_a, len_b) = (self.a.len(), self.b.len());
            if len_a > len_b {
                self.a.advance_back_by(len_a - len_b);
            } else if len_b > len_a {
                self.b.advance_back_by(len_b - len_a);
            }
        }
        let a = self.a.next_back()?;
        let b = self.b.next_back()?;
        Some((a, b))
    }
}
