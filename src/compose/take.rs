//! Bounding and striding adaptors.
//!
//! The lazy [`Take`] here serves the forward tier. The bidirectional tier
//! trims its producer from the back instead; see [`Bidi::take`](crate::Bidi::take).

use crate::error::{Result, SeqError};
use crate::{BackProducer, Producer};

/// Yields at most `n` elements of the wrapped producer.
#[derive(Debug, Clone)]
pub struct Take<P> {
    producer: P,
    remaining: usize,
}

/// Create a producer that stops after `n` elements.
pub fn take<P: Producer>(producer: P, n: usize) -> Take<P> {
    Take {
        producer,
        remaining: n,
    }
}

impl<P: Producer> Producer for Take<P> {
    type Item = P::Item;
    const FAST_LEN: bool = P::FAST_LEN;

    fn next(&mut self) -> Option<P::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.producer.next()
    }

    fn len(&self) -> usize {
        self.remaining.min(self.producer.len())
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = self.producer.advance_by(n.min(self.remaining));
        self.remaining -= skipped;
        skipped
    }
}

/// Yields every `step`-th element, starting with the first.
///
/// After each yielded element the next `step - 1` are discarded from the same
/// end. The two ends stride independently of each other.
#[derive(Debug, Clone)]
pub struct StepBy<P> {
    producer: P,
    step: usize,
}

/// Create a producer that yields every `step`-th element of `producer`.
///
/// Fails with [`SeqError::ZeroStep`] when `step` is zero.
///
/// # Examples
///
/// ```
/// use lazyseq::compose::step_by;
/// use lazyseq::prelude::*;
///
/// let mut p = step_by(range(0u32, 10).into_producer(), 3).unwrap();
/// assert_eq!(p.len(), 4);
/// assert_eq!(p.next(), Some(0));
/// assert_eq!(p.next(), Some(3));
///
/// assert!(step_by(range(0u32, 10).into_producer(), 0).is_err());
/// ```
pub fn step_by<P: Producer>(producer: P, step: usize) -> Result<StepBy<P>> {
    if step == 0 {
        return Err(SeqError::ZeroStep);
    }
    Ok(StepBy { producer, step })
}

impl<P: Producer> Producer for StepBy<P> {
    type Item = P::Item;
    const FAST_LEN: bool = P::FAST_LEN;

    fn next(&mut self) -> Option<P::Item> {
        let item = self.producer.next()?;
        self.producer.advance_by(self.step - 1);
        Some(item)
    }

    fn len(&self) -> usize {
        self.producer.len().div_ceil(self.step)
    }
}

impl<P: BackProducer> BackProducer for StepBy<P> {
    fn next_back(&mut self) -> Option<P::Item> {
        let item = self.producer.next_back()?;
        self.producer.advance_back_by(self.step - 1);
        Some(item)
    }
}
