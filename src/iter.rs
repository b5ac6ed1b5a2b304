//! Host iteration for sequences.
//!
//! A [`Cursor`] walks a producer with one element of lookahead: building a
//! live cursor pulls the first element, so reading the current element never
//! has side effects. The end of a range is a sentinel cursor that never moves;
//! two cursors compare equal when they agree on whether they are valid, which
//! is how a begin/end pair detects the end of the sequence.
//!
//! # Examples
//!
//! Walking a begin/end pair by hand:
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let seq = range(0u8, 3);
//! let (mut it, end) = (seq.begin(), seq.end());
//! let mut seen = Vec::new();
//! while it != end {
//!     seen.push(*it.get().unwrap());
//!     it.advance();
//! }
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```
//!
//! Or let `for` do it, since every sequence is [`IntoIterator`]:
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut total = 0;
//! for (i, x) in range(10u32, 13).enumerate() {
//!     total += i as u32 * x;
//! }
//! assert_eq!(total, 0 * 10 + 1 * 11 + 2 * 12);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::Producer;

/// A pre-fetching cursor over a producer.
///
/// Both a live `Cursor` and `&mut Cursor` implement `Iterator`, so a loop can
/// be stopped early and resumed.
pub struct Cursor<P: Producer> {
    state: CursorState<P>,
}

enum CursorState<P: Producer> {
    Live { producer: P, current: Option<P::Item> },
    Sentinel,
}

impl<P: Producer> Cursor<P> {
    /// Create a live cursor, pulling the first element.
    pub fn begin(mut producer: P) -> Self {
        let current = producer.next();
        Self {
            state: CursorState::Live { producer, current },
        }
    }

    /// Create the terminal sentinel. It never advances and is never valid.
    pub fn end() -> Self {
        Self {
            state: CursorState::Sentinel,
        }
    }

    /// `true` while the cursor holds an element and is not the sentinel.
    pub fn is_valid(&self) -> bool {
        matches!(self.state, CursorState::Live { current: Some(_), .. })
    }

    /// The element under the cursor.
    pub fn get(&self) -> Option<&P::Item> {
        match &self.state {
            CursorState::Live { current, .. } => current.as_ref(),
            CursorState::Sentinel => None,
        }
    }

    /// Move to the next element. Does nothing on the sentinel.
    pub fn advance(&mut self) {
        if let CursorState::Live { producer, current } = &mut self.state {
            *current = producer.next();
        }
    }
}

impl<P: Producer> PartialEq for Cursor<P> {
    fn eq(&self, other: &Self) -> bool {
        self.is_valid() == other.is_valid()
    }
}

impl<P: Producer> Eq for Cursor<P> {}

impl<P> Clone for Cursor<P>
where
    P: Producer + Clone,
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        let state = match &self.state {
            CursorState::Live { producer, current } => CursorState::Live {
                producer: producer.clone(),
                current: current.clone(),
            },
            CursorState::Sentinel => CursorState::Sentinel,
        };
        Self { state }
    }
}

impl<P> fmt::Debug for Cursor<P>
where
    P: Producer,
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            CursorState::Live { current, .. } => f.debug_struct("Cursor").field("current", current).finish_non_exhaustive(),
            CursorState::Sentinel => f.write_str("Cursor::End"),
        }
    }
}

impl<P: Producer> Iterator for Cursor<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            CursorState::Live { producer, current } => {
                let item = current.take()?;
                *current = producer.next();
                Some(item)
            }
            CursorState::Sentinel => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            CursorState::Live { producer, current } if P::FAST_LEN => {
                let len = match current {
                    Some(_) => producer.len().saturating_add(1),
                    None => 0,
                };
                (len, Some(len))
            }
            CursorState::Live { current: Some(_), .. } => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<P: Producer> FusedIterator for Cursor<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, range, repeat};

    #[test]
    fn test_begin_prefetches_one_element() {
        let mut pulled = 0;
        let producer = from_iter(core::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        }))
        .into_producer();
        let cursor = Cursor::begin(producer);
        assert_eq!(cursor.get(), Some(&1));
        assert_eq!(cursor.get(), Some(&1));
    }

    #[test]
    fn test_sentinel_compares_by_validity() {
        let end = Cursor::<crate::build::RangeProducer<u8>>::end();
        let live = Cursor::begin(range(0u8, 1).into_producer());
        let empty = Cursor::begin(range(0u8, 0).into_producer());

        assert!(!end.is_valid());
        assert!(live != end);
        assert!(empty == end);
        assert_eq!(end.get(), None);
    }

    #[test]
    fn test_advance_until_end() {
        let mut cursor = Cursor::begin(range(5u8, 7).into_producer());
        let end = Cursor::end();
        assert!(cursor != end);
        cursor.advance();
        assert_eq!(cursor.get(), Some(&6));
        cursor.advance();
        assert!(cursor == end);
        cursor.advance();
        assert!(cursor == end);
    }

    #[test]
    fn test_sentinel_never_advances() {
        let mut end = Cursor::<crate::build::RangeProducer<u8>>::end();
        end.advance();
        assert_eq!(end.next(), None);
        assert!(!end.is_valid());
    }

    #[test]
    fn test_iterator_over_cursor() {
        let cursor = Cursor::begin(range(0u8, 4).into_producer());
        assert_eq!(cursor.size_hint(), (4, Some(4)));
        assert_eq!(cursor.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_iterator_over_infinite_producer_with_mut_ref() {
        let mut cursor = Cursor::begin(repeat(42).into_producer());
        let values: Vec<_> = (&mut cursor).take(3).collect();
        assert_eq!(values, vec![42, 42, 42]);
        assert_eq!(cursor.size_hint(), (1, None));
        assert!(cursor.is_valid());
    }
}
