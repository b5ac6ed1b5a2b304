use crate::{BackProducer, Bidi, Producer};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers that can drive a [`RangeProducer`].
///
/// Sealed: implemented for every primitive integer type up to 64 bits.
pub trait Counter: Copy + Ord + sealed::Sealed {
    /// Largest value, used as the open end of [`range_from`].
    const MAX: Self;

    /// Number of steps from `start` up to `end`; `0` when `start >= end`.
    ///
    /// Saturates at `usize::MAX` on targets where the span does not fit.
    fn distance(start: Self, end: Self) -> usize;

    /// `self + n`. The caller guarantees the result is representable.
    fn forward(self, n: usize) -> Self;

    /// `self - n`. The caller guarantees the result is representable.
    fn backward(self, n: usize) -> Self;
}

macro_rules! impl_counter {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Counter for $t {
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn distance(start: Self, end: Self) -> usize {
                if start >= end {
                    return 0;
                }
                usize::try_from(end as i128 - start as i128).unwrap_or(usize::MAX)
            }

            #[inline]
            fn forward(self, n: usize) -> Self {
                (self as i128 + n as i128) as $t
            }

            #[inline]
            fn backward(self, n: usize) -> Self {
                (self as i128 - n as i128) as $t
            }
        }
    )*};
}

impl_counter!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Half-open numeric range `[start, end)`.
///
/// Bidirectional with fast length; skipping from either end is O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeProducer<T> {
    start: T,
    end: T,
}

impl<T: Counter> Producer for RangeProducer<T> {
    type Item = T;
    const FAST_LEN: bool = true;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }
        let value = self.start;
        self.start = value.forward(1);
        Some(value)
    }

    #[inline]
    fn len(&self) -> usize {
        T::distance(self.start, self.end)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.len());
        self.start = self.start.forward(skipped);
        skipped
    }
}

impl<T: Counter> BackProducer for RangeProducer<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }
        self.end = self.end.backward(1);
        Some(self.end)
    }

    fn advance_back_by(&mut self, n: usize) -> usize {
        let skipped = n.min(self.len());
        self.end = self.end.backward(skipped);
        skipped
    }
}

/// Count from `start` up to, but excluding, `end`.
///
/// An inverted range (`start > end`) is empty.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(-2i32, 3).to_vec(), vec![-2, -1, 0, 1, 2]);
/// assert_eq!(range(0u8, 10).rev().take(3).to_vec(), vec![9, 8, 7]);
/// ```
pub fn range<T: Counter>(start: T, end: T) -> Bidi<RangeProducer<T>> {
    Bidi::new(RangeProducer { start, end })
}

/// Count from `start` up to the type's maximum (exclusive).
pub fn range_from<T: Counter>(start: T) -> Bidi<RangeProducer<T>> {
    range(start, T::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_yields_half_open_interval() {
        let mut p = range(3u32, 6).into_producer();
        assert_eq!(p.len(), 3);
        assert_eq!(p.next(), Some(3));
        assert_eq!(p.next(), Some(4));
        assert_eq!(p.next(), Some(5));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_range_meets_in_the_middle() {
        let mut p = range(0i64, 4).into_producer();
        assert_eq!(p.next(), Some(0));
        assert_eq!(p.next_back(), Some(3));
        assert_eq!(p.next_back(), Some(2));
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next(), None);
        assert_eq!(p.next_back(), None);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut p = range(5i8, -5).into_producer();
        assert_eq!(p.len(), 0);
        assert_eq!(p.next(), None);
        assert_eq!(p.next_back(), None);
    }

    #[test]
    fn test_negative_span_length() {
        assert_eq!(range(-100i16, 100).len(), Some(200));
        assert_eq!(range(i8::MIN, i8::MAX).len(), Some(255));
    }

    #[test]
    fn test_advance_is_clamped() {
        let mut p = range(0usize, 10).into_producer();
        assert_eq!(p.advance_by(4), 4);
        assert_eq!(p.advance_back_by(4), 4);
        assert_eq!(p.len(), 2);
        assert_eq!(p.advance_by(100), 2);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_range_from_stops_before_max() {
        let mut p = range_from(u8::MAX - 2).into_producer();
        assert_eq!(p.len(), 2);
        assert_eq!(p.next(), Some(253));
        assert_eq!(p.next(), Some(254));
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_range_from_usize_is_effectively_unbounded() {
        let p = range_from(0usize).into_producer();
        assert_eq!(p.len(), usize::MAX);
    }
}
