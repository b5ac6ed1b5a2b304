use crate::compose::Take;
use crate::{BackProducer, Bidi, Forward, Producer};

/// Yields the same value forever.
///
/// Never exhausts on its own; bound it with [`take`](Forward::take).
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

impl<T: Clone> Producer for Repeat<T> {
    type Item = T;
    const FAST_LEN: bool = false;

    fn next(&mut self) -> Option<T> {
        Some(self.0.clone())
    }

    fn advance_by(&mut self, n: usize) -> usize {
        n
    }
}

/// Create a sequence that repeats `value` indefinitely.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat("ab").take(3).to_vec(), vec!["ab", "ab", "ab"]);
/// ```
pub fn repeat<T: Clone>(value: T) -> Forward<Repeat<T>> {
    Forward::new(Repeat(value))
}

/// Create a sequence that yields `value` exactly `n` times.
pub fn repeat_n<T: Clone>(value: T, n: usize) -> Forward<Take<Repeat<T>>> {
    repeat(value).take(n)
}

/// Yields one value, then is exhausted from both ends.
#[derive(Debug, Clone)]
pub struct Once<T>(Option<T>);

impl<T> Producer for Once<T> {
    type Item = T;
    const FAST_LEN: bool = true;

    fn next(&mut self) -> Option<T> {
        self.0.take()
    }

    fn len(&self) -> usize {
        usize::from(self.0.is_some())
    }
}

impl<T> BackProducer for Once<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.take()
    }
}

/// Create a sequence containing only `value`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once(7);
/// assert_eq!(seq.len(), Some(1));
/// assert_eq!(seq.next_back(), Some(7));
/// assert_eq!(seq.next(), None);
/// ```
pub fn once<T>(value: T) -> Bidi<Once<T>> {
    Bidi::new(Once(Some(value)))
}

/// Pulls elements from a closure until it returns `None`.
///
/// The closure is dropped at its first `None` and never called again.
#[derive(Clone)]
pub struct FromFn<F>(Option<F>);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;
    const FAST_LEN: bool = false;

    fn next(&mut self) -> Option<T> {
        let f = self.0.as_mut()?;
        let item = f();
        if item.is_none() {
            self.0 = None;
        }
        item
    }
}

/// Create a forward sequence from a generator closure.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 1u32;
/// let powers = from_fn(move || {
///     let current = n;
///     n = n.checked_mul(2)?;
///     Some(current)
/// });
/// assert_eq!(powers.take(5).to_vec(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> Forward<FromFn<F>> {
    Forward::new(FromFn(Some(f)))
}
