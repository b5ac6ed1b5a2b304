//! Element-wise transformation and selection.
//!
//! [`Map`] keeps the cardinality of its upstream, so it keeps fast length.
//! [`Filter`] cannot know how many elements survive and always drops it.

use crate::{BackProducer, Producer};

/// Transforms every element with a closure.
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    producer: P,
    f: F,
}

/// Create a producer that applies `f` to every element of `producer`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let doubled = range(1u32, 4).map(|x| x * 2);
/// assert_eq!(doubled.len(), Some(3));
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub fn map<P, U, F>(producer: P, f: F) -> Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    Map { producer, f }
}

impl<P, U, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;
    const FAST_LEN: bool = P::FAST_LEN;

    fn next(&mut self) -> Option<U> {
        self.producer.next().map(&mut self.f)
    }

    fn len(&self) -> usize {
        self.producer.len()
    }
}

impl<P, U, F> BackProducer for Map<P, F>
where
    P: BackProducer,
    F: FnMut(P::Item) -> U,
{
    fn next_back(&mut self) -> Option<U> {
        self.producer.next_back().map(&mut self.f)
    }
}

/// Yields only the elements for which a predicate holds.
#[derive(Debug, Clone)]
pub struct Filter<P, F> {
    producer: P,
    predicate: F,
}

/// Create a producer that keeps the elements of `producer` matching `predicate`.
///
/// Pulling from the back filters from the tail.
pub fn filter<P, F>(producer: P, predicate: F) -> Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    Filter { producer, predicate }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;
    const FAST_LEN: bool = false;

    fn next(&mut self) -> Option<P::Item> {
        while let Some(item) = self.producer.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

impl<P, F> BackProducer for Filter<P, F>
where
    P: BackProducer,
    F: FnMut(&P::Item) -> bool,
{
    fn next_back(&mut self) -> Option<P::Item> {
        while let Some(item) = self.producer.next_back() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}
