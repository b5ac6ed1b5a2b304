use crate::{BackProducer, Producer};

/// Swaps the two ends of a bidirectional producer.
#[derive(Debug, Clone)]
pub struct Rev<P>(P);

/// Create a producer that yields the elements of `producer` back to front.
pub fn rev<P: BackProducer>(producer: P) -> Rev<P> {
    Rev(producer)
}

impl<P: BackProducer> Producer for Rev<P> {
    type Item = P::Item;
    const FAST_LEN: bool = P::FAST_LEN;

    fn next(&mut self) -> Option<P::Item> {
        self.0.next_back()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.0.advance_back_by(n)
    }
}

impl<P: BackProducer> BackProducer for Rev<P> {
    fn next_back(&mut self) -> Option<P::Item> {
        self.0.next()
    }

    fn advance_back_by(&mut self, n: usize) -> usize {
        self.0.advance_by(n)
    }
}
