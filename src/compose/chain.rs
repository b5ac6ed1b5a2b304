use crate::{BackProducer, Producer};

/// Run the first producer to exhaustion, then continue with the second.
///
/// Both producers must yield the same element type.
pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Producer,
    B: Producer<Item = A::Item>,
{
    Chain {
        a: Some(a),
        b: Some(b),
    }
}

/// Concatenates two producers.
///
/// Created via `chain()`. Pulling from the front drains `a` before `b`;
/// pulling from the back drains `b` before `a`, so a reversed chain is the
/// reverse of the chain. Each side is dropped once it is exhausted.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Producer for Chain<A, B>
where
    A: Producer,
    B: Producer<Item = A::Item>,
{
    type Item = A::Item;
    const FAST_LEN: bool = A::FAST_LEN && B::FAST_LEN;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(ref mut a) = self.a {
            match a.next() {
                Some(item) => return Some(item),
                None => self.a = None, // we drop the first side when it's done
            }
        }
        self.b.as_mut()?.next()
    }

    /// Panics if the combined length overflows `usize`.
    fn len(&self) -> usize {
        let a = self.a.as_ref().map_or(0, Producer::len);
        let b = self.b.as_ref().map_or(0, Producer::len);
        a.checked_add(b).expect("chain length overflows usize")
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        if let Some(ref mut a) = self.a {
            skipped = a.advance_by(n);
            if skipped == n {
                return n;
            }
            self.a = None;
        }
        match self.b {
            Some(ref mut b) => skipped + b.advance_by(n - skipped),
            None => skipped,
        }
    }
}

impl<A, B> BackProducer for Chain<A, B>
where
    A: BackProducer,
    B: BackProducer<Item = A::Item>,
{
    fn next_back(&mut self) -> Option<A::Item> {
        if let Some(ref mut b) = self.b {
            match b.next_back() {
                Some(item) => return Some(item),
                None => self.b = None,
            }
        }
        self.a.as_mut()?.next_back()
    }

    fn advance_back_by(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        if let Some(ref mut b) = self.b {
            skipped = b.advance_back_by(n);
            if skipped == n {
                return n;
            }
            self.b = None;
        }
        match self.a {
            Some(ref mut a) => skipped + a.advance_back_by(n - skipped),
            None => skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_bidirectional, from_iter, once, range, range_from};

    #[test]
    fn test_chain_switches_to_second_after_first_done() {
        let mut p = chain(from_iter([1, 2]).into_producer(), from_iter([3, 4]).into_producer());
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next(), Some(2));
        assert_eq!(p.next(), Some(3));
        assert_eq!(p.next(), Some(4));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_chain_back_drains_second_first() {
        let mut p = chain(
            from_bidirectional(&[1, 2]).into_producer(),
            from_bidirectional(&[3, 4]).into_producer(),
        );
        assert_eq!(p.next_back(), Some(4));
        assert_eq!(p.next_back(), Some(3));
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next_back(), Some(2));
        assert_eq!(p.next(), None);
        assert_eq!(p.next_back(), None);
    }

    #[test]
    fn test_chain_length_is_sum() {
        let mut p = chain(range(0u16, 4).into_producer(), range(100u16, 103).into_producer());
        assert_eq!(p.len(), 7);
        p.next();
        p.next_back();
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn test_chain_advance_crosses_boundary() {
        let mut p = chain(range(0u8, 3).into_producer(), range(10u8, 15).into_producer());
        assert_eq!(p.advance_by(4), 4);
        assert_eq!(p.next(), Some(11));
        assert_eq!(p.advance_back_by(2), 2);
        assert_eq!(p.next_back(), Some(12));
        assert_eq!(p.advance_by(9), 0);
    }

    #[test]
    fn test_chain_with_empty_sides() {
        let mut p = chain(range(0u8, 0).into_producer(), once(9u8).into_producer());
        assert_eq!(p.len(), 1);
        assert_eq!(p.next_back(), Some(9));
        assert_eq!(p.next(), None);
    }

    #[test]
    #[should_panic(expected = "chain length overflows usize")]
    fn test_chain_length_overflow_panics() {
        let p = chain(range_from(0usize).into_producer(), once(1usize).into_producer());
        let _ = p.len();
    }

    #[test]
    fn test_chain_length_at_the_limit() {
        let p = chain(range_from(1usize).into_producer(), once(0usize).into_producer());
        assert_eq!(p.len(), usize::MAX);
    }
}
