use std::sync::Arc;

use tracing::trace;

use crate::deferred::{CursorFactory, Deferred, Sequence};
use crate::random::RandomSource;

/// Factory for [`shuffle`].
#[derive(Debug)]
pub struct Shuffle<S, R: ?Sized> {
    source: S,
    rng: Arc<R>,
}

impl<S: Clone, R: ?Sized> Clone for Shuffle<S, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            rng: Arc::clone(&self.rng),
        }
    }
}

impl<S, R> CursorFactory for Shuffle<S, R>
where
    S: Sequence + Clone,
    R: RandomSource + ?Sized,
{
    type Cursor = ShuffleCursor<S, R>;

    fn open(&self) -> Self::Cursor {
        ShuffleCursor {
            pending: Some(self.source.clone()),
            items: Vec::new(),
            rng: Arc::clone(&self.rng),
        }
    }
}

/// Cursor performing an incremental Fisher-Yates shuffle.
///
/// The source is drained on the first `next()`; afterwards each step costs one
/// draw from the shared random source.
#[derive(Debug)]
pub struct ShuffleCursor<S: Sequence, R: ?Sized> {
    pending: Option<S>,
    items: Vec<S::Item>,
    rng: Arc<R>,
}

impl<S, R> Iterator for ShuffleCursor<S, R>
where
    S: Sequence,
    R: RandomSource + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.pending.take() {
            self.items = source.cursor().collect();
            trace!(len = self.items.len(), "shuffle materialized source");
        }
        if self.items.is_empty() {
            return None;
        }
        let pick = self.rng.next_below(self.items.len());
        Some(self.items.swap_remove(pick))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (0, None),
            None => (self.items.len(), Some(self.items.len())),
        }
    }
}

/// Uniformly random permutation of `source`, redrawn on every traversal.
pub fn shuffle<S, R>(source: S, rng: Arc<R>) -> Deferred<Shuffle<S, R>>
where
    S: Sequence + Clone,
    R: RandomSource + ?Sized,
{
    Deferred::new(Shuffle { source, rng })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Randomizer;

    #[test]
    fn output_is_a_permutation() {
        let items: Vec<u32> = (0..64).collect();
        let shuffled = shuffle(&items, Arc::new(Randomizer::from_seed(11)));
        let mut drawn: Vec<u32> = shuffled.iter().copied().collect();
        drawn.sort_unstable();
        assert_eq!(drawn, items);
    }

    #[test]
    fn traversals_draw_fresh_orders() {
        let items: Vec<u32> = (0..32).collect();
        let shuffled = shuffle(&items, Arc::new(Randomizer::from_seed(5)));
        let first: Vec<_> = shuffled.iter().collect();
        let second: Vec<_> = shuffled.iter().collect();
        assert_ne!(first, second);
    }

    #[test]
    fn accepts_trait_objects() {
        let rng: Arc<dyn RandomSource> = Arc::new(Randomizer::from_seed(1));
        assert_eq!(shuffle(0..5, rng).iter().count(), 5);
    }

    #[test]
    fn empty_source_stays_empty() {
        let rng = Arc::new(Randomizer::from_seed(0));
        assert_eq!(shuffle(std::iter::empty::<u8>(), rng).iter().next(), None);
    }
}
