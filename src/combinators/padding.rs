use std::fmt;
use std::iter::Fuse;
use std::ops::Range;

use crate::deferred::{CursorFactory, Deferred, Sequence};

/// Factory for [`pad_right`].
#[derive(Debug, Clone)]
pub struct PadRight<S, F> {
    source: S,
    total_width: usize,
    filler: F,
}

impl<S, F> CursorFactory for PadRight<S, F>
where
    S: Sequence,
    F: Fn(usize) -> S::Item + Clone,
{
    type Cursor = PadRightCursor<S::Cursor, F>;

    fn open(&self) -> Self::Cursor {
        PadRightCursor {
            inner: self.source.cursor().fuse(),
            yielded: 0,
            total_width: self.total_width,
            filler: self.filler.clone(),
        }
    }
}

/// Cursor for [`pad_right`]: passes the source through, then fills.
#[derive(Debug)]
pub struct PadRightCursor<I, F> {
    inner: Fuse<I>,
    yielded: usize,
    total_width: usize,
    filler: F,
}

impl<I, F> Iterator for PadRightCursor<I, F>
where
    I: Iterator,
    F: Fn(usize) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.inner.next() {
            Some(item) => item,
            None if self.yielded < self.total_width => (self.filler)(self.yielded),
            None => return None,
        };
        self.yielded += 1;
        Some(item)
    }
}

/// Yield every source element, then `filler(i)` for `i` in
/// `count..total_width`.
pub fn pad_right<S, F>(source: S, total_width: usize, filler: F) -> Deferred<PadRight<S, F>>
where
    S: Sequence,
    F: Fn(usize) -> S::Item + Clone,
{
    Deferred::new(PadRight {
        source,
        total_width,
        filler,
    })
}

/// Factory for [`pad_left`].
#[derive(Debug, Clone)]
pub struct PadLeft<S, F> {
    source: S,
    total_width: usize,
    filler: F,
}

impl<S, F> CursorFactory for PadLeft<S, F>
where
    S: Sequence + Clone,
    F: Fn(usize) -> S::Item + Clone,
{
    type Cursor = PadLeftCursor<S, F>;

    fn open(&self) -> Self::Cursor {
        PadLeftCursor {
            state: PadLeftState::Pending(self.source.clone()),
            total_width: self.total_width,
            filler: self.filler.clone(),
        }
    }
}

enum PadLeftState<S: Sequence> {
    Pending(S),
    Filling {
        padding: Range<usize>,
        buffered: std::vec::IntoIter<S::Item>,
    },
}

/// Cursor for [`pad_left`]. The source is materialized on the first `next()`
/// so its length is known before any filler is produced.
pub struct PadLeftCursor<S: Sequence, F> {
    state: PadLeftState<S>,
    total_width: usize,
    filler: F,
}

impl<S: Sequence, F> fmt::Debug for PadLeftCursor<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PadLeftCursor")
            .field("total_width", &self.total_width)
            .field("materialized", &matches!(self.state, PadLeftState::Filling { .. }))
            .finish_non_exhaustive()
    }
}

impl<S, F> Iterator for PadLeftCursor<S, F>
where
    S: Sequence,
    F: Fn(usize) -> S::Item,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let PadLeftState::Pending(source) = &self.state {
            let buffered: Vec<_> = source.cursor().collect();
            let padding = 0..self.total_width.saturating_sub(buffered.len());
            self.state = PadLeftState::Filling {
                padding,
                buffered: buffered.into_iter(),
            };
        }

        let PadLeftState::Filling { padding, buffered } = &mut self.state else {
            return None;
        };
        match padding.next() {
            Some(index) => Some((self.filler)(index)),
            None => buffered.next(),
        }
    }
}

/// Yield `filler(i)` for `i` in `0..total_width - len`, then the source.
///
/// Each traversal materializes the source before emitting anything.
pub fn pad_left<S, F>(source: S, total_width: usize, filler: F) -> Deferred<PadLeft<S, F>>
where
    S: Sequence + Clone,
    F: Fn(usize) -> S::Item + Clone,
{
    Deferred::new(PadLeft {
        source,
        total_width,
        filler,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::deferred::from_fn;

    #[test]
    fn pad_right_appends_indexed_filler() {
        let padded: Vec<_> = pad_right(1..=2, 5, |i| i as i32 * 10).iter().collect();
        assert_eq!(padded, vec![1, 2, 20, 30, 40]);
    }

    #[test]
    fn pad_left_prepends_indexed_filler() {
        let padded: Vec<_> = pad_left(1..=2, 5, |i| i as i32 * 10).iter().collect();
        assert_eq!(padded, vec![0, 10, 20, 1, 2]);
    }

    #[test]
    fn wide_sources_pass_through() {
        let items = vec!['x', 'y', 'z'];
        let right: Vec<_> = pad_right(items.iter().copied(), 2, |_| '-').iter().collect();
        let left: Vec<_> = pad_left(items.iter().copied(), 2, |_| '-').iter().collect();
        assert_eq!(right, items);
        assert_eq!(left, items);
    }

    #[test]
    fn empty_source_is_all_filler() {
        let padded: Vec<_> = pad_left(std::iter::empty::<char>(), 3, |_| '.').iter().collect();
        assert_eq!(padded, vec!['.', '.', '.']);
    }

    #[test]
    fn pad_left_reads_source_on_first_pull() {
        let opened = Cell::new(0);
        let source = from_fn(|| {
            opened.set(opened.get() + 1);
            0..2u8
        });
        let padded = pad_left(&source, 4, |i| 10 + i as u8);
        let mut cursor = padded.iter();
        assert_eq!(opened.get(), 0);
        assert!(format!("{cursor:?}").contains("materialized: false"));

        assert_eq!(cursor.next(), Some(10));
        assert_eq!(opened.get(), 1);
        assert!(format!("{cursor:?}").contains("materialized: true"));
        assert_eq!(cursor.collect::<Vec<_>>(), vec![11, 0, 1]);
        assert_eq!(opened.get(), 1);
    }
}
