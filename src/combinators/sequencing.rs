use crate::deferred::{CursorFactory, Deferred, Sequence};

/// An element paired with its position tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tagged<T> {
    /// The upstream element.
    pub item: T,
    /// `start + index` of the element within its traversal.
    pub tag: i64,
}

impl<T> Tagged<T> {
    /// Construct a tagged item.
    pub fn new(item: T, tag: i64) -> Self {
        Self { item, tag }
    }

    /// Drop the tag.
    pub fn into_item(self) -> T {
        self.item
    }
}

/// Factory for [`sequence`].
#[derive(Debug, Clone)]
pub struct Sequenced<S> {
    source: S,
    start: i64,
}

impl<S: Sequence> CursorFactory for Sequenced<S> {
    type Cursor = SequencedCursor<S::Cursor>;

    fn open(&self) -> Self::Cursor {
        SequencedCursor {
            inner: self.source.cursor(),
            next_tag: self.start,
        }
    }
}

/// Cursor attaching a running tag to each upstream element.
#[derive(Debug)]
pub struct SequencedCursor<I> {
    inner: I,
    next_tag: i64,
}

impl<I: Iterator> Iterator for SequencedCursor<I> {
    type Item = Tagged<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let tagged = Tagged::new(item, self.next_tag);
        self.next_tag = self.next_tag.wrapping_add(1);
        Some(tagged)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Tag each element with `start + index`. A new traversal restarts at `start`.
///
/// Tags wrap on `i64` overflow.
pub fn sequence<S: Sequence>(source: S, start: i64) -> Deferred<Sequenced<S>> {
    Deferred::new(Sequenced { source, start })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_follow_start_offset() {
        let items = ["A", "B", "C"];
        let tagged: Vec<_> = sequence(&items, 2).iter().map(|t| (*t.item, t.tag)).collect();
        assert_eq!(tagged, vec![("A", 2), ("B", 3), ("C", 4)]);
    }

    #[test]
    fn restart_resets_counter() {
        let items = vec![10, 20];
        let seq = sequence(&items, 0);
        let mut first = seq.iter();
        first.next();
        first.next();
        let tags: Vec<_> = seq.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![0, 1]);
    }

    #[test]
    fn negative_start_counts_upward() {
        let tags: Vec<_> = sequence(0..3, -1).iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![-1, 0, 1]);
    }

    #[test]
    fn last_representable_tag_is_yielded() {
        let tags: Vec<_> = sequence([1u8], i64::MAX).iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![i64::MAX]);
    }

    #[test]
    fn into_item_drops_the_tag() {
        let items: Vec<_> = sequence(["x", "y"], 7).iter().map(Tagged::into_item).collect();
        assert_eq!(items, vec!["x", "y"]);
    }
}
