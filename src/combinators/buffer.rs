use std::iter::Fuse;

use crate::deferred::{CursorFactory, Deferred, Sequence};
use crate::validate;
use crate::SequenceError;

/// Factory for [`buffer`].
#[derive(Debug, Clone)]
pub struct Buffer<S> {
    source: S,
    size: usize,
}

impl<S: Sequence> Buffer<S> {
    /// Window size used by every traversal.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<S: Sequence> CursorFactory for Buffer<S> {
    type Cursor = BufferCursor<S::Cursor>;

    fn open(&self) -> Self::Cursor {
        BufferCursor {
            inner: self.source.cursor().fuse(),
            window: Vec::with_capacity(self.size),
            size: self.size,
        }
    }
}

/// Cursor yielding consecutive windows of `size` elements.
#[derive(Debug)]
pub struct BufferCursor<I: Iterator> {
    inner: Fuse<I>,
    window: Vec<I::Item>,
    size: usize,
}

impl<I: Iterator> Iterator for BufferCursor<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.window.extend(self.inner.by_ref().take(self.size));
        if self.window.is_empty() {
            return None;
        }
        Some(self.window.drain(..).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

/// Split `source` into windows of exactly `size` elements; the last window
/// holds the remainder. An empty source yields no windows.
///
/// Fails with [`SequenceError::InvalidArgument`] when `size` is zero, before
/// any element is read.
pub fn buffer<S: Sequence>(source: S, size: usize) -> Result<Deferred<Buffer<S>>, SequenceError> {
    let size = validate::positive(size, "size")?;
    Ok(Deferred::new(Buffer { source, size }))
}
