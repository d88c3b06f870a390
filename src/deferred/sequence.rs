use std::fmt;

/// A restartable source: produces a new, independent cursor on every call.
///
/// Implemented for every `IntoIterator + Clone` value, which covers borrowed
/// collections (`&Vec<T>`, `&[T]`), ranges, and [`Deferred`] itself. Owned
/// collections work too but are cloned per traversal; borrow them instead.
pub trait Sequence {
    /// Element type yielded by cursors.
    type Item;
    /// Per-traversal cursor.
    type Cursor: Iterator<Item = Self::Item>;

    /// Open a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor;
}

impl<S> Sequence for S
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;
    type Cursor = S::IntoIter;

    fn cursor(&self) -> Self::Cursor {
        self.clone().into_iter()
    }
}

/// Builds the cursor for one traversal of a [`Deferred`] sequence.
pub trait CursorFactory {
    /// Cursor type produced per traversal.
    type Cursor: Iterator;

    /// Open a new cursor. Must not observe state left by earlier cursors.
    fn open(&self) -> Self::Cursor;
}

/// A not-yet-executed traversal plan, re-evaluated from scratch each time it
/// is iterated.
#[derive(Debug, Clone, Copy)]
pub struct Deferred<F> {
    factory: F,
}

impl<F: CursorFactory> Deferred<F> {
    /// Wrap a factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Start a new traversal.
    pub fn iter(&self) -> F::Cursor {
        self.factory.open()
    }

    /// Access the underlying factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: CursorFactory> IntoIterator for Deferred<F> {
    type Item = <F::Cursor as Iterator>::Item;
    type IntoIter = F::Cursor;

    fn into_iter(self) -> Self::IntoIter {
        self.factory.open()
    }
}

impl<'a, F: CursorFactory> IntoIterator for &'a Deferred<F> {
    type Item = <F::Cursor as Iterator>::Item;
    type IntoIter = F::Cursor;

    fn into_iter(self) -> Self::IntoIter {
        self.factory.open()
    }
}

/// Adapter turning a closure returning an iterator into a [`CursorFactory`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F, I> CursorFactory for FromFn<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Cursor = I;

    fn open(&self) -> I {
        (self.0)()
    }
}

/// Build a deferred sequence from a closure that opens a cursor.
///
/// ```
/// use deferred_seq::from_fn;
///
/// let squares = from_fn(|| (1..=3).map(|n| n * n));
/// assert_eq!(squares.iter().collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(squares.iter().sum::<i32>(), 14);
/// ```
pub fn from_fn<F, I>(factory: F) -> Deferred<FromFn<F>>
where
    F: Fn() -> I,
    I: Iterator,
{
    Deferred::new(FromFn(factory))
}
