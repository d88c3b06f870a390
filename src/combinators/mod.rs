//! Lazy combinators built on [`Deferred`].
//!
//! Each combinator captures its upstream and parameters in a named factory and
//! returns a `Deferred` wrapping it, so calls can be chained without running
//! anything. Argument checks happen at call time.

mod buffer;
mod except;
mod padding;
mod sequencing;
mod shuffle;

use std::hash::Hash;
use std::sync::Arc;

pub use buffer::{buffer, Buffer, BufferCursor};
pub use except::{except_with, ExceptWith, ExceptWithCursor};
pub use padding::{pad_left, pad_right, PadLeft, PadLeftCursor, PadRight, PadRightCursor};
pub use sequencing::{sequence, Sequenced, SequencedCursor, Tagged};
pub use shuffle::{shuffle, Shuffle, ShuffleCursor};

use crate::deferred::{Deferred, Sequence};
use crate::random::RandomSource;
use crate::reconcile::{reconcile, Reconcile};
use crate::SequenceError;

/// Method-chaining front end for the free combinator functions.
///
/// ```
/// use deferred_seq::SequenceExt;
///
/// let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// let windows = (&items)
///     .except_with(vec![1], |n| **n)
///     .buffer(2)
///     .unwrap();
/// let collected: Vec<Vec<&i32>> = windows.iter().collect();
/// assert_eq!(collected, vec![vec![&3, &4], vec![&5, &9], vec![&2, &6]]);
/// ```
pub trait SequenceExt: Sequence + Clone + Sized {
    /// See [`sequence`].
    fn sequenced(self, start: i64) -> Deferred<Sequenced<Self>> {
        sequence(self, start)
    }

    /// See [`except_with`].
    fn except_with<O, P, K>(self, other: O, project: P) -> Deferred<ExceptWith<Self, O, P>>
    where
        O: Sequence<Item = K> + Clone,
        P: Fn(&Self::Item) -> K + Clone,
        K: Eq + Hash,
    {
        except_with(self, other, project)
    }

    /// See [`buffer`].
    fn buffer(self, size: usize) -> Result<Deferred<Buffer<Self>>, SequenceError> {
        buffer(self, size)
    }

    /// See [`pad_right`].
    fn pad_right<F>(self, total_width: usize, filler: F) -> Deferred<PadRight<Self, F>>
    where
        F: Fn(usize) -> Self::Item + Clone,
    {
        pad_right(self, total_width, filler)
    }

    /// See [`pad_left`].
    fn pad_left<F>(self, total_width: usize, filler: F) -> Deferred<PadLeft<Self, F>>
    where
        F: Fn(usize) -> Self::Item + Clone,
    {
        pad_left(self, total_width, filler)
    }

    /// See [`shuffle`].
    fn shuffled<R>(self, rng: Arc<R>) -> Deferred<Shuffle<Self, R>>
    where
        R: RandomSource + ?Sized,
    {
        shuffle(self, rng)
    }

    /// See [`reconcile`].
    fn reconcile<SS, C>(self, slave: SS, compare: C) -> Deferred<Reconcile<Self, SS, C>>
    where
        SS: Sequence,
        C: Fn(&Self::Item, &SS::Item) -> bool + Clone,
    {
        reconcile(self, slave, compare)
    }

    /// See [`crate::median`]. Consumes one traversal.
    fn median_by<F>(&self, selector: F) -> i64
    where
        F: FnMut(Self::Item) -> i64,
    {
        crate::stats::median(self.cursor(), selector)
    }
}

impl<S: Sequence + Clone> SequenceExt for S {}
