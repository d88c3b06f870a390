use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::deferred::{CursorFactory, Deferred, Sequence};

/// Factory for [`except_with`].
#[derive(Debug, Clone)]
pub struct ExceptWith<S, O, P> {
    source: S,
    other: O,
    project: P,
}

impl<S, O, P, K> CursorFactory for ExceptWith<S, O, P>
where
    S: Sequence + Clone,
    O: Sequence<Item = K> + Clone,
    P: Fn(&S::Item) -> K + Clone,
    K: Eq + Hash,
{
    type Cursor = ExceptWithCursor<S, O, P, K>;

    fn open(&self) -> Self::Cursor {
        ExceptWithCursor {
            state: ExceptState::Pending {
                source: self.source.clone(),
                other: self.other.clone(),
            },
            project: self.project.clone(),
        }
    }
}

enum ExceptState<S: Sequence, O, K> {
    /// No element has been requested yet.
    Pending { source: S, other: O },
    Scanning {
        excluded: HashSet<K>,
        source: S::Cursor,
    },
    Done,
}

/// Cursor for [`except_with`]. The lookup set is built on the first `next()`.
pub struct ExceptWithCursor<S: Sequence, O, P, K> {
    state: ExceptState<S, O, K>,
    project: P,
}

impl<S: Sequence, O, P, K> fmt::Debug for ExceptWithCursor<S, O, P, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            ExceptState::Pending { .. } => "pending",
            ExceptState::Scanning { .. } => "scanning",
            ExceptState::Done => "done",
        };
        f.debug_struct("ExceptWithCursor")
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

impl<S, O, P, K> Iterator for ExceptWithCursor<S, O, P, K>
where
    S: Sequence,
    O: Sequence<Item = K>,
    P: Fn(&S::Item) -> K,
    K: Eq + Hash,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let ExceptState::Pending { source, other } = &self.state {
            let excluded: HashSet<K> = other.cursor().collect();
            trace!(excluded = excluded.len(), "except_with lookup built");
            self.state = ExceptState::Scanning {
                excluded,
                source: source.cursor(),
            };
        }

        let ExceptState::Scanning { excluded, source } = &mut self.state else {
            return None;
        };
        for item in source.by_ref() {
            if !excluded.contains(&(self.project)(&item)) {
                return Some(item);
            }
        }
        self.state = ExceptState::Done;
        None
    }
}

/// Yield the elements of `source` whose projected key does not occur in
/// `other`.
///
/// `other` is fully consumed into a hash set on the first pull of each
/// traversal; `source` stays lazy.
pub fn except_with<S, O, P, K>(source: S, other: O, project: P) -> Deferred<ExceptWith<S, O, P>>
where
    S: Sequence + Clone,
    O: Sequence<Item = K> + Clone,
    P: Fn(&S::Item) -> K + Clone,
    K: Eq + Hash,
{
    Deferred::new(ExceptWith {
        source,
        other,
        project,
    })
}
