use std::fmt;

use tracing::debug;

use crate::reconcile::engine::classify;
use crate::validate;
use crate::SequenceError;

/// Receives the outcome of a reconciliation, one call per item.
///
/// Typical implementations apply the change to a store (insert, update,
/// delete rows).
pub trait ReconcileHandler<M, S> {
    /// Master item with no slave counterpart.
    fn create(&mut self, master: M);

    /// Matched pair.
    fn update(&mut self, master: M, slave: S);

    /// Unmatched slave item.
    fn delete(&mut self, slave: S);
}

/// Number of items dispatched per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Calls to [`ReconcileHandler::create`].
    pub creates: usize,
    /// Calls to [`ReconcileHandler::update`].
    pub updates: usize,
    /// Calls to [`ReconcileHandler::delete`].
    pub deletes: usize,
}

impl ReconcileSummary {
    /// Total number of classified items (pairs count once).
    pub fn total(&self) -> usize {
        self.creates + self.updates + self.deletes
    }
}

/// Classify `master` against `slave` and dispatch every item to `handler`.
///
/// Both inputs are materialized. All deletes are dispatched first, then
/// updates, then creates.
pub fn reconcile_into<M, S, C, H>(
    master: impl IntoIterator<Item = M>,
    slave: impl IntoIterator<Item = S>,
    compare: C,
    handler: &mut H,
) -> ReconcileSummary
where
    C: FnMut(&M, &S) -> bool,
    H: ReconcileHandler<M, S> + ?Sized,
{
    let classified = classify(
        master.into_iter().collect(),
        slave.into_iter().collect(),
        compare,
    );
    let summary = ReconcileSummary {
        creates: classified.creates.len(),
        updates: classified.updates.len(),
        deletes: classified.deletes.len(),
    };

    for s in classified.deletes {
        handler.delete(s);
    }
    for (m, s) in classified.updates {
        handler.update(m, s);
    }
    for m in classified.creates {
        handler.create(m);
    }

    debug!(?summary, "reconcile dispatch complete");
    summary
}

type OnCreate<'a, M> = Box<dyn FnMut(M) + 'a>;
type OnUpdate<'a, M, S> = Box<dyn FnMut(M, S) + 'a>;
type OnDelete<'a, S> = Box<dyn FnMut(S) + 'a>;

/// Builder assembling a [`ReconcileHandler`] from three closures.
///
/// ```
/// use deferred_seq::{reconcile_into, Callbacks};
///
/// let mut created = Vec::new();
/// let mut handler = Callbacks::new()
///     .on_create(|m| created.push(m))
///     .on_update(|_, _| {})
///     .on_delete(|_| {})
///     .build()
///     .unwrap();
/// reconcile_into(["A", "B"], ["B"], |m, s| m == s, &mut handler);
/// drop(handler);
/// assert_eq!(created, ["A"]);
/// ```
pub struct Callbacks<'a, M, S> {
    on_create: Option<OnCreate<'a, M>>,
    on_update: Option<OnUpdate<'a, M, S>>,
    on_delete: Option<OnDelete<'a, S>>,
}

impl<M, S> fmt::Debug for Callbacks<'_, M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_create", &self.on_create.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .finish()
    }
}

impl<M, S> Default for Callbacks<'_, M, S> {
    fn default() -> Self {
        Self {
            on_create: None,
            on_update: None,
            on_delete: None,
        }
    }
}

impl<'a, M, S> Callbacks<'a, M, S> {
    /// Empty builder; every callback must be supplied before [`build`](Self::build).
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for each master-only item.
    pub fn on_create(mut self, f: impl FnMut(M) + 'a) -> Self {
        self.on_create = Some(Box::new(f));
        self
    }

    /// Called for each matched pair.
    pub fn on_update(mut self, f: impl FnMut(M, S) + 'a) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Called for each slave-only item.
    pub fn on_delete(mut self, f: impl FnMut(S) + 'a) -> Self {
        self.on_delete = Some(Box::new(f));
        self
    }

    /// Fails with [`SequenceError::NullArgument`] naming the first missing
    /// callback.
    pub fn build(self) -> Result<CallbackHandler<'a, M, S>, SequenceError> {
        Ok(CallbackHandler {
            on_create: validate::required(self.on_create, "on_create")?,
            on_update: validate::required(self.on_update, "on_update")?,
            on_delete: validate::required(self.on_delete, "on_delete")?,
        })
    }
}

/// [`ReconcileHandler`] backed by closures. Built with [`Callbacks`].
pub struct CallbackHandler<'a, M, S> {
    on_create: OnCreate<'a, M>,
    on_update: OnUpdate<'a, M, S>,
    on_delete: OnDelete<'a, S>,
}

impl<M, S> fmt::Debug for CallbackHandler<'_, M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackHandler").finish_non_exhaustive()
    }
}

impl<M, S> ReconcileHandler<M, S> for CallbackHandler<'_, M, S> {
    fn create(&mut self, master: M) {
        (self.on_create)(master)
    }

    fn update(&mut self, master: M, slave: S) {
        (self.on_update)(master, slave)
    }

    fn delete(&mut self, slave: S) {
        (self.on_delete)(slave)
    }
}
