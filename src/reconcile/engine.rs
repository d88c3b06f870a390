use tracing::debug;

use crate::deferred::{CursorFactory, Deferred, Sequence};
use crate::reconcile::Change;

/// Output of one reconciliation scan, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Classified<M, S> {
    pub(crate) creates: Vec<M>,
    pub(crate) updates: Vec<(M, S)>,
    pub(crate) deletes: Vec<S>,
}

impl<M, S> Classified<M, S> {
    /// Flatten into deletes, then updates, then creates.
    pub(crate) fn into_changes(self) -> Vec<Change<M, S>> {
        let mut changes =
            Vec::with_capacity(self.creates.len() + self.updates.len() + self.deletes.len());
        changes.extend(self.deletes.into_iter().map(Change::Delete));
        changes.extend(self.updates.into_iter().map(|(m, s)| Change::Update(m, s)));
        changes.extend(self.creates.into_iter().map(Change::Create));
        changes
    }
}

/// Backward two-pointer scan.
///
/// Master items are visited last to first; each one takes the last remaining
/// slave item it matches, so a slave item is consumed at most once. Whatever
/// is left of the slave list afterwards is deleted. Creates and updates are
/// reported in master order, deletes in slave order.
pub(crate) fn classify<M, S, C>(
    master: Vec<M>,
    mut slave: Vec<S>,
    mut compare: C,
) -> Classified<M, S>
where
    C: FnMut(&M, &S) -> bool,
{
    let master_len = master.len();
    let slave_len = slave.len();
    let mut creates = Vec::new();
    let mut updates = Vec::new();

    for m in master.into_iter().rev() {
        match slave.iter().rposition(|s| compare(&m, s)) {
            Some(index) => {
                let s = slave.remove(index);
                updates.push((m, s));
            }
            None => creates.push(m),
        }
    }
    creates.reverse();
    updates.reverse();

    debug!(
        master = master_len,
        slave = slave_len,
        creates = creates.len(),
        updates = updates.len(),
        deletes = slave.len(),
        "reconciled collections"
    );

    Classified {
        creates,
        updates,
        deletes: slave,
    }
}

/// Factory for [`reconcile`].
#[derive(Debug, Clone)]
pub struct Reconcile<MS, SS, C> {
    master: MS,
    slave: SS,
    compare: C,
}

impl<MS, SS, C> CursorFactory for Reconcile<MS, SS, C>
where
    MS: Sequence,
    SS: Sequence,
    C: Fn(&MS::Item, &SS::Item) -> bool + Clone,
{
    type Cursor = ReconcileCursor<MS::Cursor, SS::Cursor, C>;

    fn open(&self) -> Self::Cursor {
        ReconcileCursor {
            pending: Some((self.master.cursor(), self.slave.cursor(), self.compare.clone())),
            changes: Vec::new().into_iter(),
        }
    }
}

/// Cursor over the changes of one reconciliation pass. Both inputs are read
/// and classified on the first `next()`.
#[derive(Debug)]
pub struct ReconcileCursor<MI: Iterator, SI: Iterator, C> {
    pending: Option<(MI, SI, C)>,
    changes: std::vec::IntoIter<Change<MI::Item, SI::Item>>,
}

impl<MI, SI, C> Iterator for ReconcileCursor<MI, SI, C>
where
    MI: Iterator,
    SI: Iterator,
    C: Fn(&MI::Item, &SI::Item) -> bool,
{
    type Item = Change<MI::Item, SI::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((master, slave, compare)) = self.pending.take() {
            let classified = classify(master.collect(), slave.collect(), compare);
            self.changes = classified.into_changes().into_iter();
        }
        self.changes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (0, None),
            None => self.changes.size_hint(),
        }
    }
}

/// Reconcile `master` against `slave` as a lazily produced change list.
///
/// Each traversal re-reads both sides and re-runs the scan. Changes arrive as
/// all deletes, then all updates, then all creates. `compare` is called
/// `O(master × slave)` times in the worst case.
pub fn reconcile<MS, SS, C>(
    master: MS,
    slave: SS,
    compare: C,
) -> Deferred<Reconcile<MS, SS, C>>
where
    MS: Sequence,
    SS: Sequence,
    C: Fn(&MS::Item, &SS::Item) -> bool + Clone,
{
    Deferred::new(Reconcile {
        master,
        slave,
        compare,
    })
}
