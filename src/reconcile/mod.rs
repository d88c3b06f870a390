//! Two-collection reconciliation: classify master and slave items into
//! creates, updates and deletes under an arbitrary equivalence predicate.
//!
//! Two front ends share one scan. [`reconcile`] returns a deferred sequence of
//! [`Change`] values; [`reconcile_into`] dispatches to a [`ReconcileHandler`].
//! Either way, deletes come first, then updates, then creates.

mod change;
mod engine;
mod handler;

pub use change::{Change, ChangeKind};
pub use engine::{reconcile, Reconcile, ReconcileCursor};
pub use handler::{
    reconcile_into, CallbackHandler, Callbacks, ReconcileHandler, ReconcileSummary,
};
