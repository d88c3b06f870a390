//! # Deferred Sequence Combinators
//!
//! Lazy, restartable transformations over ordered collections of any element
//! type.
//!
//! ## Core Model
//!
//! 1. **Deferred sequence**: a combinator captures a *factory* for cursors,
//!    not a cursor, so every traversal starts from scratch
//! 2. **Pull evaluation**: nothing runs until the outermost cursor is asked
//!    for its next element; work flows down to the original source one
//!    element at a time
//! 3. **Eager validation**: bad arguments fail at call time with a
//!    [`SequenceError`], never halfway through a traversal
//!
//! ## Usage Example
//!
//! ```
//! use deferred_seq::{Change, SequenceExt};
//!
//! let desired = vec!["alpha", "beta", "gamma"];
//! let stored = vec!["beta", "delta"];
//!
//! let plan = (&desired).reconcile(&stored, |m, s| m == s);
//! let deletes = plan.iter().filter(Change::is_delete).count();
//! assert_eq!(deletes, 1);
//!
//! let pages: Vec<Vec<_>> = (&desired).sequenced(1).buffer(2)?.iter().collect();
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[1][0].tag, 3);
//! # Ok::<(), deferred_seq::SequenceError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod deferred;    // Cursor factories and the Deferred wrapper
pub mod combinators; // Lazy sequence transformations
pub mod reconcile;   // Create/update/delete classification
pub mod stats;       // Order statistics
pub mod random;      // Injectable random source
pub mod validate;    // Call-time argument checks
pub mod text;        // String helpers

// Re-exports for convenience
pub use combinators::{
    buffer, except_with, pad_left, pad_right, sequence, shuffle, SequenceExt, Tagged,
};
pub use deferred::{from_fn, CursorFactory, Deferred, Sequence};
pub use random::{RandomSource, Randomizer, RandomizerConfig};
pub use reconcile::{
    reconcile, reconcile_into, Callbacks, Change, ChangeKind, ReconcileHandler, ReconcileSummary,
};
pub use stats::median;
pub use text::unsplit;

use thiserror::Error;

/// Errors raised synchronously when a combinator is called with bad
/// arguments.
///
/// Failures inside user-supplied closures are not wrapped; a panicking
/// projection unwinds straight to whoever is pulling the cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A required collection, predicate or callback was not supplied.
    #[error("required argument `{parameter}` is missing")]
    NullArgument {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// An argument was present but outside its valid range.
    #[error("invalid argument `{parameter}` = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Rendered value that was rejected.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_parameter() {
        let err = buffer(0..3, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument `size` = 0: expected positive and non-zero integer, but was 0"
        );
    }

    #[test]
    fn chained_combinators_stay_lazy() {
        use std::cell::Cell;

        let opened = Cell::new(0);
        let source = from_fn(|| {
            opened.set(opened.get() + 1);
            1..=5
        });
        let chain = (&source)
            .sequenced(0)
            .pad_right(7, |i| Tagged::new(0, i as i64))
            .buffer(3)
            .unwrap();
        assert_eq!(opened.get(), 0);

        let windows: Vec<Vec<_>> = chain.iter().collect();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2], vec![Tagged::new(0, 6)]);
        assert_eq!(opened.get(), 1);
    }
}
