//! Eager argument checks shared by every public combinator.
//!
//! Checks run at call time, before any cursor is opened, so an invalid call
//! fails immediately instead of on the first `next()`.

use crate::SequenceError;

/// Require a strictly positive count (chunk sizes and similar).
pub fn positive(value: usize, parameter: &'static str) -> Result<usize, SequenceError> {
    if value == 0 {
        return Err(SequenceError::InvalidArgument {
            parameter,
            value: value.to_string(),
            reason: format!("expected positive and non-zero integer, but was {value}"),
        });
    }
    Ok(value)
}

/// Require an optional argument to be present.
pub fn required<T>(value: Option<T>, parameter: &'static str) -> Result<T, SequenceError> {
    value.ok_or(SequenceError::NullArgument { parameter })
}
