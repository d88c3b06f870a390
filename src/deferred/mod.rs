//! Deferred sequences: traversal plans that open a fresh cursor on demand.
//!
//! A [`Deferred`] owns no data. It holds a [`CursorFactory`] that captures the
//! upstream sequence plus whatever parameters the combinator needs, and every
//! traversal calls the factory again. Nothing runs until a cursor is pulled.

mod sequence;

pub use sequence::{from_fn, CursorFactory, Deferred, FromFn, Sequence};
