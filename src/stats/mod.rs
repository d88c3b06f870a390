//! Order statistics over projected sequences.
//!
//! Unlike the combinators these are eager: the whole input is materialized
//! and sorted.

mod median;

pub use median::median;
