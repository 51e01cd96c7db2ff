//! Three-way comparisons, generic reducers, and tolerance-aware equality.
//!
//! Tolerances are explicit parameters on the free functions; the
//! [`Tolerant`] trait carries each numeric kind's default for when the
//! caller has no better number.

mod reduce;
mod result;
mod tolerance;

pub use reduce::{clamp, max, max_of, min, min_of};
pub use result::{comparing, sort_with, ComparisonResult};
pub use tolerance::{equals_within, is_between, Tolerant};
