//! tolerium - Tolerance-aware numeric and path primitives
//!
//! A small kernel of generic numeric and computational-geometry primitives:
//! three-way comparisons over heterogeneous numeric kinds, tolerance-aware
//! equality with per-kind defaults, a constant-memory streaming averager,
//! and immutable polygonal paths with a local self-intersection test.

pub mod average;
pub mod compare;
pub mod number;
pub mod path;
pub mod primitives;
pub mod relate;

pub use average::Averager;
pub use compare::{
    clamp, comparing, equals_within, is_between, max, max_of, min, min_of, ComparisonResult,
    Tolerant,
};
pub use number::{Number, NumberKind};
pub use path::{FractionPath, IntegerPath, Path};
pub use primitives::{Point2, Segment2};
pub use relate::{relate_within, Coordinate, SegmentRelation};
