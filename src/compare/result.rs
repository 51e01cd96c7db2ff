//! Three-way comparison results over heterogeneous numeric kinds.

use std::cmp::Ordering;

use crate::number::{clamped_i32, NumberKind};

/// The result of comparing a left-hand value against a right-hand value.
///
/// The variants read left to right: values *ascend* when the left item is
/// the lesser, *descend* when it is the greater. Each carries a native
/// integer value of -1, 0, or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ComparisonResult {
    /// The left item is less than the right; values ascend left to right.
    Ascending = -1,
    /// The left item is the same as the right.
    Same = 0,
    /// The left item is greater than the right; values descend left to right.
    Descending = 1,
}

impl ComparisonResult {
    /// The **left** item is greater than the right.
    pub const LEFT: Self = Self::Descending;

    /// The **right** item is greater than the left.
    pub const RIGHT: Self = Self::Ascending;

    /// **Neither** item is greater than the other.
    pub const EQUAL: Self = Self::Same;

    /// The left item is greater than the right.
    pub const GREATER_THAN: Self = Self::Descending;

    /// The left item is less than the right.
    pub const LESS_THAN: Self = Self::Ascending;

    /// This result as its native integer value.
    #[inline]
    pub const fn native_value(self) -> i32 {
        self as i32
    }

    /// Classifies a lone value against zero.
    ///
    /// The value is read as a precomputed `right - left` difference, so a
    /// positive value classifies as [`Ascending`](Self::Ascending). The
    /// value is clamped into `i32` range first; see
    /// [`NumberKind::clamped_int32_value`] for the truncation this implies
    /// for fractions.
    pub fn from_number<N: NumberKind>(value: &N) -> Self {
        Self::classify(value.clamped_int32_value())
    }

    /// Compares two values of possibly different numeric kinds.
    ///
    /// The difference `rhs - lhs` is taken in integer arithmetic when both
    /// sides are native integers, and in fractional arithmetic when either
    /// side is a native fraction, then clamped into `i32` range before its
    /// sign is classified. The fractional clamp truncates toward zero, so
    /// differences of magnitude below one classify as [`Same`](Self::Same);
    /// use [`equals_within`](crate::compare::equals_within) when sub-unit
    /// precision matters.
    ///
    /// A value reporting neither native kind is compared through its lossy
    /// fractional view, with a diagnostic logged.
    pub fn compare<L, R>(lhs: &L, rhs: &R) -> Self
    where
        L: NumberKind,
        R: NumberKind,
    {
        let difference = if let Some(left) = lhs.native_integer() {
            if let Some(right) = rhs.native_integer() {
                // Saturating keeps the sign honest at the i64 extremes.
                clamped_i32(right.saturating_sub(left))
            } else if let Some(right) = rhs.native_fraction() {
                (right - left as f64) as i32
            } else {
                return Self::compare_as_fractions(lhs, rhs);
            }
        } else if let Some(left) = lhs.native_fraction() {
            if let Some(right) = rhs.native_integer() {
                (right as f64 - left) as i32
            } else if let Some(right) = rhs.native_fraction() {
                (right - left) as i32
            } else {
                return Self::compare_as_fractions(lhs, rhs);
            }
        } else {
            return Self::compare_as_fractions(lhs, rhs);
        };

        Self::classify(difference)
    }

    fn compare_as_fractions<L: NumberKind, R: NumberKind>(lhs: &L, rhs: &R) -> Self {
        log::debug!("operands report no native numeric kind; comparing as fractions");
        Self::classify((rhs.fraction_value() - lhs.fraction_value()) as i32)
    }

    #[inline]
    fn classify(difference: i32) -> Self {
        match difference.cmp(&0) {
            Ordering::Greater => Self::Ascending,
            Ordering::Less => Self::Descending,
            Ordering::Equal => Self::Same,
        }
    }
}

impl From<Ordering> for ComparisonResult {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Ascending,
            Ordering::Equal => Self::Same,
            Ordering::Greater => Self::Descending,
        }
    }
}

impl From<ComparisonResult> for Ordering {
    fn from(result: ComparisonResult) -> Self {
        match result {
            ComparisonResult::Ascending => Ordering::Less,
            ComparisonResult::Same => Ordering::Equal,
            ComparisonResult::Descending => Ordering::Greater,
        }
    }
}

/// Builds a result from any partially ordered pair.
///
/// Incomparable pairs (a NaN on either side) classify as
/// [`Same`](ComparisonResult::Same).
pub fn comparing<T: PartialOrd>(lhs: &T, rhs: &T) -> ComparisonResult {
    match lhs.partial_cmp(rhs) {
        Some(ordering) => ordering.into(),
        None => ComparisonResult::Same,
    }
}

/// Sorts a slice through a [`ComparisonResult`]-producing comparator.
pub fn sort_with<T>(items: &mut [T], comparator: impl Fn(&T, &T) -> ComparisonResult) {
    items.sort_by(|lhs, rhs| comparator(lhs, rhs).into());
}
