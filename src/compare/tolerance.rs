//! Tolerance-aware equality and betweenness.

use num_traits::Signed;

use super::{max, min};

/// Returns `true` when `lhs` and `rhs` differ by at most `tolerance`.
///
/// `tolerance` must be non-negative; this is not validated. A negative
/// tolerance makes every pair unequal, including a value and itself.
#[inline]
pub fn equals_within<N>(lhs: N, rhs: N, tolerance: N) -> bool
where
    N: Signed + PartialOrd,
{
    (rhs - lhs).abs() <= tolerance
}

/// Returns `true` when `value` lies between `a` and `b`, within `tolerance`.
///
/// The tolerance widens `value`, not the bounds: the test is
/// `(value + tolerance) > min(a, b) && (value - tolerance) < max(a, b)`,
/// with strict inequalities on both sides. A zero tolerance therefore
/// excludes the bounds themselves, and a positive tolerance readmits them.
#[inline]
pub fn is_between<N>(value: N, a: N, b: N, tolerance: N) -> bool
where
    N: Signed + PartialOrd + Copy,
{
    let smallest = min(a, b);
    let largest = max(a, b);
    value + tolerance > smallest && value - tolerance < largest
}

/// Numeric kinds with a default calculation tolerance.
///
/// The default is the amount by which calculations and comparisons on the
/// kind are allowed to be off: `1e-4` for the float kinds, `0` for the
/// integer kinds.
pub trait Tolerant: Signed + PartialOrd + Copy {
    /// The default amount by which calculations on this kind can be off.
    const DEFAULT_TOLERANCE: Self;

    /// [`equals_within`] at this kind's default tolerance.
    #[inline]
    fn tolerant_eq(self, rhs: Self) -> bool {
        equals_within(self, rhs, Self::DEFAULT_TOLERANCE)
    }

    /// [`is_between`] at this kind's default tolerance.
    #[inline]
    fn tolerant_between(self, a: Self, b: Self) -> bool {
        is_between(self, a, b, Self::DEFAULT_TOLERANCE)
    }
}

impl Tolerant for f32 {
    const DEFAULT_TOLERANCE: Self = 1e-4;
}

impl Tolerant for f64 {
    const DEFAULT_TOLERANCE: Self = 1e-4;
}

impl Tolerant for i32 {
    const DEFAULT_TOLERANCE: Self = 0;
}

impl Tolerant for i64 {
    const DEFAULT_TOLERANCE: Self = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_within_basic() {
        assert!(equals_within(1.0, 1.05, 0.1));
        assert!(!equals_within(1.0, 1.2, 0.1));
        assert!(equals_within(10_i64, 12, 2));
        assert!(!equals_within(10_i64, 13, 2));
    }

    #[test]
    fn test_equals_within_is_reflexive_and_symmetric() {
        for value in [-3.5, 0.0, 7.25] {
            assert!(equals_within(value, value, 0.0));
        }
        assert!(equals_within(1.0, 1.08, 0.1));
        assert!(equals_within(1.08, 1.0, 0.1));
    }

    #[test]
    fn test_default_tolerances() {
        assert!(0.00005_f64.tolerant_eq(0.0));
        assert!(!0.001_f64.tolerant_eq(0.0));
        assert!(0.00005_f32.tolerant_eq(0.0));
        assert!(3_i64.tolerant_eq(3));
        assert!(!3_i64.tolerant_eq(4));
    }

    #[test]
    fn test_is_between_strict_interior() {
        assert!(is_between(3_i64, 1, 5, 0));
        assert!(!is_between(0_i64, 1, 5, 0));
        assert!(is_between(3.0, 1.0, 5.0, 0.0));
        assert!(!is_between(6.0, 1.0, 5.0, 0.0));
    }

    #[test]
    fn test_is_between_bounds_need_tolerance() {
        // The inequalities are strict, so a bound is outside at zero
        // tolerance and readmitted by a positive one.
        assert!(!is_between(1.0, 1.0, 5.0, 0.0));
        assert!(is_between(1.0, 1.0, 5.0, 0.5));
        assert!(!is_between(5_i64, 1, 5, 0));
        assert!(is_between(5_i64, 1, 5, 1));
    }

    #[test]
    fn test_is_between_ignores_bound_order() {
        assert!(is_between(3.0, 5.0, 1.0, 0.0));
        assert!(!is_between(0.0, 5.0, 1.0, 0.0));
    }

    #[test]
    fn test_tolerant_between_default() {
        assert!(1.0_f64.tolerant_between(1.0, 5.0));
        assert!(!0.9_f64.tolerant_between(1.0, 5.0));
        assert!(!5_i64.tolerant_between(1, 5));
    }
}
