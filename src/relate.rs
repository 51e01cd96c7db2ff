//! Classification of how two like-kind line segments meet.

use num_traits::Float;

use crate::compare::{max, min, Tolerant};
use crate::primitives::{Point2, Segment2};

/// How two line segments of the same coordinate kind relate.
///
/// Everything other than [`None`](Self::None) is an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRelation {
    /// The segments share no point.
    None,
    /// The segments meet at exactly one point.
    Point,
    /// The segments are collinear and share a span of more than one point.
    Overlapping,
}

impl SegmentRelation {
    /// Returns `true` when the segments share at least one point.
    #[inline]
    pub fn intersects(self) -> bool {
        self != Self::None
    }
}

/// A coordinate scalar whose segments can be classified against each other.
///
/// This is the seam between [`Path`](crate::path::Path) and the segment
/// arithmetic of its coordinate kind: the float kinds classify within their
/// default calculation tolerance, the integer kinds classify exactly in
/// widened arithmetic. Any other scalar can participate in paths by
/// implementing this trait.
pub trait Coordinate: Copy + PartialEq {
    /// Classifies how two segments of this kind meet.
    fn relate_segments(lhs: Segment2<Self>, rhs: Segment2<Self>) -> SegmentRelation;
}

impl Coordinate for f64 {
    fn relate_segments(lhs: Segment2<Self>, rhs: Segment2<Self>) -> SegmentRelation {
        relate_within(lhs, rhs, Self::DEFAULT_TOLERANCE)
    }
}

impl Coordinate for f32 {
    fn relate_segments(lhs: Segment2<Self>, rhs: Segment2<Self>) -> SegmentRelation {
        relate_within(lhs, rhs, Self::DEFAULT_TOLERANCE)
    }
}

impl Coordinate for i64 {
    fn relate_segments(lhs: Segment2<Self>, rhs: Segment2<Self>) -> SegmentRelation {
        relate_exact(lhs, rhs)
    }
}

impl Coordinate for i32 {
    fn relate_segments(lhs: Segment2<Self>, rhs: Segment2<Self>) -> SegmentRelation {
        relate_exact(lhs.map(i64::from), rhs.map(i64::from))
    }
}

/// Classifies two float segments within an explicit tolerance.
///
/// - Non-parallel carriers: solve for the crossing parameters and accept
///   them within `[-eps, 1 + eps]` on both segments.
/// - Parallel carriers: collinear when `rhs.start` is within `eps` of the
///   line through `lhs`; the relation is then decided by the overlap of the
///   projected parameter intervals (a span of at most `eps` counts as a
///   single point).
pub fn relate_within<F: Float>(lhs: Segment2<F>, rhs: Segment2<F>, eps: F) -> SegmentRelation {
    let d1x = lhs.end.x - lhs.start.x;
    let d1y = lhs.end.y - lhs.start.y;
    let d2x = rhs.end.x - rhs.start.x;
    let d2y = rhs.end.y - rhs.start.y;
    let cross = d1x * d2y - d1y * d2x;

    let dx = rhs.start.x - lhs.start.x;
    let dy = rhs.start.y - lhs.start.y;

    let eps_sq = eps * eps;

    if cross.abs() <= eps {
        let len_sq = d1x * d1x + d1y * d1y;
        if len_sq <= eps_sq {
            // lhs is degenerate; all that is left is a point-on-segment test.
            return if distance_squared_to_segment(lhs.start, rhs) <= eps_sq {
                SegmentRelation::Point
            } else {
                SegmentRelation::None
            };
        }

        // Parallel but collinear only if rhs.start sits on lhs's carrier
        // line (not just near the clamped segment).
        let line_cross = d1x * dy - d1y * dx;
        if line_cross * line_cross > eps_sq * len_sq {
            return SegmentRelation::None;
        }

        // Project rhs onto lhs and intersect the parameter intervals.
        let t_start = (dx * d1x + dy * d1y) / len_sq;
        let t_end = ((rhs.end.x - lhs.start.x) * d1x + (rhs.end.y - lhs.start.y) * d1y) / len_sq;
        let (t_min, t_max) = if t_start <= t_end {
            (t_start, t_end)
        } else {
            (t_end, t_start)
        };

        let overlap_start = t_min.max(F::zero());
        let overlap_end = t_max.min(F::one());

        if overlap_start > overlap_end + eps {
            return SegmentRelation::None;
        }
        if (overlap_end - overlap_start).abs() <= eps {
            return SegmentRelation::Point;
        }
        return SegmentRelation::Overlapping;
    }

    // Non-parallel: Cramer's rule for the crossing parameters.
    let t1 = (dx * d2y - dy * d2x) / cross;
    let t2 = (dx * d1y - dy * d1x) / cross;

    let lo = -eps;
    let hi = F::one() + eps;
    if t1 >= lo && t1 <= hi && t2 >= lo && t2 <= hi {
        SegmentRelation::Point
    } else {
        SegmentRelation::None
    }
}

/// Squared distance from a point to a segment, clamped to its extent.
fn distance_squared_to_segment<F: Float>(p: Point2<F>, seg: Segment2<F>) -> F {
    let vx = seg.end.x - seg.start.x;
    let vy = seg.end.y - seg.start.y;
    let len_sq = vx * vx + vy * vy;

    let px = p.x - seg.start.x;
    let py = p.y - seg.start.y;

    if len_sq <= F::epsilon() {
        return px * px + py * py;
    }

    let t = (px * vx + py * vy) / len_sq;
    let t = t.max(F::zero()).min(F::one());
    let dx = px - vx * t;
    let dy = py - vy * t;
    dx * dx + dy * dy
}

/// Classifies two integer segments exactly.
///
/// Orientation signs are taken in widened arithmetic, so coordinates of
/// magnitude up to 2^62 classify without overflow.
fn relate_exact(lhs: Segment2<i64>, rhs: Segment2<i64>) -> SegmentRelation {
    // Degenerate segments leave every orientation vacuously zero, so they
    // get their own point-on-segment treatment.
    let lhs_degenerate = lhs.start == lhs.end;
    let rhs_degenerate = rhs.start == rhs.end;
    if lhs_degenerate && rhs_degenerate {
        return if lhs.start == rhs.start {
            SegmentRelation::Point
        } else {
            SegmentRelation::None
        };
    }
    if lhs_degenerate {
        return point_on_segment(rhs, lhs.start);
    }
    if rhs_degenerate {
        return point_on_segment(lhs, rhs.start);
    }

    let o1 = orientation(lhs.start, lhs.end, rhs.start);
    let o2 = orientation(lhs.start, lhs.end, rhs.end);
    let o3 = orientation(rhs.start, rhs.end, lhs.start);
    let o4 = orientation(rhs.start, rhs.end, lhs.end);

    if o1 == 0 && o2 == 0 && o3 == 0 && o4 == 0 {
        return collinear_overlap(lhs, rhs);
    }

    // Each segment straddles (or touches) the other's carrier line.
    if o1 != o2 && o3 != o4 {
        return SegmentRelation::Point;
    }

    // An endpoint on the other's carrier still needs to be inside its extent.
    if o1 == 0 && in_extent(lhs, rhs.start) {
        return SegmentRelation::Point;
    }
    if o2 == 0 && in_extent(lhs, rhs.end) {
        return SegmentRelation::Point;
    }
    if o3 == 0 && in_extent(rhs, lhs.start) {
        return SegmentRelation::Point;
    }
    if o4 == 0 && in_extent(rhs, lhs.end) {
        return SegmentRelation::Point;
    }

    SegmentRelation::None
}

/// Whether `p` lies on `seg`, as a relation.
fn point_on_segment(seg: Segment2<i64>, p: Point2<i64>) -> SegmentRelation {
    if orientation(seg.start, seg.end, p) == 0 && in_extent(seg, p) {
        SegmentRelation::Point
    } else {
        SegmentRelation::None
    }
}

/// Sign of the cross product of `(b - a)` and `(c - a)`.
fn orientation(a: Point2<i64>, b: Point2<i64>, c: Point2<i64>) -> i32 {
    let abx = i128::from(b.x) - i128::from(a.x);
    let aby = i128::from(b.y) - i128::from(a.y);
    let acx = i128::from(c.x) - i128::from(a.x);
    let acy = i128::from(c.y) - i128::from(a.y);
    (abx * acy - aby * acx).signum() as i32
}

/// Whether `p` lies inside the bounding box of `seg`.
fn in_extent(seg: Segment2<i64>, p: Point2<i64>) -> bool {
    min(seg.start.x, seg.end.x) <= p.x
        && p.x <= max(seg.start.x, seg.end.x)
        && min(seg.start.y, seg.end.y) <= p.y
        && p.y <= max(seg.start.y, seg.end.y)
}

/// Relation of two collinear integer segments, via their 1D extents on the
/// dominant axis.
fn collinear_overlap(lhs: Segment2<i64>, rhs: Segment2<i64>) -> SegmentRelation {
    let x_spread = max(
        (lhs.start.x - lhs.end.x).abs(),
        (rhs.start.x - rhs.end.x).abs(),
    );
    let y_spread = max(
        (lhs.start.y - lhs.end.y).abs(),
        (rhs.start.y - rhs.end.y).abs(),
    );

    let (a0, a1, b0, b1) = if x_spread >= y_spread {
        (lhs.start.x, lhs.end.x, rhs.start.x, rhs.end.x)
    } else {
        (lhs.start.y, lhs.end.y, rhs.start.y, rhs.end.y)
    };

    let (a_min, a_max) = (min(a0, a1), max(a0, a1));
    let (b_min, b_max) = (min(b0, b1), max(b0, b1));

    let start = max(a_min, b_min);
    let end = min(a_max, b_max);

    if start > end {
        SegmentRelation::None
    } else if start == end {
        SegmentRelation::Point
    } else {
        SegmentRelation::Overlapping
    }
}
