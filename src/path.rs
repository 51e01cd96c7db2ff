//! Ordered point sequences and the local self-intersection test.

use crate::primitives::{Point2, Segment2};
use crate::relate::{Coordinate, SegmentRelation};

/// An ordered sequence of points of one coordinate kind.
///
/// Paths are value types: [`plus`](Self::plus) returns a new path and never
/// mutates the receiver, so a built path can be shared freely across
/// readers. The closed flag records whether the last point connects back to
/// the first. Empty and single-point paths are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N> {
    points: Vec<Point2<N>>,
    closed: bool,
}

/// A path over integer coordinates.
pub type IntegerPath = Path<i64>;

/// A path over fractional coordinates.
pub type FractionPath = Path<f64>;

impl<N> Default for Path<N> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            closed: false,
        }
    }
}

impl<N> Path<N> {
    /// Creates a path from points and a closed flag.
    pub fn new(points: Vec<Point2<N>>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates an open path.
    pub fn open(points: Vec<Point2<N>>) -> Self {
        Self::new(points, false)
    }

    /// Creates a closed path: the last point connects back to the first.
    pub fn closed(points: Vec<Point2<N>>) -> Self {
        Self::new(points, true)
    }

    /// The points in the path.
    #[inline]
    pub fn points(&self) -> &[Point2<N>] {
        &self.points
    }

    /// Whether the last point connects back to the first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<N: Copy> Path<N> {
    /// Returns a new path with `point` appended.
    ///
    /// The receiver is untouched and shares nothing with the result; the
    /// closed flag carries over.
    #[must_use]
    pub fn plus(&self, point: Point2<N>) -> Self {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        points.push(point);
        Self {
            points,
            closed: self.closed,
        }
    }

    /// The path's line segments in order.
    ///
    /// For a closed path with at least two points, the closing segment from
    /// the last point back to the first is included.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<N>> + '_ {
        let closing = if self.closed && self.points.len() >= 2 {
            Some(Segment2::new(self.points[self.points.len() - 1], self.points[0]))
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|pair| Segment2::new(pair[0], pair[1]))
            .chain(closing)
    }
}

impl<N: Coordinate> Path<N> {
    /// Whether the path folds back onto itself at any pair of adjacent
    /// segments.
    ///
    /// Slides a three-point window over the sequence and classifies the
    /// segment into each interior point against the segment out of it.
    /// Adjacent segments always meet at the point they share, so that
    /// contact alone never signals; a window signals only when its segments
    /// stay in contact beyond the shared point, which for segments joined
    /// end to start means a collinear doubling-back or overlap.
    ///
    /// The test is local by design: non-adjacent segments are never
    /// compared, so a path whose crossing segments are separated in the
    /// sequence is still reported as non-self-intersecting, and the closed
    /// flag adds no wrap-around windows. Fewer than three points form no
    /// window and report `false`.
    pub fn intersects_self(&self) -> bool {
        self.points.windows(3).any(|window| {
            let into = Segment2::new(window[0], window[1]);
            let out_of = Segment2::new(window[1], window[2]);
            N::relate_segments(into, out_of) == SegmentRelation::Overlapping
        })
    }
}
