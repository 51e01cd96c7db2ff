//! 2D line segment type.

use num_traits::Float;

use super::Point2;

/// A 2D line segment defined by two endpoints of a single coordinate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment2<N> {
    pub start: Point2<N>,
    pub end: Point2<N>,
}

impl<N> Segment2<N> {
    /// Creates a new segment from two points.
    #[inline]
    pub const fn new(start: Point2<N>, end: Point2<N>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub const fn from_coords(x1: N, y1: N, x2: N, y2: N) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }
}

impl<N: Copy> Segment2<N> {
    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Applies `f` to every coordinate.
    #[inline]
    pub fn map<M>(self, f: impl Fn(N) -> M) -> Segment2<M> {
        Segment2::new(self.start.map(&f), self.end.map(&f))
    }
}

impl<F: Float> Segment2<F> {
    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dx * dx + dy * dy
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.length_squared().sqrt()
    }
}

impl<N> From<(Point2<N>, Point2<N>)> for Segment2<N> {
    fn from((start, end): (Point2<N>, Point2<N>)) -> Self {
        Self::new(start, end)
    }
}
