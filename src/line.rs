//! Lines.

use crate::common::{mid_of_three, DEGENERATE_LENGTH, SEGMENT_PARAM_TOLERANCE};
use crate::{BoundingBox, Point};

/// A single line segment.
///
/// The segment is directed: intersection routines that can return more than
/// one point order them by distance from `p0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The point at parameter `t`, measured as a fraction of the length
    /// from `p0` toward `p1`.
    ///
    /// A segment no longer than [`DEGENERATE_LENGTH`] has no direction, and
    /// its start point is returned.
    #[inline]
    pub fn point_at(self, t: f64) -> Point {
        self.point_at_distance(t * self.length())
    }

    /// The point at distance `d` from `p0`, along the direction of the line.
    ///
    /// `d` may be negative or exceed the length; the line is extended as
    /// needed. A segment no longer than [`DEGENERATE_LENGTH`] has no
    /// direction, and its start point is returned.
    pub fn point_at_distance(self, d: f64) -> Point {
        match (self.p1 - self.p0).try_normalize() {
            Some(unit) => self.p0 + unit * d,
            None => self.p0,
        }
    }

    /// Intersect two segments.
    ///
    /// Solves for the parameters `ua` (along `self`) and `ub` (along
    /// `other`) of the crossing and accepts it when both lie within
    /// `[-SEGMENT_PARAM_TOLERANCE, 1 + SEGMENT_PARAM_TOLERANCE]`.
    ///
    /// Parallel segments only meet if they are collinear and overlap; the
    /// result is then the first of `other.p1`, `other.p0`, `self.p1` that
    /// lies within the span of the opposite segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Line, Point};
    ///
    /// let a = Line::new((0.0, 0.0), (2.0, 2.0));
    /// let b = Line::new((0.0, 2.0), (2.0, 0.0));
    /// assert_eq!(a.intersect_segment(b), Some(Point::new(1.0, 1.0)));
    ///
    /// let c = Line::new((3.0, 0.0), (4.0, -1.0));
    /// assert_eq!(a.intersect_segment(c), None);
    /// ```
    #[inline]
    pub fn intersect_segment(self, other: Line) -> Option<Point> {
        self.intersect(other, false)
    }

    /// Intersect the infinite lines through two segments.
    ///
    /// Behaves like [`Line::intersect_segment`], except that a crossing is
    /// returned wherever it falls. Parallel lines are still resolved by the
    /// segments' overlap.
    #[inline]
    pub fn intersect_extended(self, other: Line) -> Option<Point> {
        self.intersect(other, true)
    }

    fn intersect(self, other: Line, extended: bool) -> Option<Point> {
        let d21 = self.p1 - self.p0;
        let d43 = other.p1 - other.p0;
        let d13 = self.p0 - other.p0;

        let ua_t = d43.cross(d13);
        let ub_t = d21.cross(d13);
        let u_b = d21.cross(d43);

        if u_b != 0.0 {
            let ua = ua_t / u_b;
            let ub = ub_t / u_b;

            let min = -SEGMENT_PARAM_TOLERANCE;
            let max = 1.0 + SEGMENT_PARAM_TOLERANCE;
            if extended || (min <= ua && ua <= max && min <= ub && ub <= max) {
                return Some(self.p0 + ua * d21);
            }
            return None;
        }

        if ua_t != 0.0 && ub_t != 0.0 {
            // Parallel, but not on the same line.
            return None;
        }

        // Collinear; look for overlap.
        if within_span(self, other.p1) {
            Some(other.p1)
        } else if within_span(self, other.p0) {
            Some(other.p0)
        } else if within_span(other, self.p1) {
            Some(self.p1)
        } else {
            None
        }
    }

    /// Squared distance from `p` to the closest point of the segment.
    ///
    /// A zero-length segment measures to its start point.
    pub fn distance_squared_to(self, p: Point) -> f64 {
        let offset = p - self.p0;
        let line = self.p1 - self.p0;

        let line_sq = line.hypot2();
        let hyp_sq = offset.hypot2();
        if line_sq == 0.0 {
            return hyp_sq;
        }

        let dot = offset.dot(line);
        if dot < 0.0 {
            return hyp_sq;
        }
        let adj_sq = dot * dot / line_sq;
        if adj_sq > line_sq {
            return p.distance_squared(self.p1);
        }
        (hyp_sq - adj_sq).max(0.0)
    }

    /// Cheap rejection test: is `p` within the segment's bounding box grown
    /// by `tolerance`?
    ///
    /// A `true` result only means an exact distance check is worthwhile.
    #[inline]
    pub fn in_vicinity(self, p: Point, tolerance: f64) -> bool {
        let mut bb = self.bounding_box();
        bb.pad(tolerance);
        bb.contains_point(p)
    }

    /// The smallest box containing both endpoints.
    #[inline]
    pub fn bounding_box(self) -> BoundingBox {
        BoundingBox::from_points([self.p0, self.p1])
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

/// Does `p`, known to be collinear with `line`, fall within its span?
#[allow(clippy::float_cmp)]
fn within_span(line: Line, p: Point) -> bool {
    mid_of_three(line.p0.x, line.p1.x, p.x) == p.x && mid_of_three(line.p0.y, line.p1.y, p.y) == p.y
}

impl From<(Point, Point)> for Line {
    #[inline]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

/// Pull `hit` back toward `origin` by `amount`.
///
/// Used to leave room for an arrowhead or gap at the end of an edge. The
/// result never crosses past `origin`: when `amount` exceeds the distance,
/// the point lands just short of it. If `hit` and `origin` coincide, `hit`
/// is returned unchanged.
pub fn shorten_intersection(hit: Point, origin: Point, amount: f64) -> Point {
    let disp = hit - origin;
    let length = disp.hypot();
    if length <= DEGENERATE_LENGTH {
        return hit;
    }
    let mut len_ratio = (length - amount) / length;
    if len_ratio < 0.0 {
        len_ratio = 0.00001;
    }
    origin + len_ratio * disp
}
