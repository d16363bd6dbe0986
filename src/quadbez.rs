//! Quadratic Bézier segments, as used for curved edges.

use arrayvec::ArrayVec;

use crate::common::solve_cubic;
use crate::{BoundingBox, Point, Vec2};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Evaluate the curve at parameter `t`, normally in `[0, 1]`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        Point::new(
            qbezier_at(self.p0.x, self.p1.x, self.p2.x, t),
            qbezier_at(self.p0.y, self.p1.y, self.p2.y, t),
        )
    }

    /// Power-basis coefficients `[a, b, c]` with `eval(t) = a t² + b t + c`,
    /// one component per axis.
    #[inline]
    pub fn coefficients(&self) -> [Vec2; 3] {
        let [ax, bx, cx] = quad_coefficients(self.p0.x, self.p1.x, self.p2.x);
        let [ay, by, cy] = quad_coefficients(self.p0.y, self.p1.y, self.p2.y);
        [Vec2::new(ax, ay), Vec2::new(bx, by), Vec2::new(cx, cy)]
    }

    /// Find the nearest point on the curve, as `(t, distance²)`.
    ///
    /// Setting the derivative of the squared distance to zero gives a cubic
    /// in `t`. Its real roots (imaginary part below
    /// [`ROOT_IMAGINARY_THRESHOLD`]) that fall in `[0, 1]` are the interior
    /// candidates; both endpoints are always candidates too.
    ///
    /// [`ROOT_IMAGINARY_THRESHOLD`]: crate::common::ROOT_IMAGINARY_THRESHOLD
    pub fn nearest(&self, p: Point) -> (f64, f64) {
        let d0 = self.p1 - self.p0;
        let d1 = self.p0.to_vec2() + self.p2.to_vec2() - 2.0 * self.p1.to_vec2();
        let d = self.p0 - p;
        let c0 = d.dot(d0);
        let c1 = 2.0 * d0.hypot2() + d.dot(d1);
        let c2 = 3.0 * d1.dot(d0);
        let c3 = d1.hypot2();

        let mut candidates: ArrayVec<f64, 5> = solve_cubic(c3, c2, c1, c0)
            .into_iter()
            .filter(|root| root.is_real() && (0.0..=1.0).contains(&root.re))
            .map(|root| root.re)
            .collect();
        candidates.push(1.0);
        candidates.push(0.0);

        let mut t_best = 0.0;
        let mut r_best = f64::INFINITY;
        for t in candidates {
            let r = self.eval(t).distance_squared(p);
            if r < r_best {
                r_best = r;
                t_best = t;
            }
        }
        (t_best, r_best)
    }

    /// Squared distance from `p` to the nearest point on the curve.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Point, QuadBez};
    ///
    /// let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
    /// assert!((q.distance_squared_to(Point::new(1.0, 3.0)) - 4.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        self.nearest(p).1
    }

    /// Cheap rejection test: is `p` within the control points' bounding box
    /// grown by `tolerance`?
    ///
    /// The curve lies inside the hull of its control points, so `false`
    /// rules out a hit; `true` only means an exact distance check is
    /// worthwhile.
    #[inline]
    pub fn in_vicinity(&self, p: Point, tolerance: f64) -> bool {
        let mut bb = self.bounding_box();
        bb.pad(tolerance);
        bb.contains_point(p)
    }

    /// The box enclosing the control points, and therefore the curve.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points([self.p0, self.p1, self.p2])
    }

    /// Is this curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }

    /// Is this curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan()
    }
}

/// One coordinate of a quadratic Bézier at `t`:
/// `(1 - t)² p0 + 2 (1 - t) t p1 + t² p2`.
#[inline]
pub fn qbezier_at(p0: f64, p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
}

/// Power-basis coefficients `[p0 - 2 p1 + p2, 2 (p1 - p0), p0]` of one
/// coordinate of a quadratic Bézier.
#[inline]
pub fn quad_coefficients(p0: f64, p1: f64, p2: f64) -> [f64; 3] {
    [p0 - 2.0 * p1 + p2, 2.0 * (p1 - p0), p0]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Point, QuadBez};

    use super::qbezier_at;

    #[test]
    #[allow(clippy::float_cmp)]
    fn eval_and_coefficients() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (3.0, 0.0));
        assert_eq!(q.eval(0.0), q.p0);
        assert_eq!(q.eval(1.0), q.p2);
        assert_eq!(q.eval(0.5), Point::new(1.25, 1.0));
        assert_eq!(qbezier_at(0.0, 1.0, 3.0, 0.5), 1.25);

        let [a, b, c] = q.coefficients();
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let p = q.eval(t);
            assert!((a.x * t * t + b.x * t + c.x - p.x).abs() < 1e-12);
            assert!((a.y * t * t + b.y * t + c.y - p.y).abs() < 1e-12);
        }
    }

    #[test]
    fn nearest_interior() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        // Apex of the arch is at (1, 1).
        let (t, d2) = q.nearest(Point::new(1.0, 3.0));
        assert!((t - 0.5).abs() < 1e-9);
        assert!((d2 - 4.0).abs() < 1e-9);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn nearest_endpoints() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        let (t, d2) = q.nearest(Point::new(-3.0, -4.0));
        assert_eq!(t, 0.0);
        assert_eq!(d2, 25.0);
        let (t, d2) = q.nearest(Point::new(5.0, -4.0));
        assert_eq!(t, 1.0);
        assert_eq!(d2, 25.0);
    }

    #[test]
    fn nearest_beats_sampling() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..300 {
            let mut pt = || Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0));
            let q = QuadBez::new(pt(), pt(), pt());
            let p = pt();
            let d2 = q.distance_squared_to(p);
            let sampled = (0..=1000)
                .map(|i| q.eval(i as f64 / 1000.0).distance_squared(p))
                .fold(f64::INFINITY, f64::min);
            assert!(d2 <= sampled + 1e-9, "{d2} > {sampled}");
            assert!(d2 >= sampled - 0.05 * (1.0 + sampled), "{d2} << {sampled}");
        }
    }

    #[test]
    fn degenerate_curve() {
        // Collinear control points lose the cubic and quadratic terms.
        let q = QuadBez::new((1.0, 1.0), (1.0, 1.0), (1.0, 1.0));
        assert!((q.distance_squared_to(Point::new(4.0, 5.0)) - 25.0).abs() < 1e-12);
        let line = QuadBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));
        assert!((line.distance_squared_to(Point::new(1.5, 2.0)) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn vicinity() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        assert!(q.in_vicinity(Point::new(1.0, 1.5), 0.0));
        assert!(q.in_vicinity(Point::new(2.5, 0.0), 0.5));
        assert!(!q.in_vicinity(Point::new(2.6, 0.0), 0.5));
        assert!(!q.in_vicinity(Point::new(1.0, -1.0), 0.5));
    }
}
