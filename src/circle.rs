//! Circles, and the corner arcs of rounded shapes.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::{BoundingBox, Line, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Intersect the circle's border with a line segment.
    ///
    /// The segment is parameterized as `line.p0 + t * (line.p1 - line.p0)`,
    /// and only hits with `t` in `[0, 1]` are kept. Hits are ordered near to
    /// far from `line.p0`; a tangent (double) root yields a single point.
    ///
    /// A zero-length segment never intersects.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Circle, Line, Point};
    ///
    /// let circle = Circle::new((0.0, 0.0), 1.0);
    /// let hits = circle.intersect_line(Line::new((-2.0, 0.0), (2.0, 0.0)));
    /// assert_eq!(hits.as_slice(), &[Point::new(-1.0, 0.0), Point::new(1.0, 0.0)]);
    /// ```
    pub fn intersect_line(&self, line: Line) -> ArrayVec<Point, 2> {
        let mut result = ArrayVec::new();

        let d = line.p1 - line.p0;
        let f = line.p0 - self.center;

        let a = d.hypot2();
        if a == 0.0 {
            return result;
        }
        let b = 2.0 * f.dot(d);
        let c = f.hypot2() - self.radius * self.radius;

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return result;
        }
        let sqrt_disc = disc.sqrt();
        let t1 = (-b + sqrt_disc) / (2.0 * a);
        let t2 = (-b - sqrt_disc) / (2.0 * a);
        let t_min = t1.min(t2);
        let t_max = t1.max(t2);

        let mut params = ArrayVec::<f64, 2>::new();
        if (0.0..=1.0).contains(&t_min) {
            params.push(t_min);
        }
        if (0.0..=1.0).contains(&t_max) && !(params.len() == 1 && t_max == t_min) {
            params.push(t_max);
        }
        for t in params {
            result.push(line.p0 + t * d);
        }
        result
    }

    /// The point of the border closest to `far`, found along the ray from
    /// the center toward `far`.
    ///
    /// Returns `None` when `far` coincides with the center, since the
    /// direction is then undefined.
    pub fn near_point_toward(&self, far: Point) -> Option<Point> {
        let unit = (far - self.center).try_normalize()?;
        Some(self.center + unit * self.radius)
    }

    /// Does the closed disc contain `p`?
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (p - self.center).hypot2() <= self.radius * self.radius
    }

    /// The axis-aligned box enclosing the circle.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        let r = self.radius.abs();
        BoundingBox::from_points([
            self.center - Vec2::new(r, r),
            self.center + Vec2::new(r, r),
        ])
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}
