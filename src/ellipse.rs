//! Axis-aligned ellipses.

use crate::{BoundingBox, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An axis-aligned ellipse, as used for elliptical node outlines.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// The center.
    pub center: Point,
    /// The horizontal (`x`) and vertical (`y`) radii.
    pub radii: Vec2,
}

impl Ellipse {
    /// Create a new ellipse with a given center and radii.
    #[inline]
    pub fn new(center: impl Into<Point>, radii: impl Into<Vec2>) -> Ellipse {
        Ellipse {
            center: center.into(),
            radii: radii.into(),
        }
    }

    /// The ellipse inscribed in a `width` by `height` box around `center`,
    /// grown by `padding` on every side.
    #[inline]
    pub fn from_frame(center: impl Into<Point>, width: f64, height: f64, padding: f64) -> Ellipse {
        Ellipse::new(center, (width / 2.0 + padding, height / 2.0 + padding))
    }

    /// Where the ray from `from` toward the center crosses the border.
    ///
    /// The displacement is measured in units of the radii, which turns the
    /// ellipse into the unit circle; the hit is the point one unit short of
    /// the center along that ray. Returns `None` when `from` is strictly
    /// inside the ellipse, since the ray then never reaches the border
    /// before the center.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Ellipse, Point};
    ///
    /// let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
    /// assert_eq!(e.intersect_ray(Point::new(10.0, 0.0)), Some(Point::new(4.0, 0.0)));
    /// assert_eq!(e.intersect_ray(Point::new(1.0, 0.0)), None);
    /// ```
    pub fn intersect_ray(&self, from: Point) -> Option<Point> {
        let disp = self.center - from;
        let scaled = Vec2::new(disp.x / self.radii.x, disp.y / self.radii.y);
        let len = scaled.hypot();
        let new_len = len - 1.0;
        // Zero radii give a NaN length.
        if new_len.is_nan() || new_len < 0.0 {
            return None;
        }
        Some(from + disp * (new_len / len))
    }

    /// Is `p` inside the closed ellipse after growing both radii by
    /// `padding`?
    pub fn contains_padded(&self, p: Point, padding: f64) -> bool {
        let x = (p.x - self.center.x) / (self.radii.x + padding);
        let y = (p.y - self.center.y) / (self.radii.y + padding);
        x * x + y * y <= 1.0
    }

    /// Is `p` inside the closed ellipse?
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_padded(p, 0.0)
    }

    /// The axis-aligned box enclosing the ellipse.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        let r = Vec2::new(self.radii.x.abs(), self.radii.y.abs());
        BoundingBox::from_points([self.center - r, self.center + r])
    }

    /// Is this ellipse finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radii.is_finite()
    }

    /// Is this ellipse NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radii.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Ellipse, Point};

    #[test]
    fn ray_hits_border() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let e = Ellipse::new(
                (rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
                (rng.random_range(1.0..30.0), rng.random_range(1.0..30.0)),
            );
            let from = Point::new(rng.random_range(-200.0..200.0), rng.random_range(-200.0..200.0));
            match e.intersect_ray(from) {
                Some(hit) => {
                    let x = (hit.x - e.center.x) / e.radii.x;
                    let y = (hit.y - e.center.y) / e.radii.y;
                    assert!((x * x + y * y - 1.0).abs() < 1e-9);
                    assert!(!e.contains_padded(from, -1e-9));
                }
                None => assert!(e.contains(from)),
            }
        }
    }

    #[test]
    fn ray_edge_cases() {
        let e = Ellipse::new((0.0, 0.0), (4.0, 2.0));
        assert_eq!(e.intersect_ray(Point::new(0.0, 0.0)), None);
        assert_eq!(e.intersect_ray(Point::new(0.0, 2.0)), Some(Point::new(0.0, 2.0)));
        assert_eq!(Ellipse::new((0.0, 0.0), (0.0, 0.0)).intersect_ray(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn padded_containment() {
        let e = Ellipse::from_frame((10.0, 10.0), 8.0, 4.0, 0.0);
        assert!(e.contains(Point::new(14.0, 10.0)));
        assert!(!e.contains(Point::new(15.0, 10.0)));
        assert!(e.contains_padded(Point::new(15.0, 10.0), 1.0));
        assert!(e.contains_padded(Point::new(10.0, 13.0), 1.0));
        assert!(!e.contains_padded(Point::new(10.0, 13.5), 1.0));
    }
}
