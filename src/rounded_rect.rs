//! A rectangle with rounded corners.

use crate::{round_rectangle_radius, BoundingBox, Circle, Line, Point, Vec2};

/// A rectangle with rounded corners, positioned by its center.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRect {
    /// The center.
    pub center: Point,
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
    /// Radius of all four corners.
    pub radius: f64,
}

impl RoundedRect {
    /// A new rounded rectangle with the default corner radius for its size;
    /// see [`round_rectangle_radius`].
    #[inline]
    pub fn new(center: impl Into<Point>, width: f64, height: f64) -> RoundedRect {
        RoundedRect {
            center: center.into(),
            width,
            height,
            radius: round_rectangle_radius(width, height),
        }
    }

    /// Replace the corner radius.
    #[inline]
    pub fn with_radius(mut self, radius: f64) -> RoundedRect {
        self.radius = radius;
        self
    }

    /// Where the segment from `from` to the center crosses the border,
    /// grown by `padding`.
    ///
    /// The four straight sides (top, right, bottom, left) are tried first
    /// and the first hit wins. Only if none is hit are the corner arcs
    /// tried, in the order top left, top right, bottom right, bottom left;
    /// an arc hit counts only if it lies in that corner's quadrant.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Point, RoundedRect};
    ///
    /// let rr = RoundedRect::new((0.0, 0.0), 100.0, 60.0);
    /// assert_eq!(rr.intersect_line(Point::new(200.0, 0.0), 0.0), Some(Point::new(50.0, 0.0)));
    /// assert_eq!(rr.intersect_line(Point::new(10.0, 5.0), 0.0), None);
    /// ```
    pub fn intersect_line(&self, from: Point, padding: f64) -> Option<Point> {
        let query = Line::new(from, self.center);
        let c = self.center;
        let r = self.radius;
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;

        let sides = [
            // Top, left to right.
            Line::new((c.x - hw + r - padding, c.y - hh - padding), (c.x + hw - r + padding, c.y - hh - padding)),
            // Right, top to bottom.
            Line::new((c.x + hw + padding, c.y - hh + r - padding), (c.x + hw + padding, c.y + hh - r + padding)),
            // Bottom, left to right.
            Line::new((c.x - hw + r - padding, c.y + hh + padding), (c.x + hw - r + padding, c.y + hh + padding)),
            // Left, top to bottom.
            Line::new((c.x - hw - padding, c.y - hh + r - padding), (c.x - hw - padding, c.y + hh - r + padding)),
        ];
        if let Some(hit) = sides.iter().find_map(|side| query.intersect_segment(*side)) {
            return Some(hit);
        }

        // Arc centers, with the quadrant each arc occupies around its center.
        let corners = [
            (Vec2::new(-1.0, -1.0), Point::new(c.x - hw + r, c.y - hh + r)),
            (Vec2::new(1.0, -1.0), Point::new(c.x + hw - r, c.y - hh + r)),
            (Vec2::new(1.0, 1.0), Point::new(c.x + hw - r, c.y + hh - r)),
            (Vec2::new(-1.0, 1.0), Point::new(c.x - hw + r, c.y + hh - r)),
        ];
        corners.iter().find_map(|&(quadrant, arc_center)| {
            let near = *Circle::new(arc_center, r + padding)
                .intersect_line(query)
                .first()?;
            let off = near - arc_center;
            (off.x * quadrant.x >= 0.0 && off.y * quadrant.y >= 0.0).then_some(near)
        })
    }

    /// The box enclosing the rectangle, ignoring corner rounding.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        let half = Vec2::new(self.width.abs() / 2.0, self.height.abs() / 2.0);
        BoundingBox::from_points([self.center - half, self.center + half])
    }

    /// Is this rounded rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.radius.is_finite()
    }

    /// Is this rounded rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.width.is_nan() || self.height.is_nan() || self.radius.is_nan()
    }
}
