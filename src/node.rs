//! Placing unit base shapes in a node's frame.
//!
//! Node outlines are described once as a base polygon spanning roughly
//! `[-1, 1]` on both axes (see [`unit_ngon_fit_to_square`]). A
//! [`NodeFrame`] carries the per-query placement: center, size, rotation
//! and padding. Nothing here is cached; each query transforms the base
//! shape afresh.
//!
//! [`unit_ngon_fit_to_square`]: crate::unit_ngon_fit_to_square

use core::f64::consts::FRAC_PI_2;

use smallvec::SmallVec;

use crate::{Line, Point, Polygon, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// How a base shape is turned before it is scaled into a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Turn the base shape's up (`-y`) axis onto this direction.
    ///
    /// `(0, -1)` leaves the shape as is. A zero vector also means no
    /// rotation.
    Direction(Vec2),
    /// An explicit angle in radians.
    ///
    /// A base point `b` lands at `(b.x cos θ + b.y sin θ, b.y cos θ - b.x sin θ)`
    /// before scaling, where `θ` is the angle.
    Angle(f64),
}

impl Rotation {
    /// No rotation.
    pub const NONE: Rotation = Rotation::Angle(0.0);

    /// The rotation as an angle in radians.
    pub fn angle(self) -> f64 {
        match self {
            Rotation::Angle(angle) => angle,
            Rotation::Direction(dir) if dir.x == 0.0 && dir.y == 0.0 => 0.0,
            Rotation::Direction(dir) => -dir.atan2() - FRAC_PI_2,
        }
    }
}

impl Default for Rotation {
    #[inline]
    fn default() -> Rotation {
        Rotation::NONE
    }
}

/// The placement of a node's outline in model space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeFrame {
    /// The node's center.
    pub center: Point,
    /// Full width; the base shape's `[-1, 1]` span is scaled to this.
    pub width: f64,
    /// Full height; the base shape's `[-1, 1]` span is scaled to this.
    pub height: f64,
    /// Rotation applied before scaling.
    pub rotation: Rotation,
    /// Distance the outline is grown by, after scaling. Values `<= 0`
    /// leave it unpadded.
    pub padding: f64,
}

impl NodeFrame {
    /// A frame with no rotation and no padding.
    #[inline]
    pub fn new(center: impl Into<Point>, width: f64, height: f64) -> NodeFrame {
        NodeFrame {
            center: center.into(),
            width,
            height,
            rotation: Rotation::NONE,
            padding: 0.0,
        }
    }

    /// Set the rotation.
    #[inline]
    pub fn with_rotation(mut self, rotation: Rotation) -> NodeFrame {
        self.rotation = rotation;
        self
    }

    /// Set the padding.
    #[inline]
    pub fn with_padding(mut self, padding: f64) -> NodeFrame {
        self.padding = padding;
        self
    }

    /// Rotate, scale by half the width and height, and move to the center.
    pub fn transform(&self, base: &Polygon) -> Polygon {
        let angle = self.rotation.angle();
        let (sin, cos) = ((-angle).sin(), (-angle).cos());
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        base.vertices()
            .iter()
            .map(|b| {
                Point::new(
                    half_w * (b.x * cos - b.y * sin) + self.center.x,
                    half_h * (b.y * cos + b.x * sin) + self.center.y,
                )
            })
            .collect()
    }

    /// The transformed outline, grown by the padding when it is positive.
    pub fn outline(&self, base: &Polygon) -> Polygon {
        let placed = self.transform(base);
        if self.padding > 0.0 {
            placed.padded(self.padding)
        } else {
            placed
        }
    }
}

/// Is `p` inside the node outline described by `base` placed in `frame`?
///
/// # Examples
///
/// ```
/// use shapegeom::{point_inside_polygon, NodeFrame, Point, Polygon};
///
/// let square = Polygon::from_flat(&[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap();
/// let frame = NodeFrame::new((10.0, 10.0), 4.0, 2.0);
/// assert!(point_inside_polygon(Point::new(11.5, 10.5), &square, &frame));
/// assert!(!point_inside_polygon(Point::new(12.5, 10.0), &square, &frame));
/// assert!(point_inside_polygon(Point::new(12.5, 10.0), &square, &frame.with_padding(1.0)));
/// ```
pub fn point_inside_polygon(p: Point, base: &Polygon, frame: &NodeFrame) -> bool {
    frame.outline(base).contains(p)
}

/// Where the segment from `from` to the frame's center crosses the node
/// outline, near to far from `from`.
///
/// Uses the same placement as [`point_inside_polygon`]. For a polygon that
/// is already in model space, use [`Polygon::intersect_line`].
pub fn polygon_intersect_line(from: Point, base: &Polygon, frame: &NodeFrame) -> SmallVec<[Point; 4]> {
    frame
        .outline(base)
        .intersect_line(Line::new(from, frame.center))
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use super::*;

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{:?} != {:?}", p0, p1);
    }

    // Apex up, in y-down model space.
    fn arrow() -> Polygon {
        Polygon::from_flat(&[0.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap()
    }

    fn apex(frame: NodeFrame) -> Point {
        frame.transform(&arrow()).vertices()[0]
    }

    #[test]
    fn unrotated_frame() {
        let frame = NodeFrame::new((10.0, 20.0), 4.0, 6.0);
        let placed = frame.transform(&arrow());
        assert_near(placed.vertices()[0], Point::new(10.0, 17.0));
        assert_near(placed.vertices()[1], Point::new(12.0, 23.0));
        assert_near(placed.vertices()[2], Point::new(8.0, 23.0));
        assert_eq!(frame.outline(&arrow()), placed);
    }

    #[test]
    fn direction_turns_apex() {
        let frame = NodeFrame::new((0.0, 0.0), 4.0, 4.0);
        let cases = [
            (Vec2::new(0.0, -1.0), Point::new(0.0, -2.0)),
            (Vec2::new(1.0, 0.0), Point::new(2.0, 0.0)),
            (Vec2::new(0.0, 1.0), Point::new(0.0, 2.0)),
            (Vec2::new(-3.0, 0.0), Point::new(-2.0, 0.0)),
            (Vec2::ZERO, Point::new(0.0, -2.0)),
        ];
        for (dir, expected) in cases {
            assert_near(apex(frame.with_rotation(Rotation::Direction(dir))), expected);
        }
        let diag = apex(frame.with_rotation(Rotation::Direction(Vec2::new(-1.0, 1.0))));
        assert_near(diag, Point::new(-2.0_f64.sqrt(), 2.0_f64.sqrt()));
    }

    #[test]
    fn explicit_angle() {
        let frame = NodeFrame::new((0.0, 0.0), 4.0, 2.0).with_rotation(Rotation::Angle(FRAC_PI_2));
        assert_near(apex(frame), Point::new(-2.0, 0.0));
        assert_near(
            apex(frame.with_rotation(Rotation::Direction(Vec2::new(-1.0, 0.0)))),
            Point::new(-2.0, 0.0),
        );
    }

    #[test]
    fn padded_containment() {
        let base = arrow();
        let frame = NodeFrame::new((0.0, 0.0), 20.0, 20.0);
        assert!(point_inside_polygon(Point::new(0.0, 0.0), &base, &frame));
        assert!(!point_inside_polygon(Point::new(0.0, 11.0), &base, &frame));
        assert!(point_inside_polygon(Point::new(0.0, 11.0), &base, &frame.with_padding(2.0)));
        // Negative padding is ignored.
        assert!(point_inside_polygon(Point::new(0.0, 9.5), &base, &frame.with_padding(-2.0)));
    }

    #[test]
    fn intersect_from_outside() {
        let square = Polygon::from_flat(&[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap();
        let frame = NodeFrame::new((10.0, 10.0), 4.0, 2.0);

        let hits = polygon_intersect_line(Point::new(20.0, 10.0), &square, &frame);
        assert_eq!(hits.len(), 1);
        assert_near(hits[0], Point::new(12.0, 10.0));

        let hits = polygon_intersect_line(Point::new(20.0, 10.0), &square, &frame.with_padding(1.0));
        assert_eq!(hits.len(), 1);
        assert_near(hits[0], Point::new(13.0, 10.0));

        // From inside, the segment to the center never reaches the border.
        assert!(polygon_intersect_line(Point::new(11.0, 10.0), &square, &frame).is_empty());
    }

    #[test]
    fn diamond_node_vertices() {
        let diamond = Polygon::from_flat(&[0.0, -1.0, 1.0, 0.0, 0.0, 1.0, -1.0, 0.0]).unwrap();
        let frame = NodeFrame::new((100.0, 100.0), 40.0, 40.0);

        assert!(point_inside_polygon(Point::new(100.0, 105.0), &diamond, &frame));
        assert!(point_inside_polygon(Point::new(100.001, 105.0), &diamond, &frame));
        assert!(!point_inside_polygon(Point::new(100.0, 125.0), &diamond, &frame));

        // Entering through the right-hand vertex gives a single hit.
        let hits = polygon_intersect_line(Point::new(300.0, 100.0), &diamond, &frame);
        assert_eq!(hits.len(), 1);
        assert_near(hits[0], Point::new(120.0, 100.0));
    }
}
