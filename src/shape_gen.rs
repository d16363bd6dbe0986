//! Base outlines and size-derived constants for node shapes.

use core::f64::consts::{FRAC_PI_2, TAU};

use crate::{Point, Polygon, PolygonError};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Corner cut length of a cut-rectangle node, in model units.
pub const CUT_RECTANGLE_CORNER_LENGTH: f64 = 8.0;

/// Vertices of a regular polygon on the unit circle.
///
/// With no rotation, odd-sided polygons have a vertex pointing straight up
/// (`-y`) and even-sided ones have a flat top edge. Vertices are produced
/// at increasing angles, which in y-down model space is counter-clockwise
/// on screen.
///
/// # Errors
///
/// Returns [`PolygonError::TooFewSides`] when `sides < 3`.
pub fn unit_ngon(sides: usize, rotation: f64) -> Result<Polygon, PolygonError> {
    if sides < 3 {
        return Err(PolygonError::TooFewSides(sides));
    }
    let increment = TAU / sides as f64;
    let start = if sides % 2 == 0 {
        FRAC_PI_2 + increment / 2.0
    } else {
        FRAC_PI_2
    } + rotation;

    Ok((0..sides)
        .map(|i| {
            let angle = i as f64 * increment + start;
            Point::new(angle.cos(), (-angle).sin())
        })
        .collect())
}

/// Stretch a polygon so it spans 2 units on each axis.
///
/// The scaling is about the origin, without re-centering. Afterwards, if
/// the lowest `y` is below `-1`, the whole shape is shifted along `+y`
/// until it sits at `-1`. A polygon with no extent on an axis is left unscaled on
/// that axis.
pub fn fit_polygon_to_square(polygon: &mut Polygon) {
    let bb = polygon.bounding_box();
    let sx = if bb.w > 0.0 { 2.0 / bb.w } else { 1.0 };
    let sy = if bb.h > 0.0 { 2.0 / bb.h } else { 1.0 };

    let mut min_y = f64::INFINITY;
    for p in polygon.vertices_mut() {
        p.x *= sx;
        p.y *= sy;
        min_y = min_y.min(p.y);
    }

    if min_y < -1.0 {
        let shift = -1.0 - min_y;
        for p in polygon.vertices_mut() {
            p.y += shift;
        }
    }
}

/// A regular polygon fitted to the `[-1, 1]` square; the canonical base
/// shape for an n-sided node.
///
/// # Examples
///
/// ```
/// use shapegeom::unit_ngon_fit_to_square;
///
/// let tri = unit_ngon_fit_to_square(3, 0.0).unwrap();
/// let bb = tri.bounding_box();
/// assert!((bb.w - 2.0).abs() < 1e-12 && (bb.h - 2.0).abs() < 1e-12);
/// assert!((bb.y1 + 1.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns [`PolygonError::TooFewSides`] when `sides < 3`.
pub fn unit_ngon_fit_to_square(sides: usize, rotation: f64) -> Result<Polygon, PolygonError> {
    let mut polygon = unit_ngon(sides, rotation)?;
    fit_polygon_to_square(&mut polygon);
    Ok(polygon)
}

/// Default corner radius of a round-rectangle node: a quarter of the
/// smaller side, capped at 8.
#[inline]
pub fn round_rectangle_radius(width: f64, height: f64) -> f64 {
    (width / 4.0).min(height / 4.0).min(8.0)
}

/// Curve constants for a barrel-shaped node.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrelCurve {
    /// How far the top and bottom curves bow, at most 15.
    pub height_offset: f64,
    /// Horizontal inset of the curves' ends, at most 100.
    pub width_offset: f64,
    /// Control point offset as a fraction of the node size.
    pub ctrl_pt_offset_pct: f64,
}

impl BarrelCurve {
    /// The constants for a `width` by `height` node.
    #[inline]
    pub fn new(width: f64, height: f64) -> BarrelCurve {
        BarrelCurve {
            height_offset: (0.05 * height).min(15.0),
            width_offset: (0.25 * width).min(100.0),
            ctrl_pt_offset_pct: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Winding;

    #[test]
    fn ngon_orientation() {
        let tri = unit_ngon(3, 0.0).unwrap();
        assert!(tri.vertices()[0].distance(Point::new(0.0, -1.0)) < 1e-12);

        let sq = unit_ngon(4, 0.0).unwrap();
        // Flat top: the first and last vertices share y.
        assert!((sq.vertices()[0].y - sq.vertices()[3].y).abs() < 1e-12);
        assert!(sq.vertices()[0].y < 0.0);

        for sides in 3..12 {
            let poly = unit_ngon(sides, 0.3).unwrap();
            assert_eq!(poly.len(), sides);
            assert_eq!(poly.winding(), Winding::Clockwise);
            for v in poly.vertices() {
                assert!((v.to_vec2().hypot() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn too_few_sides() {
        assert_eq!(unit_ngon(2, 0.0), Err(PolygonError::TooFewSides(2)));
        assert_eq!(unit_ngon_fit_to_square(0, 0.0), Err(PolygonError::TooFewSides(0)));
    }

    #[test]
    fn fitted_span() {
        for sides in 3..16 {
            let poly = unit_ngon_fit_to_square(sides, 0.0).unwrap();
            let bb = poly.bounding_box();
            assert!((bb.w - 2.0).abs() < 1e-9, "{sides}: {bb:?}");
            assert!((bb.h - 2.0).abs() < 1e-9, "{sides}: {bb:?}");
            assert!(bb.y1 >= -1.0 - 1e-12, "{sides}: {bb:?}");
        }
    }

    #[test]
    fn flat_polygon_is_not_scaled_to_infinity() {
        let mut poly = Polygon::new([Point::new(-2.0, 0.0), Point::new(2.0, 0.0)]);
        fit_polygon_to_square(&mut poly);
        assert!(poly.vertices().iter().all(|p| p.is_finite()));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn size_constants() {
        assert_eq!(round_rectangle_radius(100.0, 60.0), 8.0);
        assert_eq!(round_rectangle_radius(12.0, 60.0), 3.0);

        let small = BarrelCurve::new(40.0, 100.0);
        assert_eq!(small.height_offset, 5.0);
        assert_eq!(small.width_offset, 10.0);
        let large = BarrelCurve::new(1000.0, 1000.0);
        assert_eq!(large.height_offset, 15.0);
        assert_eq!(large.width_offset, 100.0);
        assert_eq!(large.ctrl_pt_offset_pct, 0.05);
    }
}
