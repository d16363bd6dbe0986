//! Conversion between model space and rendered (screen) space.

use core::ops::Mul;

use crate::{Point, Vec2};

/// A uniform zoom followed by a pan.
///
/// A model-space point `p` is rendered at `p * zoom + pan`. The geometry
/// routines in this crate all work in model space; callers convert pointer
/// positions with [`Viewport::rendered_to_model`] before querying, and
/// convert results back with [`Viewport::model_to_rendered`].
///
/// This is the augmented matrix
///
/// ```text
/// | zoom 0    pan.x |
/// | 0    zoom pan.y |
/// | 0    0    1     |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Scale factor from model units to rendered units.
    pub zoom: f64,
    /// Rendered-space offset of the model origin.
    pub pan: Vec2,
}

impl Viewport {
    /// Create a new viewport from zoom and pan.
    #[inline]
    pub const fn new(zoom: f64, pan: Vec2) -> Viewport {
        Viewport { zoom, pan }
    }

    /// Model position to rendered position.
    #[inline]
    pub fn model_to_rendered(self, p: Point) -> Point {
        Point::new(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }

    /// Rendered position to model position.
    ///
    /// Produces non-finite values when `zoom` is zero.
    #[inline]
    pub fn rendered_to_model(self, p: Point) -> Point {
        Point::new((p.x - self.pan.x) / self.zoom, (p.y - self.pan.y) / self.zoom)
    }

    /// The viewport that undoes this one.
    ///
    /// Produces NaN values when zoom is zero.
    pub fn inverse(self) -> Viewport {
        let zoom_recip = self.zoom.recip();
        Viewport {
            zoom: zoom_recip,
            pan: self.pan * -zoom_recip,
        }
    }

    /// Is this viewport finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.zoom.is_finite() && self.pan.is_finite()
    }
}

impl Default for Viewport {
    #[inline]
    fn default() -> Viewport {
        Viewport::new(1.0, Vec2::ZERO)
    }
}

impl Mul<Point> for Viewport {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Point {
        self.model_to_rendered(other)
    }
}

impl Mul for Viewport {
    type Output = Viewport;

    #[inline]
    fn mul(self, other: Viewport) -> Viewport {
        Viewport {
            zoom: self.zoom * other.zoom,
            pan: self.pan + self.zoom * other.pan,
        }
    }
}

/// Model position to rendered position under `zoom` and `pan`.
#[inline]
pub fn model_to_rendered_position(p: Point, zoom: f64, pan: Vec2) -> Point {
    Viewport::new(zoom, pan).model_to_rendered(p)
}

/// Rendered position to model position under `zoom` and `pan`.
#[inline]
pub fn rendered_to_model_position(p: Point, zoom: f64, pan: Vec2) -> Point {
    Viewport::new(zoom, pan).rendered_to_model(p)
}
