//! Axis-aligned bounding boxes.

use crate::Point;

/// An axis-aligned bounding box.
///
/// The box is closed: points on its edges are contained, and boxes that
/// merely touch intersect. A box with `x2 ≥ x1` and `y2 ≥ y1` keeps `w` and
/// `h` equal to its extents. The [empty box](BoundingBox::EMPTY) has
/// infinite, inverted corners and zero size, and is the identity of
/// [`union_with`](BoundingBox::union_with).
///
/// The `union_with`, `include_point` and `pad` operations mutate the box in
/// place, so one box can serve as an accumulator over many shapes. Sharing
/// an accumulator between threads is the caller's business.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// The minimum x coordinate.
    pub x1: f64,
    /// The minimum y coordinate.
    pub y1: f64,
    /// The maximum x coordinate.
    pub x2: f64,
    /// The maximum y coordinate.
    pub y2: f64,
    /// The width, `x2 - x1`.
    pub w: f64,
    /// The height, `y2 - y1`.
    pub h: f64,
}

/// Partially specified bounding box, as accepted by
/// [`BoundingBox::from_params`].
///
/// The corner `(x1, y1)` is required. The far side is given either as the
/// corner `(x2, y2)` or as the size `(w, h)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxParams {
    /// The minimum x coordinate.
    pub x1: Option<f64>,
    /// The minimum y coordinate.
    pub y1: Option<f64>,
    /// The maximum x coordinate.
    pub x2: Option<f64>,
    /// The maximum y coordinate.
    pub y2: Option<f64>,
    /// The width.
    pub w: Option<f64>,
    /// The height.
    pub h: Option<f64>,
}

impl Default for BoundingBox {
    #[inline]
    fn default() -> BoundingBox {
        BoundingBox::EMPTY
    }
}

impl BoundingBox {
    /// The empty box, containing nothing.
    pub const EMPTY: BoundingBox = BoundingBox {
        x1: f64::INFINITY,
        y1: f64::INFINITY,
        x2: f64::NEG_INFINITY,
        y2: f64::NEG_INFINITY,
        w: 0.0,
        h: 0.0,
    };

    /// A box from its minimum and maximum corners.
    ///
    /// Returns `None` if `x2 < x1` or `y2 < y1` (or any coordinate is NaN).
    #[inline]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<BoundingBox> {
        if x2 >= x1 && y2 >= y1 {
            Some(BoundingBox {
                x1,
                y1,
                x2,
                y2,
                w: x2 - x1,
                h: y2 - y1,
            })
        } else {
            None
        }
    }

    /// A box from its minimum corner and size.
    ///
    /// Returns `None` if the width or height is negative (or NaN).
    #[inline]
    pub fn from_origin_size(x1: f64, y1: f64, w: f64, h: f64) -> Option<BoundingBox> {
        if w >= 0.0 && h >= 0.0 {
            Some(BoundingBox {
                x1,
                y1,
                x2: x1 + w,
                y2: y1 + h,
                w,
                h,
            })
        } else {
            None
        }
    }

    /// A box from partially specified parameters.
    ///
    /// A valid corner pair wins; otherwise a valid size is used. Missing
    /// `x1`/`y1`, or neither a valid corner pair nor a valid size, yields
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{BoundingBox, BoxParams};
    ///
    /// let bb = BoundingBox::from_params(BoxParams {
    ///     x1: Some(1.0),
    ///     y1: Some(2.0),
    ///     w: Some(3.0),
    ///     h: Some(4.0),
    ///     ..BoxParams::default()
    /// })
    /// .unwrap();
    /// assert_eq!((bb.x2, bb.y2), (4.0, 6.0));
    ///
    /// let inverted = BoxParams {
    ///     x1: Some(1.0),
    ///     y1: Some(2.0),
    ///     x2: Some(0.0),
    ///     y2: Some(0.0),
    ///     ..BoxParams::default()
    /// };
    /// assert!(BoundingBox::from_params(inverted).is_none());
    /// ```
    pub fn from_params(params: BoxParams) -> Option<BoundingBox> {
        let (x1, y1) = (params.x1?, params.y1?);
        if let (Some(x2), Some(y2)) = (params.x2, params.y2) {
            if let Some(bb) = BoundingBox::from_corners(x1, y1, x2, y2) {
                return Some(bb);
            }
        }
        match (params.w, params.h) {
            (Some(w), Some(h)) => BoundingBox::from_origin_size(x1, y1, w, h),
            _ => None,
        }
    }

    /// The smallest box containing all the given points.
    ///
    /// Returns [`BoundingBox::EMPTY`] for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> BoundingBox {
        let mut bb = BoundingBox::EMPTY;
        for pt in points {
            bb.include_point(pt);
        }
        bb
    }

    /// Does this box contain nothing?
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.x2 >= self.x1 && self.y2 >= self.y1)
    }

    /// The center point of the box.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x1 + self.x2), 0.5 * (self.y1 + self.y2))
    }

    fn sync_size(&mut self) {
        self.w = if self.x2 >= self.x1 { self.x2 - self.x1 } else { 0.0 };
        self.h = if self.y2 >= self.y1 { self.y2 - self.y1 } else { 0.0 };
    }

    /// Grow this box, in place, to also cover `other`.
    pub fn union_with(&mut self, other: &BoundingBox) {
        self.x1 = self.x1.min(other.x1);
        self.x2 = self.x2.max(other.x2);
        self.y1 = self.y1.min(other.y1);
        self.y2 = self.y2.max(other.y2);
        self.sync_size();
    }

    /// Grow this box, in place, to also cover `pt`.
    pub fn include_point(&mut self, pt: Point) {
        self.x1 = self.x1.min(pt.x);
        self.x2 = self.x2.max(pt.x);
        self.y1 = self.y1.min(pt.y);
        self.y2 = self.y2.max(pt.y);
        self.sync_size();
    }

    /// Push every edge outward by `padding`, in place.
    ///
    /// A negative `padding` shrinks the box.
    pub fn pad(&mut self, padding: f64) -> &mut BoundingBox {
        self.x1 -= padding;
        self.x2 += padding;
        self.y1 -= padding;
        self.y2 += padding;
        self.sync_size();
        self
    }

    /// Do the two boxes overlap or touch?
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.x1 > other.x2
            || other.x1 > self.x2
            || self.y1 > other.y2
            || other.y1 > self.y2)
    }

    /// Is `(x, y)` inside the box or on its boundary?
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    /// Is `pt` inside the box or on its boundary?
    #[inline]
    pub fn contains_point(&self, pt: Point) -> bool {
        self.contains(pt.x, pt.y)
    }

    /// Does this box fully cover `other`, boundaries included?
    #[inline]
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(other.x1, other.y1) && self.contains(other.x2, other.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(x1: f64, y1: f64, x2: f64, y2: f64) -> BoundingBox {
        BoundingBox::from_corners(x1, y1, x2, y2).unwrap()
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn construction() {
        let b = bb(1.0, 2.0, 4.0, 8.0);
        assert_eq!((b.w, b.h), (3.0, 6.0));
        assert!(BoundingBox::from_corners(1.0, 0.0, 0.0, 1.0).is_none());
        assert!(BoundingBox::from_corners(0.0, f64::NAN, 1.0, 1.0).is_none());

        let b = BoundingBox::from_origin_size(1.0, 2.0, 3.0, 6.0).unwrap();
        assert_eq!(b, bb(1.0, 2.0, 4.0, 8.0));
        assert!(BoundingBox::from_origin_size(0.0, 0.0, -1.0, 1.0).is_none());

        // A zero-size box is valid.
        assert!(BoundingBox::from_corners(1.0, 1.0, 1.0, 1.0).is_some());
    }

    #[test]
    fn params_fall_back_to_size() {
        let params = BoxParams {
            x1: Some(0.0),
            y1: Some(0.0),
            x2: Some(-1.0),
            y2: Some(5.0),
            w: Some(2.0),
            h: Some(3.0),
        };
        assert_eq!(BoundingBox::from_params(params), Some(bb(0.0, 0.0, 2.0, 3.0)));

        let missing_origin = BoxParams {
            x2: Some(1.0),
            y2: Some(1.0),
            ..BoxParams::default()
        };
        assert!(BoundingBox::from_params(missing_origin).is_none());

        let nothing_else = BoxParams {
            x1: Some(1.0),
            y1: Some(1.0),
            ..BoxParams::default()
        };
        assert!(BoundingBox::from_params(nothing_else).is_none());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn empty_is_union_identity() {
        let mut acc = BoundingBox::EMPTY;
        assert!(acc.is_empty());
        assert_eq!((acc.w, acc.h), (0.0, 0.0));

        acc.union_with(&BoundingBox::EMPTY);
        assert!(acc.is_empty());
        assert_eq!((acc.w, acc.h), (0.0, 0.0));

        let b = bb(-1.0, 2.0, 3.0, 5.0);
        acc.union_with(&b);
        assert_eq!(acc, b);

        acc.union_with(&bb(10.0, -4.0, 11.0, -3.0));
        assert_eq!(acc, bb(-1.0, -4.0, 11.0, 5.0));
    }

    #[test]
    fn include_points() {
        let mut acc = BoundingBox::EMPTY;
        acc.include_point(Point::new(3.0, 1.0));
        assert_eq!(acc, bb(3.0, 1.0, 3.0, 1.0));
        acc.include_point(Point::new(-1.0, 4.0));
        assert_eq!(acc, bb(-1.0, 1.0, 3.0, 4.0));

        let from_iter = BoundingBox::from_points([Point::new(3.0, 1.0), Point::new(-1.0, 4.0)]);
        assert_eq!(from_iter, acc);
        assert!(BoundingBox::from_points(core::iter::empty()).is_empty());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn padding() {
        let mut b = bb(0.0, 0.0, 2.0, 2.0);
        b.pad(1.5);
        assert_eq!(b, bb(-1.5, -1.5, 3.5, 3.5));
        assert_eq!(b.w, 5.0);
        b.pad(-1.5).pad(-0.5);
        assert_eq!(b, bb(0.5, 0.5, 1.5, 1.5));
    }

    #[test]
    fn closed_containment() {
        let b = bb(0.0, 0.0, 10.0, 5.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(10.0, 5.0));
        assert!(b.contains_point(Point::new(10.0, 2.5)));
        assert!(!b.contains(10.0 + 1e-9, 2.5));

        assert!(b.contains_box(&b));
        assert!(b.contains_box(&bb(0.0, 0.0, 10.0, 0.0)));
        assert!(!b.contains_box(&bb(-1.0, 0.0, 10.0, 5.0)));
    }

    #[test]
    fn closed_intersection() {
        let b = bb(0.0, 0.0, 1.0, 1.0);
        assert!(b.intersects(&bb(1.0, 1.0, 2.0, 2.0)));
        assert!(b.intersects(&bb(0.25, 0.25, 0.5, 0.5)));
        assert!(bb(0.25, 0.25, 0.5, 0.5).intersects(&b));
        assert!(!b.intersects(&bb(1.0 + 1e-9, 0.0, 2.0, 1.0)));
        assert!(!b.intersects(&bb(0.0, -2.0, 1.0, -1e-9)));
        assert!(!b.intersects(&BoundingBox::EMPTY));
    }
}
