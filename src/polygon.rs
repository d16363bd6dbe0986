//! Closed polygons: containment, padding and border intersection.

use core::fmt;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::common::DEGENERATE_LENGTH;
use crate::log::{debug, warn};
use crate::{BoundingBox, Line, Point, Vec2};

/// Error returned when polygon input cannot be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A flat coordinate list had an odd number of entries.
    OddCoordinateCount(usize),
    /// A regular polygon was requested with fewer than three sides.
    TooFewSides(usize),
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::OddCoordinateCount(n) => {
                write!(f, "flat coordinate list has odd length {n}")
            }
            PolygonError::TooFewSides(n) => {
                write!(f, "a polygon needs at least 3 sides, got {n}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolygonError {}

/// Orientation of a polygon's vertex order.
///
/// Measured with the shoelace formula in y-up axes. In the y-down model
/// space of a diagram, `CounterClockwise` therefore appears clockwise on
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero (or non-finite) signed area; the orientation is undefined.
    Degenerate,
}

/// A closed polygon.
///
/// The last vertex implicitly connects back to the first. Vertices should
/// not self-intersect; non-convex outlines are fine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: SmallVec<[Point; 8]>,
}

impl Polygon {
    /// Create a polygon from its vertices, in order.
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Polygon {
        Polygon {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Create a polygon from a flat `[x0, y0, x1, y1, ...]` list.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Polygon, PolygonError};
    ///
    /// let square = Polygon::from_flat(&[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap();
    /// assert_eq!(square.len(), 4);
    /// assert_eq!(Polygon::from_flat(&[0.0, 1.0, 2.0]), Err(PolygonError::OddCoordinateCount(3)));
    /// ```
    pub fn from_flat(coords: &[f64]) -> Result<Polygon, PolygonError> {
        if coords.len() % 2 != 0 {
            return Err(PolygonError::OddCoordinateCount(coords.len()));
        }
        Ok(Polygon::new(
            coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])),
        ))
    }

    /// The vertices as a flat `[x0, y0, x1, y1, ...]` list.
    pub fn to_flat(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// The vertices, in order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Mutable access to the vertices.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Point] {
        &mut self.vertices
    }

    /// The number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does the polygon have no vertices?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The edges, including the closing edge from the last vertex back to
    /// the first.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area by the shoelace formula; positive for counter-clockwise
    /// order in y-up axes.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|e| e.p0.to_vec2().cross(e.p1.to_vec2()))
            .sum::<f64>()
    }

    /// The orientation of the vertex order.
    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Even-odd containment test.
    ///
    /// Casts a vertical ray from `p` and counts the edges crossing it above
    /// `p`; an odd count means inside. Each edge spans the half-open
    /// x-interval between its ends, so a ray through a vertex counts it
    /// once and edges that are vertical exactly at `p.x` are skipped. The
    /// result does not depend on which vertex the list starts at.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapegeom::{Point, Polygon};
    ///
    /// let tri = Polygon::new([Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)]);
    /// assert!(tri.contains(Point::new(1.0, 1.0)));
    /// assert!(!tri.contains(Point::new(3.0, 3.0)));
    /// ```
    pub fn contains(&self, p: Point) -> bool {
        let mut up = 0;
        for Line { p0: a, p1: b } in self.edges() {
            if (a.x <= p.x) != (b.x <= p.x) {
                let y = (p.x - a.x) / (b.x - a.x) * (b.y - a.y) + a.y;
                if y > p.y {
                    up += 1;
                }
            }
        }
        up % 2 == 1
    }

    /// Offset every edge outward by `pad`.
    ///
    /// Each edge is moved along its outward normal, which is chosen from
    /// the sign of [`Polygon::signed_area`] so the result does not depend
    /// on vertex order. A negative `pad` moves edges inward. The offset
    /// edges are left unconnected; see [`join_lines`] to close them.
    ///
    /// Edges no longer than [`DEGENERATE_LENGTH`] have no normal and are
    /// dropped.
    pub fn expand(&self, pad: f64) -> SmallVec<[Line; 8]> {
        let area = self.signed_area();
        let sign = if area > 0.0 {
            1.0
        } else if area < 0.0 {
            -1.0
        } else {
            warn!(signed_area = area, "polygon winding undefined, offsetting as counter-clockwise");
            1.0
        };

        let mut lines = SmallVec::new();
        for edge in self.edges() {
            let d = edge.p1 - edge.p0;
            // Right-hand normal of a counter-clockwise edge points outward.
            let Some(normal) = Vec2::new(d.y, -d.x).try_normalize() else {
                debug!(?edge, "dropping zero-length polygon edge");
                continue;
            };
            let offset = normal * (sign * pad);
            lines.push(Line::new(edge.p0 + offset, edge.p1 + offset));
        }
        lines
    }

    /// The polygon with every edge moved outward by `pad`, corners
    /// reconstructed by intersecting neighbouring edges.
    ///
    /// Each vertex of the result lies at perpendicular distance `pad` from
    /// the lines through the two edges that met at the original vertex.
    pub fn padded(&self, pad: f64) -> Polygon {
        join_lines(&self.expand(pad))
    }

    /// Largest squared distance from a vertex to the origin, but no less
    /// than `0.000001`.
    pub fn max_sq_distance_to_origin(&self) -> f64 {
        self.vertices
            .iter()
            .map(|p| p.to_vec2().hypot2())
            .fold(0.000001, f64::max)
    }

    /// Intersect the border with a segment.
    ///
    /// The vertices are used as given; see
    /// [`polygon_intersect_line`](crate::polygon_intersect_line) to place a
    /// unit shape in a node frame first. Hits are ordered near to far from
    /// `line.p0`. Coincident hits, as from a segment passing through a
    /// vertex, are reported once.
    pub fn intersect_line(&self, line: Line) -> SmallVec<[Point; 4]> {
        let mut hits: SmallVec<[Point; 4]> = self
            .edges()
            .filter_map(|edge| line.intersect_segment(edge))
            .collect();
        hits.sort_by(|a, b| {
            a.distance_squared(line.p0)
                .total_cmp(&b.distance_squared(line.p0))
        });
        let tolerance = DEGENERATE_LENGTH * (1.0 + line.p0.to_vec2().hypot() + line.p1.to_vec2().hypot());
        hits.dedup_by(|a, b| a.distance(*b) <= tolerance);
        hits
    }

    /// The smallest box containing every vertex.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices.iter().copied())
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Polygon::new(iter)
    }
}

/// Close a ring of offset edges into a polygon.
///
/// Vertex `i` is where line `i` meets line `i + 1` (wrapping around), both
/// treated as infinite lines. Parallel neighbours have no crossing and are
/// joined at the end of line `i`.
pub fn join_lines(lines: &[Line]) -> Polygon {
    let n = lines.len();
    (0..n)
        .map(|i| {
            let current = lines[i];
            let next = lines[(i + 1) % n];
            current.intersect_extended(next).unwrap_or_else(|| {
                debug!(line = i, "parallel offset edges, joining at end point");
                current.p1
            })
        })
        .collect()
}
