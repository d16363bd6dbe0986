//! Intersection, containment and distance primitives for diagram shapes.
//!
//! This crate answers the geometric questions a graph renderer asks when it
//! draws and hit-tests nodes and edges: where an edge meets a node's
//! border, whether a pointer is inside a (padded) node outline, and how far
//! a pointer is from a curved edge. Node outlines are polygons, ellipses or
//! rounded rectangles; edges are line segments or quadratic Béziers.
//!
//! Every operation is a pure function of its inputs. The one exception is
//! [`BoundingBox`], whose `union_with`, `include_point` and `pad` methods
//! update a caller-owned accumulator in place.
//!
//! All coordinates are in model space. Convert pointer positions with a
//! [`Viewport`] before querying.
//!
//! # Examples
//!
//! Clipping an edge against a hexagonal node:
//! ```
//! use shapegeom::{polygon_intersect_line, unit_ngon_fit_to_square, NodeFrame, Point};
//!
//! let hexagon = unit_ngon_fit_to_square(6, 0.0).unwrap();
//! let node = NodeFrame::new((100.0, 100.0), 40.0, 30.0);
//!
//! // The edge comes in from the right, heading for the node's center.
//! let hits = polygon_intersect_line(Point::new(300.0, 100.0), &hexagon, &node);
//! assert!((hits[0].x - 120.0).abs() < 1e-9);
//! ```
//!
//! Hit-testing a curved edge:
//! ```
//! use shapegeom::{Point, QuadBez};
//!
//! let edge = QuadBez::new((0.0, 0.0), (50.0, -40.0), (100.0, 0.0));
//! let cursor = Point::new(50.0, -18.0);
//! let tolerance = 3.0;
//! let hit = edge.in_vicinity(cursor, tolerance)
//!     && edge.distance_squared_to(cursor) <= tolerance * tolerance;
//! assert!(hit);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `alloc` crate is
//! used regardless.
//!
//! With the `tracing` feature, degenerate-input fallbacks (dropped
//! zero-length edges, a cubic collapsing to lower degree) are reported as
//! [`tracing`] events. The `serde`, `schemars` and `mint` features add the
//! usual trait implementations.
//!
//! [`libm`]: https://docs.rs/libm
//! [`tracing`]: https://docs.rs/tracing

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("shapegeom requires either the `std` or `libm` feature");

extern crate alloc;

mod bbox;
mod circle;
pub mod common;
mod ellipse;
mod line;
mod log;
mod node;
mod point;
mod polygon;
mod quadbez;
mod rounded_rect;
mod shape_gen;
mod vec2;
mod viewport;

pub use crate::bbox::*;
pub use crate::circle::*;
pub use crate::ellipse::*;
pub use crate::line::*;
pub use crate::node::*;
pub use crate::point::*;
pub use crate::polygon::*;
pub use crate::quadbez::*;
pub use crate::rounded_rect::*;
pub use crate::shape_gen::*;
pub use crate::vec2::*;
pub use crate::viewport::*;
