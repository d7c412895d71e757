//! Exact computational geometry for the plane.
//!
//! All predicates (orientation, in-circle, point location) and all derived
//! points (segment intersections) are computed with exact arithmetic, so
//! Boolean operations, relation queries and triangulations are free of
//! rounding artifacts. `num_rational::BigRational` is the reference scalar;
//! any exact ordered ring works for the predicates and the triangulation.
use num_traits::Signed;

pub mod clipping;
pub mod data;
mod intersection;
mod orientation;
pub mod relating;
mod sweep;
pub mod testing;
pub mod triangulation;

pub use data::{
  Bbox, Contour, Geometry, Location, Multipolygon, Multisegment, Multisegmental, Point, Polygon,
  Segment,
};
pub use intersection::{point_in_circle, point_on_segment, segments_intersection_point};
pub use orientation::{orient, Orientation};
pub use relating::{relate, Relation};
pub use triangulation::DelaunayTriangulation;

/// Fewest vertices a contour may have.
pub const MIN_CONTOUR_VERTICES_COUNT: usize = 3;
/// Fewest segments a multisegment may have.
pub const MIN_MULTISEGMENT_SEGMENTS_COUNT: usize = 2;
/// Fewest polygons a multipolygon may have.
pub const MIN_MULTIPOLYGON_POLYGONS_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  InsufficientSegments,
  InsufficientPolygons,
  ZeroLengthSegment,
  /// A contour or polygon handed to a Boolean operation intersects itself.
  SelfIntersection,
  /// The requested operation is not defined for the given operand kinds
  /// (e.g. the union of a segment and a polygon).
  UnsupportedOperands,
}

impl std::fmt::Display for Error {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    let msg = match self {
      Error::InsufficientVertices => "not enough vertices for a contour",
      Error::InsufficientSegments => "not enough segments for a multisegment",
      Error::InsufficientPolygons => "not enough polygons for a multipolygon",
      Error::ZeroLengthSegment => "segment endpoints coincide",
      Error::SelfIntersection => "operand intersects itself",
      Error::UnsupportedOperands => "operation is not defined for these operand kinds",
    };
    write!(fmt, "{}", msg)
  }
}

impl std::error::Error for Error {}

/// Scalar requirements shared by every algorithm in the crate.
///
/// The predicates only ever add, subtract, multiply and compare, so any
/// exact ordered ring qualifies (`i64` for small coordinates, `BigInt`,
/// `BigRational`). Boolean operations additionally construct intersection
/// points by division and therefore need a rational scalar to stay exact.
pub trait GeometryScalar: Clone + Ord + Signed {}

impl<T> GeometryScalar for T where T: Clone + Ord + Signed {}
