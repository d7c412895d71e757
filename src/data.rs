//! Geometry value types.
//!
//! Construction validates the cheap structural requirements (vertex and
//! member counts, non-degenerate segments); deeper properties such as
//! simplicity are separate checks (`Contour::is_simple`,
//! `Polygon::validate`) because they cost a pass over every edge pair.
mod bbox;
mod contour;
mod multipolygon;
mod multisegment;
mod point;
mod polygon;
mod segment;

pub use bbox::Bbox;
pub use contour::{locate_point_in_contour, Contour};
pub(crate) use contour::locate_point_in_ring;
pub use multipolygon::Multipolygon;
pub use multisegment::Multisegment;
pub use point::Point;
pub use polygon::Polygon;
pub use segment::Segment;

use crate::GeometryScalar;

/// Where a point sits relative to a region.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
#[repr(i8)]
pub enum Location {
  Exterior = -1,
  Boundary = 0,
  Interior = 1,
}

/// Any value that can present its boundary as a list of segments; the seam
/// through which sweeps consume operands.
pub trait Multisegmental<T: GeometryScalar> {
  fn to_segments(&self) -> Vec<Segment<T>>;
}

impl<T: GeometryScalar> Multisegmental<T> for Segment<T> {
  fn to_segments(&self) -> Vec<Segment<T>> {
    vec![self.clone()]
  }
}

impl<T: GeometryScalar> Multisegmental<T> for Multisegment<T> {
  fn to_segments(&self) -> Vec<Segment<T>> {
    self.segments().to_vec()
  }
}

impl<T: GeometryScalar> Multisegmental<T> for Contour<T> {
  fn to_segments(&self) -> Vec<Segment<T>> {
    self.edge_segments()
  }
}

impl<T: GeometryScalar> Multisegmental<T> for Polygon<T> {
  fn to_segments(&self) -> Vec<Segment<T>> {
    let mut result = self.border().edge_segments();
    for hole in self.holes() {
      result.extend(hole.edge_segments());
    }
    result
  }
}

impl<T: GeometryScalar> Multisegmental<T> for Multipolygon<T> {
  fn to_segments(&self) -> Vec<Segment<T>> {
    self
      .polygons()
      .iter()
      .flat_map(|polygon| polygon.to_segments())
      .collect()
  }
}

/// Tagged union over every concrete geometry, with `Empty` for the result
/// of operations that annihilate (e.g. the intersection of disjoint
/// polygons).
#[derive(Debug, Clone)]
pub enum Geometry<T> {
  Empty,
  Segment(Segment<T>),
  Multisegment(Multisegment<T>),
  Contour(Contour<T>),
  Polygon(Polygon<T>),
  Multipolygon(Multipolygon<T>),
}

impl<T: GeometryScalar> PartialEq for Geometry<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Geometry::Empty, Geometry::Empty) => true,
      (Geometry::Segment(a), Geometry::Segment(b)) => a == b,
      (Geometry::Multisegment(a), Geometry::Multisegment(b)) => a == b,
      (Geometry::Contour(a), Geometry::Contour(b)) => a == b,
      (Geometry::Polygon(a), Geometry::Polygon(b)) => a == b,
      (Geometry::Multipolygon(a), Geometry::Multipolygon(b)) => a == b,
      _ => false,
    }
  }
}

impl<T: GeometryScalar> Eq for Geometry<T> {}

impl<T: GeometryScalar> Geometry<T> {
  pub fn is_empty(&self) -> bool {
    matches!(self, Geometry::Empty)
  }

  /// Segment-valued geometries: segments, multisegments and contours.
  pub fn is_linear(&self) -> bool {
    matches!(
      self,
      Geometry::Segment(_) | Geometry::Multisegment(_) | Geometry::Contour(_)
    )
  }

  /// Region-valued geometries: polygons and multipolygons.
  pub fn is_shaped(&self) -> bool {
    matches!(self, Geometry::Polygon(_) | Geometry::Multipolygon(_))
  }

  pub(crate) fn linear_segments(&self) -> Option<Vec<Segment<T>>> {
    match self {
      Geometry::Segment(segment) => Some(segment.to_segments()),
      Geometry::Multisegment(multisegment) => Some(multisegment.to_segments()),
      Geometry::Contour(contour) => Some(contour.to_segments()),
      _ => None,
    }
  }

  pub(crate) fn shaped_polygons(&self) -> Option<Vec<&Polygon<T>>> {
    match self {
      Geometry::Polygon(polygon) => Some(vec![polygon]),
      Geometry::Multipolygon(multipolygon) => Some(multipolygon.polygons().iter().collect()),
      _ => None,
    }
  }

  /// Repackages a list of segments by cardinality.
  pub(crate) fn from_segments(mut segments: Vec<Segment<T>>) -> Geometry<T> {
    match segments.len() {
      0 => Geometry::Empty,
      1 => Geometry::Segment(segments.pop().unwrap()),
      _ => Geometry::Multisegment(Multisegment::new_unchecked(segments)),
    }
  }

  /// Repackages a list of polygons by cardinality.
  pub(crate) fn from_polygons(mut polygons: Vec<Polygon<T>>) -> Geometry<T> {
    match polygons.len() {
      0 => Geometry::Empty,
      1 => Geometry::Polygon(polygons.pop().unwrap()),
      _ => Geometry::Multipolygon(Multipolygon::new_unchecked(polygons)),
    }
  }
}
