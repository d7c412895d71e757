use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::point::Point;
use super::segment::Segment;
use super::Location;
use crate::intersection::{point_on_segment, segments_meet_improperly};
use crate::orientation::{orient, Orientation};
use crate::{Error, GeometryScalar, MIN_CONTOUR_VERTICES_COUNT};

/// A closed polyline: the vertex list with an implicit edge from the last
/// vertex back to the first. Equality is invariant under rotation and
/// reversal of the vertex cycle.
#[derive(Debug, Clone)]
pub struct Contour<T> {
  vertices: Vec<Point<T>>,
}

impl<T: GeometryScalar> PartialEq for Contour<T> {
  fn eq(&self, other: &Self) -> bool {
    self.vertices.len() == other.vertices.len()
      && self.canonical_vertices() == other.canonical_vertices()
  }
}

impl<T: GeometryScalar> Eq for Contour<T> {}

impl<T: GeometryScalar> Contour<T> {
  pub fn try_new(vertices: Vec<Point<T>>) -> Result<Contour<T>, Error> {
    if vertices.len() < MIN_CONTOUR_VERTICES_COUNT {
      return Err(Error::InsufficientVertices);
    }
    for index in 0..vertices.len() {
      if vertices[index] == vertices[(index + 1) % vertices.len()] {
        return Err(Error::ZeroLengthSegment);
      }
    }
    Ok(Contour { vertices })
  }

  pub(crate) fn new_unchecked(vertices: Vec<Point<T>>) -> Contour<T> {
    debug_assert!(vertices.len() >= MIN_CONTOUR_VERTICES_COUNT);
    Contour { vertices }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn edge_segments(&self) -> Vec<Segment<T>> {
    let mut result = Vec::with_capacity(self.vertices.len());
    for index in 0..self.vertices.len() {
      let next = (index + 1) % self.vertices.len();
      result.push(Segment::new_unchecked(
        self.vertices[index].clone(),
        self.vertices[next].clone(),
      ));
    }
    result
  }

  /// Twice the signed area of the enclosed region; positive for
  /// counterclockwise vertex order.
  pub fn signed_area_2x(&self) -> T {
    let mut sum = T::zero();
    for index in 0..self.vertices.len() {
      let p = &self.vertices[index];
      let q = &self.vertices[(index + 1) % self.vertices.len()];
      sum = sum + (p.x().clone() * q.y().clone() - q.x().clone() * p.y().clone());
    }
    sum
  }

  pub fn orientation(&self) -> Orientation {
    match self.signed_area_2x().cmp(&T::zero()) {
      Ordering::Less => Orientation::Clockwise,
      Ordering::Equal => Orientation::Collinear,
      Ordering::Greater => Orientation::Counterclockwise,
    }
  }

  #[must_use]
  pub fn reversed(&self) -> Contour<T> {
    let mut vertices = self.vertices.clone();
    vertices.reverse();
    Contour { vertices }
  }

  /// Checks that no vertex is visited twice and that edges meet only at
  /// their shared endpoints. Quadratic over the edges, predicates only.
  pub fn is_simple(&self) -> bool {
    let mut seen = BTreeSet::new();
    for vertex in &self.vertices {
      if !seen.insert(vertex) {
        return false;
      }
    }
    let segments = self.edge_segments();
    for (index, first) in segments.iter().enumerate() {
      for second in &segments[index + 1..] {
        if segments_meet_improperly(first.start(), first.end(), second.start(), second.end()) {
          return false;
        }
      }
    }
    true
  }

  // The smallest vertex sequence among all rotations of the cycle and of
  // its reversal; the comparison key behind equality.
  pub(crate) fn canonical_vertices(&self) -> Vec<Point<T>> {
    let forward = rotate_to_minimum(self.vertices.clone());
    let mut backward = self.vertices.clone();
    backward.reverse();
    let backward = rotate_to_minimum(backward);
    forward.min(backward)
  }
}

fn rotate_to_minimum<T: GeometryScalar>(vertices: Vec<Point<T>>) -> Vec<Point<T>> {
  let minimum = vertices
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp(b))
    .map(|(index, _)| index)
    .unwrap_or(0);
  let mut rotated = Vec::with_capacity(vertices.len());
  rotated.extend_from_slice(&vertices[minimum..]);
  rotated.extend_from_slice(&vertices[..minimum]);
  rotated
}

/// Exact ray-crossing point location against a single contour ring.
pub fn locate_point_in_contour<T>(point: &Point<T>, contour: &Contour<T>) -> Location
where
  T: GeometryScalar,
{
  locate_point_in_ring(point, contour.vertices())
}

pub(crate) fn locate_point_in_ring<T>(point: &Point<T>, vertices: &[Point<T>]) -> Location
where
  T: GeometryScalar,
{
  let mut inside = false;
  for index in 0..vertices.len() {
    let start = &vertices[index];
    let end = &vertices[(index + 1) % vertices.len()];
    if point_on_segment(point, start, end) {
      return Location::Boundary;
    }
    // Half-open span test keeps vertices on the scan line from being
    // counted twice.
    if (start.y() <= point.y()) != (end.y() <= point.y()) {
      let side = orient(start, end, point);
      let upward = end.y() > start.y();
      if (upward && side == Orientation::Counterclockwise)
        || (!upward && side == Orientation::Clockwise)
      {
        inside = !inside;
      }
    }
  }
  if inside {
    Location::Interior
  } else {
    Location::Exterior
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn square() -> Contour<i64> {
    Contour::try_new(vec![
      Point::new(0, 0),
      Point::new(2, 0),
      Point::new(2, 2),
      Point::new(0, 2),
    ])
    .unwrap()
  }

  #[test]
  fn vertex_count() {
    claims::assert_err_eq!(
      Contour::try_new(vec![Point::new(0i64, 0), Point::new(1, 1)]),
      Error::InsufficientVertices
    );
  }

  #[test]
  fn cyclic_equality() {
    let rotated = Contour::try_new(vec![
      Point::new(2, 0),
      Point::new(2, 2),
      Point::new(0, 2),
      Point::new(0, 0),
    ])
    .unwrap();
    assert_eq!(square(), rotated);
    assert_eq!(square(), square().reversed());
  }

  #[test]
  fn area_and_orientation() {
    let contour = square();
    assert_eq!(contour.signed_area_2x(), 8);
    assert_eq!(contour.orientation(), Orientation::Counterclockwise);
    assert_eq!(contour.reversed().orientation(), Orientation::Clockwise);
    assert_eq!(contour.reversed().signed_area_2x(), -8);
  }

  #[test]
  fn point_location() {
    let contour = square();
    assert_eq!(
      locate_point_in_contour(&Point::new(1, 1), &contour),
      Location::Interior
    );
    assert_eq!(
      locate_point_in_contour(&Point::new(2, 1), &contour),
      Location::Boundary
    );
    assert_eq!(
      locate_point_in_contour(&Point::new(3, 1), &contour),
      Location::Exterior
    );
    assert_eq!(
      locate_point_in_contour(&Point::new(0, 0), &contour),
      Location::Boundary
    );
  }

  #[test]
  fn point_location_left_of_vertex() {
    let contour = Contour::try_new(vec![
      Point::new(0i64, 0),
      Point::new(4, 0),
      Point::new(2, 2),
      Point::new(4, 4),
      Point::new(0, 4),
    ])
    .unwrap();
    assert_eq!(
      locate_point_in_contour(&Point::new(1, 2), &contour),
      Location::Interior
    );
    assert_eq!(
      locate_point_in_contour(&Point::new(3, 2), &contour),
      Location::Exterior
    );
  }

  #[test]
  fn simplicity() {
    assert!(square().is_simple());
    let bowtie = Contour::try_new(vec![
      Point::new(0i64, 0),
      Point::new(2, 2),
      Point::new(2, 0),
      Point::new(0, 2),
    ])
    .unwrap();
    assert!(!bowtie.is_simple());
  }
}
