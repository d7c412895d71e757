use super::bbox::Bbox;
use super::contour::{locate_point_in_ring, Contour};
use super::point::Point;
use super::segment::Segment;
use super::Location;
use crate::intersection::segments_meet_improperly;
use crate::GeometryScalar;

/// A region bounded by an outer contour and any number of hole contours.
/// Contour winding is not significant: operations canonicalise borders to
/// counterclockwise and holes to clockwise internally, and equality
/// compares borders up to rotation and reversal and holes as a set.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
  border: Contour<T>,
  holes: Vec<Contour<T>>,
}

impl<T: GeometryScalar> PartialEq for Polygon<T> {
  fn eq(&self, other: &Self) -> bool {
    self.border == other.border && sorted_hole_keys(&self.holes) == sorted_hole_keys(&other.holes)
  }
}

impl<T: GeometryScalar> Eq for Polygon<T> {}

pub(crate) fn sorted_hole_keys<T: GeometryScalar>(holes: &[Contour<T>]) -> Vec<Vec<Point<T>>> {
  let mut keys: Vec<_> = holes.iter().map(Contour::canonical_vertices).collect();
  keys.sort();
  keys
}

impl<T: GeometryScalar> Polygon<T> {
  pub fn new(border: Contour<T>, holes: Vec<Contour<T>>) -> Polygon<T> {
    Polygon { border, holes }
  }

  pub fn border(&self) -> &Contour<T> {
    &self.border
  }

  pub fn holes(&self) -> &[Contour<T>] {
    &self.holes
  }

  pub fn bbox(&self) -> Bbox<T> {
    Bbox::from_points(self.border.vertices())
  }

  /// Point location against the region: holes carve the interior out.
  pub fn locate(&self, point: &Point<T>) -> Location {
    match locate_point_in_ring(point, self.border.vertices()) {
      Location::Interior => {
        for hole in &self.holes {
          match locate_point_in_ring(point, hole.vertices()) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
          }
        }
        Location::Interior
      }
      other => other,
    }
  }

  /// Checks that every ring is simple and that rings meet at most at
  /// shared vertices (a hole may touch the border in isolated points).
  /// Hole containment is not verified here. Quadratic over the edges.
  pub fn validate(&self) -> bool {
    if !self.border.is_simple() {
      return false;
    }
    for hole in &self.holes {
      if !hole.is_simple() {
        return false;
      }
    }
    let mut rings: Vec<Vec<Segment<T>>> = Vec::with_capacity(1 + self.holes.len());
    rings.push(self.border.edge_segments());
    for hole in &self.holes {
      rings.push(hole.edge_segments());
    }
    for (index, first_ring) in rings.iter().enumerate() {
      for second_ring in &rings[index + 1..] {
        for first in first_ring {
          for second in second_ring {
            if segments_meet_improperly(first.start(), first.end(), second.start(), second.end()) {
              return false;
            }
          }
        }
      }
    }
    true
  }
}
