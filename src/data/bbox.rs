use super::point::Point;
use crate::GeometryScalar;

/// Axis-aligned bounding box, used only for pre-filtering operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bbox<T> {
  pub min_x: T,
  pub min_y: T,
  pub max_x: T,
  pub max_y: T,
}

impl<T: GeometryScalar> Bbox<T> {
  /// Panics on an empty point list; geometries always have vertices.
  pub fn from_points<'a, I>(points: I) -> Bbox<T>
  where
    I: IntoIterator<Item = &'a Point<T>>,
    T: 'a,
  {
    let mut points = points.into_iter();
    let first = points.next().expect("bounding box of no points");
    let mut result = Bbox {
      min_x: first.x().clone(),
      min_y: first.y().clone(),
      max_x: first.x().clone(),
      max_y: first.y().clone(),
    };
    for point in points {
      if *point.x() < result.min_x {
        result.min_x = point.x().clone();
      }
      if *point.x() > result.max_x {
        result.max_x = point.x().clone();
      }
      if *point.y() < result.min_y {
        result.min_y = point.y().clone();
      }
      if *point.y() > result.max_y {
        result.max_y = point.y().clone();
      }
    }
    result
  }

  #[must_use]
  pub fn merge(&self, other: &Bbox<T>) -> Bbox<T> {
    Bbox {
      min_x: self.min_x.clone().min(other.min_x.clone()),
      min_y: self.min_y.clone().min(other.min_y.clone()),
      max_x: self.max_x.clone().max(other.max_x.clone()),
      max_y: self.max_y.clone().max(other.max_y.clone()),
    }
  }

  /// True when the closed boxes share no interior area; boxes touching
  /// along an edge or corner still qualify.
  pub fn no_common_area(&self, other: &Bbox<T>) -> bool {
    self.max_x <= other.min_x
      || other.max_x <= self.min_x
      || self.max_y <= other.min_y
      || other.max_y <= self.min_y
  }

  /// True when the closed boxes share no point at all.
  pub fn disjoint_with(&self, other: &Bbox<T>) -> bool {
    self.max_x < other.min_x
      || other.max_x < self.min_x
      || self.max_y < other.min_y
      || other.max_y < self.min_y
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn merge_and_overlap() {
    let a = Bbox::from_points(&[Point::new(0i64, 0), Point::new(2, 2)]);
    let b = Bbox::from_points(&[Point::new(1i64, 1), Point::new(3, 3)]);
    let c = Bbox::from_points(&[Point::new(2i64, 0), Point::new(3, 1)]);
    assert!(!a.no_common_area(&b));
    assert!(a.no_common_area(&c));
    let merged = a.merge(&b);
    assert_eq!(merged.max_x, 3);
    assert_eq!(merged.min_y, 0);
  }
}
