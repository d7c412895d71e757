use num_traits::Zero;
use std::cmp::Ordering;

use crate::data::Point;
use crate::orientation::{orient, Orientation};
use crate::GeometryScalar;

/// Exact intersection point of the lines through `first_start..first_end`
/// and `second_start..second_end`.
///
/// Callers must have established a proper crossing beforehand (all four
/// triple orientations non-collinear, opposite per segment); the returned
/// point then lies strictly inside both segments and is exact whenever the
/// scalar division is.
pub fn segments_intersection_point<T>(
  first_start: &Point<T>,
  first_end: &Point<T>,
  second_start: &Point<T>,
  second_end: &Point<T>,
) -> Point<T>
where
  T: GeometryScalar,
{
  let first_dx = first_start.x().clone() - first_end.x().clone();
  let first_dy = first_start.y().clone() - first_end.y().clone();
  let second_dx = second_start.x().clone() - second_end.x().clone();
  let second_dy = second_start.y().clone() - second_end.y().clone();
  let denominator = first_dx.clone() * second_dy.clone() - first_dy.clone() * second_dx.clone();
  let first_det = first_start.x().clone() * first_end.y().clone()
    - first_start.y().clone() * first_end.x().clone();
  let second_det = second_start.x().clone() * second_end.y().clone()
    - second_start.y().clone() * second_end.x().clone();
  let x = (first_det.clone() * second_dx - first_dx * second_det.clone()) / denominator.clone();
  let y = (first_det * second_dy - first_dy * second_det) / denominator;
  Point::new(x, y)
}

/// Does `point` lie on the closed segment `start..end`?
pub fn point_on_segment<T>(point: &Point<T>, start: &Point<T>, end: &Point<T>) -> bool
where
  T: GeometryScalar,
{
  if orient(start, end, point) != Orientation::Collinear {
    return false;
  }
  let (min_x, max_x) = if start.x() <= end.x() {
    (start.x(), end.x())
  } else {
    (end.x(), start.x())
  };
  let (min_y, max_y) = if start.y() <= end.y() {
    (start.y(), end.y())
  } else {
    (end.y(), start.y())
  };
  min_x <= point.x() && point.x() <= max_x && min_y <= point.y() && point.y() <= max_y
}

/// Do two segments share any point besides identical endpoints?
///
/// Adjacent ring edges meeting exactly at their common endpoint are
/// proper; crossings, T-junctions, collinear overlaps and coincident
/// segments are not. Drives the simplicity checks, which must stay total
/// on arbitrary (including invalid) input.
pub(crate) fn segments_meet_improperly<T>(
  first_start: &Point<T>,
  first_end: &Point<T>,
  second_start: &Point<T>,
  second_end: &Point<T>,
) -> bool
where
  T: GeometryScalar,
{
  let endpoint_invades = |point: &Point<T>, start: &Point<T>, end: &Point<T>| {
    point != start && point != end && point_on_segment(point, start, end)
  };
  if endpoint_invades(second_start, first_start, first_end)
    || endpoint_invades(second_end, first_start, first_end)
    || endpoint_invades(first_start, second_start, second_end)
    || endpoint_invades(first_end, second_start, second_end)
  {
    return true;
  }
  if (first_start == second_start && first_end == second_end)
    || (first_start == second_end && first_end == second_start)
  {
    return true;
  }
  let second_start_orientation = orient(first_start, first_end, second_start);
  let second_end_orientation = orient(first_start, first_end, second_end);
  let first_start_orientation = orient(second_start, second_end, first_start);
  let first_end_orientation = orient(second_start, second_end, first_end);
  second_start_orientation != Orientation::Collinear
    && second_end_orientation != Orientation::Collinear
    && first_start_orientation != Orientation::Collinear
    && first_end_orientation != Orientation::Collinear
    && second_start_orientation != second_end_orientation
    && first_start_orientation != first_end_orientation
}

/// Sign of the in-circle determinant: `Greater` exactly when `d` lies
/// strictly inside the circle through `a`, `b`, `c` taken counterclockwise
/// (`Less` when `abc` is clockwise and `d` is inside).
pub fn point_in_circle<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> Ordering
where
  T: GeometryScalar,
{
  let adx = a.x().clone() - d.x().clone();
  let ady = a.y().clone() - d.y().clone();
  let bdx = b.x().clone() - d.x().clone();
  let bdy = b.y().clone() - d.y().clone();
  let cdx = c.x().clone() - d.x().clone();
  let cdy = c.y().clone() - d.y().clone();
  let a_lift = adx.clone() * adx.clone() + ady.clone() * ady.clone();
  let b_lift = bdx.clone() * bdx.clone() + bdy.clone() * bdy.clone();
  let c_lift = cdx.clone() * cdx.clone() + cdy.clone() * cdy.clone();
  let determinant = adx.clone() * (bdy.clone() * c_lift.clone() - cdy.clone() * b_lift.clone())
    - ady.clone() * (bdx.clone() * c_lift - cdx.clone() * b_lift)
    + a_lift * (bdx * cdy - cdx * bdy);
  determinant.cmp(&T::zero())
}

#[cfg(test)]
mod tests {
  use super::*;
  use num_rational::BigRational;
  use num_traits::FromPrimitive;

  fn pt(x: i64, y: i64) -> Point<BigRational> {
    Point::new(
      BigRational::from_i64(x).unwrap(),
      BigRational::from_i64(y).unwrap(),
    )
  }

  #[test]
  fn diagonal_crossing() {
    let result = segments_intersection_point(&pt(0, 0), &pt(2, 2), &pt(0, 2), &pt(2, 0));
    assert_eq!(result, pt(1, 1));
  }

  #[test]
  fn fractional_crossing() {
    let result = segments_intersection_point(&pt(0, 0), &pt(1, 1), &pt(0, 1), &pt(1, 0));
    let half = BigRational::new(1.into(), 2.into());
    assert_eq!(result, Point::new(half.clone(), half));
  }

  #[test]
  fn on_segment() {
    assert!(point_on_segment(&pt(1, 1), &pt(0, 0), &pt(2, 2)));
    assert!(point_on_segment(&pt(0, 0), &pt(0, 0), &pt(2, 2)));
    assert!(!point_on_segment(&pt(3, 3), &pt(0, 0), &pt(2, 2)));
    assert!(!point_on_segment(&pt(1, 0), &pt(0, 0), &pt(2, 2)));
  }

  #[test]
  fn improper_meetings() {
    // Shared endpoint only.
    assert!(!segments_meet_improperly(
      &pt(0, 0),
      &pt(1, 0),
      &pt(1, 0),
      &pt(1, 1)
    ));
    // Disjoint.
    assert!(!segments_meet_improperly(
      &pt(0, 0),
      &pt(1, 0),
      &pt(0, 1),
      &pt(1, 1)
    ));
    // Proper crossing.
    assert!(segments_meet_improperly(
      &pt(0, 0),
      &pt(2, 2),
      &pt(0, 2),
      &pt(2, 0)
    ));
    // T-junction.
    assert!(segments_meet_improperly(
      &pt(0, 0),
      &pt(2, 0),
      &pt(1, 0),
      &pt(1, 1)
    ));
    // Collinear overlap sharing one endpoint.
    assert!(segments_meet_improperly(
      &pt(0, 0),
      &pt(2, 0),
      &pt(0, 0),
      &pt(3, 0)
    ));
    // Coincident pair.
    assert!(segments_meet_improperly(
      &pt(0, 0),
      &pt(2, 0),
      &pt(2, 0),
      &pt(0, 0)
    ));
  }

  #[test]
  fn in_circle() {
    let a = pt(0, 0);
    let b = pt(2, 0);
    let c = pt(0, 2);
    assert_eq!(point_in_circle(&a, &b, &c, &pt(1, 1)), Ordering::Greater);
    assert_eq!(point_in_circle(&a, &b, &c, &pt(2, 2)), Ordering::Equal);
    assert_eq!(point_in_circle(&a, &b, &c, &pt(3, 3)), Ordering::Less);
  }
}
