//! Boolean set operations over exact geometries.
//!
//! Linear operands (segments, multisegments, contours) produce
//! segment-valued results; shaped operands (polygons, multipolygons)
//! produce region-valued results; the intersection and difference of a
//! linear operand with a region clip the linear operand. Bounding boxes
//! pre-filter shaped operands, and the sweep stops as soon as event
//! starts pass the clipping window.
mod linear;
mod reduce;
pub(crate) mod shaped;

pub use crate::sweep::Event;
pub use linear::LinearOperation;
pub use shaped::ShapedOperation;

use std::collections::BTreeSet;

use crate::data::{Bbox, Geometry, Point, Polygon, Segment};
use crate::{Error, GeometryScalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
  Difference,
  Intersection,
  SymmetricDifference,
  Union,
}

/// `first | second`.
pub fn unite<T: GeometryScalar>(
  first: &Geometry<T>,
  second: &Geometry<T>,
) -> Result<Geometry<T>, Error> {
  boolean(OperationKind::Union, first, second)
}

/// `first & second`.
pub fn intersect<T: GeometryScalar>(
  first: &Geometry<T>,
  second: &Geometry<T>,
) -> Result<Geometry<T>, Error> {
  boolean(OperationKind::Intersection, first, second)
}

/// `first - second`.
pub fn subtract<T: GeometryScalar>(
  first: &Geometry<T>,
  second: &Geometry<T>,
) -> Result<Geometry<T>, Error> {
  boolean(OperationKind::Difference, first, second)
}

/// `first ^ second`.
pub fn symmetric_subtract<T: GeometryScalar>(
  first: &Geometry<T>,
  second: &Geometry<T>,
) -> Result<Geometry<T>, Error> {
  boolean(OperationKind::SymmetricDifference, first, second)
}

pub fn unite_polygons<T: GeometryScalar>(
  first: &Polygon<T>,
  second: &Polygon<T>,
) -> Vec<Polygon<T>> {
  shaped_boolean(OperationKind::Union, &[first], &[second])
}

pub fn intersect_polygons<T: GeometryScalar>(
  first: &Polygon<T>,
  second: &Polygon<T>,
) -> Vec<Polygon<T>> {
  shaped_boolean(OperationKind::Intersection, &[first], &[second])
}

pub fn subtract_polygons<T: GeometryScalar>(
  first: &Polygon<T>,
  second: &Polygon<T>,
) -> Vec<Polygon<T>> {
  shaped_boolean(OperationKind::Difference, &[first], &[second])
}

pub fn symmetric_subtract_polygons<T: GeometryScalar>(
  first: &Polygon<T>,
  second: &Polygon<T>,
) -> Vec<Polygon<T>> {
  shaped_boolean(OperationKind::SymmetricDifference, &[first], &[second])
}

// Self-intersecting region operands would corrupt the sweep's labels, so
// they are rejected before the engine is entered.
fn check_shaped_operand<T: GeometryScalar>(operand: &Geometry<T>) -> Result<(), Error> {
  if let Some(polygons) = operand.shaped_polygons() {
    for polygon in polygons {
      if !polygon.validate() {
        return Err(Error::SelfIntersection);
      }
    }
  }
  Ok(())
}

fn boolean<T: GeometryScalar>(
  kind: OperationKind,
  first: &Geometry<T>,
  second: &Geometry<T>,
) -> Result<Geometry<T>, Error> {
  check_shaped_operand(first)?;
  check_shaped_operand(second)?;
  match (first.is_empty(), second.is_empty()) {
    (true, true) => return Ok(Geometry::Empty),
    (true, false) => {
      return Ok(match kind {
        OperationKind::Union | OperationKind::SymmetricDifference => second.clone(),
        OperationKind::Intersection | OperationKind::Difference => Geometry::Empty,
      })
    }
    (false, true) => {
      return Ok(match kind {
        OperationKind::Union
        | OperationKind::SymmetricDifference
        | OperationKind::Difference => first.clone(),
        OperationKind::Intersection => Geometry::Empty,
      })
    }
    (false, false) => {}
  }
  match (first.linear_segments(), second.linear_segments()) {
    (Some(first_segments), Some(second_segments)) => {
      return Ok(Geometry::from_segments(linear_boolean(
        kind,
        first_segments,
        second_segments,
      )));
    }
    (Some(first_segments), None) => {
      let second_polygons = second.shaped_polygons().expect("shaped operand");
      return match kind {
        OperationKind::Intersection | OperationKind::Difference => Ok(Geometry::from_segments(
          clip_linear_by_shaped(kind, first_segments, &second_polygons),
        )),
        _ => Err(Error::UnsupportedOperands),
      };
    }
    (None, Some(second_segments)) => {
      let first_polygons = first.shaped_polygons().expect("shaped operand");
      return match kind {
        OperationKind::Intersection => Ok(Geometry::from_segments(clip_linear_by_shaped(
          kind,
          second_segments,
          &first_polygons,
        ))),
        // Removing a measure-zero set leaves the region as it is.
        OperationKind::Difference => Ok(first.clone()),
        _ => Err(Error::UnsupportedOperands),
      };
    }
    (None, None) => {}
  }
  let first_polygons = first.shaped_polygons().expect("shaped operand");
  let second_polygons = second.shaped_polygons().expect("shaped operand");
  Ok(Geometry::from_polygons(shaped_boolean(
    kind,
    &first_polygons,
    &second_polygons,
  )))
}

fn linear_boolean<T: GeometryScalar>(
  kind: OperationKind,
  first: Vec<Segment<T>>,
  second: Vec<Segment<T>>,
) -> Vec<Segment<T>> {
  let mut operation = LinearOperation::from_segments_iterables(first, second, kind);
  let mut events = Vec::new();
  while let Some(event) = operation.step() {
    events.push(event);
  }
  operation.reduce_events(&events)
}

/// Clips a linear operand against a region: `Intersection` keeps the
/// pieces inside or on the region's boundary, `Difference` the strictly
/// outside ones.
fn clip_linear_by_shaped<T: GeometryScalar>(
  kind: OperationKind,
  segments: Vec<Segment<T>>,
  polygons: &[&Polygon<T>],
) -> Vec<Segment<T>> {
  let flagged_first = segments.into_iter().map(|segment| (segment, false)).collect();
  let mut sweep = shaped::ShapedSweep::new(flagged_first, shaped::flagged_segments(polygons));
  let mut events = Vec::new();
  while let Some(event) = sweep.step() {
    events.push(event);
  }
  let (kinds, _) = sweep.overlap_kinds();
  let mut selected: BTreeSet<(Point<T>, Point<T>)> = BTreeSet::new();
  for event in events {
    if !event.is_left() || !sweep.core().is_from_first_operand(event) {
      continue;
    }
    let on_boundary = kinds[event.position()] != shaped::OverlapKind::None;
    let inside = sweep.other_interior_to_left(event);
    let keep = match kind {
      OperationKind::Intersection => on_boundary || inside,
      OperationKind::Difference => !on_boundary && !inside,
      _ => unreachable!("mixed-dimension union is rejected earlier"),
    };
    if keep {
      selected.insert((
        sweep.core().event_start(event).clone(),
        sweep.core().event_end(event).clone(),
      ));
    }
  }
  selected
    .into_iter()
    .map(|(start, end)| Segment::new_unchecked(start, end))
    .collect()
}

fn merged_bbox<T: GeometryScalar>(boxes: &[Bbox<T>]) -> Bbox<T> {
  let mut boxes = boxes.iter();
  let first = boxes.next().expect("at least one box").clone();
  boxes.fold(first, |merged, next| merged.merge(next))
}

fn shaped_boolean<T: GeometryScalar>(
  kind: OperationKind,
  first: &[&Polygon<T>],
  second: &[&Polygon<T>],
) -> Vec<Polygon<T>> {
  if first.is_empty() {
    return match kind {
      OperationKind::Union | OperationKind::SymmetricDifference => {
        second.iter().map(|polygon| (*polygon).clone()).collect()
      }
      _ => Vec::new(),
    };
  }
  if second.is_empty() {
    return match kind {
      OperationKind::Intersection => Vec::new(),
      _ => first.iter().map(|polygon| (*polygon).clone()).collect(),
    };
  }
  let first_boxes: Vec<_> = first.iter().map(|polygon| polygon.bbox()).collect();
  let second_boxes: Vec<_> = second.iter().map(|polygon| polygon.bbox()).collect();
  let first_bbox = merged_bbox(&first_boxes);
  let second_bbox = merged_bbox(&second_boxes);
  match kind {
    OperationKind::Intersection => {
      if first_bbox.no_common_area(&second_bbox) {
        return Vec::new();
      }
      let first_common: Vec<_> = first
        .iter()
        .zip(&first_boxes)
        .filter(|(_, bbox)| !bbox.no_common_area(&second_bbox))
        .collect();
      let second_common: Vec<_> = second
        .iter()
        .zip(&second_boxes)
        .filter(|(_, bbox)| !bbox.no_common_area(&first_bbox))
        .collect();
      if first_common.is_empty() || second_common.is_empty() {
        return Vec::new();
      }
      let first_max_x = first_common
        .iter()
        .map(|(_, bbox)| bbox.max_x.clone())
        .max()
        .expect("non-empty");
      let second_max_x = second_common
        .iter()
        .map(|(_, bbox)| bbox.max_x.clone())
        .max()
        .expect("non-empty");
      let max_x = first_max_x.min(second_max_x);
      let first_operands: Vec<_> = first_common.iter().map(|(polygon, _)| **polygon).collect();
      let second_operands: Vec<_> = second_common.iter().map(|(polygon, _)| **polygon).collect();
      run_shaped(kind, &first_operands, &second_operands, Some(&max_x))
    }
    OperationKind::Difference => {
      if first_bbox.no_common_area(&second_bbox) {
        return first.iter().map(|polygon| (*polygon).clone()).collect();
      }
      let mut common = Vec::new();
      let mut passthrough = Vec::new();
      for (polygon, bbox) in first.iter().zip(&first_boxes) {
        if bbox.no_common_area(&second_bbox) {
          passthrough.push((*polygon).clone());
        } else {
          common.push((*polygon, bbox));
        }
      }
      let second_common: Vec<_> = second
        .iter()
        .zip(&second_boxes)
        .filter(|(_, bbox)| !bbox.no_common_area(&first_bbox))
        .map(|(polygon, _)| *polygon)
        .collect();
      if common.is_empty() || second_common.is_empty() {
        return first.iter().map(|polygon| (*polygon).clone()).collect();
      }
      let max_x = common
        .iter()
        .map(|(_, bbox)| bbox.max_x.clone())
        .max()
        .expect("non-empty");
      let first_operands: Vec<_> = common.iter().map(|(polygon, _)| *polygon).collect();
      let mut result = run_shaped(kind, &first_operands, &second_common, Some(&max_x));
      result.extend(passthrough);
      sort_polygons(&mut result);
      result
    }
    OperationKind::Union | OperationKind::SymmetricDifference => {
      // Boundary-touching polygons still merge, so only strictly
      // disjoint boxes may bypass the sweep here.
      let mut first_common = Vec::new();
      let mut passthrough = Vec::new();
      for (polygon, bbox) in first.iter().zip(&first_boxes) {
        if bbox.disjoint_with(&second_bbox) {
          passthrough.push((*polygon).clone());
        } else {
          first_common.push(*polygon);
        }
      }
      let mut second_common = Vec::new();
      for (polygon, bbox) in second.iter().zip(&second_boxes) {
        if bbox.disjoint_with(&first_bbox) {
          passthrough.push((*polygon).clone());
        } else {
          second_common.push(*polygon);
        }
      }
      let mut result = if first_common.is_empty() && second_common.is_empty() {
        Vec::new()
      } else {
        run_shaped(kind, &first_common, &second_common, None)
      };
      result.extend(passthrough);
      sort_polygons(&mut result);
      result
    }
  }
}

fn run_shaped<T: GeometryScalar>(
  kind: OperationKind,
  first: &[&Polygon<T>],
  second: &[&Polygon<T>],
  window_max_x: Option<&T>,
) -> Vec<Polygon<T>> {
  let mut operation = ShapedOperation::from_multisegmentals_sequences(first, second, kind);
  let mut events: Vec<Event> = Vec::new();
  while let Some(event) = operation.step() {
    if let Some(max_x) = window_max_x {
      // Nothing at or beyond this x can still affect the window.
      if operation.event_start(event).x() > max_x {
        break;
      }
    }
    events.push(event);
  }
  let mut result = operation.reduce_events(&events);
  sort_polygons(&mut result);
  result
}

fn sort_polygons<T: GeometryScalar>(polygons: &mut Vec<Polygon<T>>) {
  polygons.sort_by(|a, b| {
    a.border().vertices()[0]
      .cmp(&b.border().vertices()[0])
      .then_with(|| a.border().vertices().cmp(b.border().vertices()))
  });
}
