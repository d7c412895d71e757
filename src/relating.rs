//! Topological relation classification between geometries.
use std::collections::{BTreeMap, BTreeSet};

use crate::clipping::shaped::{flagged_segments, OverlapKind, ShapedSweep};
use crate::data::{Geometry, Point, Polygon, Segment};
use crate::orientation::ccw_cmp_around_origin;
use crate::sweep::Event;
use crate::GeometryScalar;

/// Kinds of relations two geometries can be in. The order of variants
/// assumes the conditions of the earlier ones do not hold.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
#[repr(u8)]
pub enum Relation {
  /// At least one geometry is non-empty and the intersection is empty.
  Disjoint = 0,
  /// Boundaries meet but interiors stay disjoint.
  Touch = 1,
  /// Interiors meet in a set of lower dimension than the operands'.
  Cross = 2,
  /// The intersection has full dimension but neither operand contains
  /// the other.
  Overlap = 3,
  /// The interior of the geometry strictly contains the other.
  Cover = 4,
  /// Contains the other except for partial boundary sharing.
  Encloses = 5,
  /// Strict superset whose boundary contains the other's boundary.
  Composite = 6,
  /// The geometries are equal as point sets.
  Equal = 7,
  /// Strict subset whose boundary lies in the other's boundary.
  Component = 8,
  /// Contained in the other except for partial boundary sharing.
  Enclosed = 9,
  /// Lies strictly inside the other's interior.
  Within = 10,
}

impl Relation {
  /// The relation seen from the other operand's side.
  pub fn complement(self) -> Relation {
    match self {
      Relation::Component => Relation::Composite,
      Relation::Composite => Relation::Component,
      Relation::Cover => Relation::Within,
      Relation::Within => Relation::Cover,
      Relation::Enclosed => Relation::Encloses,
      Relation::Encloses => Relation::Enclosed,
      other => other,
    }
  }
}

pub fn relate<T: GeometryScalar>(first: &Geometry<T>, second: &Geometry<T>) -> Relation {
  match (first.is_empty(), second.is_empty()) {
    (true, true) => return Relation::Equal,
    (true, false) | (false, true) => return Relation::Disjoint,
    (false, false) => {}
  }
  match (first.linear_segments(), second.linear_segments()) {
    (Some(first_segments), Some(second_segments)) => {
      relate_linear_linear(first_segments, second_segments)
    }
    (Some(first_segments), None) => {
      let second_polygons = second.shaped_polygons().expect("shaped operand");
      relate_linear_shaped(first_segments, &second_polygons)
    }
    (None, Some(second_segments)) => {
      let first_polygons = first.shaped_polygons().expect("shaped operand");
      relate_linear_shaped(second_segments, &first_polygons).complement()
    }
    (None, None) => {
      let first_polygons = first.shaped_polygons().expect("shaped operand");
      let second_polygons = second.shaped_polygons().expect("shaped operand");
      relate_shaped_shaped(&first_polygons, &second_polygons)
    }
  }
}

struct SweepSummary<T> {
  sweep: ShapedSweep<T>,
  first_left_events: Vec<Event>,
  second_left_events: Vec<Event>,
  overlap_kinds: Vec<OverlapKind>,
}

impl<T: GeometryScalar> SweepSummary<T> {
  fn run(first: Vec<(Segment<T>, bool)>, second: Vec<(Segment<T>, bool)>) -> SweepSummary<T> {
    let mut sweep = ShapedSweep::new(first, second);
    let mut first_left_events = Vec::new();
    let mut second_left_events = Vec::new();
    while let Some(event) = sweep.step() {
      if event.is_left() {
        if sweep.core().is_from_first_operand(event) {
          first_left_events.push(event);
        } else {
          second_left_events.push(event);
        }
      }
    }
    let (overlap_kinds, _) = sweep.overlap_kinds();
    SweepSummary {
      sweep,
      first_left_events,
      second_left_events,
      overlap_kinds,
    }
  }

  fn piece(&self, event: Event) -> (Point<T>, Point<T>) {
    (
      self.sweep.core().event_start(event).clone(),
      self.sweep.core().event_end(event).clone(),
    )
  }

  fn pieces(&self, events: &[Event]) -> BTreeSet<(Point<T>, Point<T>)> {
    events.iter().map(|&event| self.piece(event)).collect()
  }

  /// Do the operands share any point? After splitting, any contact
  /// point is a piece endpoint on both sides.
  fn operands_share_points(&self) -> bool {
    let first_points: BTreeSet<&Point<T>> = self
      .first_left_events
      .iter()
      .flat_map(|&event| {
        vec![
          self.sweep.core().event_start(event),
          self.sweep.core().event_end(event),
        ]
      })
      .collect();
    self.second_left_events.iter().any(|&event| {
      first_points.contains(self.sweep.core().event_start(event))
        || first_points.contains(self.sweep.core().event_end(event))
    })
  }
}

fn relate_linear_linear<T: GeometryScalar>(
  first: Vec<Segment<T>>,
  second: Vec<Segment<T>>,
) -> Relation {
  let flag = |segments: Vec<Segment<T>>| segments.into_iter().map(|s| (s, false)).collect();
  let summary = SweepSummary::run(flag(first), flag(second));
  let first_pieces = summary.pieces(&summary.first_left_events);
  let second_pieces = summary.pieces(&summary.second_left_events);
  let has_common = !first_pieces.is_disjoint(&second_pieces);
  if has_common {
    let first_in_second = first_pieces.is_subset(&second_pieces);
    let second_in_first = second_pieces.is_subset(&first_pieces);
    return match (first_in_second, second_in_first) {
      (true, true) => Relation::Equal,
      (true, false) => Relation::Component,
      (false, true) => Relation::Composite,
      (false, false) => Relation::Overlap,
    };
  }
  // No one-dimensional intersection; classify point contacts by the
  // angular interleaving of the incident piece directions.
  let mut incidences: BTreeMap<Point<T>, Vec<([T; 2], bool)>> = BTreeMap::new();
  let mut note = |start: &Point<T>, end: &Point<T>, from_first: bool| {
    let direction = [
      end.x().clone() - start.x().clone(),
      end.y().clone() - start.y().clone(),
    ];
    incidences
      .entry(start.clone())
      .or_insert_with(Vec::new)
      .push((direction, from_first));
  };
  for (start, end) in &first_pieces {
    note(start, end, true);
    note(end, start, true);
  }
  for (start, end) in &second_pieces {
    note(start, end, false);
    note(end, start, false);
  }
  let mut any_contact = false;
  for directions in incidences.values() {
    let first_count = directions.iter().filter(|(_, from_first)| *from_first).count();
    if first_count == 0 || first_count == directions.len() {
      continue;
    }
    any_contact = true;
    if directions_interleave(directions) {
      return Relation::Cross;
    }
  }
  if any_contact {
    Relation::Touch
  } else {
    Relation::Disjoint
  }
}

// The curves cross at a point exactly when, walking around it, pieces of
// the two operands alternate more than once.
fn directions_interleave<T: GeometryScalar>(directions: &[([T; 2], bool)]) -> bool {
  let mut sorted: Vec<&([T; 2], bool)> = directions.iter().collect();
  sorted.sort_by(|a, b| {
    ccw_cmp_around_origin(&a.0, &b.0).then_with(|| a.1.cmp(&b.1).reverse())
  });
  let transitions = sorted
    .iter()
    .zip(sorted.iter().cycle().skip(1))
    .filter(|(a, b)| a.1 != b.1)
    .count();
  transitions >= 4
}

fn relate_shaped_shaped<T: GeometryScalar>(
  first: &[&Polygon<T>],
  second: &[&Polygon<T>],
) -> Relation {
  let summary = SweepSummary::run(flagged_segments(first), flagged_segments(second));
  let mut first_inside = false;
  let mut first_outside = false;
  let mut second_inside = false;
  let mut second_outside = false;
  let mut common_same = false;
  let mut common_opposite = false;
  for (&event, from_first) in summary
    .first_left_events
    .iter()
    .map(|event| (event, true))
    .chain(summary.second_left_events.iter().map(|event| (event, false)))
  {
    match summary.overlap_kinds[event.position()] {
      OverlapKind::SameOrientation => common_same = true,
      OverlapKind::DifferentOrientation => common_opposite = true,
      OverlapKind::None => {
        let inside = summary.sweep.other_interior_to_left(event);
        match (from_first, inside) {
          (true, true) => first_inside = true,
          (true, false) => first_outside = true,
          (false, true) => second_inside = true,
          (false, false) => second_outside = true,
        }
      }
    }
  }
  let contact = common_same || common_opposite || summary.operands_share_points();
  if !contact {
    let first_all_in = first_inside && !first_outside;
    let second_all_in = second_inside && !second_outside;
    return if first_all_in && !second_inside {
      Relation::Within
    } else if second_all_in && !first_inside {
      Relation::Cover
    } else if first_inside || second_inside {
      Relation::Overlap
    } else {
      Relation::Disjoint
    };
  }
  let interiors_meet = first_inside || second_inside || common_same;
  if !interiors_meet {
    return Relation::Touch;
  }
  if !first_outside && !second_outside && !first_inside && !second_inside {
    return if common_opposite {
      Relation::Overlap
    } else {
      Relation::Equal
    };
  }
  if !first_outside {
    return if first_inside {
      Relation::Enclosed
    } else {
      Relation::Component
    };
  }
  if !second_outside {
    return if second_inside {
      Relation::Encloses
    } else {
      Relation::Composite
    };
  }
  Relation::Overlap
}

fn relate_linear_shaped<T: GeometryScalar>(
  segments: Vec<Segment<T>>,
  polygons: &[&Polygon<T>],
) -> Relation {
  let flagged = segments.into_iter().map(|s| (s, false)).collect();
  let summary = SweepSummary::run(flagged, flagged_segments(polygons));
  let mut inside = false;
  let mut outside = false;
  let mut on_boundary = false;
  for &event in &summary.first_left_events {
    if summary.overlap_kinds[event.position()] != OverlapKind::None {
      on_boundary = true;
    } else if summary.sweep.other_interior_to_left(event) {
      inside = true;
    } else {
      outside = true;
    }
  }
  let contact = on_boundary || summary.operands_share_points();
  if on_boundary {
    return match (inside, outside) {
      (false, false) => Relation::Component,
      (true, false) => Relation::Enclosed,
      (false, true) => Relation::Touch,
      (true, true) => Relation::Cross,
    };
  }
  if inside && outside {
    return Relation::Cross;
  }
  if inside {
    return if contact {
      Relation::Enclosed
    } else {
      Relation::Within
    };
  }
  if contact {
    Relation::Touch
  } else {
    Relation::Disjoint
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn complement_involution() {
    let relations = [
      Relation::Disjoint,
      Relation::Touch,
      Relation::Cross,
      Relation::Overlap,
      Relation::Cover,
      Relation::Encloses,
      Relation::Composite,
      Relation::Equal,
      Relation::Component,
      Relation::Enclosed,
      Relation::Within,
    ];
    for relation in relations {
      assert_eq!(relation.complement().complement(), relation);
    }
    assert_eq!(Relation::Cover.complement(), Relation::Within);
    assert_eq!(Relation::Composite.complement(), Relation::Component);
    assert_eq!(Relation::Encloses.complement(), Relation::Enclosed);
    assert_eq!(Relation::Touch.complement(), Relation::Touch);
  }

  #[test]
  fn discriminants() {
    assert_eq!(Relation::Disjoint as u8, 0);
    assert_eq!(Relation::Equal as u8, 7);
    assert_eq!(Relation::Within as u8, 10);
  }
}
