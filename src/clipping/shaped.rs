use super::{reduce, OperationKind};
use crate::data::{Contour, Point, Polygon, Segment};
use crate::orientation::Orientation;
use crate::sweep::{Event, SweepCore};
use crate::GeometryScalar;

/// How a coincident pair of boundary pieces relates the two interiors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlapKind {
  None,
  /// Both interiors on the same side: the piece bounds the union and the
  /// intersection alike.
  SameOrientation,
  /// Interiors back to back: the piece is interior to the union and
  /// bounds the difference.
  DifferentOrientation,
}

/// Sweep over operands whose segments carry an interior side, feeding the
/// labels that region operations and relation queries read.
pub(crate) struct ShapedSweep<T> {
  core: SweepCore<T>,
  /// Per segment id: does the owner's interior lie to the left (above)
  /// of the lexicographically sorted segment? Always false for linear
  /// operands.
  have_interior_to_left: Vec<bool>,
  /// Per piece: does the *other* operand's interior cover the strip just
  /// above this piece? Computed from the neighbour below at insertion.
  other_interior_to_left: Vec<bool>,
}

impl<T: GeometryScalar> ShapedSweep<T> {
  pub(crate) fn new(
    first: Vec<(Segment<T>, bool)>,
    second: Vec<(Segment<T>, bool)>,
  ) -> ShapedSweep<T> {
    let mut have_interior_to_left = Vec::with_capacity(first.len() + second.len());
    let mut first_segments = Vec::with_capacity(first.len());
    let mut second_segments = Vec::with_capacity(second.len());
    for (segment, interior_to_left) in first {
      first_segments.push(segment);
      have_interior_to_left.push(interior_to_left);
    }
    for (segment, interior_to_left) in second {
      second_segments.push(segment);
      have_interior_to_left.push(interior_to_left);
    }
    ShapedSweep {
      core: SweepCore::from_segments(&first_segments, &second_segments),
      have_interior_to_left,
      other_interior_to_left: Vec::new(),
    }
  }

  pub(crate) fn step(&mut self) -> Option<Event> {
    let event = self.core.step()?;
    if event.is_left() {
      self.apply_fields(event);
    }
    Some(event)
  }

  pub(crate) fn core(&self) -> &SweepCore<T> {
    &self.core
  }

  pub(crate) fn own_interior_to_left(&self, event: Event) -> bool {
    self.have_interior_to_left[self.core.segment_id(event)]
  }

  pub(crate) fn other_interior_to_left(&self, event: Event) -> bool {
    self.other_interior_to_left[event.position()]
  }

  // The neighbour below decides coverage by the other operand: a
  // same-operand neighbour passes its answer through, an other-operand
  // neighbour contributes its own interior side, and an empty gap below
  // means the outside of everything.
  fn apply_fields(&mut self, event: Event) {
    let position = event.position();
    if position >= self.other_interior_to_left.len() {
      self.other_interior_to_left.resize(position + 1, false);
    }
    let value = match self.core.line_search(event) {
      Ok(index) => {
        let entry = self.core.line_entry(index).expect("found line entry");
        if entry == event {
          match index.checked_sub(1).and_then(|below| self.core.line_entry(below)) {
            None => false,
            Some(below_event) => {
              if self.core.is_from_first_operand(below_event)
                == self.core.is_from_first_operand(event)
              {
                self.other_interior_to_left[below_event.position()]
              } else {
                self.have_interior_to_left[self.core.segment_id(below_event)]
              }
            }
          }
        } else {
          // Duplicate piece skipped by the sweep: share the twin's view.
          self.other_interior_to_left[entry.position()]
        }
      }
      Err(_) => false,
    };
    self.other_interior_to_left[position] = value;
  }

  /// Resolves the coincidence log into per-piece overlap kinds; exactly
  /// one event of each cross-operand pair stays contributing.
  pub(crate) fn overlap_kinds(&self) -> (Vec<OverlapKind>, Vec<bool>) {
    let positions = self.core.positions_count();
    let mut kinds = vec![OverlapKind::None; positions];
    let mut shadowed = vec![false; positions];
    for &(below_event, event) in self.core.coincidences() {
      if self.core.is_from_first_operand(below_event) == self.core.is_from_first_operand(event) {
        continue;
      }
      let kind = if self.own_interior_to_left(below_event) == self.own_interior_to_left(event) {
        OverlapKind::SameOrientation
      } else {
        OverlapKind::DifferentOrientation
      };
      kinds[below_event.position()] = kind;
      kinds[event.position()] = kind;
      shadowed[below_event.position()] = true;
    }
    (kinds, shadowed)
  }
}

/// Boolean operation with region-valued output.
pub struct ShapedOperation<T> {
  sweep: ShapedSweep<T>,
  kind: OperationKind,
}

impl<T: GeometryScalar> ShapedOperation<T> {
  pub fn from_multisegmentals(
    first: &Polygon<T>,
    second: &Polygon<T>,
    kind: OperationKind,
  ) -> Self {
    Self::from_multisegmentals_sequences(&[first], &[second], kind)
  }

  pub fn from_multisegmentals_sequences(
    first: &[&Polygon<T>],
    second: &[&Polygon<T>],
    kind: OperationKind,
  ) -> Self {
    ShapedOperation {
      sweep: ShapedSweep::new(flagged_segments(first), flagged_segments(second)),
      kind,
    }
  }

  pub fn step(&mut self) -> Option<Event> {
    self.sweep.step()
  }

  pub fn event_start(&self, event: Event) -> &Point<T> {
    self.sweep.core().event_start(event)
  }

  pub fn event_end(&self, event: Event) -> &Point<T> {
    self.sweep.core().event_end(event)
  }

  /// Selects the boundary pieces of the result and threads them into
  /// polygons with holes.
  pub fn reduce_events(&self, events: &[Event]) -> Vec<Polygon<T>> {
    let (kinds, shadowed) = self.sweep.overlap_kinds();
    let mut boundary = Vec::new();
    for &event in events {
      if !event.is_left() {
        continue;
      }
      if !self.is_event_in_result(&kinds, &shadowed, event) {
        continue;
      }
      let start = self.sweep.core().event_start(event).clone();
      let end = self.sweep.core().event_end(event).clone();
      if self.result_interior_to_left(&kinds, event) {
        boundary.push((start, end));
      } else {
        boundary.push((end, start));
      }
    }
    reduce::boundary_to_polygons(boundary)
  }

  fn is_event_in_result(&self, kinds: &[OverlapKind], shadowed: &[bool], event: Event) -> bool {
    let position = event.position();
    match kinds[position] {
      OverlapKind::None => {
        let inside = self.sweep.other_interior_to_left(event);
        match self.kind {
          OperationKind::Union => !inside,
          OperationKind::Intersection => inside,
          OperationKind::Difference => {
            if self.sweep.core().is_from_first_operand(event) {
              !inside
            } else {
              inside
            }
          }
          OperationKind::SymmetricDifference => true,
        }
      }
      OverlapKind::SameOrientation => {
        !shadowed[position]
          && matches!(
            self.kind,
            OperationKind::Union | OperationKind::Intersection
          )
      }
      OverlapKind::DifferentOrientation => {
        !shadowed[position] && self.kind == OperationKind::Difference
      }
    }
  }

  fn result_interior_to_left(&self, kinds: &[OverlapKind], event: Event) -> bool {
    let own = self.sweep.own_interior_to_left(event);
    let from_first = self.sweep.core().is_from_first_operand(event);
    match kinds[event.position()] {
      OverlapKind::None => match self.kind {
        OperationKind::Union | OperationKind::Intersection => own,
        // Pieces of the subtrahend inside the minuend bound the result
        // from the other side.
        OperationKind::Difference => {
          if from_first {
            own
          } else {
            !own
          }
        }
        OperationKind::SymmetricDifference => {
          if self.sweep.other_interior_to_left(event) {
            !own
          } else {
            own
          }
        }
      },
      OverlapKind::SameOrientation => own,
      OverlapKind::DifferentOrientation => {
        if from_first {
          own
        } else {
          !own
        }
      }
    }
  }
}

impl<T: GeometryScalar> Iterator for ShapedOperation<T> {
  type Item = Event;

  fn next(&mut self) -> Option<Event> {
    self.step()
  }
}

/// Edges of the polygons with their interior side, after canonicalising
/// borders counterclockwise and holes clockwise so that the interior is
/// always to the left of traversal.
pub(crate) fn flagged_segments<T: GeometryScalar>(
  polygons: &[&Polygon<T>],
) -> Vec<(Segment<T>, bool)> {
  let mut result = Vec::new();
  for polygon in polygons {
    append_ring(&mut result, polygon.border(), Orientation::Counterclockwise);
    for hole in polygon.holes() {
      append_ring(&mut result, hole, Orientation::Clockwise);
    }
  }
  result
}

fn append_ring<T: GeometryScalar>(
  out: &mut Vec<(Segment<T>, bool)>,
  contour: &Contour<T>,
  target: Orientation,
) {
  let canonical;
  let ring = if contour.orientation() == target {
    contour
  } else {
    canonical = contour.reversed();
    &canonical
  };
  let vertices = ring.vertices();
  for index in 0..vertices.len() {
    let from = &vertices[index];
    let to = &vertices[(index + 1) % vertices.len()];
    // Interior sits left of traversal; it is left of the sorted
    // direction exactly when traversal already goes lexicographically
    // forward.
    out.push((
      Segment::new_unchecked(from.clone(), to.clone()),
      from < to,
    ));
  }
}
