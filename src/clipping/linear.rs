use std::collections::BTreeSet;

use super::OperationKind;
use crate::data::{Multisegmental, Point, Segment};
use crate::sweep::{Event, SweepCore};
use crate::GeometryScalar;

/// Boolean operation with segment-valued output.
///
/// Drive it as an iterator (or manually via `step` for early cutoff) and
/// hand the collected events to `reduce_events`.
pub struct LinearOperation<T> {
  core: SweepCore<T>,
  kind: OperationKind,
}

impl<T: GeometryScalar> LinearOperation<T> {
  pub fn from_segments_iterables<I, J>(first: I, second: J, kind: OperationKind) -> Self
  where
    I: IntoIterator<Item = Segment<T>>,
    J: IntoIterator<Item = Segment<T>>,
  {
    let first: Vec<_> = first.into_iter().collect();
    let second: Vec<_> = second.into_iter().collect();
    LinearOperation {
      core: SweepCore::from_segments(&first, &second),
      kind,
    }
  }

  pub fn from_multisegmentals<A, B>(first: &A, second: &B, kind: OperationKind) -> Self
  where
    A: Multisegmental<T>,
    B: Multisegmental<T>,
  {
    Self::from_segments_iterables(first.to_segments(), second.to_segments(), kind)
  }

  pub fn from_multisegmentals_sequences<A, B>(first: &[A], second: &[B], kind: OperationKind) -> Self
  where
    A: Multisegmental<T>,
    B: Multisegmental<T>,
  {
    Self::from_segments_iterables(
      first.iter().flat_map(Multisegmental::to_segments),
      second.iter().flat_map(Multisegmental::to_segments),
      kind,
    )
  }

  pub fn step(&mut self) -> Option<Event> {
    self.core.step()
  }

  pub fn event_start(&self, event: Event) -> &Point<T> {
    self.core.event_start(event)
  }

  pub fn event_end(&self, event: Event) -> &Point<T> {
    self.core.event_end(event)
  }

  /// Folds the processed events into result segments. Pieces are exact
  /// set elements after splitting, so the operations reduce to set
  /// algebra over them; coincident pieces are kept once.
  pub fn reduce_events(&self, events: &[Event]) -> Vec<Segment<T>> {
    let mut first_pieces: BTreeSet<(Point<T>, Point<T>)> = BTreeSet::new();
    let mut second_pieces: BTreeSet<(Point<T>, Point<T>)> = BTreeSet::new();
    for &event in events {
      if !event.is_left() {
        continue;
      }
      let piece = (
        self.core.event_start(event).clone(),
        self.core.event_end(event).clone(),
      );
      if self.core.is_from_first_operand(event) {
        first_pieces.insert(piece);
      } else {
        second_pieces.insert(piece);
      }
    }
    let selected: Vec<_> = match self.kind {
      OperationKind::Union => first_pieces.union(&second_pieces).cloned().collect(),
      OperationKind::Intersection => first_pieces.intersection(&second_pieces).cloned().collect(),
      OperationKind::Difference => first_pieces.difference(&second_pieces).cloned().collect(),
      OperationKind::SymmetricDifference => first_pieces
        .symmetric_difference(&second_pieces)
        .cloned()
        .collect(),
    };
    selected
      .into_iter()
      .map(|(start, end)| Segment::new_unchecked(start, end))
      .collect()
  }
}

impl<T: GeometryScalar> Iterator for LinearOperation<T> {
  type Item = Event;

  fn next(&mut self) -> Option<Event> {
    self.step()
  }
}
