use std::cmp::Ordering;

use super::event::Event;
use crate::data::Point;
use crate::orientation::{orient, Orientation};
use crate::GeometryScalar;

/// Priority-queue key of an event.
///
/// The key snapshots both endpoints at push time. A later division only
/// replaces an event's opposite endpoint with a collinear interior point
/// of the same piece, which leaves every comparison below unchanged, so
/// snapshots order exactly like live lookups would.
pub(crate) struct EventsQueueKey<T> {
  pub(crate) event: Event,
  is_from_first_operand: bool,
  start: Point<T>,
  end: Point<T>,
}

impl<T: GeometryScalar> EventsQueueKey<T> {
  pub(crate) fn new(
    event: Event,
    is_from_first_operand: bool,
    start: Point<T>,
    end: Point<T>,
  ) -> EventsQueueKey<T> {
    EventsQueueKey {
      event,
      is_from_first_operand,
      start,
      end,
    }
  }
}

impl<T: GeometryScalar> Ord for EventsQueueKey<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    match self.start.cmp(&other.start) {
      // Lexicographic on the event point: lower x first, then lower y.
      Ordering::Equal => {}
      unequal => return unequal,
    }
    if self.event.is_left() != other.event.is_left() {
      // Same point, opposite kinds: the right endpoint goes first.
      return if self.event.is_right() {
        Ordering::Less
      } else {
        Ordering::Greater
      };
    }
    match orient(&self.start, &self.end, &other.end) {
      Orientation::Collinear => {
        if self.is_from_first_operand != other.is_from_first_operand {
          // Coincident pieces of different operands: the first operand
          // is processed after the second.
          if other.is_from_first_operand {
            Ordering::Less
          } else {
            Ordering::Greater
          }
        } else {
          self.event.0.cmp(&other.event.0)
        }
      }
      turn => {
        let lower_goes_first = if self.event.is_left() {
          Orientation::Counterclockwise
        } else {
          Orientation::Clockwise
        };
        if turn == lower_goes_first {
          Ordering::Less
        } else {
          Ordering::Greater
        }
      }
    }
  }
}

impl<T: GeometryScalar> PartialOrd for EventsQueueKey<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: GeometryScalar> PartialEq for EventsQueueKey<T> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<T: GeometryScalar> Eq for EventsQueueKey<T> {}
