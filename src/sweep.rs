//! Segment-splitting sweep over two operands.
//!
//! The sweep advances a conceptual vertical line left to right over the
//! endpoints of both operands' segments. Active segments live in a
//! vertically ordered status structure; whenever two neighbours meet, the
//! pieces are divided at the meeting point and re-enqueued, so every
//! event the sweep yields describes a piece that intersects other pieces
//! at shared endpoints only. Consumers (Boolean operations, relation
//! queries, validity checks) interpret the resulting piece stream.
mod event;
mod queue_key;

pub use event::Event;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::data::{Point, Segment};
use crate::intersection::segments_intersection_point;
use crate::orientation::{orient, Orientation};
use crate::GeometryScalar;

pub(crate) struct SweepCore<T> {
  endpoints: Vec<Point<T>>,
  opposites: Vec<Event>,
  segments_ids: Vec<usize>,
  first_segments_count: usize,
  queue: BinaryHeap<Reverse<queue_key::EventsQueueKey<T>>>,
  line: Vec<Event>,
  coincidences: Vec<(Event, Event)>,
}

impl<T: GeometryScalar> SweepCore<T> {
  pub(crate) fn from_segments(first: &[Segment<T>], second: &[Segment<T>]) -> SweepCore<T> {
    let first_segments_count = first.len();
    let segments_count = first_segments_count + second.len();
    let mut endpoints = Vec::with_capacity(2 * segments_count);
    for segment in first.iter().chain(second.iter()) {
      let (start, end) = segment.sorted();
      endpoints.push(start);
      endpoints.push(end);
    }
    let opposites = (0..2 * segments_count).map(|index| Event(index ^ 1)).collect();
    let segments_ids = (0..segments_count).collect();
    let mut core = SweepCore {
      endpoints,
      opposites,
      segments_ids,
      first_segments_count,
      queue: BinaryHeap::with_capacity(2 * segments_count),
      line: Vec::new(),
      coincidences: Vec::new(),
    };
    for index in 0..core.endpoints.len() {
      core.push(Event(index));
    }
    core
  }

  pub(crate) fn event_start(&self, event: Event) -> &Point<T> {
    &self.endpoints[event.0]
  }

  pub(crate) fn event_end(&self, event: Event) -> &Point<T> {
    self.event_start(self.opposite(event))
  }

  pub(crate) fn opposite(&self, event: Event) -> Event {
    self.opposites[event.0]
  }

  pub(crate) fn left_event(&self, event: Event) -> Event {
    if event.is_left() {
      event
    } else {
      self.opposite(event)
    }
  }

  pub(crate) fn segment_id(&self, event: Event) -> usize {
    self.segments_ids[self.left_event(event).position()]
  }

  pub(crate) fn is_from_first_operand(&self, event: Event) -> bool {
    self.segment_id(event) < self.first_segments_count
  }

  pub(crate) fn endpoints_count(&self) -> usize {
    self.endpoints.len()
  }

  pub(crate) fn positions_count(&self) -> usize {
    self.endpoints.len() >> 1
  }

  /// Pairs of left events whose pieces turned out to coincide; recorded
  /// as (lower, upper) in status order.
  pub(crate) fn coincidences(&self) -> &[(Event, Event)] {
    &self.coincidences
  }

  pub(crate) fn line_search(&self, event: Event) -> Result<usize, usize> {
    self
      .line
      .binary_search_by(|&entry| self.sweep_line_cmp(entry, event))
  }

  pub(crate) fn line_entry(&self, index: usize) -> Option<Event> {
    self.line.get(index).copied()
  }

  /// Processes one event; `None` once the queue is drained. Callers that
  /// clip to a window stop early by checking the yielded event's start.
  pub(crate) fn step(&mut self) -> Option<Event> {
    let event = self.pop()?;
    if event.is_right() {
      let opposite_event = self.opposite(event);
      debug_assert!(opposite_event.is_left());
      if let Ok(index) = self.line_search(opposite_event) {
        self.line.remove(index);
        if 0 < index && index < self.line.len() {
          let below_event = self.line[index - 1];
          let above_event = self.line[index];
          self.detect_intersection(below_event, above_event);
        }
      }
    } else {
      match self.line_search(event) {
        // An exact duplicate piece is already live; skip this one.
        Ok(_) => {}
        Err(index) => {
          self.line.insert(index, event);
          if index + 1 < self.line.len() {
            let above_event = self.line[index + 1];
            self.detect_intersection(event, above_event);
          }
          if index > 0 {
            let below_event = self.line[index - 1];
            self.detect_intersection(below_event, event);
          }
        }
      }
    }
    Some(event)
  }

  fn push(&mut self, event: Event) {
    let key = queue_key::EventsQueueKey::new(
      event,
      self.is_from_first_operand(event),
      self.event_start(event).clone(),
      self.event_end(event).clone(),
    );
    self.queue.push(Reverse(key));
  }

  fn pop(&mut self) -> Option<Event> {
    self.queue.pop().map(|Reverse(key)| key.event)
  }

  /// Is the piece of `a` below the piece of `b` on the sweep line?
  fn sweep_line_less(&self, a: Event, b: Event) -> bool {
    let start = self.event_start(a);
    let end = self.event_end(a);
    let other_start = self.event_start(b);
    let other_end = self.event_end(b);
    let other_start_orientation = orient(start, end, other_start);
    let other_end_orientation = orient(start, end, other_end);
    if other_start_orientation == other_end_orientation {
      if other_start_orientation != Orientation::Collinear {
        // The other piece lies wholly on one side.
        return other_start_orientation == Orientation::Counterclockwise;
      }
      let self_first = self.is_from_first_operand(a);
      let other_first = self.is_from_first_operand(b);
      if self_first != other_first {
        return self_first;
      }
      if start.y() != other_start.y() {
        return start.y() < other_start.y();
      }
      if start.x() != other_start.x() {
        return start.x() < other_start.x();
      }
      if end.y() != other_end.y() {
        return end.y() < other_end.y();
      }
      return end.x() < other_end.x();
    }
    let start_orientation = orient(other_start, other_end, start);
    let end_orientation = orient(other_start, other_end, end);
    if start_orientation == end_orientation {
      return start_orientation == Orientation::Clockwise;
    }
    if other_start_orientation == Orientation::Collinear {
      return other_end_orientation == Orientation::Counterclockwise;
    }
    if start_orientation == Orientation::Collinear {
      return end_orientation == Orientation::Clockwise;
    }
    if end_orientation == Orientation::Collinear {
      return start_orientation == Orientation::Clockwise;
    }
    other_start_orientation == Orientation::Counterclockwise
  }

  fn sweep_line_cmp(&self, a: Event, b: Event) -> Ordering {
    if a == b {
      Ordering::Equal
    } else if self.sweep_line_less(a, b) {
      Ordering::Less
    } else if self.sweep_line_less(b, a) {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  }

  fn detect_intersection(&mut self, below_event: Event, event: Event) {
    let event_start = self.event_start(event).clone();
    let event_end = self.event_end(event).clone();
    let below_start = self.event_start(below_event).clone();
    let below_end = self.event_end(below_event).clone();
    let event_start_orientation = orient(&below_end, &below_start, &event_start);
    let event_end_orientation = orient(&below_end, &below_start, &event_end);
    if event_start_orientation != Orientation::Collinear
      && event_end_orientation != Orientation::Collinear
    {
      if event_start_orientation != event_end_orientation {
        let below_start_orientation = orient(&event_start, &event_end, &below_start);
        let below_end_orientation = orient(&event_start, &event_end, &below_end);
        if below_start_orientation != Orientation::Collinear
          && below_end_orientation != Orientation::Collinear
        {
          if below_start_orientation != below_end_orientation {
            let point =
              segments_intersection_point(&event_start, &event_end, &below_start, &below_end);
            debug_assert!(event_start < point && point < event_end);
            debug_assert!(below_start < point && point < below_end);
            self.divide_event_by_midpoint(below_event, point.clone());
            self.divide_event_by_midpoint(event, point);
          }
        } else if below_start_orientation != Orientation::Collinear {
          // The below piece ends on this piece's line.
          if event_start < below_end && below_end < event_end {
            self.divide_event_by_midpoint(event, below_end);
          }
        } else if event_start < below_start && below_start < event_end {
          self.divide_event_by_midpoint(event, below_start);
        }
      }
    } else if event_end_orientation != Orientation::Collinear {
      if below_start < event_start && event_start < below_end {
        self.divide_event_by_midpoint(below_event, event_start);
      }
    } else if event_start_orientation != Orientation::Collinear {
      if below_start < event_end && event_end < below_end {
        self.divide_event_by_midpoint(below_event, event_end);
      }
    } else {
      // Pieces on one line sharing a span can only come one from each
      // operand; same-operand overlap is a caller precondition violation.
      debug_assert!(
        self.is_from_first_operand(event) != self.is_from_first_operand(below_event)
      );
      if event_start == below_start {
        if event_end != below_end {
          let (max_end_event, min_end_event) = if event_end < below_end {
            (below_event, event)
          } else {
            (event, below_event)
          };
          let min_end = self.event_end(min_end_event).clone();
          let (min_end_to_start_event, min_end_to_max_end_event) =
            self.divide(max_end_event, min_end);
          self.push(min_end_to_start_event);
          self.push(min_end_to_max_end_event);
        }
        // Both pieces now span the same points.
        self.coincidences.push((below_event, event));
      } else if event_end == below_end {
        let (max_start_event, min_start_event) = if event_start < below_start {
          (below_event, event)
        } else {
          (event, below_event)
        };
        let max_start = self.event_start(max_start_event).clone();
        let (max_start_to_min_start_event, max_start_to_end_event) =
          self.divide(min_start_event, max_start);
        self.push(max_start_to_min_start_event);
        self.push(max_start_to_end_event);
      } else if below_start < event_start && event_start < below_end {
        if event_end < below_end {
          self.divide_event_by_mid_segment_event_endpoints(below_event, event_start, event_end);
        } else {
          self.divide_overlapping_events(below_event, event, event_start, below_end);
        }
      } else if event_start < below_start && below_start < event_end {
        if below_end < event_end {
          self.divide_event_by_mid_segment_event_endpoints(event, below_start, below_end);
        } else {
          self.divide_overlapping_events(event, below_event, below_start, event_end);
        }
      }
    }
  }

  /// Splits the piece of `event` at `mid_point`, reusing `event` as the
  /// left endpoint of the lower half and its old opposite as the right
  /// endpoint of the upper half.
  fn divide(&mut self, event: Event, mid_point: Point<T>) -> (Event, Event) {
    debug_assert!(event.is_left());
    let opposite_event = self.opposite(event);
    let mid_to_event_end_event = Event(self.endpoints.len());
    self.segments_ids.push(self.segment_id(event));
    self.endpoints.push(mid_point.clone());
    self.opposites.push(opposite_event);
    self.opposites[opposite_event.0] = mid_to_event_end_event;
    let mid_to_event_start_event = Event(self.endpoints.len());
    self.endpoints.push(mid_point);
    self.opposites.push(event);
    self.opposites[event.0] = mid_to_event_start_event;
    debug_assert!(mid_to_event_end_event.is_left());
    debug_assert!(mid_to_event_start_event.is_right());
    (mid_to_event_start_event, mid_to_event_end_event)
  }

  fn divide_event_by_midpoint(&mut self, event: Event, point: Point<T>) {
    let (point_to_event_start_event, point_to_event_end_event) = self.divide(event, point);
    self.push(point_to_event_start_event);
    self.push(point_to_event_end_event);
  }

  fn divide_event_by_mid_segment_event_endpoints(
    &mut self,
    event: Event,
    mid_segment_start: Point<T>,
    mid_segment_end: Point<T>,
  ) {
    self.divide_event_by_midpoint(event, mid_segment_end);
    self.divide_event_by_midpoint(event, mid_segment_start);
  }

  fn divide_overlapping_events(
    &mut self,
    min_start_event: Event,
    max_start_event: Event,
    max_start: Point<T>,
    min_end: Point<T>,
  ) {
    self.divide_event_by_midpoint(max_start_event, min_end);
    self.divide_event_by_midpoint(min_start_event, max_start);
  }
}
