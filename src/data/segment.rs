use super::point::{to_sorted_pair, Point};
use crate::{Error, GeometryScalar};

/// A line segment between two distinct points. The endpoints keep the
/// order they were given in; equality treats them as an unordered pair.
#[derive(Debug, Clone)]
pub struct Segment<T> {
  start: Point<T>,
  end: Point<T>,
}

impl<T: GeometryScalar> PartialEq for Segment<T> {
  fn eq(&self, other: &Self) -> bool {
    (self.start == other.start && self.end == other.end)
      || (self.start == other.end && self.end == other.start)
  }
}

impl<T: GeometryScalar> Eq for Segment<T> {}

impl<T: GeometryScalar> Segment<T> {
  pub fn try_new(start: Point<T>, end: Point<T>) -> Result<Segment<T>, Error> {
    if start == end {
      return Err(Error::ZeroLengthSegment);
    }
    Ok(Segment { start, end })
  }

  pub(crate) fn new_unchecked(start: Point<T>, end: Point<T>) -> Segment<T> {
    debug_assert!(start != end);
    Segment { start, end }
  }

  pub fn start(&self) -> &Point<T> {
    &self.start
  }

  pub fn end(&self) -> &Point<T> {
    &self.end
  }

  /// Endpoints in lexicographic order.
  pub fn sorted(&self) -> (Point<T>, Point<T>) {
    to_sorted_pair(self.start.clone(), self.end.clone())
  }
}
