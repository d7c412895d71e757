use super::segment::Segment;
use crate::{Error, GeometryScalar, MIN_MULTISEGMENT_SEGMENTS_COUNT};

/// A collection of segments treated as one linear geometry; equality
/// compares the segments as a set.
#[derive(Debug, Clone)]
pub struct Multisegment<T> {
  segments: Vec<Segment<T>>,
}

impl<T: GeometryScalar> PartialEq for Multisegment<T> {
  fn eq(&self, other: &Self) -> bool {
    let keys = |segments: &[Segment<T>]| {
      let mut keys: Vec<_> = segments.iter().map(Segment::sorted).collect();
      keys.sort();
      keys
    };
    keys(&self.segments) == keys(&other.segments)
  }
}

impl<T: GeometryScalar> Eq for Multisegment<T> {}

impl<T: GeometryScalar> Multisegment<T> {
  pub fn try_new(segments: Vec<Segment<T>>) -> Result<Multisegment<T>, Error> {
    if segments.len() < MIN_MULTISEGMENT_SEGMENTS_COUNT {
      return Err(Error::InsufficientSegments);
    }
    Ok(Multisegment { segments })
  }

  pub(crate) fn new_unchecked(segments: Vec<Segment<T>>) -> Multisegment<T> {
    debug_assert!(segments.len() >= MIN_MULTISEGMENT_SEGMENTS_COUNT);
    Multisegment { segments }
  }

  pub fn segments(&self) -> &[Segment<T>] {
    &self.segments
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;

  #[test]
  fn segment_count() {
    let only = Segment::try_new(Point::new(0i64, 0), Point::new(1, 1)).unwrap();
    claims::assert_err_eq!(
      Multisegment::try_new(vec![only]),
      Error::InsufficientSegments
    );
  }

  #[test]
  fn set_equality() {
    let a = Segment::try_new(Point::new(0i64, 0), Point::new(1, 1)).unwrap();
    let b = Segment::try_new(Point::new(2i64, 2), Point::new(3, 3)).unwrap();
    let forward = Multisegment::try_new(vec![a.clone(), b.clone()]).unwrap();
    let backward = Multisegment::try_new(vec![b, a]).unwrap();
    assert_eq!(forward, backward);
  }
}
