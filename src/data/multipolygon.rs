use super::bbox::Bbox;
use super::point::Point;
use super::polygon::{sorted_hole_keys, Polygon};
use crate::{Error, GeometryScalar, MIN_MULTIPOLYGON_POLYGONS_COUNT};

/// A region made of several polygons with disjoint interiors; equality
/// compares the polygons as a set.
#[derive(Debug, Clone)]
pub struct Multipolygon<T> {
  polygons: Vec<Polygon<T>>,
}

type PolygonKey<T> = (Vec<Point<T>>, Vec<Vec<Point<T>>>);

impl<T: GeometryScalar> PartialEq for Multipolygon<T> {
  fn eq(&self, other: &Self) -> bool {
    let keys = |polygons: &[Polygon<T>]| -> Vec<PolygonKey<T>> {
      let mut keys: Vec<_> = polygons
        .iter()
        .map(|polygon| {
          (
            polygon.border().canonical_vertices(),
            sorted_hole_keys(polygon.holes()),
          )
        })
        .collect();
      keys.sort();
      keys
    };
    keys(&self.polygons) == keys(&other.polygons)
  }
}

impl<T: GeometryScalar> Eq for Multipolygon<T> {}

impl<T: GeometryScalar> Multipolygon<T> {
  pub fn try_new(polygons: Vec<Polygon<T>>) -> Result<Multipolygon<T>, Error> {
    if polygons.len() < MIN_MULTIPOLYGON_POLYGONS_COUNT {
      return Err(Error::InsufficientPolygons);
    }
    Ok(Multipolygon { polygons })
  }

  pub(crate) fn new_unchecked(polygons: Vec<Polygon<T>>) -> Multipolygon<T> {
    debug_assert!(polygons.len() >= MIN_MULTIPOLYGON_POLYGONS_COUNT);
    Multipolygon { polygons }
  }

  pub fn polygons(&self) -> &[Polygon<T>] {
    &self.polygons
  }

  pub fn bbox(&self) -> Bbox<T> {
    let mut boxes = self.polygons.iter().map(Polygon::bbox);
    let first = boxes.next().expect("multipolygon without polygons");
    boxes.fold(first, |merged, next| merged.merge(&next))
  }
}
