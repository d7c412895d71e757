use num_rational::BigRational;
use num_traits::{FromPrimitive, Zero};

use planimetry::clipping::{intersect, subtract, symmetric_subtract, unite};
use planimetry::{relate, Contour, Geometry, Point, Polygon, Relation, Segment};

type Scalar = BigRational;

fn scalar(value: i64) -> Scalar {
  BigRational::from_i64(value).unwrap()
}

fn point(x: i64, y: i64) -> Point<Scalar> {
  Point::new(scalar(x), scalar(y))
}

fn square(corner: (i64, i64), side: i64) -> Geometry<Scalar> {
  let (x, y) = corner;
  let contour = Contour::try_new(vec![
    point(x, y),
    point(x + side, y),
    point(x + side, y + side),
    point(x, y + side),
  ])
  .unwrap();
  Geometry::Polygon(Polygon::new(contour, vec![]))
}

fn segment(start: (i64, i64), end: (i64, i64)) -> Geometry<Scalar> {
  Geometry::Segment(
    Segment::try_new(point(start.0, start.1), point(end.0, end.1)).unwrap(),
  )
}

fn area_2x(geometry: &Geometry<Scalar>) -> Scalar {
  let polygon_area = |polygon: &Polygon<Scalar>| {
    polygon
      .holes()
      .iter()
      .fold(polygon.border().signed_area_2x(), |sum, hole| {
        sum + hole.signed_area_2x()
      })
  };
  match geometry {
    Geometry::Empty => Scalar::zero(),
    Geometry::Polygon(polygon) => polygon_area(polygon),
    Geometry::Multipolygon(multipolygon) => multipolygon
      .polygons()
      .iter()
      .map(polygon_area)
      .fold(Scalar::zero(), |sum, next| sum + next),
    _ => panic!("not a region: {:?}", geometry),
  }
}

#[test]
fn overlapping_squares_intersection() {
  let first = square((0, 0), 2);
  let second = square((1, 1), 2);
  let result = intersect(&first, &second).unwrap();
  match &result {
    Geometry::Polygon(polygon) => {
      assert_eq!(
        polygon.border().vertices(),
        &[point(1, 1), point(2, 1), point(2, 2), point(1, 2)]
      );
      assert!(polygon.holes().is_empty());
    }
    other => panic!("expected a polygon, got {:?}", other),
  }
  assert_eq!(area_2x(&result), scalar(2));
}

#[test]
fn overlapping_squares_union_and_difference() {
  let first = square((0, 0), 2);
  let second = square((1, 1), 2);
  let union = unite(&first, &second).unwrap();
  assert_eq!(area_2x(&union), scalar(14));
  let difference = subtract(&first, &second).unwrap();
  assert_eq!(area_2x(&difference), scalar(6));
  let symmetric = symmetric_subtract(&first, &second).unwrap();
  assert_eq!(area_2x(&symmetric), scalar(12));
}

#[test]
fn touching_squares() {
  let first = square((0, 0), 1);
  let second = square((1, 0), 1);
  assert_eq!(relate(&first, &second), Relation::Touch);
  assert_eq!(intersect(&first, &second).unwrap(), Geometry::Empty);
  let union = unite(&first, &second).unwrap();
  match &union {
    Geometry::Polygon(polygon) => {
      assert_eq!(
        polygon.border().vertices(),
        &[point(0, 0), point(2, 0), point(2, 1), point(0, 1)]
      );
    }
    other => panic!("expected one rectangle, got {:?}", other),
  }
}

#[test]
fn nested_squares() {
  let outer = square((0, 0), 4);
  let inner = square((1, 1), 2);
  assert_eq!(relate(&inner, &outer), Relation::Within);
  assert_eq!(relate(&outer, &inner), Relation::Cover);
  let ring = subtract(&outer, &inner).unwrap();
  match &ring {
    Geometry::Polygon(polygon) => {
      assert_eq!(
        polygon.border().vertices(),
        &[point(0, 0), point(4, 0), point(4, 4), point(0, 4)]
      );
      assert_eq!(polygon.holes().len(), 1);
      assert_eq!(
        polygon.holes()[0].vertices(),
        &[point(1, 1), point(1, 3), point(3, 3), point(3, 1)]
      );
    }
    other => panic!("expected a ring, got {:?}", other),
  }
  assert_eq!(area_2x(&ring), scalar(24));
}

#[test]
fn crossing_segments() {
  let first = segment((0, 0), (2, 2));
  let second = segment((0, 2), (2, 0));
  assert_eq!(relate(&first, &second), Relation::Cross);
  // A single crossing point is not a one-dimensional intersection.
  assert_eq!(intersect(&first, &second).unwrap(), Geometry::Empty);
  // The union is split at the crossing point.
  match unite(&first, &second).unwrap() {
    Geometry::Multisegment(multisegment) => {
      assert_eq!(multisegment.segments().len(), 4);
      assert!(multisegment.segments().iter().all(|segment| {
        *segment.start() == point(1, 1) || *segment.end() == point(1, 1)
      }));
    }
    other => panic!("expected four pieces, got {:?}", other),
  }
}

#[test]
fn segment_operations() {
  let first = segment((0, 0), (4, 0));
  let second = segment((1, 0), (3, 0));
  assert_eq!(relate(&first, &second), Relation::Composite);
  assert_eq!(relate(&second, &first), Relation::Component);
  let intersection = intersect(&first, &second).unwrap();
  match intersection {
    Geometry::Segment(segment) => {
      assert_eq!(segment.sorted(), (point(1, 0), point(3, 0)));
    }
    other => panic!("expected the middle piece, got {:?}", other),
  }
  let difference = subtract(&first, &second).unwrap();
  match difference {
    Geometry::Multisegment(multisegment) => {
      assert_eq!(multisegment.segments().len(), 2);
    }
    other => panic!("expected two stubs, got {:?}", other),
  }
}

#[test]
fn segment_against_region() {
  let region = square((0, 0), 2);
  let through = segment((-1, 1), (3, 1));
  assert_eq!(relate(&through, &region), Relation::Cross);
  let clipped = intersect(&through, &region).unwrap();
  match clipped {
    Geometry::Segment(segment) => {
      assert_eq!(segment.sorted(), (point(0, 1), point(2, 1)));
    }
    other => panic!("expected the clipped chord, got {:?}", other),
  }
  let outside = subtract(&through, &region).unwrap();
  match outside {
    Geometry::Multisegment(multisegment) => {
      assert_eq!(multisegment.segments().len(), 2);
    }
    other => panic!("expected two outer stubs, got {:?}", other),
  }
  let inside = segment((1, 1), (1, 2));
  assert!(matches!(
    unite(&inside, &region),
    Err(planimetry::Error::UnsupportedOperands)
  ));
}

#[test]
fn empty_operand_rules() {
  let region = square((0, 0), 2);
  let empty = Geometry::<Scalar>::Empty;
  assert_eq!(unite(&empty, &region).unwrap(), region);
  assert_eq!(unite(&region, &empty).unwrap(), region);
  assert_eq!(intersect(&empty, &region).unwrap(), Geometry::Empty);
  assert_eq!(subtract(&empty, &region).unwrap(), Geometry::Empty);
  assert_eq!(subtract(&region, &empty).unwrap(), region);
  assert_eq!(symmetric_subtract(&region, &empty).unwrap(), region);
  assert_eq!(relate(&empty, &region), Relation::Disjoint);
  assert_eq!(
    relate(&empty, &Geometry::<Scalar>::Empty),
    Relation::Equal
  );
}

#[test]
fn self_intersecting_operand_is_rejected() {
  let bowtie = Geometry::Polygon(Polygon::new(
    Contour::try_new(vec![point(0, 0), point(2, 2), point(2, 0), point(0, 2)]).unwrap(),
    vec![],
  ));
  let other = square((0, 0), 1);
  assert!(matches!(
    unite(&bowtie, &other),
    Err(planimetry::Error::SelfIntersection)
  ));
  assert!(matches!(
    intersect(&other, &bowtie),
    Err(planimetry::Error::SelfIntersection)
  ));
  assert!(matches!(
    subtract(&bowtie, &other),
    Err(planimetry::Error::SelfIntersection)
  ));
}

#[test]
fn relation_scenarios() {
  let first = square((0, 0), 2);
  assert_eq!(relate(&first, &first.clone()), Relation::Equal);
  let far = square((5, 5), 2);
  assert_eq!(relate(&first, &far), Relation::Disjoint);
  let overlapping = square((1, 1), 2);
  assert_eq!(relate(&first, &overlapping), Relation::Overlap);
  assert_eq!(
    relate(&first, &overlapping),
    relate(&overlapping, &first).complement()
  );
  // A segment lying on the border.
  let edge = segment((0, 0), (2, 0));
  assert_eq!(relate(&edge, &first), Relation::Component);
  // A segment inside touching the border.
  let chord = segment((0, 1), (1, 1));
  assert_eq!(relate(&chord, &first), Relation::Enclosed);
  let inner = segment((1, 1), (1, 2));
  hold_within(&inner, &first);
}

fn hold_within(linear: &Geometry<Scalar>, region: &Geometry<Scalar>) {
  assert_eq!(relate(linear, region), Relation::Within);
  assert_eq!(relate(region, linear), Relation::Cover);
}

#[test]
fn symmetric_difference_identities() {
  let first = square((0, 0), 2);
  let second = square((1, 1), 2);
  let direct = symmetric_subtract(&first, &second).unwrap();
  let union = unite(&first, &second).unwrap();
  let intersection = intersect(&first, &second).unwrap();
  assert_eq!(direct, subtract(&union, &intersection).unwrap());
  let both_ways = unite(
    &subtract(&first, &second).unwrap(),
    &subtract(&second, &first).unwrap(),
  )
  .unwrap();
  assert_eq!(direct, both_ways);
}

#[test]
fn reversal_invariance() {
  let first = square((0, 0), 2);
  let second = square((1, 1), 2);
  let reversed = match &first {
    Geometry::Polygon(polygon) => Geometry::Polygon(Polygon::new(
      polygon.border().reversed(),
      polygon.holes().to_vec(),
    )),
    _ => unreachable!(),
  };
  assert_eq!(
    unite(&first, &second).unwrap(),
    unite(&reversed, &second).unwrap()
  );
  assert_eq!(
    subtract(&first, &second).unwrap(),
    subtract(&reversed, &second).unwrap()
  );
}

#[test]
fn multipolygon_results_pass_back_in() {
  let first = square((0, 0), 1);
  let second = square((3, 3), 1);
  let both = unite(&first, &second).unwrap();
  match &both {
    Geometry::Multipolygon(multipolygon) => {
      assert_eq!(multipolygon.polygons().len(), 2);
    }
    other => panic!("expected two islands, got {:?}", other),
  }
  // Feeding the multipolygon back into an operation works.
  let clipped = intersect(&both, &square((0, 0), 2)).unwrap();
  assert_eq!(clipped, first);
  let shaved = subtract(&both, &square((3, 3), 1)).unwrap();
  assert_eq!(shaved, first);
}

#[test]
fn inner_square_filling_hole_touches() {
  let outer = square((0, 0), 4);
  let inner = square((1, 1), 2);
  let ring = subtract(&outer, &inner).unwrap();
  assert_eq!(relate(&inner, &ring), Relation::Touch);
  assert_eq!(unite(&ring, &inner).unwrap(), outer);
}
