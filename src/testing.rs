//! Deterministic random inputs for property tests and benchmarks.
use num_bigint::BigInt;
use num_rational::BigRational;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use crate::data::{Contour, Point};
use crate::orientation::ccw_cmp_around_origin;

/// Random distinct points with coordinates in `0..span`.
pub fn random_points<R>(count: usize, span: i64, rng: &mut R) -> Vec<Point<i64>>
where
  R: Rng + ?Sized,
{
  assert!(span * span >= count as i64);
  let mut seen = BTreeSet::new();
  let mut result = Vec::with_capacity(count);
  while result.len() < count {
    let point = Point::new(rng.gen_range(0..span), rng.gen_range(0..span));
    if seen.insert(point.clone()) {
      result.push(point);
    }
  }
  result
}

// Property: random_between(n, max, rng).iter().sum::<usize>() == max
fn random_between<R>(n: usize, max: usize, rng: &mut R) -> Vec<usize>
where
  R: Rng + ?Sized,
{
  debug_assert!(n > 0);
  assert!(n <= max);
  if max == n {
    return vec![1; n];
  }
  let mut cuts = BTreeSet::new();
  while cuts.len() < n - 1 {
    cuts.insert(rng.gen_range(1..max));
  }
  let mut from = 0;
  let mut out = Vec::new();
  for &cut in cuts.iter() {
    out.push(cut - from);
    from = cut;
  }
  out.push(max - from);
  out
}

// Property: the deltas sum to zero and none of them is zero.
fn random_between_zero<R>(n: usize, max: usize, rng: &mut R) -> Vec<BigInt>
where
  R: Rng + ?Sized,
{
  assert!(n >= 2);
  let n_positive = rng.gen_range(1..n);
  let positive: Vec<BigInt> = random_between(n_positive, max, rng)
    .into_iter()
    .map(BigInt::from)
    .collect();
  let negative: Vec<BigInt> = random_between(n - n_positive, max, rng)
    .into_iter()
    .map(|value| -BigInt::from(value))
    .collect();
  let mut result = [positive, negative].concat();
  result.shuffle(rng);
  result
}

/// A random convex contour with `n` vertices, counterclockwise: edge
/// vectors summing to zero, sorted by angle and partial-summed. Redrawn
/// when all the edge vectors land on one line.
pub fn random_convex_contour<R>(n: usize, max: usize, rng: &mut R) -> Contour<BigRational>
where
  R: Rng + ?Sized,
{
  assert!(n >= 3);
  loop {
    let mut edges: Vec<[BigInt; 2]> = random_between_zero(n, max, rng)
      .into_iter()
      .zip(random_between_zero(n, max, rng).into_iter())
      .map(|(dx, dy)| [dx, dy])
      .collect();
    edges.sort_by(|a, b| ccw_cmp_around_origin(a, b));
    let mut x = BigInt::from(0);
    let mut y = BigInt::from(0);
    let mut vertices = Vec::with_capacity(n);
    for [dx, dy] in edges {
      x += dx;
      y += dy;
      vertices.push(Point::new(
        BigRational::from(x.clone()),
        BigRational::from(y.clone()),
      ));
    }
    let contour = Contour::try_new(vertices).expect("edge vectors do not cancel pairwise");
    if contour.orientation() == crate::orientation::Orientation::Counterclockwise {
      return contour;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::orientation::{orient, Orientation};
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn points_are_distinct() {
    let rng = &mut SmallRng::seed_from_u64(7);
    let points = random_points(50, 20, rng);
    let unique: BTreeSet<_> = points.iter().cloned().collect();
    assert_eq!(unique.len(), 50);
  }

  #[test]
  fn contour_is_convex_and_counterclockwise() {
    let rng = &mut SmallRng::seed_from_u64(42);
    for _ in 0..10 {
      let contour = random_convex_contour(8, 100, rng);
      assert_eq!(contour.orientation(), Orientation::Counterclockwise);
      let vertices = contour.vertices();
      for index in 0..vertices.len() {
        let a = &vertices[index];
        let b = &vertices[(index + 1) % vertices.len()];
        let c = &vertices[(index + 2) % vertices.len()];
        assert_ne!(orient(a, b, c), Orientation::Clockwise);
      }
    }
  }
}
