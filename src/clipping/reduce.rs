use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::data::{locate_point_in_ring, Contour, Location, Point, Polygon};
use crate::orientation::{orient, Orientation};
use crate::GeometryScalar;

/// Threads directed boundary pieces (result interior to the left of each)
/// into polygons: cycles are traced with the sharpest-left-turn rule so
/// that contours touching at a point stay separate, counterclockwise
/// cycles become shells, clockwise ones holes, and every hole attaches to
/// the smallest shell strictly containing it.
pub(crate) fn boundary_to_polygons<T: GeometryScalar>(
  edges: Vec<(Point<T>, Point<T>)>,
) -> Vec<Polygon<T>> {
  let mut edges = edges;
  edges.sort();
  edges.dedup();
  if edges.is_empty() {
    return Vec::new();
  }
  let mut outgoing: BTreeMap<Point<T>, Vec<usize>> = BTreeMap::new();
  for (index, (start, _)) in edges.iter().enumerate() {
    outgoing.entry(start.clone()).or_insert_with(Vec::new).push(index);
  }
  let mut used = vec![false; edges.len()];
  let mut shells: Vec<(Vec<Point<T>>, T)> = Vec::new();
  let mut holes: Vec<Vec<Point<T>>> = Vec::new();
  for seed in 0..edges.len() {
    if used[seed] {
      continue;
    }
    let mut cycle = Vec::new();
    let mut current = seed;
    loop {
      used[current] = true;
      cycle.push(edges[current].0.clone());
      let vertex = &edges[current].1;
      let incoming = direction(&edges[current]);
      let candidates = &outgoing[vertex];
      let next = if candidates.len() == 1 {
        candidates[0]
      } else {
        *candidates
          .iter()
          .min_by(|&&a, &&b| turn_cmp(&incoming, &direction(&edges[a]), &direction(&edges[b])))
          .expect("outgoing edges at a boundary vertex")
      };
      if next == seed {
        break;
      }
      debug_assert!(!used[next]);
      current = next;
    }
    let cycle = simplify_cycle(cycle);
    if cycle.len() < 3 {
      continue;
    }
    let cycle = rotate_to_lexicographic_minimum(cycle);
    let area_2x = signed_area_2x(&cycle);
    if area_2x.is_positive() {
      shells.push((cycle, area_2x));
    } else if area_2x.is_negative() {
      holes.push(cycle);
    }
  }
  let mut polygons: Vec<(Vec<Point<T>>, T, Vec<Vec<Point<T>>>)> = shells
    .into_iter()
    .map(|(cycle, area_2x)| (cycle, area_2x, Vec::new()))
    .collect();
  for hole in holes {
    let sample = edge_midpoint(&hole[0], &hole[1]);
    let mut enclosing: Option<usize> = None;
    for (index, (shell, area_2x, _)) in polygons.iter().enumerate() {
      if locate_point_in_ring(&sample, shell) == Location::Interior {
        match enclosing {
          Some(current) if polygons[current].1 <= *area_2x => {}
          _ => enclosing = Some(index),
        }
      }
    }
    if let Some(index) = enclosing {
      polygons[index].2.push(hole);
    } else {
      debug_assert!(false, "hole without an enclosing shell");
    }
  }
  polygons
    .into_iter()
    .map(|(shell, _, mut shell_holes)| {
      shell_holes.sort();
      Polygon::new(
        Contour::new_unchecked(shell),
        shell_holes.into_iter().map(Contour::new_unchecked).collect(),
      )
    })
    .collect()
}

fn direction<T: GeometryScalar>((start, end): &(Point<T>, Point<T>)) -> [T; 2] {
  [
    end.x().clone() - start.x().clone(),
    end.y().clone() - start.y().clone(),
  ]
}

// Orders candidate outgoing directions by turn sharpness relative to the
// incoming direction: left turns from sharpest to gentlest, then straight
// ahead, then right turns from gentlest to sharpest.
fn turn_cmp<T: GeometryScalar>(incoming: &[T; 2], first: &[T; 2], second: &[T; 2]) -> Ordering {
  let class = |candidate: &[T; 2]| -> u8 {
    let cross = incoming[0].clone() * candidate[1].clone() - incoming[1].clone() * candidate[0].clone();
    if cross.is_positive() {
      0
    } else if cross.is_negative() {
      2
    } else {
      let dot =
        incoming[0].clone() * candidate[0].clone() + incoming[1].clone() * candidate[1].clone();
      if dot.is_positive() {
        1
      } else {
        3
      }
    }
  };
  let first_class = class(first);
  let second_class = class(second);
  first_class.cmp(&second_class).then_with(|| {
    if first_class == 0 || first_class == 2 {
      let cross = first[0].clone() * second[1].clone() - first[1].clone() * second[0].clone();
      cross.cmp(&T::zero())
    } else {
      Ordering::Equal
    }
  })
}

// Interior vertices of straight runs carry no information; dropping them
// canonicalises contours split only by the other operand's endpoints.
fn simplify_cycle<T: GeometryScalar>(cycle: Vec<Point<T>>) -> Vec<Point<T>> {
  let count = cycle.len();
  let mut kept = Vec::with_capacity(count);
  for index in 0..count {
    let previous = &cycle[(index + count - 1) % count];
    let next = &cycle[(index + 1) % count];
    if orient(previous, &cycle[index], next) != Orientation::Collinear {
      kept.push(cycle[index].clone());
    }
  }
  kept
}

fn rotate_to_lexicographic_minimum<T: GeometryScalar>(cycle: Vec<Point<T>>) -> Vec<Point<T>> {
  let minimum = cycle
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp(b))
    .map(|(index, _)| index)
    .unwrap_or(0);
  let mut rotated = Vec::with_capacity(cycle.len());
  rotated.extend_from_slice(&cycle[minimum..]);
  rotated.extend_from_slice(&cycle[..minimum]);
  rotated
}

fn signed_area_2x<T: GeometryScalar>(cycle: &[Point<T>]) -> T {
  let mut sum = T::zero();
  for index in 0..cycle.len() {
    let p = &cycle[index];
    let q = &cycle[(index + 1) % cycle.len()];
    sum = sum + (p.x().clone() * q.y().clone() - q.x().clone() * p.y().clone());
  }
  sum
}

fn edge_midpoint<T: GeometryScalar>(start: &Point<T>, end: &Point<T>) -> Point<T> {
  let two = T::one() + T::one();
  Point::new(
    (start.x().clone() + end.x().clone()) / two.clone(),
    (start.y().clone() + end.y().clone()) / two,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pt(x: i64, y: i64) -> Point<i64> {
    Point::new(x, y)
  }

  #[test]
  fn single_ccw_square() {
    let polygons = boundary_to_polygons(vec![
      (pt(0, 0), pt(2, 0)),
      (pt(2, 0), pt(2, 2)),
      (pt(2, 2), pt(0, 2)),
      (pt(0, 2), pt(0, 0)),
    ]);
    assert_eq!(polygons.len(), 1);
    assert_eq!(
      polygons[0].border().vertices(),
      &[pt(0, 0), pt(2, 0), pt(2, 2), pt(0, 2)]
    );
    assert!(polygons[0].holes().is_empty());
  }

  #[test]
  fn collinear_break_points_dissolve() {
    let polygons = boundary_to_polygons(vec![
      (pt(0, 0), pt(1, 0)),
      (pt(1, 0), pt(2, 0)),
      (pt(2, 0), pt(2, 1)),
      (pt(2, 1), pt(0, 1)),
      (pt(0, 1), pt(0, 0)),
    ]);
    assert_eq!(polygons.len(), 1);
    assert_eq!(
      polygons[0].border().vertices(),
      &[pt(0, 0), pt(2, 0), pt(2, 1), pt(0, 1)]
    );
  }

  #[test]
  fn shell_with_hole() {
    let polygons = boundary_to_polygons(vec![
      // Shell, counterclockwise.
      (pt(0, 0), pt(4, 0)),
      (pt(4, 0), pt(4, 4)),
      (pt(4, 4), pt(0, 4)),
      (pt(0, 4), pt(0, 0)),
      // Hole, clockwise.
      (pt(1, 1), pt(1, 3)),
      (pt(1, 3), pt(3, 3)),
      (pt(3, 3), pt(3, 1)),
      (pt(3, 1), pt(1, 1)),
    ]);
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0].holes().len(), 1);
    assert_eq!(
      polygons[0].holes()[0].vertices(),
      &[pt(1, 1), pt(1, 3), pt(3, 3), pt(3, 1)]
    );
  }

  #[test]
  fn corner_touching_squares_stay_separate() {
    let polygons = boundary_to_polygons(vec![
      (pt(-1, -1), pt(0, -1)),
      (pt(0, -1), pt(0, 0)),
      (pt(0, 0), pt(-1, 0)),
      (pt(-1, 0), pt(-1, -1)),
      (pt(0, 0), pt(1, 0)),
      (pt(1, 0), pt(1, 1)),
      (pt(1, 1), pt(0, 1)),
      (pt(0, 1), pt(0, 0)),
    ]);
    assert_eq!(polygons.len(), 2);
    assert!(polygons.iter().all(|polygon| polygon.holes().is_empty()));
  }
}
