use std::cmp::Ordering;

use super::mesh::Mesh;
use super::quad_edge::QuadEdge;
use crate::data::Point;
use crate::intersection::point_in_circle;
use crate::orientation::{orient, Orientation};
use crate::GeometryScalar;

/// Delaunay triangulation of a point set, built by divide and conquer
/// over the lexicographically sorted sites and kept as a quad-edge mesh.
pub struct DelaunayTriangulation<T> {
  mesh: Mesh<T>,
  sides: Option<(QuadEdge, QuadEdge)>,
}

impl<T: GeometryScalar> DelaunayTriangulation<T> {
  pub fn from_points(points: Vec<Point<T>>) -> DelaunayTriangulation<T> {
    let mut points = points;
    points.sort();
    points.dedup();
    let mut mesh = Mesh::from_points(points);
    let sides = build_delaunay(&mut mesh);
    DelaunayTriangulation { mesh, sides }
  }

  pub fn mesh(&self) -> &Mesh<T> {
    &self.mesh
  }

  /// Counterclockwise hull edge out of the leftmost site; `None` below
  /// two distinct sites.
  pub fn left_side(&self) -> Option<QuadEdge> {
    self.sides.map(|(left_side, _)| left_side)
  }

  /// Clockwise hull edge out of the rightmost site.
  pub fn right_side(&self) -> Option<QuadEdge> {
    self.sides.map(|(_, right_side)| right_side)
  }

  /// The sites of the outer face in walk order, each listed once.
  pub fn boundary_points(&self) -> Vec<Point<T>> {
    let left_side = match self.sides {
      None => return self.mesh.points().to_vec(),
      Some((left_side, _)) => left_side,
    };
    let mut result: Vec<Point<T>> = Vec::new();
    let mut edge = left_side;
    loop {
      let point = self.mesh.to_start(edge);
      // Degenerate (collinear) hulls walk each inner site twice.
      if !result.contains(point) {
        result.push(point.clone());
      }
      let candidate = self.mesh.rprev(edge);
      if candidate == left_side {
        break;
      }
      edge = candidate;
    }
    result
  }

  /// Vertex triples of the triangles, counterclockwise, each triangle
  /// reported once via its lexicographically smallest vertex.
  pub fn triangles_vertices(&self) -> Vec<[Point<T>; 3]> {
    let mesh = &self.mesh;
    let mut result = Vec::new();
    for edge in mesh.primal_edges() {
      let first = mesh.to_start(edge);
      let second = mesh.to_end(edge);
      let third = mesh.to_end(mesh.onext(edge));
      if first < second
        && first < third
        && third == mesh.to_end(mesh.oprev(edge.sym()))
        && orient(first, second, third) == Orientation::Counterclockwise
      {
        result.push([first.clone(), second.clone(), third.clone()]);
      }
    }
    result.sort();
    result
  }
}

pub(crate) fn build_delaunay<T: GeometryScalar>(mesh: &mut Mesh<T>) -> Option<(QuadEdge, QuadEdge)> {
  if mesh.points_count() < 2 {
    return None;
  }
  let count = mesh.points_count();
  Some(triangulate(mesh, 0, count))
}

// Returns the counterclockwise hull edge out of the range's leftmost site
// and the clockwise hull edge out of its rightmost one.
fn triangulate<T: GeometryScalar>(
  mesh: &mut Mesh<T>,
  begin: usize,
  end: usize,
) -> (QuadEdge, QuadEdge) {
  match end - begin {
    2 => {
      let edge = mesh.make_edge(begin, begin + 1);
      (edge, edge.sym())
    }
    3 => {
      let a = mesh.make_edge(begin, begin + 1);
      let b = mesh.make_edge(begin + 1, begin + 2);
      mesh.splice(a.sym(), b);
      let turn = orient(
        &mesh.points()[begin],
        &mesh.points()[begin + 1],
        &mesh.points()[begin + 2],
      );
      match turn {
        Orientation::Counterclockwise => {
          mesh.connect(b, a);
          (a, b.sym())
        }
        Orientation::Clockwise => {
          let c = mesh.connect(b, a);
          (c.sym(), c)
        }
        Orientation::Collinear => (a, b.sym()),
      }
    }
    _ => {
      let middle = begin + (end - begin) / 2;
      let (mut left_outer, mut left_inner) = triangulate(mesh, begin, middle);
      let (mut right_inner, mut right_outer) = triangulate(mesh, middle, end);
      // Rise to the lower common tangent of the two hulls.
      loop {
        if left_of(mesh, right_inner, left_inner) {
          left_inner = mesh.lnext(left_inner);
        } else if right_of(mesh, left_inner, right_inner) {
          right_inner = mesh.rprev(right_inner);
        } else {
          break;
        }
      }
      let mut base = mesh.connect(right_inner.sym(), left_inner);
      if mesh.start_index(left_inner) == mesh.start_index(left_outer) {
        left_outer = base.sym();
      }
      if mesh.start_index(right_inner) == mesh.start_index(right_outer) {
        right_outer = base;
      }
      // Zip the halves together, keeping only in-circle-legal cross
      // edges and deleting the ones each new base edge invalidates.
      loop {
        let mut left_candidate = mesh.onext(base.sym());
        if is_valid(mesh, left_candidate, base) {
          while in_circle(
            mesh.to_end(base),
            mesh.to_start(base),
            mesh.to_end(left_candidate),
            mesh.to_end(mesh.onext(left_candidate)),
          ) {
            let next = mesh.onext(left_candidate);
            mesh.delete_edge(left_candidate);
            left_candidate = next;
          }
        }
        let mut right_candidate = mesh.oprev(base);
        if is_valid(mesh, right_candidate, base) {
          while in_circle(
            mesh.to_end(base),
            mesh.to_start(base),
            mesh.to_end(right_candidate),
            mesh.to_end(mesh.oprev(right_candidate)),
          ) {
            let next = mesh.oprev(right_candidate);
            mesh.delete_edge(right_candidate);
            right_candidate = next;
          }
        }
        let left_valid = is_valid(mesh, left_candidate, base);
        let right_valid = is_valid(mesh, right_candidate, base);
        if !left_valid && !right_valid {
          break;
        }
        if !left_valid
          || (right_valid
            && in_circle(
              mesh.to_end(left_candidate),
              mesh.to_start(left_candidate),
              mesh.to_start(right_candidate),
              mesh.to_end(right_candidate),
            ))
        {
          base = mesh.connect(right_candidate, base.sym());
        } else {
          base = mesh.connect(base.sym(), left_candidate.sym());
        }
      }
      (left_outer, right_outer)
    }
  }
}

fn left_of<T: GeometryScalar>(mesh: &Mesh<T>, probe: QuadEdge, edge: QuadEdge) -> bool {
  mesh.orient_edge(edge, mesh.to_start(probe)) == Orientation::Counterclockwise
}

fn right_of<T: GeometryScalar>(mesh: &Mesh<T>, probe: QuadEdge, edge: QuadEdge) -> bool {
  mesh.orient_edge(edge, mesh.to_start(probe)) == Orientation::Clockwise
}

fn is_valid<T: GeometryScalar>(mesh: &Mesh<T>, candidate: QuadEdge, base: QuadEdge) -> bool {
  mesh.orient_edge(base, mesh.to_end(candidate)) == Orientation::Clockwise
}

fn in_circle<T: GeometryScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> bool {
  point_in_circle(a, b, c, d) == Ordering::Greater
}
