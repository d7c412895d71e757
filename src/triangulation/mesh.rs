use super::quad_edge::QuadEdge;
use crate::data::Point;
use crate::orientation::{orient, Orientation};
use crate::GeometryScalar;

/// Quad-edge mesh over a fixed set of sites.
///
/// Sites are indexed into `endpoints`; per directed edge the mesh stores
/// the next counterclockwise edge around its origin, and per primal edge
/// its origin site. Deleting an edge splices it out of both origin rings
/// and tombstones the block; slots are never reused.
pub struct Mesh<T> {
  endpoints: Vec<Point<T>>,
  starts: Vec<usize>,
  onexts: Vec<QuadEdge>,
  deleted: Vec<bool>,
}

impl<T: GeometryScalar> Mesh<T> {
  /// `points` must be sorted and deduplicated.
  pub fn from_points(points: Vec<Point<T>>) -> Mesh<T> {
    debug_assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
    Mesh {
      endpoints: points,
      starts: Vec::new(),
      onexts: Vec::new(),
      deleted: Vec::new(),
    }
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.endpoints
  }

  pub fn points_count(&self) -> usize {
    self.endpoints.len()
  }

  pub fn make_edge(&mut self, start: usize, end: usize) -> QuadEdge {
    let base = self.onexts.len();
    let edge = QuadEdge(base);
    self.onexts.push(edge);
    self.onexts.push(QuadEdge(base + 3));
    self.onexts.push(QuadEdge(base + 2));
    self.onexts.push(QuadEdge(base + 1));
    self.starts.push(start);
    self.starts.push(end);
    self.deleted.push(false);
    edge
  }

  pub fn onext(&self, edge: QuadEdge) -> QuadEdge {
    self.onexts[edge.0]
  }

  pub fn oprev(&self, edge: QuadEdge) -> QuadEdge {
    self.onext(edge.rot()).rot()
  }

  pub fn lnext(&self, edge: QuadEdge) -> QuadEdge {
    self.onext(edge.rot_inv()).rot()
  }

  pub fn rnext(&self, edge: QuadEdge) -> QuadEdge {
    self.onext(edge.rot()).rot_inv()
  }

  pub fn rprev(&self, edge: QuadEdge) -> QuadEdge {
    self.onext(edge.sym())
  }

  pub fn start_index(&self, edge: QuadEdge) -> usize {
    debug_assert!(edge.is_primal());
    self.starts[edge.0 >> 1]
  }

  pub fn end_index(&self, edge: QuadEdge) -> usize {
    self.start_index(edge.sym())
  }

  pub fn to_start(&self, edge: QuadEdge) -> &Point<T> {
    &self.endpoints[self.start_index(edge)]
  }

  pub fn to_end(&self, edge: QuadEdge) -> &Point<T> {
    &self.endpoints[self.end_index(edge)]
  }

  /// The Guibas-Stolfi splice: swaps the origin rings of `a` and `b` and
  /// the corresponding dual rings; an involution that either merges two
  /// rings or splits one.
  pub fn splice(&mut self, a: QuadEdge, b: QuadEdge) {
    let alpha = self.onext(a).rot();
    let beta = self.onext(b).rot();
    self.onexts.swap(a.0, b.0);
    self.onexts.swap(alpha.0, beta.0);
  }

  /// Connects `dest(a)` to `org(b)` with a new edge so that all three
  /// edges share a left face.
  pub fn connect(&mut self, a: QuadEdge, b: QuadEdge) -> QuadEdge {
    let edge = self.make_edge(self.end_index(a), self.start_index(b));
    let a_lnext = self.lnext(a);
    self.splice(edge, a_lnext);
    self.splice(edge.sym(), b);
    edge
  }

  pub fn delete_edge(&mut self, edge: QuadEdge) {
    let oprev = self.oprev(edge);
    self.splice(edge, oprev);
    let sym_oprev = self.oprev(edge.sym());
    self.splice(edge.sym(), sym_oprev);
    self.deleted[edge.block()] = true;
  }

  /// All live primal directed edges.
  pub fn primal_edges(&self) -> impl Iterator<Item = QuadEdge> + '_ {
    (0..self.onexts.len())
      .step_by(2)
      .map(QuadEdge)
      .filter(move |edge| !self.deleted[edge.block()])
  }

  pub(crate) fn orient_edge(&self, edge: QuadEdge, point: &Point<T>) -> Orientation {
    orient(self.to_start(edge), self.to_end(edge), point)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mesh() -> Mesh<i64> {
    Mesh::from_points(vec![
      Point::new(0, 0),
      Point::new(1, 0),
      Point::new(2, 1),
    ])
  }

  #[test]
  fn fresh_edge_rings() {
    let mut mesh = mesh();
    let edge = mesh.make_edge(0, 1);
    assert_eq!(mesh.onext(edge), edge);
    assert_eq!(mesh.onext(edge.sym()), edge.sym());
    assert_eq!(mesh.lnext(edge), edge.sym());
    assert_eq!(mesh.rprev(edge), edge.sym());
    assert_eq!(mesh.to_start(edge), &Point::new(0, 0));
    assert_eq!(mesh.to_end(edge), &Point::new(1, 0));
  }

  #[test]
  fn splice_merges_rings() {
    let mut mesh = mesh();
    let a = mesh.make_edge(0, 1);
    let b = mesh.make_edge(1, 2);
    mesh.splice(a.sym(), b);
    // The two edges now share the origin ring at site 1.
    assert_eq!(mesh.onext(a.sym()), b);
    assert_eq!(mesh.onext(b), a.sym());
    // Splice is an involution.
    mesh.splice(a.sym(), b);
    assert_eq!(mesh.onext(a.sym()), a.sym());
    assert_eq!(mesh.onext(b), b);
  }

  #[test]
  fn connect_closes_triangle() {
    let mut mesh = mesh();
    let a = mesh.make_edge(0, 1);
    let b = mesh.make_edge(1, 2);
    mesh.splice(a.sym(), b);
    let c = mesh.connect(b, a);
    assert_eq!(mesh.start_index(c), 2);
    assert_eq!(mesh.end_index(c), 0);
    // Walking the left face of `a` visits the triangle.
    assert_eq!(mesh.lnext(a), b);
    assert_eq!(mesh.lnext(b), c);
    assert_eq!(mesh.lnext(c), a);
  }

  #[test]
  fn delete_edge_restores_rings() {
    let mut mesh = mesh();
    let a = mesh.make_edge(0, 1);
    let b = mesh.make_edge(1, 2);
    mesh.splice(a.sym(), b);
    let c = mesh.connect(b, a);
    mesh.delete_edge(c);
    assert_eq!(mesh.onext(a.sym()), b);
    assert_eq!(mesh.primal_edges().count(), 4);
  }
}
