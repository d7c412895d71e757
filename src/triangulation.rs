//! Quad-edge meshes and Delaunay triangulation.
mod delaunay;
mod mesh;
mod quad_edge;

pub use delaunay::DelaunayTriangulation;
pub use mesh::Mesh;
pub use quad_edge::QuadEdge;
