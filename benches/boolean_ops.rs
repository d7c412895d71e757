use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use planimetry::clipping::{intersect_polygons, unite_polygons};
use planimetry::{testing, DelaunayTriangulation, Polygon};

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0xdeadbeef);
  let first = Polygon::new(testing::random_convex_contour(64, 1000, &mut rng), vec![]);
  let second = Polygon::new(testing::random_convex_contour(64, 1000, &mut rng), vec![]);
  c.bench_function("unite_polygons(64, 64)", |b| {
    b.iter(|| unite_polygons(&first, &second))
  });
  c.bench_function("intersect_polygons(64, 64)", |b| {
    b.iter(|| intersect_polygons(&first, &second))
  });
  let points = testing::random_points(500, 1000, &mut rng);
  c.bench_function("DelaunayTriangulation::from_points(500)", |b| {
    b.iter(|| DelaunayTriangulation::from_points(points.clone()))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
