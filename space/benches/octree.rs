use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terracast_algebra::Vec3;
use terracast_geometry::IntersectAble;
use terracast_space::{generate_boxes_in_space, OcTree, TreeBuildOption};

fn criterion_benchmark(c: &mut Criterion) {
  let boxes = generate_boxes_in_space(10_000, 1000., 1.);

  c.bench_function("octree build", |b| {
    b.iter(|| OcTree::new(black_box(boxes.iter().cloned()), &TreeBuildOption::default()))
  });

  let tree = OcTree::new(boxes.iter().cloned(), &TreeBuildOption::default());
  let ray = terracast_geometry::Ray3::new(Vec3::splat(0.0f64), Vec3::splat(1.0).normalize());

  c.bench_function("octree ray filtered traverse", |b| {
    b.iter(|| {
      let mut candidates = 0;
      tree.traverse(
        |node| node.bounding.intersect(&ray, &()),
        |primitives| candidates += primitives.len(),
      );
      black_box(candidates)
    })
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
