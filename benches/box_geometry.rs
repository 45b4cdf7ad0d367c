use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cube_demo::geometry::Geometry;

fn bench_box_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_geometry");
    for segments in [1u32, 2, 8, 32] {
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &segments,
            |b, &s| b.iter(|| Geometry::box_geometry(1.0, 1.0, 1.0, (black_box(s), s, s))),
        );
    }
    group.finish();
}

fn bench_wireframe_indices(c: &mut Criterion) {
    let geometry = Geometry::box_geometry(1.0, 1.0, 1.0, (16, 16, 16));

    c.bench_function("wireframe_indices_16", |b| {
        b.iter(|| black_box(&geometry).wireframe_indices())
    });
}

criterion_group!(benches, bench_box_geometry, bench_wireframe_indices);
criterion_main!(benches);
