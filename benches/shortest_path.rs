use criterion::{black_box, criterion_group, criterion_main, Criterion};
use route_graph::graph::generators::{generate_geometric, generate_grid, vertex_name};
use route_graph::GeoPoint;

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(40, 40, GeoPoint::new(19.0, 72.8), 0.005);
    let source = vertex_name(0);
    let target = vertex_name(40 * 40 - 1);

    c.bench_function("grid 40x40 corner to corner", |b| {
        b.iter(|| graph.route(black_box(source.as_str()), black_box(target.as_str())))
    });
}

fn bench_geometric(c: &mut Criterion) {
    let graph = generate_geometric(2_000, GeoPoint::new(19.197, 72.82), 0.2, 2.5, 7);
    let pairs: Vec<(String, String)> = (0..64)
        .map(|i| (vertex_name(i), vertex_name(1_999 - i)))
        .collect();

    c.bench_function("geometric 2000 single query", |b| {
        b.iter(|| graph.shortest_path(black_box(pairs[0].0.as_str()), black_box(pairs[0].1.as_str())))
    });

    c.bench_function("geometric 2000 parallel batch of 64", |b| {
        b.iter(|| graph.routes_parallel(black_box(pairs.as_slice())))
    });
}

criterion_group!(benches, bench_grid, bench_geometric);
criterion_main!(benches);
