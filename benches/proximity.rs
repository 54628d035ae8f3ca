//! Benchmarks for the per-frame O(n²) proximity scan.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plexus::{PointStore, ProximityGraph, Viewport};

fn scattered_store(n: usize, viewport: Viewport) -> PointStore {
    let mut rng = StdRng::seed_from_u64(0xB0);
    PointStore::from_positions(
        (0..n)
            .map(|_| {
                Vec2::new(
                    rng.gen_range(0.0..viewport.width),
                    rng.gen_range(0.0..viewport.height),
                )
            })
            .collect(),
    )
}

fn bench_rebuild(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 720.0);
    let mut group = c.benchmark_group("graph_rebuild");

    for &n in &[100usize, 500, 1000] {
        let store = scattered_store(n, viewport);

        group.bench_with_input(BenchmarkId::new("fade", n), &store, |b, store| {
            let mut graph = ProximityGraph::new(200.0, true, false);
            b.iter(|| {
                let edges = graph.rebuild(store, viewport, None, 1.0);
                black_box(edges.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("flat", n), &store, |b, store| {
            let mut graph = ProximityGraph::new(200.0, false, false);
            b.iter(|| {
                let edges = graph.rebuild(store, viewport, None, 1.0);
                black_box(edges.len())
            })
        });
    }

    group.finish();
}

fn bench_cursor_pass(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 720.0);
    let store = scattered_store(1000, viewport);
    let cursor = Some(Vec2::new(640.0, 360.0));

    c.bench_function("graph_rebuild/cursor_1000", |b| {
        let mut graph = ProximityGraph::new(200.0, true, true);
        b.iter(|| {
            let edges = graph.rebuild(&store, viewport, cursor, 1.0);
            black_box(edges.len())
        })
    });
}

criterion_group!(benches, bench_rebuild, bench_cursor_pass);
criterion_main!(benches);
