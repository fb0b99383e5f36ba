//! Benchmark for scheme preprocessing.
//!
//! Measures the full construction (core selection, per-node BFS, landmark
//! processing, ball construction, address building) over generated power-law
//! graphs of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rplg_routing::{PowerLawGraph, RoutingScheme, SchemeConfig};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheme_construction");
    let config = SchemeConfig::default();

    for &n in &[100usize, 200, 400] {
        let graph = PowerLawGraph::generate(n, 2.5, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| RoutingScheme::build(black_box(graph), &config).unwrap());
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_generation");
    for &n in &[100usize, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| PowerLawGraph::generate(black_box(n), 2.5, 42));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_generation);
criterion_main!(benches);
