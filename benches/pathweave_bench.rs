//! Criterion benchmarks for the pathweave solvers.
//!
//! Graphs come from the seeded random generator so every size is
//! reproducible across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathweave::aco::{AcoConfig, AntColony};
use pathweave::dijkstra::DijkstraSolver;
use pathweave::graph::{GraphModel, RandomGraphConfig};

fn dense_model(n: usize) -> GraphModel {
    let graph = RandomGraphConfig::default()
        .with_node_count(n)
        .with_connectivity(0.5)
        .with_seed(42)
        .generate();
    GraphModel::build(&graph).expect("generated graph is well formed")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for &n in &[10usize, 50, 100] {
        let model = dense_model(n);
        let target = format!("node_{}", n - 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &model, |b, m| {
            b.iter(|| {
                let result = DijkstraSolver::new(black_box(m))
                    .find_shortest_path("node_0", black_box(&target));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_dijkstra_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_all");

    for &n in &[10usize, 50, 100] {
        let model = dense_model(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &model, |b, m| {
            b.iter(|| black_box(DijkstraSolver::new(black_box(m)).find_all_shortest_paths("node_0")))
        });
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for (n, ants, iters) in [(10usize, 20usize, 50usize), (30, 30, 50), (60, 50, 30)] {
        let model = dense_model(n);
        let target = format!("node_{}", n - 1);
        let config = AcoConfig {
            num_ants: ants,
            iterations: iters,
            seed: Some(42),
            ..AcoConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_a{}_i{}", n, ants, iters), n),
            &(model, config),
            |b, (m, c)| {
                b.iter(|| {
                    let mut colony = AntColony::new(m, c.clone()).expect("valid config");
                    black_box(colony.find_shortest_path("node_0", &target))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra, bench_dijkstra_all, bench_aco);
criterion_main!(benches);
