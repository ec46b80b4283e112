#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use sokoban_search::config::{Config, HeuristicKind, Method};
use sokoban_search::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_bfs(c: &mut Criterion) {
    bench_level(c, Method::Bfs, None, false, "levels/scenario-a.txt", 50);
}

#[allow(unused)]
fn bench_bfs_pruning(c: &mut Criterion) {
    bench_level(c, Method::Bfs, None, true, "levels/scenario-a.txt", 100);
}

#[allow(unused)]
fn bench_a_star(c: &mut Criterion) {
    bench_level(
        c,
        Method::AStar,
        Some(HeuristicKind::Manhattan),
        true,
        "levels/scenario-a.txt",
        100,
    );
}

#[allow(unused)]
fn bench_greedy(c: &mut Criterion) {
    bench_level(
        c,
        Method::Greedy,
        Some(HeuristicKind::GreedyMatching),
        true,
        "levels/scenario-a.txt",
        100,
    );
}

fn bench_level(
    c: &mut Criterion,
    method: Method,
    heuristic: Option<HeuristicKind>,
    pruning: bool,
    level_path: &str,
    samples: usize,
) {
    let level = level_path.load_level().unwrap();
    let config = Config {
        method,
        heuristic,
        pruning,
        ..Config::default()
    };
    let group = if pruning {
        format!("{} pruning", method)
    } else {
        method.to_string()
    };

    c.bench(
        &group,
        Benchmark::new(level_path, move |b| {
            b.iter(|| criterion::black_box(level.solve(criterion::black_box(&config))))
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_bfs,
    bench_bfs_pruning,
    bench_a_star,
    bench_greedy,
);
criterion_main!(benches);
