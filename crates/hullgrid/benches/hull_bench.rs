//! Criterion benchmarks for hull-step computation.
//! Focus sizes: n in {10, 50, 200, 1000} points.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullgrid::hull::compute_hull_steps;
use hullgrid::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Vec2<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec2::new(rng.gen_range(0..100), rng.gen_range(0..100)))
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 50, 200, 1000] {
        group.bench_with_input(BenchmarkId::new("steps", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _steps = compute_hull_steps(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
