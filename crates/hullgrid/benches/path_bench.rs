//! Criterion benchmarks for boundary-constrained BFS.
//! Corner-to-corner searches on square grids with ~10% scattered obstacles.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hullgrid::path::find_path;
use hullgrid::types::Grid;
use hullgrid::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn scattered_grid(side: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = side * side / 10;
    let obstacles: Vec<Vec2<i64>> = (0..count)
        .map(|_| {
            Vec2::new(
                rng.gen_range(0..side as i64),
                rng.gen_range(0..side as i64),
            )
        })
        // Keep the corners free so most searches actually run.
        .filter(|p| *p != Vec2::new(0, 0) && *p != Vec2::new(side as i64 - 1, side as i64 - 1))
        .collect();
    Grid::from_obstacles(side, side, &obstacles)
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    for &side in &[10usize, 20, 50, 100] {
        let grid = scattered_grid(side, 44);
        let m = side as i64 - 1;
        let boundary = vec![
            Vec2::new(0, 0),
            Vec2::new(m, 0),
            Vec2::new(m, m),
            Vec2::new(0, m),
        ];
        group.bench_with_input(BenchmarkId::new("bfs", side), &side, |b, _| {
            b.iter(|| {
                let _path = find_path(&grid, Vec2::new(0, 0), Vec2::new(m, m), &boundary);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_path);
criterion_main!(benches);
