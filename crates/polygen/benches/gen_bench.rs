//! Criterion microbenches for the three polygon generators.
//!
//! The repair-based generator dominates; convex and star are near-linear
//! sorts and serve as baselines. Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygen::{random_convex_polygon, random_polygon, random_star_shaped_polygon};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[10usize, 50, 200] {
        group.bench_function(BenchmarkId::new("simple", n), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(42),
                |mut rng| random_polygon(n, &mut rng).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("convex", n), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(42),
                |mut rng| random_convex_polygon(n, &mut rng).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("star", n), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(42),
                |mut rng| random_star_shaped_polygon(n, &mut rng).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
