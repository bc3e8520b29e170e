//! Benchmarks for view iteration: dedicated cursors vs the generic `get` cursor
//!
//! Run with: `cargo bench --bench views`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sequin_core::{Array, Sequence};

fn bench_reversed(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversed_iteration");

    for size in [4, 64, 1024] {
        let arr: Array<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("ReversedIter", size), &arr, |b, arr| {
            b.iter(|| {
                let rev = arr.reversed();
                black_box(rev.iter().sum::<u64>());
            });
        });

        group.bench_with_input(BenchmarkId::new("Iter", size), &arr, |b, arr| {
            b.iter(|| {
                let rev = arr.reversed();
                black_box(Sequence::iter(&rev).sum::<u64>());
            });
        });
    }

    group.finish();
}

fn bench_rest(c: &mut Criterion) {
    let mut group = c.benchmark_group("rest_iteration");

    for size in [4, 64, 1024] {
        let arr: Array<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("RestIter", size), &arr, |b, arr| {
            b.iter(|| {
                let rest = arr.rest();
                black_box(rest.iter().sum::<u64>());
            });
        });

        group.bench_with_input(BenchmarkId::new("Iter", size), &arr, |b, arr| {
            b.iter(|| {
                let rest = arr.rest();
                black_box(Sequence::iter(&rest).sum::<u64>());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reversed, bench_rest);
criterion_main!(benches);
