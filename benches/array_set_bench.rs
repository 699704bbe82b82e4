//! ArraySet benchmarks.
//!
//! Compares single-slot growth on insert against reserving ahead, and
//! measures the linear-scan set operations.

use arrayset::collection::ArraySet;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [i32; 3] = [16, 128, 1024];

fn build(size: i32) -> ArraySet<i32> {
    let mut set = ArraySet::with_capacity(usize::try_from(size).unwrap_or(0));
    for element in 0..size {
        set.insert(element);
    }
    set
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("array_set_insert");

    for size in SIZES {
        group.bench_with_input(
            BenchmarkId::new("single_slot_growth", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = ArraySet::with_capacity(0);
                    for element in 0..size {
                        set.insert(black_box(element));
                    }
                    black_box(set)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("reserved", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(build(black_box(size))));
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("array_set_contains");

    for size in SIZES {
        let set = build(size);
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(set.contains(black_box(&size))));
        });
    }

    group.finish();
}

fn benchmark_set_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("array_set_operations");

    for size in SIZES {
        let left = build(size);
        let right: ArraySet<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("make_union", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut result = left.clone();
                result.make_union(black_box(&right));
                black_box(result)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("make_intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut result = left.clone();
                    result.make_intersection(black_box(&right));
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_set_operations
);
criterion_main!(benches);
