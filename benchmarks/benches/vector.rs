// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use elastic_vec::Vector;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vector
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Growth
// =============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            b.iter(|| {
                let mut vector = Vector::new();
                for i in 0..s {
                    vector.push(i as u32).expect("Failed to push(..)");
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        let data: Vec<u32> = (0..size).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &data, |b, data| {
            b.iter(|| {
                let mut vec = Vec::new();
                vec.extend_from_slice(data);
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &data, |b, data| {
            b.iter(|| {
                let mut vector = Vector::new();
                vector.extend(data).expect("Failed to extend(..)");
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Shifting
// =============================================================================

fn bench_unshift(c: &mut Criterion) {
    let mut group = c.benchmark_group("unshift");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            b.iter(|| {
                let mut vector = Vector::new();
                for i in 0..s {
                    vector.unshift(i as u32).expect("Failed to unshift(..)");
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Churn (auto-shrink)
// =============================================================================

fn bench_drain_from_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_from_tail");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        let data: Vec<u32> = (0..size).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut vec| {
                    while let Some(elmt) = vec.pop() {
                        black_box(elmt);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("Vector", size), &data, |b, data| {
            b.iter_batched(
                || Vector::import(data).expect("Failed to import(..)"),
                |mut vector| {
                    while let Ok(elmt) = vector.pull() {
                        black_box(elmt);
                    }
                    black_box(vector)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_push_pull_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pull_boundary");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        let rounds = 1_000;
        group.throughput(Throughput::Elements(rounds));

        group.bench_with_input(BenchmarkId::new("Vector", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let data: Vec<u32> = (0..s).collect();
                    Vector::import(&data).expect("Failed to import(..)")
                },
                |mut vector| {
                    for i in 0..rounds {
                        vector.push(i as u32).expect("Failed to push(..)");
                        black_box(vector.pull().expect("Failed to pull()"));
                    }
                    black_box(vector)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Queries
// =============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    configure_group(&mut group);

    for size in [1_000u32, 100_000] {
        let data: Vec<u32> = (0..size).map(|i| i / 3).collect();
        let vector = Vector::import(&data).expect("Failed to import(..)");
        let key = size / 6;

        group.bench_with_input(BenchmarkId::new("search", size), &key, |b, key| {
            b.iter(|| black_box(vector.search(key, |a, b| a.cmp(b))));
        });

        group.bench_with_input(BenchmarkId::new("find", size), &key, |b, key| {
            b.iter(|| black_box(vector.find(|e| e == key)));
        });
    }

    group.finish();
}

criterion_group!(
    vector_benches,
    bench_push,
    bench_extend,
    bench_unshift,
    bench_drain_from_tail,
    bench_push_pull_boundary,
    bench_search
);

criterion_main!(vector_benches);
