// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hoard_array::ArrayList;
use hoard_core::{CapacityStrategy, GrowthConfig};
use hoard_list::LinkedList;

const STRATEGIES: [(&str, CapacityStrategy); 3] = [
    ("strict", CapacityStrategy::Strict),
    ("half", CapacityStrategy::Half),
    ("double", CapacityStrategy::Double),
];

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench array_list
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

fn list_with(strategy: CapacityStrategy) -> ArrayList<u64> {
    ArrayList::with_config(GrowthConfig::new().with_strategy(strategy))
        .expect("Failed to create ArrayList")
}

fn filled(size: usize) -> ArrayList<u64> {
    let mut list = ArrayList::new();
    list.add_all((0..size).map(|i| i as u64)).expect("Failed to fill ArrayList");
    list
}

// =============================================================================
// Append
// =============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_list_add");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s as u64 {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });

        for (name, strategy) in STRATEGIES {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &s| {
                b.iter(|| {
                    let mut list = list_with(strategy);
                    for i in 0..s as u64 {
                        list.add(black_box(i)).expect("add failed");
                    }
                    black_box(list);
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &size, |b, &s| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..s as u64 {
                    list.add(black_box(i)).expect("add failed");
                }
                black_box(list);
            });
        });
    }
    group.finish();
}

// =============================================================================
// Front insertion / removal
// =============================================================================

fn benchmark_add_at_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_list_add_at_front");
    configure_group(&mut group);

    for size in [100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        for (name, strategy) in STRATEGIES {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &s| {
                b.iter(|| {
                    let mut list = list_with(strategy);
                    for i in 0..s as u64 {
                        list.add_at(black_box(i), 0).expect("add_at failed");
                    }
                    black_box(list);
                });
            });
        }
    }
    group.finish();
}

fn benchmark_remove_at_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_list_remove_at_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ArrayList", size), &size, |b, &s| {
            b.iter_batched(
                || filled(s),
                |mut list| {
                    while let Some(value) = list.remove_at(0) {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// =============================================================================
// Sort
// =============================================================================

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_list_sort");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut rng = SmallRng::seed_from_u64(0x5EED);
        let values: Vec<u64> = (0..size).map(|_| rng.random()).collect();

        group.bench_with_input(BenchmarkId::new("random", size), &values, |b, values| {
            b.iter_batched(
                || {
                    let mut list = ArrayList::new();
                    list.add_all(values.iter().copied())
                        .expect("Failed to fill ArrayList");
                    list
                },
                |mut list| {
                    list.sort(|a, b| a.cmp(b));
                    black_box(list);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |b, &s| {
            b.iter_batched(
                || filled(s),
                |mut list| {
                    list.sort(|a, b| a.cmp(b));
                    black_box(list);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("slice::sort_unstable", size), &values, |b, values| {
            b.iter_batched(
                || values.clone(),
                |mut vec| {
                    vec.sort_unstable();
                    black_box(vec);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_add_at_front,
    benchmark_remove_at_front,
    benchmark_sort
);
criterion_main!(benches);
