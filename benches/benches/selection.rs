// Copyright 2025 the Promenade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use promenade_selection::{SelectionSet, distinct, distinct_hashed};

fn bench_set_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/set_filter");

    for len in [16usize, 128, 1_024, 8_192] {
        let items: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("half_survive", len), &items, |b, items| {
            b.iter_batched(
                || SelectionSet::new(items.iter().copied()),
                |mut set| {
                    set.set_filter(|n| n % 2 == 0);
                    black_box(set);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wraparound_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/next_full_cycle");

    for len in [3usize, 64, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || SelectionSet::new(0..(len as u32)),
                |mut set| {
                    for _ in 0..len {
                        set.next();
                    }
                    black_box(set);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/distinct");

    // Hypothesis: the quadratic scan wins for chip-sized inputs and loses
    // to the hashed variant once inputs grow past a few hundred values.
    for len in [8usize, 64, 512, 4_096] {
        let values: Vec<u32> = (0..(len as u32)).map(|n| n % 16).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("scan", len), &values, |b, values| {
            b.iter(|| black_box(distinct(values.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("hashed", len), &values, |b, values| {
            b.iter(|| black_box(distinct_hashed(values.iter().copied())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_filter,
    bench_wraparound_navigation,
    bench_distinct
);
criterion_main!(benches);
