//! Benchmarks for lazyseq pipelines vs the equivalent std iterator chains
//!
//! Run with: `cargo bench --bench pipeline`

use std::collections::LinkedList;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lazyseq::prelude::*;

fn bench_map_filter_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter_sum");

    for size in [16u64, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("lazyseq", size), &size, |b, &size| {
            b.iter(|| {
                let total = range(0, black_box(size))
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .fold(0u64, |acc, x| acc + x);
                black_box(total);
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| {
                let total: u64 = (0..black_box(size)).map(|x| x * 3).filter(|x| x % 2 == 0).sum();
                black_box(total);
            });
        });
    }

    group.finish();
}

fn bench_skip_step_take(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_step_take_list");

    for size in [64usize, 1024] {
        let list: LinkedList<u32> = (0..size as u32).collect();

        group.bench_with_input(BenchmarkId::new("lazyseq", size), &list, |b, list| {
            b.iter(|| {
                let picked = from_forward(list).skip(2).step_by(3).take(size / 8).to_vec();
                black_box(picked);
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &list, |b, list| {
            b.iter(|| {
                let picked: Vec<u32> = list.iter().copied().skip(2).step_by(3).take(size / 8).collect();
                black_box(picked);
            });
        });
    }

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    let data: Vec<u32> = (0..4096).collect();

    // Fast length answers in O(1); the filtered pipeline has to drain.
    group.bench_function("fast_len", |b| {
        b.iter(|| black_box(from_bidirectional(&data).zip(range(0u32, 5000)).step_by(7).count()));
    });

    group.bench_function("drained", |b| {
        b.iter(|| black_box(from_bidirectional(&data).filter(|_| true).step_by(7).count()));
    });

    group.finish();
}

fn bench_reverse_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_zip");
    let left: Vec<u32> = (0..4096).collect();
    let right: Vec<u32> = (0..1000).collect();

    group.bench_function("lazyseq", |b| {
        b.iter(|| {
            let total = from_bidirectional(&left)
                .zip(from_bidirectional(&right))
                .rev()
                .fold(0u64, |acc, (l, r)| acc + u64::from(l * r));
            black_box(total);
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let total = left
                .iter()
                .zip(right.iter())
                .rev()
                .fold(0u64, |acc, (l, r)| acc + u64::from(l * r));
            black_box(total);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_map_filter_sum,
    bench_skip_step_take,
    bench_count,
    bench_reverse_zip
);
criterion_main!(benches);
