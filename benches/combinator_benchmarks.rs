//! Benchmarks for the concurrent combinators and array helpers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;
use tidbits::{filter, flatten, map, resolved, unique, unique_by_eq};

/// Benchmark map with already-completed callbacks
fn bench_map_ready(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_ready");
    let runtime = tokio::runtime::Runtime::new().expect("runtime");

    for size in [10usize, 100, 1000, 10_000] {
        let items: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.to_async(&runtime)
                .iter(|| async move { map(black_box(items), |v, _, _| resolved(v * 2)).await });
        });
    }

    group.finish();
}

/// Benchmark filter with callbacks that yield once before completing
fn bench_filter_yielding(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_yielding");
    let runtime = tokio::runtime::Runtime::new().expect("runtime");

    for size in [10usize, 100, 1000] {
        let items: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.to_async(&runtime).iter(|| async move {
                filter(black_box(items), |v, _, _| {
                    let v = *v;
                    async move {
                        tokio::task::yield_now().await;
                        Ok::<_, std::convert::Infallible>(v % 2 == 0)
                    }
                })
                .await
            });
        });
    }

    group.finish();
}

/// Benchmark hash-based versus equality-based deduplication
fn bench_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique");
    let numbers: Vec<u32> = (0..2000).map(|i| i % 100).collect();
    let values: Vec<Value> = numbers.iter().map(|n| json!(n)).collect();

    group.bench_function("hash", |b| b.iter(|| unique(black_box(numbers.clone()))));
    group.bench_function("eq", |b| b.iter(|| unique_by_eq(black_box(values.clone()))));
    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let grouped: Value = (0..100)
        .map(|i| (format!("group_{}", i), json!([i, i + 1, i + 2])))
        .collect::<serde_json::Map<String, Value>>()
        .into();

    c.bench_function("flatten_object", |b| b.iter(|| flatten(black_box(&grouped))));
}

criterion_group!(
    benches,
    bench_map_ready,
    bench_filter_yielding,
    bench_unique,
    bench_flatten
);
criterion_main!(benches);
