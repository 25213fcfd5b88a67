//! Normalize, aggregate and CSV benchmarks on synthetic snapshots.
//!
//! Run with: `cargo bench --package carpark-bench`

use carpark_bench::synthetic_snapshot;
use carpark_lib::{AvailabilityReport, Reportable, normalize};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Roughly the live feed size, and an order of magnitude either side.
const SIZES: [usize; 3] = [200, 2_000, 20_000];

fn normalize_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("failed to build tokio runtime");
    let mut group = c.benchmark_group("normalize");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.to_async(&rt).iter_batched(
                || synthetic_snapshot(size),
                |snapshot| async move {
                    let stream = normalize(snapshot).expect("synthetic counts are numeric");
                    black_box(AvailabilityReport::collect(stream).await)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn csv_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("failed to build tokio runtime");
    let mut group = c.benchmark_group("csv");

    for size in SIZES {
        let report = rt.block_on(async {
            let stream = normalize(synthetic_snapshot(size)).expect("synthetic counts are numeric");
            AvailabilityReport::collect(stream).await
        });

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &report, |b, report| {
            b.iter(|| {
                let mut out = Vec::with_capacity(report.len() * 48);
                report.write_csv(&mut out).expect("in-memory write");
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, normalize_benchmark, csv_benchmark);
criterion_main!(benches);
