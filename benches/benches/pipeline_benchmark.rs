//! Benchmarks of the pure pipeline stages: extraction and spike scoring.
//!
//! Run with: `cargo bench --package trendscope-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use trendscope_bench::{last_day, synthetic_series};
use trendscope_lib::{DateWindow, extract, score_spike};

const SIZES: [usize; 3] = [9, 90, 365];

fn extract_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for days in SIZES {
        let raw = synthetic_series(days);
        let target = last_day(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &raw, |b, raw| {
            b.iter(|| extract(black_box(raw), black_box(target)));
        });
    }

    group.finish();
}

fn score_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_spike");

    for days in SIZES {
        let target = last_day(days);
        let extracted = extract(&synthetic_series(days), target);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(days),
            &extracted,
            |b, extracted| {
                b.iter(|| {
                    score_spike(
                        black_box(target),
                        black_box(extracted.target_value),
                        black_box(&extracted.series),
                    )
                });
            },
        );
    }

    group.finish();
}

fn window_benchmark(c: &mut Criterion) {
    let target = last_day(365);
    c.bench_function("window_ending_at", |b| {
        b.iter(|| DateWindow::ending_at(black_box(target)));
    });
}

criterion_group!(benches, extract_benchmark, score_benchmark, window_benchmark);
criterion_main!(benches);
