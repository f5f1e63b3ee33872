//! Benchmarks for the VaR/ES estimators.
//!
//! Run with: cargo bench -p tailrisk-risk

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tailrisk_math::sampling::random_source;
use tailrisk_risk::params::{HistoricalWindow, RiskParameters};
use tailrisk_risk::var::{historical_var_es, parametric_var_es};

fn default_params() -> RiskParameters {
    RiskParameters::new(1_000_000.0, 0.001, 0.02, 0.95).unwrap()
}

fn bench_parametric(c: &mut Criterion) {
    let params = default_params();
    c.bench_function("parametric_var_es", |b| {
        b.iter(|| parametric_var_es(black_box(&params)).unwrap())
    });
}

fn bench_historical(c: &mut Criterion) {
    let params = default_params();
    let mut group = c.benchmark_group("historical_var_es");

    for size in [50usize, 250, 1_000, 100_000] {
        let window = HistoricalWindow::new(size).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &window, |b, &window| {
            let mut rng = random_source(Some(42));
            b.iter(|| historical_var_es(black_box(&params), window, &mut rng).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parametric, bench_historical);
criterion_main!(benches);
