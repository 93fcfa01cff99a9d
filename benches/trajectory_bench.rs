//! Benchmark tests for trajectory generation performance.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use pendulum_sim::constants::Constants;
use pendulum_sim::params::SimulationParameters;
use pendulum_sim::summary::SummaryStatistics;
use pendulum_sim::trajectory::{generate, generate_with};

/// Benchmark trajectory generation across pendulum lengths.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(Constants::new().frame_count as u64));

    for length in [0.1, 1.0, 10.0] {
        let params = SimulationParameters::new(length, 30.0, 1.0).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(length),
            &params,
            |b, params| b.iter(|| generate(params).unwrap()),
        );
    }
    group.finish();
}

/// Benchmark generation at larger sample counts.
fn bench_generate_dense(c: &mut Criterion) {
    let params = SimulationParameters::default();
    let mut group = c.benchmark_group("generate_dense");

    for frame_count in [500_usize, 5_000, 50_000] {
        let constants = Constants {
            frame_count,
            ..Constants::new()
        };
        group.throughput(Throughput::Elements(frame_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(frame_count),
            &constants,
            |b, constants| b.iter(|| generate_with(&params, constants).unwrap()),
        );
    }
    group.finish();
}

/// Benchmark the summary reduction alone.
fn bench_summary(c: &mut Criterion) {
    let params = SimulationParameters::default();
    let (trajectory, _) = generate(&params).unwrap();

    c.bench_function("summary_from_trajectory", |b| {
        b.iter(|| SummaryStatistics::from_trajectory(&trajectory, params.length_m))
    });
}

criterion_group!(benches, bench_generate, bench_generate_dense, bench_summary);
criterion_main!(benches);
