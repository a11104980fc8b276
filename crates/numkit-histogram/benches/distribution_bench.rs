//! Benchmarks for fixed-width distribution building
//!
//! Run with: cargo bench -p numkit-histogram --bench distribution_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use numkit_histogram::DistributionBuilder;

fn samples(n: usize) -> Vec<f64> {
    // Deterministic spread over [0, 100)
    (0..n).map(|i| ((i * 7919) % 10_000) as f64 / 100.0).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution_build");

    for &n in &[100usize, 10_000, 1_000_000] {
        let data = samples(n);
        group.throughput(Throughput::Elements(n as u64));

        for &step in &[0.1, 1.0, 10.0] {
            let builder = DistributionBuilder::new(step);
            group.bench_with_input(
                BenchmarkId::new(format!("step{step}"), n),
                &data,
                |b, data| b.iter(|| builder.build(black_box(data)).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
