use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use pagebench::harness::select_median;
use pagebench::report::{MetricBlock, RunReport};

fn reports(n: usize) -> Vec<RunReport> {
    (0..n)
        .map(|i| RunReport {
            score: ((i * 7919) % 1000) as f64 / 1000.0,
            metrics: MetricBlock::default(),
        })
        .collect()
}

fn bench_select_median(c: &mut Criterion) {
    for &n in &[50usize, 500, 5000] {
        let sample = reports(n);
        c.bench_function(&format!("select_median_{}", n), |b| {
            b.iter(|| select_median(black_box(sample.clone())).unwrap());
        });
    }
}

criterion_group!(benches, bench_select_median);
criterion_main!(benches);
