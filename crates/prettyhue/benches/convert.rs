use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use prettyhue::Color;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("parse-hex", |b| {
        b.iter(|| Color::new(black_box("#4f933e80")))
    });

    group.bench_function("parse-rgb", |b| {
        b.iter(|| Color::new(black_box("rgba(79 147 62 / 50%)")))
    });

    group.bench_function("parse-hsl", |b| {
        b.iter(|| Color::new(black_box("hsla(108deg 41% 41% / 50%)")))
    });

    group.bench_function("to-hsl", |b| {
        let green = Color::new("#4f933e").expect("valid hex literal");
        b.iter(|| black_box(&green).to_hsl(false))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
