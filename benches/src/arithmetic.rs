use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use metron::prelude::*;
use rand::Rng;

const TEST_SIZES: &[usize] = &[100, 1000, 10000];

fn generate(size: usize) -> Vec<(f64, f64)> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| (rng.random_range(0.0..1e3), rng.random_range(1.0..1e3)))
        .collect()
}

fn speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("metron/arithmetic/speed");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(BenchmarkId::new("f64", size), &generate(size), |b, data| {
            b.iter(|| {
                data.iter()
                    .map(|&(d, t)| black_box(d * 1609.344) / black_box(t * 3600.0) * 3.6)
                    .sum::<f64>()
            })
        });
        group.bench_with_input(
            BenchmarkId::new("Quantity", size),
            &generate(size),
            |b, data| {
                b.iter(|| {
                    data.iter()
                        .map(|&(d, t)| {
                            black_box(miles(d))
                                .per(black_box(hours(t)))
                                .in_kilometers_per_hour()
                        })
                        .sum::<f64>()
                })
            },
        );
    });
    group.finish();
}

fn temperature(c: &mut Criterion) {
    let mut group = c.benchmark_group("metron/arithmetic/temperature");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(BenchmarkId::new("f64", size), &generate(size), |b, data| {
            b.iter(|| {
                data.iter()
                    .map(|&(c, _)| black_box(c) * 9.0 / 5.0 + 32.0)
                    .sum::<f64>()
            })
        });
        group.bench_with_input(
            BenchmarkId::new("Quantity", size),
            &generate(size),
            |b, data| {
                b.iter(|| {
                    data.iter()
                        .map(|&(c, _)| degrees_celsius(black_box(c)).in_degrees_fahrenheit())
                        .sum::<f64>()
                })
            },
        );
    });
    group.finish();
}

criterion_group!(benches, speed, temperature);
criterion_main!(benches);
