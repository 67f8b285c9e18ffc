use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use metron::prelude::*;
use rand::Rng;

const TEST_SIZES: &[usize] = &[100, 1000, 10000];

fn generate(size: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(-1e3..1e3)).collect()
}

fn sort_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("metron/sort");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(BenchmarkId::new("f64", size), &generate(size), |b, data| {
            b.iter(|| {
                let mut values = data.clone();
                values.sort_by(f64::total_cmp);
                black_box(values)
            })
        });
        group.bench_with_input(
            BenchmarkId::new("Quantity", size),
            &generate(size).into_iter().map(meters).collect_vec(),
            |b, data| {
                b.iter(|| {
                    let mut values = data.clone();
                    sort(&mut values);
                    black_box(values)
                })
            },
        );
    });
    group.finish();
}

fn extrema(c: &mut Criterion) {
    let mut group = c.benchmark_group("metron/extrema");

    TEST_SIZES.iter().for_each(|&size| {
        group.bench_with_input(
            BenchmarkId::new("Quantity", size),
            &generate(size).into_iter().map(meters).collect_vec(),
            |b, data| b.iter(|| (minimum(data.iter().copied()), maximum(data.iter().copied()))),
        );
    });
    group.finish();
}

criterion_group!(benches, sort_lengths, extrema);
criterion_main!(benches);
