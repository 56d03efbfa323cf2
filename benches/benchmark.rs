//! ReliefF benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (observations)
//! - Attribute count
//! - Neighbor count K
//! - Sample count
//! - Classification vs regression
//! - Categorical attributes
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use relieff_rs::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Two informative attributes plus Gaussian noise attributes, with a
/// threshold class label.
fn generate_class_data(size: usize, dims: usize, seed: u64) -> (Vec<f64>, Outcome<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut x = Vec::with_capacity(size * dims);
    let mut labels = Vec::with_capacity(size);
    for _ in 0..size {
        let row: Vec<f64> = (0..dims).map(|_| noise.sample(&mut rng)).collect();
        let score = row[0] + 0.5 * row[1usize.min(dims - 1)];
        labels.push(if score > 0.0 { "pos" } else { "neg" });
        x.extend(row);
    }
    (x, Outcome::categorical(labels))
}

/// Continuous outcome driven by the first attribute with Gaussian noise.
fn generate_regression_data(size: usize, dims: usize, seed: u64) -> (Vec<f64>, Outcome<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<f64> = (0..size * dims).map(|_| rng.random::<f64>()).collect();
    let y: Vec<f64> = (0..size)
        .map(|i| (x[i * dims] * 6.0).sin() + noise.sample(&mut rng))
        .collect();
    (x, Outcome::numeric(y))
}

/// Small integer codes for categorical attributes.
fn generate_categorical_data(size: usize, dims: usize, seed: u64) -> (Vec<f64>, Outcome<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let x: Vec<f64> = (0..size * dims)
        .map(|_| rng.random_range(0..4u32) as f64)
        .collect();
    let labels: Vec<&str> = (0..size)
        .map(|i| if x[i * dims] < 2.0 { "a" } else { "b" })
        .collect();
    (x, Outcome::categorical(labels))
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [500, 2_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_class_data(size, 10, 42);

        group.bench_with_input(BenchmarkId::new("classification", size), &size, |b, _| {
            b.iter(|| {
                Relieff::new()
                    .dimensions(10)
                    .sample_count(200)
                    .build()
                    .unwrap()
                    .fit_seeded(black_box(&x), black_box(&y), 7)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions");
    group.sample_size(20);

    for dims in [2, 8, 32] {
        let (x, y) = generate_class_data(2_000, dims, 42);

        group.bench_with_input(BenchmarkId::new("classification", dims), &dims, |b, &dims| {
            b.iter(|| {
                Relieff::new()
                    .dimensions(dims)
                    .sample_count(200)
                    .build()
                    .unwrap()
                    .fit_seeded(black_box(&x), black_box(&y), 7)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");
    group.sample_size(20);

    let (x, y) = generate_class_data(2_000, 8, 42);
    for k in [1, 10, 50] {
        group.bench_with_input(BenchmarkId::new("classification", k), &k, |b, &k| {
            b.iter(|| {
                Relieff::new()
                    .dimensions(8)
                    .neighbors(k)
                    .sample_count(200)
                    .build()
                    .unwrap()
                    .fit_seeded(black_box(&x), black_box(&y), 7)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_sample_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_count");
    group.sample_size(20);

    let (x, y) = generate_class_data(2_000, 8, 42);
    for m in [100, 500, 2_000] {
        group.bench_with_input(BenchmarkId::new("classification", m), &m, |b, &m| {
            b.iter(|| {
                Relieff::new()
                    .dimensions(8)
                    .sample_count(m as u32)
                    .build()
                    .unwrap()
                    .fit_seeded(black_box(&x), black_box(&y), 7)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");
    group.sample_size(20);

    for size in [500, 2_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_regression_data(size, 8, 42);

        group.bench_with_input(BenchmarkId::new("rrelieff", size), &size, |b, _| {
            b.iter(|| {
                Relieff::new()
                    .dimensions(8)
                    .sample_count(200)
                    .build()
                    .unwrap()
                    .fit_seeded(black_box(&x), black_box(&y), 7)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_categorical(c: &mut Criterion) {
    let mut group = c.benchmark_group("categorical");
    group.sample_size(20);

    let (x, y) = generate_categorical_data(2_000, 8, 42);
    group.bench_function("hamming", |b| {
        b.iter(|| {
            Relieff::new()
                .dimensions(8)
                .categorical_attributes(true)
                .sample_count(200)
                .build()
                .unwrap()
                .fit_seeded(black_box(&x), black_box(&y), 7)
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_dimensions,
    bench_neighbors,
    bench_sample_count,
    bench_regression,
    bench_categorical,
);
criterion_main!(benches);
