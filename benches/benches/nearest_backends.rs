// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thicket_index::{Extent, LinearIndex, PointIndex};

const EXTENT: Extent = Extent::from_size(2000.0, 2000.0);

fn gen_uniform_points(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random_range(0.0..2000.0), rng.random_range(0.0..2000.0)))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx: f64 = rng.random_range(spread..2000.0 - spread);
        let cy: f64 = rng.random_range(spread..2000.0 - spread);
        for _ in 0..per_cluster {
            let dx = rng.random_range(-spread..spread);
            let dy = rng.random_range(-spread..spread);
            out.push((cx + dx, cy + dy));
        }
    }
    out
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000usize, 10_000] {
        let points = gen_uniform_points(n, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_n{n}"), |b| {
            b.iter_batched(
                || PointIndex::<u32>::new(EXTENT).unwrap(),
                |mut idx| {
                    for (i, &(x, y)) in points.iter().enumerate() {
                        let _ = idx.insert(x, y, i as u32);
                    }
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter_batched(
                || LinearIndex::<u32>::new(EXTENT).unwrap(),
                |mut idx| {
                    for (i, &(x, y)) in points.iter().enumerate() {
                        let _ = idx.insert(x, y, i as u32);
                    }
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let queries = gen_uniform_points(1_000, 2);
    let datasets = [
        ("uniform_n1000", gen_uniform_points(1_000, 3)),
        ("uniform_n10000", gen_uniform_points(10_000, 4)),
        ("clustered_n10000", gen_clustered_points(20, 500, 40.0)),
    ];
    for (name, points) in &datasets {
        let mut qt = PointIndex::<u32>::new(EXTENT).unwrap();
        let mut lin = LinearIndex::<u32>::new(EXTENT).unwrap();
        for (i, &(x, y)) in points.iter().enumerate() {
            let _ = qt.insert(x, y, i as u32);
            let _ = lin.insert(x, y, i as u32);
        }
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("quadtree_{name}"), |b| {
            b.iter(|| {
                for &(x, y) in &queries {
                    black_box(qt.nearest(x, y).ok());
                }
            });
        });
        group.bench_function(format!("flatvec_{name}"), |b| {
            b.iter(|| {
                for &(x, y) in &queries {
                    black_box(lin.nearest(x, y).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_quadtree_tuning(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_bucket_capacity");
    let points = gen_uniform_points(10_000, 5);
    let queries = gen_uniform_points(1_000, 6);
    for &cap in &[1usize, 4, 8, 16, 64] {
        let mut idx = PointIndex::<u32>::with_quadtree_params(EXTENT, cap, 24).unwrap();
        for (i, &(x, y)) in points.iter().enumerate() {
            let _ = idx.insert(x, y, i as u32);
        }
        group.bench_function(format!("cap{cap}"), |b| {
            b.iter(|| {
                for &(x, y) in &queries {
                    black_box(idx.nearest(x, y).ok());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_nearest, bench_quadtree_tuning);
criterion_main!(benches);
