// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use thicket_rrt::{Rrt, RrtConfig};

fn config(budget: usize) -> RrtConfig {
    RrtConfig::new(
        Point::new(50.0, 500.0),
        Point::new(750.0, 100.0),
        Size::new(800.0, 600.0),
        100.0,
    )
    .with_node_budget(budget)
}

fn bench_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("rrt_grow");
    for &budget in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(budget as u64));
        group.bench_function(format!("budget{budget}"), |b| {
            b.iter_batched(
                || Rrt::from_seed(config(budget), 0xFEED).unwrap(),
                |mut rrt| {
                    while !rrt.is_budget_exhausted() {
                        rrt.step().unwrap();
                        black_box(rrt.drain_dirty());
                    }
                    black_box(rrt.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grow);
criterion_main!(benches);
