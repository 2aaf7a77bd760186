// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for reveal coordination.
//!
//! Measures the performance of:
//! - A full intersection sweep over a large observation set
//! - Ticking a coordinator with many scheduled reveals

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reveal::reveal::{ElementId, IntersectionObserver, ObserverOptions, RevealCoordinator};
use std::hint::black_box;
use std::time::{Duration, Instant};

const ELEMENTS: u32 = 1_000;
const ROW_HEIGHT: f32 = 200.0;

fn rects() -> Vec<(ElementId, iced::Rectangle)> {
    (0..ELEMENTS)
        .map(|index| {
            (
                ElementId::new(index),
                iced::Rectangle {
                    x: 0.0,
                    y: index as f32 * ROW_HEIGHT,
                    width: 800.0,
                    height: ROW_HEIGHT * 0.9,
                },
            )
        })
        .collect()
}

/// Benchmark one sweep of the observer geometry over every element.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    let rects = rects();
    let observer = IntersectionObserver::new(ObserverOptions::default());
    let viewport = iced::Rectangle {
        x: 0.0,
        y: ELEMENTS as f32 * ROW_HEIGHT / 2.0,
        width: 800.0,
        height: 650.0,
    };

    group.bench_function("sweep_1000", |b| {
        b.iter(|| {
            let mut coordinator = RevealCoordinator::new();
            for (id, _) in &rects {
                coordinator.register(*id, Duration::ZERO);
            }
            let now = Instant::now();
            for (id, rect) in &rects {
                if coordinator.is_observing(*id) && observer.is_intersecting(*rect, viewport) {
                    coordinator.on_intersect(*id, now);
                }
            }
            black_box(&coordinator);
        });
    });

    group.finish();
}

/// Benchmark ticking a coordinator with every element scheduled.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    group.bench_function("tick_1000_scheduled", |b| {
        b.iter(|| {
            let mut coordinator = RevealCoordinator::new();
            let now = Instant::now();
            for index in 0..ELEMENTS {
                let id = ElementId::new(index);
                coordinator.register(id, Duration::from_millis(u64::from(index % 400) + 1));
                coordinator.on_intersect(id, now);
            }
            let fired = coordinator.tick(now + Duration::from_secs(1));
            black_box(fired);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_tick);
criterion_main!(benches);
