// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use understory_obstacle_window::{Obstacle, ObstacleKind, ObstacleWindow, WindowConfig};

fn gen_course(count: usize, spacing: f64) -> Vec<Obstacle> {
    (0..count)
        .map(|i| {
            let kind = ObstacleKind::ALL[i % ObstacleKind::ALL.len()];
            let lane = if i % 2 == 0 { 225.0 } else { 325.0 };
            Obstacle::new(i as f64 * spacing, lane, kind)
        })
        .collect()
}

fn bench_drive(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_window");
    for &n in &[1_000usize, 10_000] {
        let course = gen_course(n, 150.0);
        let length = n as f64 * 150.0;
        let ticks = (length / 25.0) as u64;
        group.throughput(Throughput::Elements(ticks));

        group.bench_function(format!("drive_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut w = ObstacleWindow::new(WindowConfig::default()).unwrap();
                    w.load_initial(course.iter().copied()).unwrap();
                    w
                },
                |mut w| {
                    let mut cursor = 0.0;
                    let mut seen = 0;
                    while cursor < length {
                        seen += w.visible(cursor).unwrap().len();
                        black_box(w.evict_passed(cursor).unwrap());
                        cursor += 25.0;
                    }
                    black_box(seen);
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("drive_with_spawns_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut w = ObstacleWindow::new(WindowConfig::default()).unwrap();
                    w.load_initial(course.iter().copied()).unwrap();
                    (w, StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD))
                },
                |(mut w, mut rng)| {
                    let mut cursor = 0.0;
                    let mut tick = 0_u64;
                    while cursor < length {
                        if tick % 8 == 0 {
                            black_box(w.spawn_random(cursor, &mut rng).unwrap());
                        }
                        black_box(w.visible(cursor).unwrap().len());
                        black_box(w.evict_passed(cursor).unwrap());
                        cursor += 25.0;
                        tick += 1;
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drive);
criterion_main!(benches);
