// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use understory_ordered_index::AvlTree;

fn gen_ascending_keys(n: usize, spacing: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * spacing).collect()
}

fn gen_shuffled_keys(n: usize, spacing: f64) -> Vec<f64> {
    let mut keys = gen_ascending_keys(n, spacing);
    keys.shuffle(&mut StdRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF));
    keys
}

fn gen_windows(count: usize, extent: f64, width: f64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let lo = rng.gen_range(0.0..(extent - width).max(1.0));
            (lo, lo + width)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        for (label, keys) in [
            ("ascending", gen_ascending_keys(n, 10.0)),
            ("shuffled", gen_shuffled_keys(n, 10.0)),
        ] {
            group.bench_function(format!("avl_{label}_n{n}"), |b| {
                b.iter_batched(
                    AvlTree::<f64, u32>::new,
                    |mut tree| {
                        for (i, k) in keys.iter().copied().enumerate() {
                            tree.insert(k, i as u32);
                        }
                        black_box(tree.height());
                    },
                    BatchSize::SmallInput,
                )
            });
            group.bench_function(format!("sorted_vec_{label}_n{n}"), |b| {
                b.iter_batched(
                    Vec::<(f64, u32)>::new,
                    |mut v| {
                        for (i, k) in keys.iter().copied().enumerate() {
                            let at = v.partition_point(|(x, _)| *x < k);
                            v.insert(at, (k, i as u32));
                        }
                        black_box(v.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    for &n in &[1_000usize, 10_000, 100_000] {
        let keys = gen_shuffled_keys(n, 10.0);
        let extent = n as f64 * 10.0;
        let windows = gen_windows(256, extent, 1200.0);

        let tree: AvlTree<f64, u32> = keys.iter().copied().zip(0..).collect();
        let flat: Vec<(f64, u32)> = keys.iter().copied().zip(0..).collect();
        let mut ordered: BTreeMap<u64, u32> = BTreeMap::new();
        for (k, i) in keys.iter().copied().zip(0..) {
            // Non-negative floats keep their order as raw bits.
            ordered.insert(k.to_bits(), i);
        }

        group.throughput(Throughput::Elements(windows.len() as u64));
        group.bench_function(format!("avl_inorder_n{n}"), |b| {
            b.iter(|| {
                let mut hits = 0;
                for &(lo, hi) in &windows {
                    hits += tree.range(lo, hi).count();
                }
                black_box(hits)
            })
        });
        group.bench_function(format!("avl_preorder_n{n}"), |b| {
            b.iter(|| {
                let mut hits = 0;
                for &(lo, hi) in &windows {
                    hits += tree.range_preorder(lo, hi).len();
                }
                black_box(hits)
            })
        });
        group.bench_function(format!("linear_scan_n{n}"), |b| {
            b.iter(|| {
                let mut hits = 0;
                for &(lo, hi) in &windows {
                    hits += flat.iter().filter(|(k, _)| lo <= *k && *k <= hi).count();
                }
                black_box(hits)
            })
        });
        group.bench_function(format!("btreemap_n{n}"), |b| {
            b.iter(|| {
                let mut hits = 0;
                for &(lo, hi) in &windows {
                    hits += ordered.range(lo.to_bits()..=hi.to_bits()).count();
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &n in &[1_000usize, 10_000] {
        let keys = gen_shuffled_keys(n, 10.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("avl_shuffled_n{n}"), |b| {
            b.iter_batched(
                || keys.iter().copied().zip(0..).collect::<AvlTree<f64, u32>>(),
                |mut tree| {
                    for k in &keys {
                        black_box(tree.remove(k));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("avl_remove_below_n{n}"), |b| {
            b.iter_batched(
                || keys.iter().copied().zip(0..).collect::<AvlTree<f64, u32>>(),
                |mut tree| {
                    black_box(tree.remove_below(n as f64 * 5.0).len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_range_query, bench_remove);
criterion_main!(benches);
