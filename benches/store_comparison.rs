use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;

use shelf_tree::{ArraySet, Key, ListSet, SkipSet};

const N: usize = 10_000;
const ORDER: usize = 64;

// ─── Helper functions to generate key workloads ─────────────────────────────

fn random_keys(n: usize) -> Vec<Key> {
    // Simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 88172645463325252;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        keys.push((x >> 33) as Key);
    }
    keys
}

/// Half present, half absent, interleaved. The generated keys are
/// non-negative, so negated probes always miss.
fn mixed_queries(keys: &[Key]) -> Vec<Key> {
    let mut queries = Vec::with_capacity(keys.len() * 2);
    for &key in keys {
        queries.push(key);
        queries.push(-key - 1);
    }
    queries
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("ArraySet", N), |b| {
        b.iter(|| {
            let mut set = ArraySet::with_order(ORDER);
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("ListSet", N), |b| {
        b.iter(|| {
            let mut set = ListSet::with_order(ORDER);
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("SkipSet", N), |b| {
        b.iter(|| {
            let mut set = SkipSet::with_order(ORDER);
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

// ─── Search ─────────────────────────────────────────────────────────────────

fn bench_search_mixed(c: &mut Criterion) {
    let keys = random_keys(N);
    let queries = mixed_queries(&keys);

    let array: ArraySet = keys.iter().copied().collect();
    let list: ListSet = keys.iter().copied().collect();
    let skip: SkipSet = keys.iter().copied().collect();
    let btree: BTreeSet<Key> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("search_mixed");

    group.bench_function(BenchmarkId::new("ArraySet", N), |b| {
        b.iter(|| queries.iter().filter(|&&q| array.contains(q)).count());
    });

    group.bench_function(BenchmarkId::new("ListSet", N), |b| {
        b.iter(|| queries.iter().filter(|&&q| list.contains(q)).count());
    });

    group.bench_function(BenchmarkId::new("SkipSet", N), |b| {
        b.iter(|| queries.iter().filter(|&&q| skip.contains(q)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| queries.iter().filter(|&&q| btree.contains(&q)).count());
    });

    group.finish();
}

// ─── Delete ─────────────────────────────────────────────────────────────────

fn bench_delete_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("ArraySet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<ArraySet>(),
            |mut set| {
                for &k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("ListSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<ListSet>(),
            |mut set| {
                for &k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("SkipSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<SkipSet>(),
            |mut set| {
                for &k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<Key>>(),
            |mut set| {
                for &k in &keys {
                    set.remove(&k);
                }
                set
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Order sweep ────────────────────────────────────────────────────────────

fn bench_order_sweep(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_by_order");

    for order in [4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("ArraySet", order), &order, |b, &order| {
            b.iter(|| {
                let mut set = ArraySet::with_order(order);
                for &k in &keys {
                    set.insert(k);
                }
                set
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_search_mixed,
    bench_delete_random,
    bench_order_sweep
);
criterion_main!(benches);
