// Map Benchmarks
//
// Criterion counterpart of the CLI harness: throughput of each backend
// on the random-insert and random-find workloads.
//
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mapbench::backend::{DenseMap, JudyMap, MapBackend, SparseMap, SppMap, StdMap};
use mapbench::hash::XxSeeded;
use mapbench::keys;

const N: usize = 10_000;

fn insert_all<M: MapBackend>(map: &mut M, keys: &[u64]) {
    for &key in keys {
        map.insert(key);
    }
}

fn find_all<M: MapBackend>(map: &M, keys: &[u64]) -> usize {
    keys.iter().filter(|&&key| map.contains(key)).count()
}

fn bench_random_insert(c: &mut Criterion) {
    let keys: Vec<u64> = keys::random(keys::HIT_SEED).take(N).collect();
    let mut group = c.benchmark_group("random_insert_10k");

    group.bench_function("judy", |b| {
        b.iter(|| {
            let mut map = JudyMap::new();
            insert_all(&mut map, &keys);
            black_box(&map);
        })
    });
    group.bench_function("spp", |b| {
        b.iter(|| {
            let mut map = SppMap::with_hasher(XxSeeded);
            insert_all(&mut map, &keys);
            black_box(&map);
        })
    });
    group.bench_function("dense", |b| {
        b.iter(|| {
            let mut map = DenseMap::with_hasher(XxSeeded);
            insert_all(&mut map, &keys);
            black_box(&map);
        })
    });
    group.bench_function("sparse", |b| {
        b.iter(|| {
            let mut map = SparseMap::with_hasher(XxSeeded);
            insert_all(&mut map, &keys);
            black_box(&map);
        })
    });
    group.bench_function("std", |b| {
        b.iter(|| {
            let mut map = StdMap::with_hasher(XxSeeded);
            insert_all(&mut map, &keys);
            black_box(&map);
        })
    });
    group.finish();
}

fn bench_random_find(c: &mut Criterion) {
    let keys: Vec<u64> = keys::random(keys::HIT_SEED).take(N).collect();
    let probes: Vec<u64> = keys::random(keys::MISS_SEED).take(N).collect();
    let mut group = c.benchmark_group("random_find_10k");

    let mut judy = JudyMap::new();
    insert_all(&mut judy, &keys);
    group.bench_function("judy", |b| b.iter(|| black_box(find_all(&judy, &probes))));

    let mut spp = SppMap::with_hasher(XxSeeded);
    insert_all(&mut spp, &keys);
    group.bench_function("spp", |b| b.iter(|| black_box(find_all(&spp, &probes))));

    let mut dense = DenseMap::with_hasher(XxSeeded);
    insert_all(&mut dense, &keys);
    group.bench_function("dense", |b| b.iter(|| black_box(find_all(&dense, &probes))));

    let mut sparse = SparseMap::with_hasher(XxSeeded);
    insert_all(&mut sparse, &keys);
    group.bench_function("sparse", |b| {
        b.iter(|| black_box(find_all(&sparse, &probes)))
    });

    let mut std_map = StdMap::with_hasher(XxSeeded);
    insert_all(&mut std_map, &keys);
    group.bench_function("std", |b| {
        b.iter(|| black_box(find_all(&std_map, &probes)))
    });

    group.finish();
}

criterion_group!(benches, bench_random_insert, bench_random_find);
criterion_main!(benches);
