//! Pool and Store Benchmarks
//!
//! - acquire while the pool is still building handles
//! - acquire on a full pool (recycling path)
//! - store lookups at different positions, and inserts
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench pool_acquire
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recordpool::{ConnectionPool, PoolConfig, RecordConnection, RecordId, RecordStore};
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Acquire
// =============================================================================

fn acquire_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_acquire");
    group.throughput(Throughput::Elements(1));

    // Fresh pool per batch: every acquire builds a handle
    group.bench_function("build_handle", |b| {
        let store = Arc::new(RecordStore::new());
        b.iter_batched(
            || ConnectionPool::new(PoolConfig::new().with_capacity(1)).unwrap(),
            |pool| black_box(pool.acquire(&store)),
            criterion::BatchSize::SmallInput,
        );
    });

    // Full pool: every acquire recycles
    for capacity in [1usize, 3, 16] {
        let pool = ConnectionPool::new(PoolConfig::new().with_capacity(capacity)).unwrap();
        let store = Arc::new(RecordStore::new());
        for _ in 0..capacity {
            pool.acquire(&store);
        }

        group.bench_with_input(
            BenchmarkId::new("recycle", capacity),
            &capacity,
            |b, _| {
                b.iter(|| black_box(pool.acquire(&store)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Store CRUD through a handle
// =============================================================================

fn store_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_crud");
    group.throughput(Throughput::Elements(1));

    let pool = ConnectionPool::new(PoolConfig::default()).unwrap();
    let store = Arc::new(RecordStore::with_capacity(10_000));
    let conn = pool.acquire(&store);
    for i in 0..10_000u32 {
        conn.insert(&format!("name_{:05}", i), i % 100);
    }

    // Linear scan: cost grows with position
    for (label, raw) in [("early", 100u64), ("middle", 5_000), ("late", 9_900)] {
        let id = RecordId::new(raw);
        group.bench_with_input(BenchmarkId::new("find", label), &id, |b, id| {
            b.iter(|| black_box(conn.find(*id)));
        });
    }

    group.bench_function("find_miss", |b| {
        let id = RecordId::new(1_000_000);
        b.iter(|| black_box(conn.find(id)));
    });

    group.bench_function("insert", |b| {
        let store = Arc::new(RecordStore::new());
        b.iter(|| black_box(store.insert("bench", 1)));
    });

    group.finish();
}

criterion_group!(
    name = pool;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = acquire_benchmarks, store_benchmarks
);

criterion_main!(pool);
