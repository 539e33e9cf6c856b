//! Benchmarks for the scheduler compositions.
//!
//! Covers:
//! - FIFO put/next throughput
//! - Partitioned round-robin retrieval across users
//! - Resource-managed admission (grant and deny paths)
//! - Pool request/release round-trips

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use taskweave::{
    FifoScheduler, PartitionedScheduler, ResourceManagedScheduler, ResourceRequest,
    ResourceVectorPool, Route, Scheduler, Task,
};

struct BenchTask {
    id: String,
    user: u32,
}

impl BenchTask {
    fn new(n: u32, user: u32) -> Self {
        Self {
            id: n.to_string(),
            user,
        }
    }
}

impl Task for BenchTask {
    fn id(&self) -> &str {
        &self.id
    }
}

fn by_user() -> PartitionedScheduler<BenchTask> {
    PartitionedScheduler::new(|t: &BenchTask| Route {
        key: t.user.to_string(),
        priority: 0,
        factory: Box::new(|| Box::new(FifoScheduler::new())),
    })
}

fn bench_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo");
    for &count in &[100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("put_next", count), &count, |b, &count| {
            b.iter(|| {
                let mut scheduler = FifoScheduler::new();
                for n in 0..count {
                    scheduler.put(BenchTask::new(n, 0));
                }
                while let Some(scheduled) = scheduler.next() {
                    black_box(scheduled.id());
                }
            });
        });
    }
    group.finish();
}

fn bench_partitioned(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitioned");
    for &users in &[2u32, 8, 32] {
        let count = 1_000;
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(
            BenchmarkId::new("round_robin", users),
            &users,
            |b, &users| {
                b.iter(|| {
                    let mut scheduler = by_user();
                    for n in 0..count {
                        scheduler.put(BenchTask::new(n, n % users));
                    }
                    while let Some(scheduled) = scheduler.next() {
                        black_box(scheduled.id());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_resource_managed(c: &mut Criterion) {
    let mut group = c.benchmark_group("resource_managed");

    group.bench_function("admit_and_close", |b| {
        b.iter(|| {
            let mut scheduler = ResourceManagedScheduler::new(
                FifoScheduler::new(),
                ResourceVectorPool::new(vec![1]),
                |_: &BenchTask| ResourceRequest::new(vec![1]),
            );
            for n in 0..1_000 {
                scheduler.put(BenchTask::new(n, 0));
            }
            while let Some(mut scheduled) = scheduler.next() {
                black_box(scheduled.id());
                scheduled.close();
            }
        });
    });

    group.bench_function("denied_probe", |b| {
        let mut scheduler = ResourceManagedScheduler::new(
            FifoScheduler::new(),
            ResourceVectorPool::new(vec![0]),
            |_: &BenchTask| ResourceRequest::new(vec![1]),
        );
        scheduler.put(BenchTask::new(0, 0));
        b.iter(|| {
            black_box(scheduler.next().is_none());
        });
    });

    group.finish();
}

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool");
    for &dims in &[1usize, 4, 16] {
        group.bench_with_input(
            BenchmarkId::new("request_release", dims),
            &dims,
            |b, &dims| {
                let pool = ResourceVectorPool::new(vec![8; dims]);
                let request = ResourceRequest::new(vec![1; dims]);
                b.iter(|| {
                    let lease = pool.request(black_box(&request)).unwrap();
                    drop(lease);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fifo,
    bench_partitioned,
    bench_resource_managed,
    bench_pool
);
criterion_main!(benches);
