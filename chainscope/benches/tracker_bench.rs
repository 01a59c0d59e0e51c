//! Benchmarks for context tracking.

use chainscope::component::{ComponentIdentifier, ComponentLocation};
use chainscope::context::ContextTracker;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn location(namespace: &str, name: &str) -> ComponentLocation {
    ComponentLocation::new(ComponentIdentifier::new(namespace, name))
}

fn open_close_benchmark(c: &mut Criterion) {
    c.bench_function("open_close_flat", |b| {
        b.iter(|| {
            let mut tracker = ContextTracker::new();
            for _ in 0..16 {
                tracker.open(black_box(location("ns1", "comp-a"))).unwrap();
                tracker.close().unwrap();
            }
            tracker
        });
    });

    c.bench_function("open_close_nested", |b| {
        b.iter(|| {
            let mut tracker = ContextTracker::new();
            for i in 0..16 {
                let name = if i % 2 == 0 { "comp-a" } else { "comp-b" };
                tracker.open(black_box(location("ns1", name))).unwrap();
            }
            while !tracker.is_empty() {
                tracker.close().unwrap();
            }
            tracker
        });
    });
}

fn duplicate_benchmark(c: &mut Criterion) {
    let mut tracker = ContextTracker::new();
    for i in 0..8 {
        let name = format!("comp-{i}");
        tracker.open(location("ns1", &name)).unwrap();
    }

    c.bench_function("duplicate_depth_8", |b| {
        b.iter(|| black_box(tracker.duplicate()));
    });
}

criterion_group!(benches, open_close_benchmark, duplicate_benchmark);
criterion_main!(benches);
