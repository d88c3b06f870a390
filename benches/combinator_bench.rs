//! Performance benchmarks

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deferred_seq::*;

fn benchmark_combinators(c: &mut Criterion) {
    let source: Vec<u64> = (0..10_000).collect();
    let other: Vec<u64> = (0..10_000).step_by(3).collect();

    c.bench_function("except_with n=10000", |b| {
        let diff = except_with(&source, other.clone(), |n| **n);
        b.iter(|| black_box(diff.iter().count()));
    });

    c.bench_function("buffer n=10000 size=64", |b| {
        let windows = buffer(&source, 64).unwrap();
        b.iter(|| black_box(windows.iter().count()));
    });

    c.bench_function("shuffle n=10000", |b| {
        let shuffled = shuffle(&source, Arc::new(Randomizer::from_seed(1)));
        b.iter(|| black_box(shuffled.iter().count()));
    });

    c.bench_function("median n=10000", |b| {
        b.iter(|| black_box(median(&source, |n| *n as i64)));
    });
}

fn benchmark_reconcile(c: &mut Criterion) {
    let master: Vec<u32> = (0..500).collect();
    let slave: Vec<u32> = (250..750).collect();

    c.bench_function("reconcile 500x500", |b| {
        let plan = reconcile(&master, &slave, |m, s| m == s);
        b.iter(|| black_box(plan.iter().count()));
    });
}

criterion_group!(benches, benchmark_combinators, benchmark_reconcile);
criterion_main!(benches);
