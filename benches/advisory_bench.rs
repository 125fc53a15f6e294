//! Benchmarks for range parsing and advisory rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pko_advisor::advisory::AdvisorySession;
use pko_advisor::range::{Preset, Range};

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_push15", |b| {
        b.iter(|| Range::parse(black_box(Preset::Push15.notation())))
    });
}

fn render_benchmark(c: &mut Criterion) {
    let session = AdvisorySession::with_preset(Preset::Push15);

    c.bench_function("render_169_cells", |b| {
        b.iter(|| session.render(black_box(45.0)))
    });
}

fn grouping_benchmark(c: &mut Criterion) {
    let session = AdvisorySession::with_preset(Preset::Standard);
    let report = session.render(0.0);
    let all = Range::from_combos(report.selected);

    c.bench_function("group_all_hands", |b| b.iter(|| black_box(&all).to_notation()));
}

criterion_group!(benches, parse_benchmark, render_benchmark, grouping_benchmark);
criterion_main!(benches);
