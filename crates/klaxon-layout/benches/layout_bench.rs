//! Benchmarks for the alert layout solver.
//!
//! Run with: cargo bench -p klaxon-layout --bench layout_bench

use criterion::{Criterion, criterion_group, criterion_main};
use klaxon_core::{FontSpec, MonospaceMetrics, Size};
use klaxon_layout::{AlertContent, LayoutMetrics, compute_layout};
use std::hint::black_box;

fn bench_compute_layout(c: &mut Criterion) {
    let metrics = LayoutMetrics::default();
    let measurer = MonospaceMetrics::new();
    let viewport = Size::new(375.0, 667.0);
    let message = "This action permanently removes the item and cannot be undone. \
                   Continue only if you are certain."
        .repeat(4);

    let mut group = c.benchmark_group("compute_layout");
    group.bench_function("two_actions_short_text", |b| {
        let content = AlertContent::new(2)
            .title("Delete?", FontSpec::system(18.0))
            .message("This cannot be undone.", FontSpec::system(14.0));
        b.iter(|| {
            black_box(compute_layout(
                black_box(&content),
                &metrics,
                viewport,
                &measurer,
            ))
        });
    });
    group.bench_function("five_actions_long_text", |b| {
        let content = AlertContent::new(5)
            .title("Remove everything?", FontSpec::system(18.0))
            .message(&message, FontSpec::system(14.0));
        b.iter(|| {
            black_box(compute_layout(
                black_box(&content),
                &metrics,
                viewport,
                &measurer,
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compute_layout);
criterion_main!(benches);
