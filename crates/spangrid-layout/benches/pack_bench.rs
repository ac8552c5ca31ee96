//! Benchmarks for span index packing and lookups.
//!
//! Run with: cargo bench -p spangrid-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spangrid_layout::{SizeClass, SpanIndexCalculator, prefix_gap_size};
use std::hint::black_box;

/// Every thirteenth item spans the full row, every seventh spans two columns.
fn mixed_items(count: usize) -> Vec<SizeClass> {
    (0..count)
        .map(|i| {
            if i % 13 == 6 {
                SizeClass::Row
            } else if i % 7 == 3 {
                SizeClass::Span(2)
            } else {
                SizeClass::Cell
            }
        })
        .collect()
}

fn bench_precalculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_index/precalculate");

    for count in [100usize, 1_000, 10_000] {
        let items = mixed_items(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| {
                let mut calc = SpanIndexCalculator::new();
                calc.precalculate(items, black_box(3));
                black_box(calc.packed_len())
            })
        });
    }

    group.finish();
}

fn bench_cached_lookup(c: &mut Criterion) {
    let items = mixed_items(10_000);
    let mut calc = SpanIndexCalculator::new();
    calc.precalculate(&items, 3);

    c.bench_function("span_index/cached_lookup", |b| {
        let mut order = 0usize;
        b.iter(|| {
            order = (order + 997) % items.len();
            let span_index = calc.span_index_for_item(&items, black_box(order), 3);
            black_box(calc.item_for_span_index(span_index))
        })
    });
}

fn bench_prefix_gap(c: &mut Criterion) {
    c.bench_function("span_index/prefix_gap", |b| {
        let mut span_index = 0usize;
        b.iter(|| {
            span_index = (span_index + 1) % 1024;
            black_box(prefix_gap_size(black_box(2), 3, span_index))
        })
    });
}

criterion_group!(benches, bench_precalculate, bench_cached_lookup, bench_prefix_gap);
criterion_main!(benches);
