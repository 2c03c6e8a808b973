// SPDX-License-Identifier: MIT
//
// Criterion benchmarks for the catalog search filter.  Runs against the
// compiled-in catalog, which is exactly the data the live page filters on
// every keystroke.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use khidma_catalog::{catalog, filter_catalog, highlight};

fn bench_filter_catalog(c: &mut Criterion) {
    let categories = catalog();

    c.bench_function("filter_catalog (arabic term)", |b| {
        b.iter(|| {
            let filtered = filter_catalog(black_box(categories), black_box("تجديد"));
            black_box(filtered.len());
        });
    });

    c.bench_function("filter_catalog (miss)", |b| {
        b.iter(|| {
            let filtered = filter_catalog(black_box(categories), black_box("qqq"));
            black_box(filtered.len());
        });
    });
}

fn bench_highlight(c: &mut Criterion) {
    c.bench_function("highlight", |b| {
        b.iter(|| {
            let parts = highlight(
                black_box("تصديق العقود من الغرفة التجارية"),
                black_box("الغرفة"),
            );
            black_box(parts.matched.len());
        });
    });
}

criterion_group!(benches, bench_filter_catalog, bench_highlight);
criterion_main!(benches);
