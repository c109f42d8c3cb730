//! Locator Operations Benchmarks
//!
//! Benchmarks for normalization dispatch: the CSS/XPath classification
//! heuristic, named-entry processing, and wire-pair validation.
//!
//! Run with: `cargo bench --bench locator_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ubicar::prelude::*;

fn bench_string_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_classification");

    let inputs = vec![
        ("simple_id", "#my-button"),
        ("simple_class", ".btn-primary"),
        ("tag_id_classes", "div#container.wide.dark"),
        ("deep_classes", "a.nav.item.active.current"),
        ("xpath_axis", "//div[@id='root']//button"),
        ("xpath_text", "//a[contains(text(), 'Sign in')]"),
        ("free_text", "definitely not a selector"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |bench, text| {
            bench.iter(|| {
                let locator = Locator::from_text(black_box(*text));
                black_box(locator);
            });
        });
    }

    group.finish();
}

fn bench_entry_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_normalization");

    group.bench_function("by_and_locator", |bench| {
        bench.iter(|| {
            let locator =
                Locator::from_entries(black_box([("by", "xpath"), ("locator", "//h1")])).unwrap();
            black_box(locator);
        });
    });

    group.bench_function("short_name", |bench| {
        bench.iter(|| {
            let locator = Locator::from_entries(black_box([("css", "#something")])).unwrap();
            black_box(locator);
        });
    });

    group.finish();
}

fn bench_wire_pair_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_pair_validation");

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.short_name()),
            &strategy,
            |bench, strategy| {
                bench.iter(|| {
                    let locator = Locator::from_pair(black_box(strategy.as_str()), "q").unwrap();
                    black_box(locator);
                });
            },
        );
    }

    group.finish();
}

fn bench_passthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("passthrough");

    group.bench_function("existing_locator", |bench| {
        let locator = Locator::by_css("#app");
        bench.iter(|| {
            let normalized = Locator::new(black_box(locator.clone())).unwrap();
            black_box(normalized);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_string_classification,
    bench_entry_normalization,
    bench_wire_pair_validation,
    bench_passthrough
);
criterion_main!(benches);
