//! Classification throughput benchmarks
//!
//! Hosts reclassify visible text on every edit, so per-line cost matters:
//! - single attribute line
//! - the coupons fixture
//! - the fixture repeated to a few thousand lines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use apib_highlight::{classify_line, classify_text};

const COUPONS: &str = include_str!("../tests/fixtures/coupons.apib");

fn bench_single_line(c: &mut Criterion) {
    c.bench_function("classify_line_attribute", |b| {
        b.iter(|| classify_line(black_box("    + id: 250FF (string, required) - Coupon id"), 0))
    });
    c.bench_function("classify_line_response", |b| {
        b.iter(|| classify_line(black_box("+ Response 200 (application/json)"), 0))
    });
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_text");
    for copies in [1usize, 10, 50] {
        let document = COUPONS.repeat(copies);
        group.bench_with_input(BenchmarkId::from_parameter(copies), &document, |b, doc| {
            b.iter(|| classify_text(black_box(doc), 0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_line, bench_documents);
criterion_main!(benches);
