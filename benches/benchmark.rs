//! Benchmarks for cardtype.
//!
//! Run with: cargo bench

use cardtype::{luhn, CardClassifier, IssuerType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const AMEX_15: &str = "378282246310005";
const UNIONPAY_19: &str = "6212345678901234569";
const NO_MATCH: &str = "9999999999999999";

/// Benchmark the Luhn checksum alone
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("visa_16", |b| b.iter(|| luhn::validate(black_box(VISA_16))));
    group.bench_function("amex_15", |b| b.iter(|| luhn::validate(black_box(AMEX_15))));
    group.bench_function("unionpay_19", |b| {
        b.iter(|| luhn::validate(black_box(UNIONPAY_19)))
    });

    group.finish();
}

/// Benchmark type resolution, strict and loose
fn bench_resolution(c: &mut Criterion) {
    let classifier = CardClassifier::shared();
    let mut group = c.benchmark_group("resolution");

    // Visa sits second in priority order; Elo is last. The no-match case
    // walks the whole table.
    group.bench_function("strict_visa", |b| {
        b.iter(|| classifier.resolve_type(black_box(VISA_16)))
    });
    group.bench_function("strict_no_match", |b| {
        b.iter(|| classifier.resolve_type(black_box(NO_MATCH)))
    });
    group.bench_function("loose_prefix", |b| {
        b.iter(|| classifier.resolve_type_with(black_box("37"), false))
    });

    group.finish();
}

/// Benchmark full validation
fn bench_validation(c: &mut Criterion) {
    let classifier = CardClassifier::shared();
    let mut group = c.benchmark_group("validation");

    group.bench_function("validate_resolved", |b| {
        b.iter(|| classifier.validate(black_box(VISA_16)))
    });
    group.bench_function("validate_for_issuer", |b| {
        b.iter(|| classifier.validate_for(black_box(VISA_16), IssuerType::Visa))
    });

    group.finish();
}

criterion_group!(benches, bench_luhn, bench_resolution, bench_validation);
criterion_main!(benches);
