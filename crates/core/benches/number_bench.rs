//! Benchmarks for numeric literal classification.
//!
//! Benchmark groups:
//! - `number_classify`: well-formed integer and real tokens
//! - `number_salvage`: malformed reals that go through the salvage path

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pdgstate_core::parse_number;

// =============================================================================
// Token Generation
// =============================================================================

/// Generate integer tokens shaped like content stream coordinates.
fn generate_integer_tokens(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 4 {
            0 => format!("{}", i % 1000),
            1 => format!("-{}", i % 500),
            2 => format!("{}", (i % 10000) * 100),
            _ => format!("{}", i % 10),
        })
        .collect()
}

/// Generate well-formed real tokens.
fn generate_real_tokens(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 6 {
            0 => format!("{}.{}", i % 100, (i * 7) % 100),
            1 => format!("-{}.{}", i % 50, (i * 3) % 100),
            2 => format!("0.{:03}", i % 1000),
            3 => format!(".{}", (i % 99) + 1),
            4 => format!("{}.", i % 100),     // trailing dot "123."
            _ => format!("{}e-2", i % 1000), // exponent
        })
        .collect()
}

/// Generate malformed reals seen in the wild.
fn generate_malformed_tokens(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 5 {
            0 => format!("--{}.{}", i % 100, i % 7),
            1 => format!("0.00-{}", (i % 9000) + 1),
            2 => format!("{}.{}.{}", i % 10, i % 3, i % 5),
            3 => format!(".{}-", (i % 9) + 1),
            _ => format!("{}.5e", i % 100),
        })
        .collect()
}

fn classify_all(tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| parse_number(black_box(t)).is_ok())
        .count()
}

// =============================================================================
// Benchmark Groups
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_classify");
    let n = 100_000;

    let integers = generate_integer_tokens(n);
    group.bench_with_input(BenchmarkId::new("integers", n), &integers, |b, tokens| {
        b.iter(|| classify_all(tokens))
    });

    let reals = generate_real_tokens(n);
    group.bench_with_input(BenchmarkId::new("reals", n), &reals, |b, tokens| {
        b.iter(|| classify_all(tokens))
    });

    group.finish();
}

fn bench_salvage(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_salvage");
    let n = 100_000;

    let malformed = generate_malformed_tokens(n);
    group.bench_with_input(BenchmarkId::new("malformed", n), &malformed, |b, tokens| {
        b.iter(|| classify_all(tokens))
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_salvage);
criterion_main!(benches);
