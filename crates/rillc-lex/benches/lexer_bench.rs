//! Lexer Benchmarks
//!
//! Throughput benchmarks for the scanner. Run with:
//! `cargo bench --package rillc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rillc_lex::Lexer;
use rillc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source, &mut handler);
    // Lexer implements Iterator, so we can use it directly
    lexer.count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42; fn main() { let y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    // Larger source exercising every token class
    let source = "
        fn fib(n) {
            if n < 2 { return n; }
            return fib(n - 1) + fib(n - 2);
        }

        let result = fib(20);

        fn max(a, b) {
            if a > b { return a; } else { return b; }
        }

        let check = max(3, 4) != 3 == true;
    ";

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("let averylongvariablename0 = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "let a = 1; let b = 2; let c = 3; let d = 4; let e = 5;",
            ))
        })
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("short_int", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 5;")))
    });

    group.bench_function("long_int", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 123456789012345678901234567890;")))
    });

    group.finish();
}

fn bench_lexer_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    group.bench_function("single_char", |b| {
        b.iter(|| lexer_token_count(black_box("a + b - c * d / e < f > g")))
    });

    group.bench_function("lookahead", |b| {
        b.iter(|| lexer_token_count(black_box("a == b != c = !d")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_identifiers,
    bench_lexer_numbers,
    bench_lexer_operators
);
criterion_main!(benches);
