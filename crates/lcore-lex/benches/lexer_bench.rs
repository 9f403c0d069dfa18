//! Lexer benchmarks. Run with `cargo bench --package lcore-lex`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lcore_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source).0.len()
}

fn bench_lexer_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    let source = "x = 2 + 3 * 4;\ncall print(x);";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("arithmetic_and_print", |b| {
        b.iter(|| token_count(black_box(source)))
    });
    group.finish();
}

fn bench_lexer_function_and_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_control_flow");
    let source = r#"
        square(n) {
            return n * n;
        }
        s = 0;
        for (i = 0; i < 5; i = i + 1) {
            s = s + square(i);
        }
        call print(s);
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("function_and_for_loop", |b| {
        b.iter(|| token_count(black_box(source)))
    });
    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");
    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("msg = \"hello\";")))
    });
    group.bench_function("long_string", |b| {
        let source = "msg = \"This is a much longer string literal used purely for lexer benchmarking.\";";
        b.iter(|| token_count(black_box(source)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_assignment,
    bench_lexer_function_and_loop,
    bench_lexer_strings
);
criterion_main!(benches);
