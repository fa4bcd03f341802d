mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_complexity::ComplexityAnalyzer;
use graphql_complexity::parser::parse_executable_document;
use graphql_complexity::score;
use graphql_complexity::score_document;
use std::collections::HashMap;

fn variables() -> HashMap<String, serde_json::Value> {
    HashMap::from([("page".to_string(), serde_json::json!(20))])
}

// ─── Group 1: Parse + Score ──────────────────────────────

fn parse_and_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_score");
    let variables = variables();
    let overrides = HashMap::new();

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            black_box(score(fixtures::SIMPLE_QUERY, &variables, &overrides))
        })
    });

    group.bench_function("nested_query", |b| {
        b.iter(|| {
            black_box(score(fixtures::NESTED_QUERY, &variables, &overrides))
        })
    });

    group.bench_function("mutation", |b| {
        b.iter(|| {
            black_box(score(fixtures::MUTATION, &variables, &overrides))
        })
    });

    let wide = fixtures::wide_document(20, 50);
    group.throughput(Throughput::Bytes(wide.len() as u64));
    group.bench_function("wide_document (synthetic)", |b| {
        b.iter(|| black_box(score(&wide, &variables, &overrides)))
    });

    group.finish();
}

// ─── Group 2: Score Only ─────────────────────────────────

fn score_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_only");
    let variables = variables();

    let nested = parse_executable_document(fixtures::NESTED_QUERY)
        .expect("nested fixture parses");
    let no_overrides = HashMap::new();
    group.bench_function("nested_query", |b| {
        b.iter(|| {
            black_box(score_document(&nested, &variables, &no_overrides))
        })
    });

    let overrides = HashMap::from([("parent".to_string(), 5)]);
    group.bench_function("nested_query (overrides)", |b| {
        b.iter(|| {
            black_box(score_document(&nested, &variables, &overrides))
        })
    });

    let wide_source = fixtures::wide_document(20, 50);
    let wide = parse_executable_document(&wide_source)
        .expect("wide fixture parses");
    group.bench_function("wide_document (synthetic)", |b| {
        b.iter(|| {
            black_box(score_document(&wide, &variables, &no_overrides))
        })
    });

    group.finish();
}

// ─── Group 3: Analyzer ───────────────────────────────────

fn analyzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");
    let variables = variables();
    let analyzer = ComplexityAnalyzer::new()
        .with_override("memberships", 50)
        .with_max_complexity(10_000);

    group.bench_function("nested_query", |b| {
        b.iter(|| {
            black_box(analyzer.analyze(fixtures::NESTED_QUERY, &variables))
        })
    });

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, parse_and_score, score_only, analyzer);
criterion_main!(benches);
