//! Micro-benchmarks for the plan parser and the timing aggregation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gist_bench::{plan, stats};

fn bench_execution_time_parse(c: &mut Criterion) {
    // A realistic EXPLAIN ANALYZE shape: the match is near the end.
    let mut lines: Vec<String> = (0..60)
        .map(|i| format!("  ->  Index Scan using roads_rdr_idx (actual rows={})", i))
        .collect();
    lines.push("Planning Time: 0.211 ms".to_string());
    lines.push("Execution Time: 1523.004 ms".to_string());

    c.bench_function("execution_time_parse", |b| {
        b.iter(|| plan::execution_time_ms(black_box(&lines)).unwrap())
    });
}

fn bench_summarize(c: &mut Criterion) {
    let samples: Vec<f64> = (0..1000).map(|i| (i * 7 % 997) as f64 / 3.0).collect();

    c.bench_function("summarize_1000_samples", |b| {
        b.iter(|| stats::summarize(black_box(&samples)).unwrap())
    });
}

criterion_group!(benches, bench_execution_time_parse, bench_summarize);
criterion_main!(benches);
