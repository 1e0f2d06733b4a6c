//! Bounded-heap selection versus a full sort of the frequency table.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rapid_topk::{FrequencyTable, TopKSelector};

/// Deterministic skewed table: `distinct` phrases with counts cycling 1..=32.
fn synthetic_table(distinct: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for i in 0..distinct {
        let phrase = format!("phrase-{i}");
        for _ in 0..(i % 32 + 1) {
            table.record(&phrase);
        }
    }
    table
}

/// Baseline: sort every entry by descending count and truncate.
fn full_sort_top_k(table: FrequencyTable, k: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = table.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(k);
    entries
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_selection");
    let distinct = 50_000;
    let table = synthetic_table(distinct);

    for k in [10usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("bounded_heap", k), &k, |b, &k| {
            b.iter(|| {
                let selector = TopKSelector::new(k);
                black_box(selector.select(table.clone()))
            })
        });
        group.bench_with_input(BenchmarkId::new("full_sort", k), &k, |b, &k| {
            b.iter(|| black_box(full_sort_top_k(table.clone(), k)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
