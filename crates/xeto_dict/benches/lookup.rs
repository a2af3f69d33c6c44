//! Record lookup and construction benchmarks.
//!
//! Compares name and code lookup across the inline arities and the boxed
//! fallback, plus builder throughput for typical tag counts.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use xeto_dict::{Dict, NameDict, NameDictBuilder, Value};
use xeto_names::{NameCode, SharedNameTable};

/// Record with `n` number fields named `t0`, `t1`, ...
fn record(table: &SharedNameTable, n: usize) -> (NameDict, Vec<NameCode>) {
    let codes: Vec<NameCode> = (0..n).map(|i| table.add(&format!("t{i}"))).collect();
    #[expect(clippy::cast_precision_loss, reason = "bench indices are small")]
    let pairs: Vec<_> = codes
        .iter()
        .enumerate()
        .map(|(i, &code)| (code, Value::from(i as f64)))
        .collect();
    (NameDict::from_pairs(table.clone(), pairs, None), codes)
}

fn bench_get_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("dict/get_code");
    let table = SharedNameTable::new();

    for size in [1, 3, 5, 8, 9, 16, 32] {
        let (dict, codes) = record(&table, size);
        // worst case: last field
        let last = codes[codes.len() - 1];
        group.bench_with_input(BenchmarkId::from_parameter(size), &dict, |b, dict| {
            b.iter(|| black_box(dict.get_code(black_box(last))));
        });
    }

    group.finish();
}

fn bench_get_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("dict/get_name");
    let table = SharedNameTable::new();

    for size in [3, 8, 16] {
        let (dict, _) = record(&table, size);
        let name = format!("t{}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dict, |b, dict| {
            b.iter(|| black_box(dict.get(black_box(&name))));
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dict/build");
    let table = SharedNameTable::new();
    let names: Vec<String> = (0..16).map(|i| format!("t{i}")).collect();
    for name in &names {
        table.add(name);
    }

    for size in [0, 3, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut builder = NameDictBuilder::new(table.clone());
                for name in &names[..size] {
                    if let Err(err) = builder.add(name, Value::Marker) {
                        panic!("bench record rejected {name}: {err}");
                    }
                }
                black_box(builder.build())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get_code, bench_get_name, bench_build);
criterion_main!(benches);
