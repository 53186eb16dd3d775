//! Benchmarks for parsing and compiling tables
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use tabstats::data::parser::parse_str;
use tabstats::data::table::{Cell, Record, Table};
use tabstats::processing::accumulator::{accumulate, Axis};
use tabstats::processing::compile::{compile, StatOptions};

const FIXTURES: &[(&str, &str)] = &[
    ("latency", include_str!("../testdata/csv/latency.csv")),
    ("grouped", include_str!("../testdata/csv/grouped.csv")),
    ("sparse", include_str!("../testdata/csv/sparse.csv")),
];

/// Deterministic table with every seventh cell missing.
fn synthetic(rows: usize, cols: usize) -> Table {
    let mut t = Table::new("synthetic", (0..cols).map(|c| format!("c{c}")).collect());
    for r in 0..rows {
        let cells: Vec<Cell> = (0..cols)
            .map(|c| {
                let i = r * cols + c;
                if i % 7 == 0 {
                    Cell::Missing
                } else {
                    Cell::Present(((i * 2654435761) % 1000) as f64 / 10.0)
                }
            })
            .collect();
        t.rows.push(Record::from_cells(format!("r{r}"), Some("ms".into()), &cells));
    }
    t
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, text) in FIXTURES {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(*name, |b| b.iter(|| parse_str(black_box(text)).unwrap()));
    }
    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let options = StatOptions::default();

    for (name, text) in FIXTURES {
        let tables = parse_str(text).unwrap();
        group.bench_function(*name, |b| {
            b.iter(|| {
                for t in &tables {
                    black_box(compile(t, &options));
                }
            })
        });
    }

    for (rows, cols) in [(10, 10), (100, 100), (300, 200)] {
        let t = synthetic(rows, cols);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_function(format!("synthetic_{rows}x{cols}"), |b| {
            b.iter(|| black_box(compile(&t, &options)))
        });
    }
    group.finish();
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");
    let t = synthetic(300, 200);
    group.throughput(Throughput::Elements(300 * 200));

    group.bench_function("rows", |b| b.iter(|| black_box(accumulate(&t, Axis::Row))));
    group.bench_function("columns", |b| b.iter(|| black_box(accumulate(&t, Axis::Column))));
    group.finish();
}

criterion_group!(benches, bench_parse, bench_compile, bench_accumulate);
criterion_main!(benches);
