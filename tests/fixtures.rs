//! End-to-end runs over the files in testdata/csv.

use std::path::PathBuf;
use tabstats::config::Config;
use tabstats::data::loader::load_file;
use tabstats::data::table::Cell;
use tabstats::processing::compile::{compile, compile_all, StatOptions};
use tabstats::render::RenderFormat;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/csv").join(name)
}

fn config(format: RenderFormat) -> Config {
    Config {
        format,
        ..Config::default()
    }
}

#[test]
fn latency_fixture_text() {
    let out = tabstats::run(&fixture("latency.csv"), &config(RenderFormat::Text)).unwrap();

    assert!(out.contains("Table: \"no name\" (9 x 15)"), "{out}");
    assert!(out.contains("Table: \"no name\" (8 x 8)"), "{out}");
    assert!(out.contains("MEAN"));
    assert!(out.contains("2.94ms"));
    assert!(out.contains("\u{00B1}0.20ms"));
    assert!(out.contains("11.18%"));
}

#[test]
fn unparsable_cells_count_as_missing() {
    let tables = load_file(&fixture("latency.csv")).unwrap();
    let put = &tables[0].rows[1];
    assert_eq!(put.label, "put");
    assert_eq!(put.cell(2), Cell::Missing);
    assert_eq!(put.cell(6), Cell::Missing);

    let delete = &tables[0].rows[2];
    assert_eq!(delete.cell(4), Cell::Missing);
}

#[test]
fn grouped_fixture_splits_by_table_column() {
    let tables = load_file(&fixture("grouped.csv")).unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["cpu", "mem"]);

    let compiled = compile_all(&tables, &StatOptions::default());
    let cpu = &compiled[0];
    assert_eq!(cpu.rows.len(), 7);
    assert_eq!(cpu.rows[2].label, "MEAN");
    assert_eq!(cpu.rows[2].units.as_deref(), Some("%"));
    assert_eq!(cpu.rows[2].cell(0), Cell::Present((12.5 + 3.2) / 2.0));

    let mem = &compiled[1];
    assert_eq!(mem.rows[1].cell(3), Cell::Present((220.0 + 231.0) / 2.0));
}

#[test]
fn single_row_fixture_gets_row_stats_only() {
    let tables = load_file(&fixture("single_row.csv")).unwrap();
    let out = compile(&tables[0], &StatOptions::default());

    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.keys.len(), 10);
    assert_eq!(out.rows[0].cell(5), Cell::Present(3.0));
}

#[test]
fn sparse_fixture_renders_nan_without_failing() {
    let tables = load_file(&fixture("sparse.csv")).unwrap();
    let out = compile(&tables[0], &StatOptions::default());

    // Column a: one present value.
    let mean = &out.rows[4];
    let stddev = &out.rows[5];
    let cv = &out.rows[8];
    assert_eq!(mean.cell(0), Cell::Present(1.5));
    assert_eq!(stddev.cell(0), Cell::Present(0.0));
    assert_eq!(cv.cell(0), Cell::Present(0.0));

    // Column b: nothing present.
    assert!(mean.cell(1).value().unwrap().is_nan());

    for format in [RenderFormat::Text, RenderFormat::Html, RenderFormat::Json] {
        let rendered = tabstats::render_all(&[out.clone()], &config(format)).unwrap();
        assert!(!rendered.is_empty());
    }
    let text = tabstats::render_all(&[out], &config(RenderFormat::Text)).unwrap();
    assert!(text.contains("NaN"));
}

#[test]
fn json_output_is_one_array() {
    let out = tabstats::run(&fixture("grouped.csv"), &config(RenderFormat::Json)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tables = v.as_array().unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0]["name"], "cpu");
    assert_eq!(tables[0]["keys"][3], "MEAN");
}

#[test]
fn disabled_axes_and_unit_inference() {
    let mut cfg = config(RenderFormat::Csv);
    cfg.stats.row_stats = false;
    cfg.infer_units = true;
    let out = tabstats::run(&fixture("sparse.csv"), &cfg).unwrap();

    let header = out.lines().next().unwrap();
    assert_eq!(header, ",a,b,c");
    assert!(out.contains("\nMEAN,1.50,NaN,4.00\n"), "{out}");
}
