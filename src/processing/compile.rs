use rayon::prelude::*;
use serde::Deserialize;
use crate::data::table::{Record, Table, Value};
use crate::processing::accumulator::{accumulate, Axis};
use crate::processing::statistics::{Metric, Summary};

/// Which axes receive statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatOptions {
    pub row_stats: bool,
    pub column_stats: bool,
}

impl Default for StatOptions {
    fn default() -> Self {
        Self {
            row_stats: true,
            column_stats: true,
        }
    }
}

/// One summary per record, or `None` when the table has fewer than two
/// data columns.
pub fn row_stats(table: &Table) -> Option<Vec<Summary>> {
    if table.data_width() < 2 {
        return None;
    }
    let acc = accumulate(table, Axis::Row);
    Some(acc.iter().map(|m| Summary::from_moments(&m)).collect())
}

/// One summary per data column, or `None` when the table has fewer than
/// two data rows.
pub fn column_stats(table: &Table) -> Option<Vec<Summary>> {
    if table.data_height() < 2 {
        return None;
    }
    let acc = accumulate(table, Axis::Column);
    Some(acc.iter().map(|m| Summary::from_moments(&m)).collect())
}

/// Build the augmented table: row statistics as trailing columns and
/// column statistics as trailing records. `table` itself is left untouched.
///
/// Both sets of statistics are computed from the input's data cells only,
/// so the order they are appended in does not matter.
pub fn compile(table: &Table, options: &StatOptions) -> Table {
    let rows = if options.row_stats { row_stats(table) } else { None };
    let cols = if options.column_stats { column_stats(table) } else { None };

    tracing::debug!(
        "Compiling {:?} ({} x {}): row stats {}, column stats {}",
        table.name,
        table.data_height(),
        table.data_width(),
        if rows.is_some() { "on" } else { "skipped" },
        if cols.is_some() { "on" } else { "skipped" },
    );

    let width = table.data_width();
    let mut out = table.clone();

    if let Some(summaries) = &rows {
        out.keys.extend(Metric::ALL.iter().map(|m| m.label().to_string()));
        out.stat_columns += Metric::ALL.len();
        for (record, summary) in out.rows.iter_mut().zip(summaries) {
            record.values.truncate(width);
            record.values.resize_with(width, Value::missing);
            record.values.extend(Metric::ALL.iter().map(|m| m.value(summary)));
        }
    }

    if let Some(summaries) = &cols {
        let units = table.common_units();
        for metric in Metric::ALL {
            let mut record = Record::new(metric.label(), units.clone());
            record.values = summaries.iter().map(|s| metric.value(s)).collect();
            out.rows.push(record);
        }
        out.stat_rows += Metric::ALL.len();
    }

    out
}

/// Compile every table, one task per table. Output order matches input.
pub fn compile_all(tables: &[Table], options: &StatOptions) -> Vec<Table> {
    let compiled: Vec<Table> = tables.par_iter().map(|t| compile(t, options)).collect();
    tracing::info!("Compiled {} table(s)", compiled.len());
    compiled
}
