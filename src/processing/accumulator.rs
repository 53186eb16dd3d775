//! Missing-value-aware accumulation along one axis of a table.
//!
//! Both axes use two passes: sums and counts first, then squared deviations
//! from the resulting means. Only the first `keys.len()` cells of a record
//! are data; anything past that is ignored.

use rayon::prelude::*;
use crate::data::table::Table;
use crate::processing::statistics::Moments;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One entry per record, across its columns.
    Row,
    /// One entry per column, across all records.
    Column,
}

/// Parallel per-index accumulations for one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisMoments {
    pub filled: Vec<usize>,
    pub mean: Vec<f64>,
    pub sum_sq_dev: Vec<f64>,
}

impl AxisMoments {
    pub fn len(&self) -> usize {
        self.filled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    pub fn moments(&self, index: usize) -> Moments {
        Moments {
            filled: self.filled[index],
            mean: self.mean[index],
            sum_sq_dev: self.sum_sq_dev[index],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Moments> + '_ {
        (0..self.len()).map(|i| self.moments(i))
    }
}

impl FromIterator<Moments> for AxisMoments {
    fn from_iter<I: IntoIterator<Item = Moments>>(iter: I) -> Self {
        let mut out = AxisMoments::default();
        for m in iter {
            out.filled.push(m.filled);
            out.mean.push(m.mean);
            out.sum_sq_dev.push(m.sum_sq_dev);
        }
        out
    }
}

pub fn accumulate(table: &Table, axis: Axis) -> AxisMoments {
    match axis {
        Axis::Row => accumulate_rows(table),
        Axis::Column => accumulate_columns(table),
    }
}

/// Rows are independent: one task per row, each producing its own slot.
fn accumulate_rows(table: &Table) -> AxisMoments {
    let width = table.data_width();
    let per_row: Vec<Moments> = table.rows
        .par_iter()
        .map(|record| {
            let end = record.values.len().min(width);
            Moments::from_values(&record.values[..end])
        })
        .collect();
    per_row.into_iter().collect()
}

/// Row-major scan into per-column accumulators.
fn accumulate_columns(table: &Table) -> AxisMoments {
    let width = table.data_width();
    let mut filled = vec![0usize; width];
    let mut sum = vec![0.0f64; width];

    for record in &table.rows {
        for (j, value) in record.values.iter().take(width).enumerate() {
            if let Some(x) = value.x.value() {
                sum[j] += x;
                filled[j] += 1;
            }
        }
    }

    // 0 / 0 is NaN for an all-missing column.
    let mean: Vec<f64> = sum.iter()
        .zip(&filled)
        .map(|(&s, &n)| s / n as f64)
        .collect();

    let mut sum_sq_dev = vec![0.0f64; width];
    for record in &table.rows {
        for (j, value) in record.values.iter().take(width).enumerate() {
            if let Some(x) = value.x.value() {
                let d = x - mean[j];
                sum_sq_dev[j] += d * d;
            }
        }
    }

    AxisMoments { filled, mean, sum_sq_dev }
}
