use crate::data::table::Table;

/// A table flattened to display strings, shared by the text-like renderers.
#[derive(Debug, Clone)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per row: is it an appended column-statistic record.
    pub stat_rows: Vec<bool>,
    /// Per column (label column included): is it an appended row-statistic column.
    pub stat_cols: Vec<bool>,
}

impl Grid {
    pub fn from_table(table: &Table, precision: usize) -> Self {
        let width = table.data_width();
        let header = table.header();
        let rows = table.rows.iter().map(|r| r.compose(width, precision)).collect();
        let stat_rows = (0..table.rows.len()).map(|r| table.is_stat_row(r)).collect();
        // Column 0 holds the record labels.
        let stat_cols = (0..header.len())
            .map(|c| c > 0 && table.is_stat_column(c - 1))
            .collect();

        Self { header, rows, stat_rows, stat_cols }
    }

    /// Display width (in chars) of each column.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    pub fn is_stat(&self, row: usize, col: usize) -> bool {
        self.stat_rows.get(row).copied().unwrap_or(false)
            || self.stat_cols.get(col).copied().unwrap_or(false)
    }
}
