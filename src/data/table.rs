use std::collections::BTreeMap;
use serde::Serialize;

/// Display text for a cell with no observation.
pub const MISSING_TEXT: &str = "-";

/// Table name used when the input does not provide one.
pub const UNNAMED_TABLE: &str = "no name";

/// A single observation: either a measured number or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Present(f64),
    Missing,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Missing
    }
}

impl Cell {
    /// Parse raw cell text. Empty, `-`, unparsable and non-finite text all
    /// become `Missing`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == MISSING_TEXT {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Present(v),
            _ => Cell::Missing,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Present(v) => Some(*v),
            Cell::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// A cell plus the metadata the renderers need to display it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Value {
    pub x: Cell,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    pub uses_units: bool,
}

impl Value {
    /// A loaded observation, displayed with its row's units.
    pub fn data(x: Cell) -> Self {
        Self {
            x,
            prefix: String::new(),
            suffix: String::new(),
            uses_units: true,
        }
    }

    pub fn missing() -> Self {
        Self {
            uses_units: false,
            ..Self::default()
        }
    }

    /// Format for display. `units` is appended only when this value uses them.
    pub fn format(&self, precision: usize, units: Option<&str>) -> String {
        match self.x {
            Cell::Missing => MISSING_TEXT.to_string(),
            Cell::Present(v) => {
                let mut s = format!("{}{:.*}{}", self.prefix, precision, v, self.suffix);
                if self.uses_units {
                    if let Some(u) = units {
                        s.push_str(u);
                    }
                }
                s
            }
        }
    }
}

/// One labeled row of observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Named constants for derived-value formulas. Carried through untouched.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub constants: BTreeMap<String, f64>,
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(label: impl Into<String>, units: Option<String>) -> Self {
        Self {
            label: label.into(),
            units,
            constants: BTreeMap::new(),
            values: Vec::new(),
        }
    }

    /// Build a record of plain observations.
    pub fn from_cells(label: impl Into<String>, units: Option<String>, cells: &[Cell]) -> Self {
        let mut record = Self::new(label, units);
        record.values = cells.iter().copied().map(Value::data).collect();
        record
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.values.get(index).map(|v| v.x).unwrap_or(Cell::Missing)
    }

    /// Display strings for this row: the label followed by `width` cells.
    /// Cells the record doesn't have render as missing.
    pub fn compose(&self, width: usize, precision: usize) -> Vec<String> {
        let units = self.units.as_deref();
        let mut out = Vec::with_capacity(width + 1);
        out.push(self.label.clone());
        for i in 0..width {
            match self.values.get(i) {
                Some(v) => out.push(v.format(precision, units)),
                None => out.push(MISSING_TEXT.to_string()),
            }
        }
        out
    }
}

/// A named group of records sharing the same column keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub keys: Vec<String>,
    pub rows: Vec<Record>,
    /// How many trailing keys are appended row statistics.
    #[serde(skip)]
    pub stat_columns: usize,
    /// How many trailing records are appended column statistics.
    #[serde(skip)]
    pub stat_rows: usize,
}

impl Table {
    pub fn new(name: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keys,
            rows: Vec::new(),
            stat_columns: 0,
            stat_rows: 0,
        }
    }

    /// Number of columns, appended statistics included.
    pub fn data_width(&self) -> usize {
        self.keys.len()
    }

    /// Number of records, appended statistics included.
    pub fn data_height(&self) -> usize {
        self.rows.len()
    }

    /// Is key `col` an appended row-statistic column.
    pub fn is_stat_column(&self, col: usize) -> bool {
        col < self.keys.len() && col >= self.keys.len().saturating_sub(self.stat_columns)
    }

    /// Is record `row` an appended column-statistic record.
    pub fn is_stat_row(&self, row: usize) -> bool {
        row < self.rows.len() && row >= self.rows.len().saturating_sub(self.stat_rows)
    }

    /// (rows including the header row, columns).
    pub fn size(&self) -> (usize, usize) {
        (self.rows.len() + 1, self.keys.len())
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).map(|r| r.cell(col)).unwrap_or(Cell::Missing)
    }

    /// Header line for display: a leading label column, then the keys.
    pub fn header(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.keys.len() + 1);
        out.push(String::new());
        out.extend(self.keys.iter().cloned());
        out
    }

    /// Units shared by every row, if they all agree.
    pub fn common_units(&self) -> Option<String> {
        let mut iter = self.rows.iter().map(|r| r.units.as_deref());
        let first = iter.next()??;
        if iter.all(|u| u == Some(first)) {
            Some(first.to_string())
        } else {
            None
        }
    }
}
