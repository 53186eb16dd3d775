use std::collections::HashMap;
use crate::data::table::{Cell, Record, Table, Value, UNNAMED_TABLE};
use crate::error::ParseError;
use crate::processing::statistics::Metric;

/// Header naming the table a row belongs to.
pub const TABLE_COLUMN: &str = "table";
/// Header naming the row label.
pub const LABEL_COLUMN: &str = "label";
/// Header naming the row's physical units.
pub const UNITS_COLUMN: &str = "units";

/// Reserved header names. Every other header is a data key.
pub const RESERVED: [&str; 3] = [TABLE_COLUMN, LABEL_COLUMN, UNITS_COLUMN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Table,
    Label,
    Units,
    Data(usize),
}

/// How the cells of each row map onto a table, derived from a section's header.
struct Layout {
    columns: Vec<Column>,
    keys: Vec<String>,
}

impl Layout {
    fn from_header(header: &[String]) -> Result<Self, ParseError> {
        let mut columns = Vec::with_capacity(header.len());
        let mut keys: Vec<String> = Vec::new();

        for name in header {
            let name = name.trim();
            let column = match name.to_lowercase().as_str() {
                TABLE_COLUMN => Column::Table,
                LABEL_COLUMN => Column::Label,
                UNITS_COLUMN => Column::Units,
                _ => {
                    if Metric::ALL.iter().any(|m| m.label() == name) {
                        return Err(ParseError::ReservedKey(name.to_string()));
                    }
                    if keys.iter().any(|k| k == name) {
                        return Err(ParseError::DuplicateKey(name.to_string()));
                    }
                    keys.push(name.to_string());
                    Column::Data(keys.len() - 1)
                }
            };
            columns.push(column);
        }

        Ok(Self { columns, keys })
    }

    fn has_label(&self) -> bool {
        self.columns.contains(&Column::Label)
    }
}

/// Parse delimited text holding one or more tables.
///
/// Tables are separated by blank lines and lines starting with `#` are
/// comments. The first row of every section is its header.
pub fn parse_str(text: &str) -> Result<Vec<Table>, ParseError> {
    let mut tables = Vec::new();
    for section in split_text_sections(text) {
        let rows = read_rows(&section)?;
        tables.extend(parse_section(&rows)?);
    }
    Ok(tables)
}

/// Parse a grid of cells (e.g. a worksheet). All-empty rows separate tables.
pub fn parse_sheet(rows: &[Vec<String>]) -> Result<Vec<Table>, ParseError> {
    let mut tables = Vec::new();
    let mut section: Vec<Vec<String>> = Vec::new();

    for row in rows {
        if row.iter().all(|c| c.trim().is_empty()) {
            if !section.is_empty() {
                tables.extend(parse_section(&section)?);
                section.clear();
            }
            continue;
        }
        if is_comment(row.first().map(String::as_str).unwrap_or("")) {
            continue;
        }
        section.push(row.iter().map(|c| c.trim().to_string()).collect());
    }

    if !section.is_empty() {
        tables.extend(parse_section(&section)?);
    }
    Ok(tables)
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Split text into blank-line separated sections, dropping comment lines.
fn split_text_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            continue;
        }
        if is_comment(line) {
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

fn read_rows(section: &str) -> Result<Vec<Vec<String>>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(section.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}

/// Build tables from one section: a header row followed by data rows.
/// Rows are grouped by their `table` cell, in order of first appearance.
fn parse_section(rows: &[Vec<String>]) -> Result<Vec<Table>, ParseError> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    let layout = Layout::from_header(header)?;

    let mut tables: Vec<Table> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    if data.is_empty() {
        tables.push(Table::new(UNNAMED_TABLE, layout.keys.clone()));
        return Ok(tables);
    }

    for (row_idx, row) in data.iter().enumerate() {
        if row.len() > layout.columns.len() {
            tracing::warn!(
                "Row {} has {} cells but the header has {}; extra cells ignored",
                row_idx + 1,
                row.len(),
                layout.columns.len()
            );
        }

        let mut table_name = UNNAMED_TABLE.to_string();
        let mut record = Record::new(String::new(), None);
        if !layout.has_label() {
            record.label = (row_idx + 1).to_string();
        }

        let mut cells = vec![Cell::Missing; layout.keys.len()];
        let mut filled_to = 0usize;

        for (column, text) in layout.columns.iter().zip(row.iter()) {
            match *column {
                Column::Table => {
                    if !text.is_empty() {
                        table_name = text.clone();
                    }
                }
                Column::Label => record.label = text.clone(),
                Column::Units => {
                    record.units = if text.is_empty() { None } else { Some(text.clone()) };
                }
                Column::Data(i) => {
                    let cell = Cell::parse(text);
                    if cell.is_missing() && !text.is_empty() && text != "-" {
                        tracing::debug!("Unparsable cell {text:?} in row {} treated as missing", row_idx + 1);
                    }
                    cells[i] = cell;
                    filled_to = filled_to.max(i + 1);
                }
            }
        }

        record.values = cells[..filled_to].iter().copied().map(Value::data).collect();

        let idx = match by_name.get(&table_name) {
            Some(&idx) => idx,
            None => {
                tables.push(Table::new(table_name.clone(), layout.keys.clone()));
                by_name.insert(table_name, tables.len() - 1);
                tables.len() - 1
            }
        };
        tables[idx].rows.push(record);
    }

    Ok(tables)
}
