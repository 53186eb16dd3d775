use std::path::Path;
use crate::data::parser;
use crate::data::table::Table;
use crate::error::LoadError;

/// Load every table in a CSV/text file or a spreadsheet workbook.
pub fn load_file(path: &Path) -> Result<Vec<Table>, LoadError> {
    let ext = path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let tables = match ext.as_str() {
        "csv" | "txt" => load_text(path)?,
        "xls" | "xlsx" | "ods" => load_workbook(path)?,
        _ => return Err(LoadError::UnsupportedFormat(ext)),
    };

    if tables.is_empty() {
        return Err(LoadError::NoTables(path.to_path_buf()));
    }

    tracing::info!("Loaded {} table(s) from {:?}", tables.len(), path);
    Ok(tables)
}

/// Decode bytes as UTF-8, falling back to Latin-1 (each byte maps to the
/// same Unicode code point).
pub fn decode_text(content: Vec<u8>) -> String {
    match String::from_utf8(content) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Input is not UTF-8, decoding as Latin-1");
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    }
}

fn load_text(path: &Path) -> Result<Vec<Table>, LoadError> {
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_text(content);

    parser::parse_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_workbook(path: &Path) -> Result<Vec<Table>, LoadError> {
    use calamine::{open_workbook_auto, Reader, Data};

    let workbook_err = |message: String| LoadError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_err(e.to_string()))?;

    let mut tables = Vec::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)
            .map_err(|e| workbook_err(format!("cannot read sheet {sheet_name:?}: {e}")))?;

        let rows: Vec<Vec<String>> = range.rows().map(|row| {
            row.iter().map(|cell| {
                match cell {
                    Data::Empty => String::new(),
                    Data::String(s) => s.clone(),
                    Data::Float(f) => f.to_string(),
                    Data::Int(i) => i.to_string(),
                    Data::Bool(b) => b.to_string(),
                    Data::DateTime(dt) => dt.to_string(),
                    Data::DateTimeIso(s) => s.clone(),
                    Data::DurationIso(s) => s.clone(),
                    Data::Error(e) => format!("{e:?}"),
                }
            }).collect()
        }).collect();

        let mut sheet_tables = parser::parse_sheet(&rows).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Sheets without a `table` column are named after the sheet.
        for t in &mut sheet_tables {
            if t.name == crate::data::table::UNNAMED_TABLE {
                t.name = sheet_name.clone();
            }
        }
        tracing::debug!("Sheet {sheet_name:?}: {} table(s)", sheet_tables.len());
        tables.extend(sheet_tables);
    }

    Ok(tables)
}
