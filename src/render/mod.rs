pub mod grid;
pub mod text;
pub mod markdown;
pub mod html;
pub mod svg;
pub mod delimited;
pub mod json;

use clap::ValueEnum;
use serde::Deserialize;
use crate::data::table::Table;
use crate::error::RenderError;
use grid::Grid;

/// Output format for compiled tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Color,
    Markdown,
    Html,
    Svg,
    Csv,
    Json,
}

impl RenderFormat {
    /// Machine-readable formats are emitted without a title line.
    pub fn has_title(&self) -> bool {
        !matches!(self, RenderFormat::Csv | RenderFormat::Json)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: RenderFormat,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: RenderFormat::Text,
            precision: 2,
        }
    }
}

/// `Table: "<name>" (<rows> x <cols>)`, rows counting the header.
pub fn title(table: &Table) -> String {
    let (rows, cols) = table.size();
    format!("Table: \"{}\" ({} x {})", table.name, rows, cols)
}

/// Render one table in the requested format.
pub fn dump(table: &Table, options: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    if options.format.has_title() {
        out.push_str(&title(table));
        out.push('\n');
    }

    let grid = || Grid::from_table(table, options.precision);
    let body = match options.format {
        RenderFormat::Text => text::render(&grid(), false),
        RenderFormat::Color => text::render(&grid(), true),
        RenderFormat::Markdown => markdown::render(&grid()),
        RenderFormat::Html => html::render(&grid()),
        RenderFormat::Svg => svg::render(&grid()),
        RenderFormat::Csv => delimited::render(&grid())?,
        RenderFormat::Json => json::render(table)?,
    };
    out.push_str(&body);
    Ok(out)
}
