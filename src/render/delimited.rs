use crate::error::RenderError;
use crate::render::grid::Grid;

/// Comma-separated output: the header row, then one line per record.
pub fn render(grid: &Grid) -> Result<String, RenderError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(&grid.header)?;
    for row in &grid.rows {
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
