use comfy_table::{presets, Attribute, Cell, Color, Table};
use crate::render::grid::Grid;

/// Box-drawn table. With `colored`, the header is bold and statistic cells
/// are cyan, whether or not stdout is a terminal.
pub fn render(grid: &Grid, colored: bool) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    if colored {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    table.set_header(grid.header.iter().map(|h| {
        let cell = Cell::new(h);
        if colored {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }));

    for (r, row) in grid.rows.iter().enumerate() {
        table.add_row(row.iter().enumerate().map(|(c, text)| {
            let cell = Cell::new(text);
            if colored && grid.is_stat(r, c) {
                cell.fg(Color::Cyan)
            } else {
                cell
            }
        }));
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}
