use crate::render::grid::Grid;
use crate::render::html::escape;

const CHAR_WIDTH: usize = 8;
const CELL_PADDING: usize = 8;
const ROW_HEIGHT: usize = 24;
const FONT_SIZE: usize = 13;

/// Standalone SVG drawing of the table grid.
pub fn render(grid: &Grid) -> String {
    let col_widths: Vec<usize> = grid.widths()
        .into_iter()
        .map(|w| w.max(1) * CHAR_WIDTH + 2 * CELL_PADDING)
        .collect();
    let width: usize = col_widths.iter().sum();
    let height = (grid.rows.len() + 1) * ROW_HEIGHT;

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         font-family=\"monospace\" font-size=\"{FONT_SIZE}\">\n"
    );
    out.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"white\" stroke=\"black\"/>\n"
    ));

    let draw_row = |out: &mut String, y: usize, cells: &[String], fill: &dyn Fn(usize) -> &'static str, bold: bool| {
        let mut x = 0;
        for (c, (cell, &w)) in cells.iter().zip(&col_widths).enumerate() {
            out.push_str(&format!(
                "  <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{ROW_HEIGHT}\" fill=\"{}\" stroke=\"#999\"/>\n",
                fill(c)
            ));
            let weight = if bold { " font-weight=\"bold\"" } else { "" };
            out.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\"{weight}>{}</text>\n",
                x + CELL_PADDING,
                y + ROW_HEIGHT - (ROW_HEIGHT - FONT_SIZE) / 2 - 2,
                escape(cell)
            ));
            x += w;
        }
    };

    draw_row(&mut out, 0, &grid.header, &|_| "#e8e8e8", true);
    for (r, row) in grid.rows.iter().enumerate() {
        let y = (r + 1) * ROW_HEIGHT;
        draw_row(&mut out, y, row, &|c| if grid.is_stat(r, c) { "#eef6ff" } else { "white" }, false);
    }

    out.push_str("</svg>\n");
    out
}
