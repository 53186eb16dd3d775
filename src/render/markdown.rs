use comfy_table::{presets, Table};
use crate::render::grid::Grid;

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

/// GitHub-flavoured markdown table.
pub fn render(grid: &Grid) -> String {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_MARKDOWN);
    table.force_no_tty();

    table.set_header(grid.header.iter().map(|h| escape(h)));
    for row in &grid.rows {
        table.add_row(row.iter().map(|c| escape(c)));
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{Cell, Record, Table as DataTable};

    #[test]
    fn renders_pipe_table() {
        let mut t = DataTable::new("t", vec!["a|b".into()]);
        t.rows.push(Record::from_cells("row", None, &[Cell::Present(2.0)]));
        let out = render(&Grid::from_table(&t, 2));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3, "{out}");
        assert!(lines[0].starts_with('|'));
        assert!(lines[0].contains("a\\|b"));
        assert!(lines[1].contains('-'));
        assert!(lines[1].chars().all(|c| c == '|' || c == '-'), "{}", lines[1]);
        assert!(lines[2].contains("row"));
        assert!(lines[2].contains("2.00"));
    }
}
