use crate::render::grid::Grid;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML `<table>`; statistic cells get `class="stat"`.
pub fn render(grid: &Grid) -> String {
    let mut out = String::from("<table>\n  <thead>\n    <tr>");
    for h in &grid.header {
        out.push_str(&format!("<th>{}</th>", escape(h)));
    }
    out.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for (r, row) in grid.rows.iter().enumerate() {
        out.push_str("    <tr>");
        for (c, cell) in row.iter().enumerate() {
            let tag = if c == 0 { "th" } else { "td" };
            if grid.is_stat(r, c) {
                out.push_str(&format!("<{tag} class=\"stat\">{}</{tag}>", escape(cell)));
            } else {
                out.push_str(&format!("<{tag}>{}</{tag}>", escape(cell)));
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{Cell, Record, Table};
    use crate::processing::compile::{compile, StatOptions};

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn marks_stat_cells() {
        let mut t = Table::new("t", vec!["x".into(), "y".into()]);
        t.rows.push(Record::from_cells("a", None, &[Cell::Present(1.0), Cell::Present(2.0)]));
        t.rows.push(Record::from_cells("b", None, &[Cell::Present(3.0), Cell::Missing]));
        let out = render(&Grid::from_table(&compile(&t, &StatOptions::default()), 2));

        assert!(out.starts_with("<table>"));
        assert!(out.contains("<th>MEAN</th>"));
        assert!(out.contains("<th class=\"stat\">CV</th>"));
        assert!(out.contains("<td class=\"stat\">\u{00B1}"));
        assert!(out.contains("<td>-</td>"));
    }
}
