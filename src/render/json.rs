use crate::data::table::Table;
use crate::error::RenderError;

/// Pretty JSON of the whole table. Missing cells and non-finite numbers
/// serialise as `null`.
pub fn render(table: &Table) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(table)?;
    out.push('\n');
    Ok(out)
}

/// Pretty JSON array of tables.
pub fn render_many(tables: &[Table]) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(tables)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{Cell, Record};

    #[test]
    fn missing_and_nan_become_null() {
        let mut t = Table::new("t", vec!["a".into(), "b".into(), "c".into()]);
        t.rows.push(Record::from_cells(
            "r",
            Some("ms".into()),
            &[Cell::Present(1.5), Cell::Missing, Cell::Present(f64::NAN)],
        ));

        let v: serde_json::Value = serde_json::from_str(&render(&t).unwrap()).unwrap();
        assert_eq!(v["name"], "t");
        let values = &v["rows"][0]["values"];
        assert_eq!(values[0]["x"], 1.5);
        assert!(values[1]["x"].is_null());
        assert!(values[2]["x"].is_null());
        assert_eq!(v["rows"][0]["units"], "ms");
    }
}
