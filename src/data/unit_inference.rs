use crate::data::table::Table;

/// Infer the measurement unit from a row label.
/// Returns `None` when no keyword matches or the quantity is dimensionless.
pub fn infer_unit(label: &str) -> Option<String> {
    let lower = label.to_lowercase();

    let unit = if lower.contains("percent") || lower.contains("ratio") {
        return None;
    } else if lower.contains("latency") || lower.contains("time") || lower.contains("duration") {
        "ms"
    } else if lower.contains("temp") {
        "\u{00B0}C"
    } else if lower.contains("volt") {
        "V"
    } else if lower.contains("current") {
        "mA"
    } else if lower.contains("rpm") {
        "RPM"
    } else if lower.contains("mass") || lower.contains("weight") {
        "g"
    } else if lower.contains("distance") || lower.contains("length") {
        "m"
    } else {
        return None;
    };
    Some(unit.to_string())
}

/// Fill in units for rows that have none. Explicit units are never replaced.
pub fn apply_inferred_units(table: &mut Table) {
    for record in &mut table.rows {
        if record.units.is_none() {
            record.units = infer_unit(&record.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::Record;

    #[test]
    fn keywords_map_to_units() {
        assert_eq!(infer_unit("Request Latency").as_deref(), Some("ms"));
        assert_eq!(infer_unit("board temp").as_deref(), Some("\u{00B0}C"));
        assert_eq!(infer_unit("Bus Voltage").as_deref(), Some("V"));
        assert_eq!(infer_unit("hit ratio"), None);
        assert_eq!(infer_unit("widgets"), None);
    }

    #[test]
    fn explicit_units_are_kept() {
        let mut t = Table::new("t", vec!["a".into()]);
        t.rows.push(Record::new("latency", Some("us".into())));
        t.rows.push(Record::new("compile time", None));
        apply_inferred_units(&mut t);
        assert_eq!(t.rows[0].units.as_deref(), Some("us"));
        assert_eq!(t.rows[1].units.as_deref(), Some("ms"));
    }
}
