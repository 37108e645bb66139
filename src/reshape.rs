//! Tabular reshaping: wide-format census extracts → chart-friendly records.
//!
//! This module is responsible for turning a raw wide table (title row,
//! unit-label row, then one row per category) into a normalized sequence of
//! flat records: one per category, with one numeric field per recognized
//! geographic unit.
//!
//! Design goals:
//! - **Single hard failure**: only a table too short to hold a unit-label row
//!   is an error; every per-cell problem degrades to an absent field
//! - **Deterministic behavior** (pure function of the input rows)
//! - **Separation of concerns**: no file I/O here

use regex::Regex;

use crate::domain::{CategoryRecord, NormalizedTable, RawTable, UnitColumn};
use crate::error::{AppError, ErrorKind};

/// Label pattern a unit column must match: a marker word followed by a
/// numeric id.
const UNIT_LABEL_PATTERN: &str = r"Census Tract (\d+)";

/// Rows whose category label equals one of these are aggregate/header noise
/// from the source extract and are excluded from the output.
const SKIP_CATEGORIES: [&str; 2] = ["Total:", "Estimate"];

/// Convert a raw table into a normalized one.
///
/// Fails with `MalformedTable` when the input has fewer than 2 rows (no
/// unit-label row available). Everything else degrades gracefully: rows with
/// sentinel categories are skipped, unresolvable unit labels drop their whole
/// column, and non-integer cells leave that field absent (never 0).
pub fn reshape(raw: &RawTable) -> Result<NormalizedTable, AppError> {
    if raw.len() < 2 {
        return Err(AppError::new(
            ErrorKind::MalformedTable,
            format!(
                "Table has {} row(s); need a title row and a unit-label row.",
                raw.len()
            ),
        ));
    }

    let units = extract_unit_columns(&raw[1]);

    let mut records = Vec::new();
    for row in &raw[2..] {
        let Some(category) = row.first() else {
            continue;
        };
        if SKIP_CATEGORIES.contains(&category.as_str()) {
            continue;
        }

        let mut record = CategoryRecord {
            name: category.clone(),
            values: Default::default(),
        };
        for unit in &units {
            // Strict base-10 parse: blanks, locale-grouped numbers, or stray
            // text all leave the field absent. This mirrors the upstream data
            // contract rather than hardening it.
            if let Some(value) = row.get(unit.column).and_then(|cell| cell.parse::<i64>().ok()) {
                record.values.insert(unit.id.clone(), value);
            }
        }
        records.push(record);
    }

    Ok(NormalizedTable { units, records })
}

/// Extract recognized unit columns from the unit-label row.
///
/// Cell 0 is the category-label header and is never a unit. Cells that fail
/// the label pattern are dropped together with their column index, so their
/// data never reaches any record; surviving units keep their source column
/// order.
fn extract_unit_columns(label_row: &[String]) -> Vec<UnitColumn> {
    // The pattern is a compile-time constant, so this cannot fail.
    let re = Regex::new(UNIT_LABEL_PATTERN).unwrap();

    let mut units = Vec::new();
    for (column, label) in label_row.iter().enumerate().skip(1) {
        if let Some(caps) = re.captures(label) {
            units.push(UnitColumn {
                id: format!("tract{}", &caps[1]),
                column,
            });
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&[&str]]) -> RawTable {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn reshapes_and_skips_sentinel_rows() {
        let raw = rows(&[
            &["Title"],
            &["Label", "Census Tract 1", "Census Tract 2"],
            &["Total:", "10", "20"],
            &["Cat A", "3", "4"],
            &["Estimate", "x", "y"],
        ]);

        let table = reshape(&raw).unwrap();
        assert_eq!(table.unit_ids(), vec!["tract1", "tract2"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].name, "Cat A");
        assert_eq!(table.records[0].value("tract1"), Some(3));
        assert_eq!(table.records[0].value("tract2"), Some(4));
    }

    #[test]
    fn blank_cell_leaves_field_absent() {
        let raw = rows(&[
            &["Title"],
            &["Label", "Census Tract 1", "Census Tract 2"],
            &["Cat B", "", "7"],
        ]);

        let table = reshape(&raw).unwrap();
        let record = &table.records[0];
        assert_eq!(record.value("tract1"), None);
        assert_eq!(record.value("tract2"), Some(7));
    }

    #[test]
    fn single_row_table_is_malformed() {
        let raw = rows(&[&["Title"]]);
        let err = reshape(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedTable);
    }

    #[test]
    fn two_rows_with_no_data_is_fine() {
        let raw = rows(&[&["Title"], &["Label", "Census Tract 5"]]);
        let table = reshape(&raw).unwrap();
        assert_eq!(table.unit_ids(), vec!["tract5"]);
        assert!(table.records.is_empty());
    }

    #[test]
    fn unresolved_label_drops_its_column_without_shifting_neighbors() {
        // The middle column has no recognizable tract id; its numeric cells
        // must vanish while the third column stays aligned.
        let raw = rows(&[
            &["Title"],
            &["Label", "Census Tract 1", "Margin of Error", "Census Tract 2"],
            &["Cat A", "3", "99", "4"],
        ]);

        let table = reshape(&raw).unwrap();
        assert_eq!(table.unit_ids(), vec!["tract1", "tract2"]);
        let record = &table.records[0];
        assert_eq!(record.value("tract1"), Some(3));
        assert_eq!(record.value("tract2"), Some(4));
        assert!(record.values.values().all(|v| *v != 99));
    }

    #[test]
    fn strict_parsing_rejects_grouped_and_padded_numbers() {
        let raw = rows(&[
            &["Title"],
            &["Label", "Census Tract 1", "Census Tract 2", "Census Tract 3"],
            &["Cat A", "1,234", " 7 ", "-5"],
        ]);

        let table = reshape(&raw).unwrap();
        let record = &table.records[0];
        assert_eq!(record.value("tract1"), None);
        assert_eq!(record.value("tract2"), None);
        assert_eq!(record.value("tract3"), Some(-5));
    }

    #[test]
    fn row_count_matches_source_minus_skips() {
        let raw = rows(&[
            &["Title"],
            &["Label", "Census Tract 1"],
            &["Total:", "10"],
            &["Cat A", "1"],
            &["Cat B", "2"],
            &["Estimate", "3"],
            &["Cat C", "4"],
        ]);

        let table = reshape(&raw).unwrap();
        assert_eq!(table.records.len(), raw.len() - 2 - 2);
        let names: Vec<&str> = table.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cat A", "Cat B", "Cat C"]);
    }

    #[test]
    fn reshape_is_idempotent() {
        let raw = rows(&[
            &["Title"],
            &["Label", "Census Tract 1", "Census Tract 2"],
            &["Cat A", "3", ""],
            &["Cat B", "1", "2"],
        ]);

        assert_eq!(reshape(&raw).unwrap(), reshape(&raw).unwrap());
    }
}
