//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the TUI and CLI front-ends
//! - exported to JSON without a separate wire representation

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// The code → display-name registry used to validate and label dataset
/// selections.
///
/// Loaded once from a static resource and never mutated afterwards; passed by
/// reference into resolution functions rather than living in module-level
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes in lexical order. Look-ups are by key; this ordering exists only
    /// so listings are stable.
    pub fn codes_sorted(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

/// Raw rows of a wide-format statistical table, as parsed from a delimited
/// text resource.
///
/// Row 0 is a title/metadata row (ignored). Row 1 holds per-column
/// geographic-unit labels. Rows 2+ are data rows: cell 0 is a category label,
/// the remaining cells are numeric-or-blank values.
pub type RawTable = Vec<Vec<String>>;

/// A geographic-unit column recognized in the unit-label row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitColumn {
    /// Normalized identifier (e.g. `tract1902`) derived from the label.
    pub id: String,
    /// Column index into the raw rows. Data cells are read at this index, so
    /// a dropped label never shifts the alignment of its neighbors.
    pub column: usize,
}

/// One qualifying data row: a category label plus one numeric field per unit
/// whose raw cell parsed as an integer.
///
/// A unit key is present only when its cell parsed; parse failures leave the
/// key absent, never zero. Serializes flat: `{"name": "...", "tract1": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, i64>,
}

impl CategoryRecord {
    pub fn value(&self, unit_id: &str) -> Option<i64> {
        self.values.get(unit_id).copied()
    }

    /// Sum of present fields across the given units (absent fields count as 0).
    pub fn total(&self, unit_ids: &[&str]) -> i64 {
        unit_ids
            .iter()
            .filter_map(|id| self.value(id))
            .sum()
    }
}

/// Reshaped output: recognized units (in source column order) plus one record
/// per qualifying data row (in source row order). Read-only after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    pub units: Vec<UnitColumn>,
    pub records: Vec<CategoryRecord>,
}

impl NormalizedTable {
    pub fn unit_ids(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.id.as_str()).collect()
    }
}

/// Which chart the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ChartKind::Bar => ChartKind::Pie,
            ChartKind::Pie => ChartKind::Bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, pairs: &[(&str, i64)]) -> CategoryRecord {
        CategoryRecord {
            name: name.to_string(),
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn record_total_skips_absent_units() {
        let r = record("Cat A", &[("tract1", 3), ("tract2", 4)]);
        assert_eq!(r.total(&["tract1", "tract2"]), 7);
        assert_eq!(r.total(&["tract2"]), 4);
        assert_eq!(r.total(&["tract9"]), 0);
    }

    #[test]
    fn record_serializes_flat() {
        let r = record("Cat A", &[("tract1", 3)]);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["name"], "Cat A");
        assert_eq!(v["tract1"], 3);
    }

    #[test]
    fn catalog_lookup_and_listing() {
        let catalog = Catalog::new(
            [("B01001".to_string(), "Sex by Age".to_string())]
                .into_iter()
                .collect(),
        );
        assert!(catalog.contains("B01001"));
        assert_eq!(catalog.display_name("B01001"), Some("Sex by Age"));
        assert_eq!(catalog.codes_sorted(), vec!["B01001"]);
    }
}
