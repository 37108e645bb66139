//! Reporting utilities: aggregates and formatted terminal output.
//!
//! We keep aggregation and formatting in one place so:
//! - the reshape core stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::NormalizedTable;

pub mod format;

pub use format::*;

/// Aggregates shown in the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Per-unit totals, in unit (column) order. Only selected units appear.
    pub unit_totals: Vec<(String, i64)>,
    pub grand_total: i64,
    pub category_count: usize,
    /// Highest-total category, if any data rows exist.
    pub highest: Option<(String, i64)>,
}

/// One slice of the pie view: a category's total across selected units and
/// its share of the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub total: i64,
    pub share: f64,
}

/// Compute summary aggregates over the selected units.
///
/// Absent fields count as zero in sums only; they never reappear as values.
pub fn summarize(table: &NormalizedTable, selected: &[&str]) -> DatasetSummary {
    let unit_totals: Vec<(String, i64)> = selected
        .iter()
        .map(|id| {
            let total = table
                .records
                .iter()
                .filter_map(|r| r.value(id))
                .sum();
            (id.to_string(), total)
        })
        .collect();

    let grand_total = unit_totals.iter().map(|(_, t)| t).sum();

    // First record wins ties, matching source row order.
    let mut highest: Option<(String, i64)> = None;
    for r in &table.records {
        let total = r.total(selected);
        if highest.as_ref().map_or(true, |(_, best)| total > *best) {
            highest = Some((r.name.clone(), total));
        }
    }

    DatasetSummary {
        unit_totals,
        grand_total,
        category_count: table.records.len(),
        highest,
    }
}

/// Per-category totals and shares for the pie view, in record order.
pub fn pie_breakdown(table: &NormalizedTable, selected: &[&str]) -> Vec<PieSlice> {
    let grand_total: i64 = table.records.iter().map(|r| r.total(selected)).sum();

    table
        .records
        .iter()
        .map(|r| {
            let total = r.total(selected);
            let share = if grand_total > 0 {
                total as f64 / grand_total as f64
            } else {
                0.0
            };
            PieSlice {
                name: r.name.clone(),
                total,
                share,
            }
        })
        .collect()
}
