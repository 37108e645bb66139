//! Formatted terminal output for the CLI front-end.

use crate::domain::{Catalog, NormalizedTable, UserGroup, USER_GROUPS};
use crate::report::DatasetSummary;

/// Format the summary panel for one dataset.
pub fn format_summary(code: &str, display_name: &str, summary: &DatasetSummary) -> String {
    let mut out = String::new();

    out.push_str("=== tractdash - Census Tract Demographics ===\n");
    out.push_str(&format!("Dataset: {display_name} ({code})\n"));
    out.push_str(&format!("Total Count: {}\n", fmt_count(summary.grand_total)));
    out.push_str(&format!("Categories: {}\n", summary.category_count));
    out.push_str(&format!("Census Tracts: {}\n", summary.unit_totals.len()));

    if let Some((name, total)) = &summary.highest {
        let pct = if summary.grand_total > 0 {
            *total as f64 / summary.grand_total as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "Highest Category: {name} ({} persons - {pct:.2}%)\n",
            fmt_count(*total)
        ));
    }

    out.push_str("\nPer-tract totals:\n");
    for (unit, total) in &summary.unit_totals {
        out.push_str(&format!(
            "- {:<12} {:>12}\n",
            unit_label(unit),
            fmt_count(*total)
        ));
    }

    out
}

/// Format the full data table (category × tract).
pub fn format_data_table(table: &NormalizedTable) -> String {
    let mut out = String::new();

    let name_width = table
        .records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 48);

    out.push_str(&format!("{:<name_width$}", "Category"));
    for unit in &table.units {
        out.push_str(&format!(" {:>12}", unit_label(&unit.id)));
    }
    out.push('\n');

    out.push_str(&format!("{:-<name_width$}", ""));
    for _ in &table.units {
        out.push_str(&format!(" {:->12}", ""));
    }
    out.push('\n');

    for record in &table.records {
        out.push_str(&format!("{:<name_width$}", truncate(&record.name, name_width)));
        for unit in &table.units {
            match record.value(&unit.id) {
                Some(v) => out.push_str(&format!(" {:>12}", fmt_count(v))),
                None => out.push_str(&format!(" {:>12}", "")),
            }
        }
        out.push('\n');
    }

    out
}

/// Format the catalog listing with user groups.
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str("Datasets:\n");
    for code in catalog.codes_sorted() {
        let name = catalog.display_name(code).unwrap_or("");
        out.push_str(&format!("  {code}  {name}\n"));
    }

    out.push_str("\nUser groups:\n");
    for group in USER_GROUPS {
        out.push_str(&format_group(group));
    }

    out
}

fn format_group(group: &UserGroup) -> String {
    format!(
        "  {}\n    {}\n    datasets: {}\n",
        group.name,
        group.description,
        group.datasets.join(", ")
    )
}

/// `tract190200` → `Tract 190200` (display only; record keys keep the raw id).
pub fn unit_label(unit_id: &str) -> String {
    match unit_id.strip_prefix("tract") {
        Some(n) => format!("Tract {n}"),
        None => unit_id.to_string(),
    }
}

/// Thousands-grouped rendering of a count.
pub fn fmt_count(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if v < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
