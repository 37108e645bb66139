//! Raw table reading.
//!
//! Dataset extracts are plain UTF-8 comma-separated files with ragged rows
//! (the title row usually has a single cell), so the reader runs headerless
//! and flexible. Empty lines are skipped by the CSV reader itself.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::domain::RawTable;
use crate::error::{AppError, ErrorKind};

/// Read a dataset extract into raw string rows.
///
/// Fails with `DatasetUnavailable` when the file cannot be read; no shape
/// validation happens here (that is the reshaper's job).
pub fn read_raw_table(path: &Path) -> Result<RawTable, AppError> {
    info!(path = %path.display(), "reading dataset extract");

    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::DatasetUnavailable,
            format!("Failed to open dataset '{}': {e}", path.display()),
        )
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            AppError::new(
                ErrorKind::DatasetUnavailable,
                format!("Failed to parse dataset '{}': {e}", path.display()),
            )
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!(rows = rows.len(), "dataset read");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_ragged_rows_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(
            &path,
            "Sex by Age\n\"Label\",\"Census Tract 1\",\"Census Tract 2\"\n\n\"Cat A\",3,4\n",
        )
        .unwrap();

        let rows = read_raw_table(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Sex by Age"]);
        assert_eq!(rows[2], vec!["Cat A", "3", "4"]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_raw_table(&dir.path().join("nope.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DatasetUnavailable);
    }
}
