//! Catalog loading and dataset resolution.
//!
//! The catalog is a small two-column CSV registry (code, display name) shared
//! by every front-end. It is loaded once per process into an immutable
//! `Catalog` value and passed by reference from there on; resolution is a
//! pure function of code + catalog.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::Catalog;
use crate::error::{AppError, ErrorKind};

/// File name of the catalog registry inside the data directory.
pub const CATALOG_FILE: &str = "TablesNamesList.csv";

/// Geographic id baked into every dataset file name (one Baltimore tract
/// group per extract batch).
const GEO_ID: &str = "14000US24510190200";

/// Load the catalog from `<data_dir>/TablesNamesList.csv`.
///
/// Fails with `CatalogUnavailable` when the resource cannot be read and
/// `CatalogMalformed` when any row has fewer than two columns.
pub fn load_catalog(data_dir: &Path) -> Result<Catalog, AppError> {
    let path = data_dir.join(CATALOG_FILE);
    info!(path = %path.display(), "loading catalog");

    let file = File::open(&path).map_err(|e| {
        AppError::new(
            ErrorKind::CatalogUnavailable,
            format!("Failed to open catalog '{}': {e}", path.display()),
        )
    })?;

    let catalog = parse_catalog(file)?;
    debug!(entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog rows from any reader (no header row expected).
pub fn parse_catalog<R: std::io::Read>(reader: R) -> Result<Catalog, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = HashMap::new();
    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 1;
        let record = result.map_err(|e| {
            AppError::new(
                ErrorKind::CatalogMalformed,
                format!("Catalog row {line}: CSV parse error: {e}"),
            )
        })?;

        let (Some(code), Some(name)) = (record.get(0), record.get(1)) else {
            return Err(AppError::new(
                ErrorKind::CatalogMalformed,
                format!("Catalog row {line}: expected two columns (code, name)."),
            ));
        };
        entries.insert(code.to_string(), name.to_string());
    }

    Ok(Catalog::new(entries))
}

/// Resolve a dataset code to its backing resource file name.
///
/// The naming convention is fixed across all extracts: the code appears twice
/// around the geographic id. Fails with `UnknownDataset` when the code is
/// empty or absent from the catalog.
pub fn resolve_dataset(code: &str, catalog: &Catalog) -> Result<String, AppError> {
    if code.is_empty() || !catalog.contains(code) {
        return Err(AppError::new(
            ErrorKind::UnknownDataset,
            format!("Unknown dataset '{code}'. See `tractdash list` for valid codes."),
        ));
    }
    Ok(dataset_file_name(code))
}

fn dataset_file_name(code: &str) -> String {
    format!("acs2022_5yr_{code}_{GEO_ID}_{code}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        parse_catalog("B01001,Sex by Age\nB02001,Race\n".as_bytes()).unwrap()
    }

    #[test]
    fn parses_two_column_rows() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.display_name("B02001"), Some("Race"));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse_catalog("B01001,Sex by Age\nB02001\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CatalogMalformed);
    }

    #[test]
    fn resolve_builds_template_with_code_twice() {
        let catalog = sample_catalog();
        let name = resolve_dataset("B01001", &catalog).unwrap();
        assert_eq!(name, "acs2022_5yr_B01001_14000US24510190200_B01001.csv");
        assert_eq!(name.matches("B01001").count(), 2);
    }

    #[test]
    fn resolve_rejects_unknown_and_empty_codes() {
        let catalog = sample_catalog();
        for code in ["B99999", ""] {
            let err = resolve_dataset(code, &catalog).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownDataset);
        }
    }

    #[test]
    fn missing_catalog_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CatalogUnavailable);
    }

    #[test]
    fn load_catalog_reads_registry_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CATALOG_FILE), "B01001,Sex by Age\n").unwrap();
        let catalog = load_catalog(dir.path()).unwrap();
        assert!(catalog.contains("B01001"));
    }
}
