//! Export normalized records to JSON.
//!
//! The export mirrors the response envelope the dashboard consumes: dataset
//! metadata plus a `data` array of flat records, so downstream charting code
//! can ingest it unchanged.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryRecord, NormalizedTable};
use crate::error::{AppError, ErrorKind};

/// A saved records file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsFile {
    pub dataset: String,
    pub name: String,
    pub data: Vec<CategoryRecord>,
}

/// Write the normalized records of one dataset to a JSON file.
pub fn write_records_json(
    path: &Path,
    code: &str,
    display_name: &str,
    table: &NormalizedTable,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::DatasetUnavailable,
            format!("Failed to create export JSON '{}': {e}", path.display()),
        )
    })?;

    let out = RecordsFile {
        dataset: code.to_string(),
        name: display_name.to_string(),
        data: table.records.clone(),
    };

    serde_json::to_writer_pretty(file, &out).map_err(|e| {
        AppError::new(
            ErrorKind::DatasetUnavailable,
            format!("Failed to write export JSON: {e}"),
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnitColumn;

    #[test]
    fn export_round_trips_flat_records() {
        let table = NormalizedTable {
            units: vec![UnitColumn {
                id: "tract1".to_string(),
                column: 1,
            }],
            records: vec![CategoryRecord {
                name: "Cat A".to_string(),
                values: [("tract1".to_string(), 3)].into_iter().collect(),
            }],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_records_json(&path, "B01001", "Sex by Age", &table).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["dataset"], "B01001");
        assert_eq!(value["data"][0]["name"], "Cat A");
        assert_eq!(value["data"][0]["tract1"], 3);

        let parsed: RecordsFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.data, table.records);
    }
}
