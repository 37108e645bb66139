//! Shared dataset pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! catalog load -> code resolution -> raw read -> reshape -> summary
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use std::path::PathBuf;

use tracing::info;

use crate::domain::{default_dataset, Catalog, NormalizedTable};
use crate::error::AppError;
use crate::io;
use crate::report::{self, DatasetSummary};
use crate::reshape;

/// Resolved inputs for one dataset load.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub data_dir: PathBuf,
    pub dataset: String,
}

impl LoadConfig {
    pub fn new(data_dir: impl Into<PathBuf>, dataset: Option<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            dataset: dataset.unwrap_or_else(|| default_dataset().to_string()),
        }
    }
}

/// All computed outputs of a single dataset load.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub code: String,
    pub display_name: String,
    pub table: NormalizedTable,
    pub summary: DatasetSummary,
}

/// Execute the full pipeline, loading the catalog first.
pub fn run_dataset(config: &LoadConfig) -> Result<RunOutput, AppError> {
    // 1) Load the catalog registry.
    let catalog = io::load_catalog(&config.data_dir)?;

    run_with_catalog(config, &catalog)
}

/// Execute the pipeline with an already-loaded catalog.
///
/// This is what the TUI uses so switching datasets does not re-read the
/// registry (load-once, read-many; the backing resources are static).
pub fn run_with_catalog(config: &LoadConfig, catalog: &Catalog) -> Result<RunOutput, AppError> {
    // 2) Validate the code and resolve the backing resource.
    let file_name = io::resolve_dataset(&config.dataset, catalog)?;
    let path = config.data_dir.join(&file_name);
    info!(dataset = %config.dataset, file = %file_name, "resolved dataset");

    // 3) Read and reshape.
    let raw = io::read_raw_table(&path)?;
    let table = reshape::reshape(&raw)?;

    // 4) Aggregate over all recognized units.
    let unit_ids = table.unit_ids();
    let summary = report::summarize(&table, &unit_ids);

    // The display name is guaranteed present: resolution already checked the
    // code against the catalog.
    let display_name = catalog
        .display_name(&config.dataset)
        .unwrap_or(&config.dataset)
        .to_string();

    Ok(RunOutput {
        code: config.dataset.clone(),
        display_name,
        table,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write_fixture(dir: &Path) {
        std::fs::write(
            dir.join(io::CATALOG_FILE),
            "B01001,Sex by Age\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("acs2022_5yr_B01001_14000US24510190200_B01001.csv"),
            "Sex by Age\n\
             \"Label\",\"Census Tract 1\",\"Census Tract 2\"\n\
             \"Total:\",10,20\n\
             \"Cat A\",3,4\n\
             \"Estimate\",x,y\n",
        )
        .unwrap();
    }

    #[test]
    fn pipeline_loads_reshapes_and_summarizes() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let config = LoadConfig::new(dir.path(), Some("B01001".to_string()));
        let run = run_dataset(&config).unwrap();

        assert_eq!(run.code, "B01001");
        assert_eq!(run.display_name, "Sex by Age");
        assert_eq!(run.table.records.len(), 1);
        assert_eq!(run.summary.grand_total, 7);
        assert_eq!(run.summary.highest, Some(("Cat A".to_string(), 7)));
    }

    #[test]
    fn unknown_code_fails_before_touching_files() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let config = LoadConfig::new(dir.path(), Some("B99999".to_string()));
        let err = run_dataset(&config).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::UnknownDataset);
    }

    #[test]
    fn default_dataset_fills_in_when_unspecified() {
        let config = LoadConfig::new("data", None);
        assert_eq!(config.dataset, crate::domain::default_dataset());
    }
}
