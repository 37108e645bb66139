//! Command-line parsing for the census tract dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the catalog/reshape code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tractdash", version, about = "Census Tract Demographics Dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the summary panel and the full data table for a dataset.
    Show(DatasetArgs),
    /// Print the summary panel only (useful for scripting).
    Summary(DatasetArgs),
    /// Export the normalized records of a dataset to JSON.
    Export(ExportArgs),
    /// List the dataset catalog and user groups.
    List(ListArgs),
    /// Launch the interactive TUI dashboard.
    ///
    /// This uses the same underlying pipeline as `tractdash show`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(DatasetArgs),
}

/// Common options for commands operating on one dataset.
#[derive(Debug, Parser, Clone)]
pub struct DatasetArgs {
    /// Dataset code (e.g. B01001). Defaults to the first dataset of the first
    /// user group.
    #[arg(short = 'd', long)]
    pub dataset: Option<String>,

    /// Directory holding the catalog and dataset extracts.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

/// Options for `tractdash export`.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Output JSON path.
    #[arg(long, value_name = "JSON")]
    pub out: PathBuf,
}

/// Options for `tractdash list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Directory holding the catalog and dataset extracts.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}
