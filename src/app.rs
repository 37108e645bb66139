//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - runs the dataset pipeline
//! - prints reports or hands off to the TUI

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, DatasetArgs, ExportArgs, ListArgs};
use crate::error::AppError;
use crate::report;

pub mod pipeline;

use pipeline::LoadConfig;

/// Entry point for the `tractdash` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    // We want a bare `tractdash` (and `tractdash -d B01001`) to behave like
    // `tractdash tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while keeping the dashboard the default experience.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Show(args) => handle_dataset(args, OutputMode::Full),
        Command::Summary(args) => handle_dataset(args, OutputMode::SummaryOnly),
        Command::Export(args) => handle_export(args),
        Command::List(args) => handle_list(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn init_logging() {
    // Logs go to stderr so piped `show`/`export` output and the TUI's stdout
    // stay clean. Opt in via e.g. `RUST_LOG=tractdash=debug`.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    SummaryOnly,
}

fn handle_dataset(args: DatasetArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = LoadConfig::new(args.data_dir, args.dataset);
    let run = pipeline::run_dataset(&config)?;

    println!(
        "{}",
        report::format_summary(&run.code, &run.display_name, &run.summary)
    );

    if mode == OutputMode::Full {
        println!("{}", report::format_data_table(&run.table));
    }

    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = LoadConfig::new(args.dataset.data_dir, args.dataset.dataset);
    let run = pipeline::run_dataset(&config)?;

    crate::io::write_records_json(&args.out, &run.code, &run.display_name, &run.table)?;
    println!("Wrote {} records to {}", run.table.records.len(), args.out.display());
    Ok(())
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let catalog = crate::io::load_catalog(&args.data_dir)?;
    println!("{}", report::format_catalog(&catalog));
    Ok(())
}

/// Rewrite argv so `tractdash` defaults to `tractdash tui`.
///
/// Rules:
/// - `tractdash`                     -> `tractdash tui`
/// - `tractdash -d B01001 ...`       -> `tractdash tui -d B01001 ...`
/// - `tractdash --help/--version`    -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "show" | "summary" | "export" | "list" | "tui"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["tractdash"])), args(&["tractdash", "tui"]));
    }

    #[test]
    fn leading_flag_routes_to_tui() {
        assert_eq!(
            rewrite_args(args(&["tractdash", "-d", "B01001"])),
            args(&["tractdash", "tui", "-d", "B01001"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["tractdash", "show"])),
            args(&["tractdash", "show"])
        );
        assert_eq!(
            rewrite_args(args(&["tractdash", "--help"])),
            args(&["tractdash", "--help"])
        );
    }
}
