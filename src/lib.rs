//! `tractdash` library crate.
//!
//! The binary (`tractdash`) is a thin wrapper around this library so that:
//!
//! - the catalog/reshape core is testable without spawning processes
//! - modules are reusable (e.g., a future web front-end on top of `app::pipeline`)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod reshape;
pub mod tui;
