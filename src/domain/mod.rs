//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the dataset catalog (`Catalog`)
//! - reshaped table records (`RawTable`, `UnitColumn`, `CategoryRecord`, `NormalizedTable`)
//! - named user groups of datasets (`groups`)

pub mod groups;
pub mod types;

pub use groups::*;
pub use types::*;
