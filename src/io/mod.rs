//! Input/output helpers.
//!
//! - catalog loading + dataset resolution (`catalog`)
//! - raw table reading (`table`)
//! - JSON export of normalized records (`export`)

pub mod catalog;
pub mod export;
pub mod table;

pub use catalog::*;
pub use export::*;
pub use table::*;
