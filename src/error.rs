//! Application error type.
//!
//! Every failure in the pipeline carries a typed kind so callers can react to
//! the specific condition (missing dataset vs. broken file) instead of string
//! matching, plus a process exit code for the binary.

/// What went wrong, at the level callers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog resource could not be read at all.
    CatalogUnavailable,
    /// The catalog resource was readable but a row had fewer than two columns.
    CatalogMalformed,
    /// The requested dataset code is absent from the catalog (or empty).
    UnknownDataset,
    /// The dataset resource could not be read.
    DatasetUnavailable,
    /// The dataset resource has too few rows to contain a unit-label row.
    MalformedTable,
    /// Terminal/TUI I/O failure.
    Terminal,
}

#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Exit code convention: 2 = input/config, 3 = data, 4 = terminal.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::CatalogUnavailable
            | ErrorKind::CatalogMalformed
            | ErrorKind::UnknownDataset
            | ErrorKind::DatasetUnavailable => 2,
            ErrorKind::MalformedTable => 3,
            ErrorKind::Terminal => 4,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}
