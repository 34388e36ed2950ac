//! Error types for thermazone-store.

use std::path::PathBuf;

/// Result type for thermazone-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in thermazone-store.
///
/// Malformed data rows are not errors; they are skipped per row and counted
/// in the load outcome. These variants cover files that cannot be read at
/// all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Measurement file could not be opened.
    #[error("Failed to open measurement file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV stream itself failed mid-read (not a single bad row).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
