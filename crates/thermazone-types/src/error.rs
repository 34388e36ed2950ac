//! Error types for data parsing in thermazone-types.

use thiserror::Error;

/// Errors that can occur when parsing zone and measurement data.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A zone label did not match any known zone.
    #[error("Unknown zone: {0}")]
    UnknownZone(String),
}

/// Result type alias using thermazone-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
