//! Error types for thermazone-core.

use thermazone_types::Zone;

/// Result type for thermazone-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building the enrichment core.
///
/// Enrichment itself is infallible by design: per-row oddities (unknown
/// rooms, unconvertible timestamps) degrade to undefined fields on that row.
/// Errors only arise from invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The same normalized room name appears under two zones in the layout.
    #[error("Room '{room}' is listed under both {first} and {second}")]
    DuplicateRoom {
        room: String,
        first: Zone,
        second: Zone,
    },
}
