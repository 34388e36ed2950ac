//! Platform-agnostic types for thermal-zone temperature analytics.
//!
//! This crate provides the shared data model used by the enrichment core
//! (thermazone-core), the ingestion layer (thermazone-store) and the CLI.
//!
//! # Features
//!
//! - The closed [`Zone`] enumeration with its `Unknown` sentinel
//! - Raw and enriched measurement records
//! - Summary statistics with mean-of-defined-values semantics
//! - Serde formats for the timestamp representations used on the wire
//!
//! # Example
//!
//! ```
//! use thermazone_types::Zone;
//!
//! let zone: Zone = "Classrooms".parse()?;
//! assert!(!zone.is_unknown());
//! # Ok::<(), thermazone_types::ParseError>(())
//! ```

pub mod error;
pub mod timefmt;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{EnrichedMeasurement, RawMeasurement, Zone, ZoneStatistics};
