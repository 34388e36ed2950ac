//! Enrichment core for thermal-zone temperature analytics.
//!
//! This crate turns raw room-temperature readings into enriched rows carrying
//! zone, setpoint, deviation and tolerance data, and reduces enriched rows to
//! summary statistics.
//!
//! # Features
//!
//! - **Room-name normalization**: strip the power-off marker from raw labels
//! - **Zone registry**: immutable room→zone lookup built from configuration
//! - **Setpoint schedule**: per-zone weekday/weekend rules with half-open
//!   day windows
//! - **Enrichment pipeline**: one enriched row per raw row, never dropping
//!   or failing a row
//! - **Statistics**: order-independent summaries with explicit "no data"
//!
//! # Quick Start
//!
//! ```
//! use thermazone_core::{Enricher, FacilityClock, Schedule, ZoneRegistry, stats};
//! use thermazone_types::RawMeasurement;
//! use time::macros::datetime;
//!
//! let enricher = Enricher::new(
//!     ZoneRegistry::with_default_layout(),
//!     Schedule::default(),
//!     FacilityClock::from_offset_name("+01:00"),
//! );
//!
//! let rows = enricher.enrich_all(&[RawMeasurement {
//!     room_label: "Classe 1".to_string(),
//!     timestamp: datetime!(2024-01-09 09:00:00 UTC),
//!     temperature: 18.8,
//! }]);
//!
//! let summary = stats::summarize(&rows).expect("one row");
//! assert_eq!(summary.samples, 1);
//! ```

pub mod clock;
pub mod enrich;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod schedule;
pub mod stats;

pub use clock::FacilityClock;
pub use enrich::{DEFAULT_TOLERANCE, Enricher};
pub use error::{Error, Result};
pub use normalize::{POWER_OFF_MARKER, normalize_room_name};
pub use registry::{ZoneLayout, ZoneRegistry, ZoneRooms};
pub use schedule::{Schedule, ScheduleRule};
pub use stats::{by_room, by_zone, summarize};

// Re-export the shared data model for downstream convenience.
pub use thermazone_types::{EnrichedMeasurement, RawMeasurement, Zone, ZoneStatistics};
