//! The measurement enrichment pipeline.

use thermazone_types::{EnrichedMeasurement, RawMeasurement};

use crate::clock::FacilityClock;
use crate::normalize::normalize_room_name;
use crate::registry::ZoneRegistry;
use crate::schedule::Schedule;

/// Default tolerance band half-width around the setpoint, °C.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Enriches raw measurements with zone, setpoint and deviation data.
///
/// The pipeline is a pure batch transform: rows are independent, nothing is
/// filtered, and no row is ever dropped. Unknown rooms keep their row with
/// an undefined setpoint and `in_tolerance = false`.
///
/// # Example
///
/// ```
/// use thermazone_core::{Enricher, FacilityClock, Schedule, ZoneRegistry};
/// use thermazone_types::{RawMeasurement, Zone};
/// use time::macros::datetime;
///
/// let enricher = Enricher::new(
///     ZoneRegistry::with_default_layout(),
///     Schedule::default(),
///     FacilityClock::from_offset_name("+01:00"),
/// );
///
/// let row = enricher.enrich(&RawMeasurement {
///     room_label: "Classe 1".to_string(),
///     timestamp: datetime!(2024-01-09 09:00:00 UTC),
///     temperature: 18.8,
/// });
///
/// assert_eq!(row.zone, Zone::Classrooms);
/// assert_eq!(row.setpoint, Some(19.0));
/// assert!(row.in_tolerance);
/// ```
#[derive(Debug, Clone)]
pub struct Enricher {
    registry: ZoneRegistry,
    schedule: Schedule,
    clock: FacilityClock,
    tolerance: f64,
}

impl Enricher {
    /// Pipeline over the given registry, schedule and clock, with the
    /// default tolerance band.
    #[must_use]
    pub fn new(registry: ZoneRegistry, schedule: Schedule, clock: FacilityClock) -> Self {
        Self {
            registry,
            schedule,
            clock,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Replace the tolerance band half-width.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The tolerance band half-width in °C.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The room→zone registry the pipeline resolves against.
    #[must_use]
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// The schedule the pipeline reads setpoints from.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Enrich a single measurement. Infallible: per-row oddities degrade to
    /// undefined fields on that row.
    #[must_use]
    pub fn enrich(&self, raw: &RawMeasurement) -> EnrichedMeasurement {
        let room = normalize_room_name(Some(&raw.room_label));
        let zone = self.registry.resolve(&room);
        let local_time = self.clock.localize(raw.timestamp);
        let setpoint = self.schedule.setpoint(zone, local_time);
        let deviation = setpoint.map(|target| raw.temperature - target);
        let in_tolerance = deviation.is_some_and(|d| d.abs() <= self.tolerance);

        EnrichedMeasurement {
            room,
            zone,
            local_time,
            temperature: raw.temperature,
            setpoint,
            deviation,
            in_tolerance,
        }
    }

    /// Enrich a batch, one output row per input row, input order preserved.
    #[must_use]
    pub fn enrich_all(&self, rows: &[RawMeasurement]) -> Vec<EnrichedMeasurement> {
        rows.iter().map(|raw| self.enrich(raw)).collect()
    }
}
