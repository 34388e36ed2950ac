//! Core types for thermal-zone measurement data.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::ParseError;

/// Thermal zone of the building.
///
/// A zone groups rooms that share one temperature schedule. The set is
/// closed on purpose: schedule rules are matched per variant, so a zone
/// without a rule is a compile-time hole rather than a runtime typo.
///
/// [`Zone::Unknown`] is the sentinel for rooms absent from the configured
/// layout. It is a first-class, expected case (sensors not yet classified)
/// and never has a schedule rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Teaching rooms.
    Classrooms,
    /// Corridors and circulation areas.
    Corridors,
    /// Sanitary facilities, storage and other ancillary rooms.
    AncillaryRooms,
    /// Offices and administrative rooms.
    Administrative,
    /// Canteen and dining rooms.
    Cafeteria,
    /// The covered multipurpose hall.
    MultipurposeHall,
    /// Kitchen and its annexes.
    Kitchen,
    /// Rooms heated by standalone electric radiators.
    ElectricRadiators,
    /// Sentinel for rooms not present in the zone layout.
    Unknown,
}

impl Zone {
    /// All real zones, in schedule-table order. Excludes [`Zone::Unknown`].
    pub const ALL: [Zone; 8] = [
        Zone::Classrooms,
        Zone::Corridors,
        Zone::AncillaryRooms,
        Zone::Administrative,
        Zone::Cafeteria,
        Zone::MultipurposeHall,
        Zone::Kitchen,
        Zone::ElectricRadiators,
    ];

    /// Whether this is the sentinel zone.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Zone::Unknown)
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Classrooms => "Classrooms",
            Zone::Corridors => "Corridors",
            Zone::AncillaryRooms => "Ancillary rooms",
            Zone::Administrative => "Administrative",
            Zone::Cafeteria => "Cafeteria",
            Zone::MultipurposeHall => "Multipurpose hall",
            Zone::Kitchen => "Kitchen",
            Zone::ElectricRadiators => "Electric radiators",
            Zone::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = ParseError;

    /// Parse a zone from its variant name or display label (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use thermazone_types::Zone;
    ///
    /// assert_eq!("Classrooms".parse::<Zone>(), Ok(Zone::Classrooms));
    /// assert_eq!("multipurpose hall".parse::<Zone>(), Ok(Zone::MultipurposeHall));
    /// assert!("Gymnasium".parse::<Zone>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        for zone in Zone::ALL.into_iter().chain([Zone::Unknown]) {
            let variant = format!("{zone:?}").to_lowercase();
            if wanted == variant || wanted == zone.label().to_lowercase() {
                return Ok(zone);
            }
        }
        Err(ParseError::UnknownZone(s.to_string()))
    }
}

/// A single raw reading as produced by the sensor export.
///
/// Serde field names mirror the source record shape (`Name`, `time`,
/// `temperature`) so rows deserialize without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    /// Raw room label; may carry the power-off marker.
    #[serde(rename = "Name")]
    pub room_label: String,
    /// Capture instant, interpreted as UTC at ingestion.
    #[serde(rename = "time", with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Measured temperature in °C.
    pub temperature: f64,
}

/// A raw measurement enriched with zone, setpoint and deviation data.
///
/// One enriched row is produced per raw row and never mutated afterwards.
/// Rows with unknown zones are retained with an undefined setpoint; it is up
/// to downstream consumers to exclude them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMeasurement {
    /// Normalized room name.
    pub room: String,
    /// Zone resolved via the registry.
    pub zone: Zone,
    /// Capture time on the facility's local wall clock.
    #[serde(with = "crate::timefmt::local_datetime")]
    pub local_time: PrimitiveDateTime,
    /// Measured temperature in °C.
    pub temperature: f64,
    /// Target temperature in °C; `None` for zones without a schedule rule.
    pub setpoint: Option<f64>,
    /// `temperature - setpoint`; `None` when the setpoint is undefined.
    pub deviation: Option<f64>,
    /// Whether the reading sits within the tolerance band. Always `false`
    /// when the deviation is undefined.
    pub in_tolerance: bool,
}

/// Summary statistics over a set of enriched measurements.
///
/// The `Option` aggregates follow mean-of-defined-values semantics: rows
/// with an undefined setpoint are excluded from them, and the fields are
/// `None` when no row in the subset has a defined setpoint. Such rows still
/// count in the [`pct_in_tolerance`](Self::pct_in_tolerance) denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStatistics {
    /// Number of measurements in the subset.
    pub samples: usize,
    /// Mean measured temperature in °C.
    pub mean_temperature: f64,
    /// Mean setpoint over rows with a defined setpoint.
    pub mean_setpoint: Option<f64>,
    /// Mean signed deviation over rows with a defined setpoint.
    pub mean_deviation: Option<f64>,
    /// Largest absolute deviation over rows with a defined setpoint.
    pub max_abs_deviation: Option<f64>,
    /// Lowest measured temperature in °C.
    pub min_temperature: f64,
    /// Highest measured temperature in °C.
    pub max_temperature: f64,
    /// Share of rows within the tolerance band, 0–100.
    pub pct_in_tolerance: f64,
}
