//! Configuration file management.
//!
//! The config file is the CLI's handle on the system's whole configuration
//! surface: measurement file location, facility UTC offset, tolerance band,
//! and optional zone-layout and schedule overrides. Everything has a
//! built-in default, so a missing file simply means "the reference building".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thermazone_core::{Schedule, ZoneLayout};

/// Facility offset used when the config does not name one.
pub const DEFAULT_UTC_OFFSET: &str = "+01:00";

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Measurement CSV file
    #[serde(default)]
    pub data: Option<PathBuf>,

    /// Facility UTC offset, e.g. "+01:00"
    #[serde(default)]
    pub utc_offset: Option<String>,

    /// Tolerance band half-width in °C
    #[serde(default)]
    pub tolerance: Option<f64>,

    /// Zone layout override (defaults to the built-in building layout)
    #[serde(default)]
    pub layout: Option<ZoneLayout>,

    /// Schedule override (defaults to the built-in rule table)
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl Config {
    /// Default config path: `<config dir>/thermazone/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("thermazone")
            .join("config.toml")
    }

    /// Load the configuration.
    ///
    /// An explicitly given path must exist; a missing file at the default
    /// path is an empty config, not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The facility UTC offset, falling back to [`DEFAULT_UTC_OFFSET`].
    pub fn facility_offset(&self) -> &str {
        self.utc_offset.as_deref().unwrap_or(DEFAULT_UTC_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use thermazone_types::Zone;

    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::default();
        assert_eq!(config.facility_offset(), "+01:00");
        assert!(config.data.is_none());
        assert!(config.layout.is_none());
    }

    #[test]
    fn test_load_explicit_missing_path_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }

    #[test]
    fn test_parse_config_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
data = "measurements.csv"
utc_offset = "+02:00"
tolerance = 1.0

[schedule.Corridors]
day_start = "07:00"
day_end = "18:00"
day = 18.0
off_hours = 15.0
weekend = 14.0
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.data.as_deref(), Some(Path::new("measurements.csv")));
        assert_eq!(config.facility_offset(), "+02:00");
        assert_eq!(config.tolerance, Some(1.0));

        let schedule = config.schedule.unwrap();
        let rule = schedule.rule(Zone::Corridors).unwrap();
        assert!((rule.day - 18.0).abs() < f64::EPSILON);
        // Only the overridden zone is present; the rest fall back at the
        // call site by starting from Schedule::default().
        assert!(schedule.rule(Zone::Classrooms).is_none());
    }
}
