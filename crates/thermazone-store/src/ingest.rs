//! CSV ingestion for raw measurements.
//!
//! The measurement export is a plain CSV file with a `Name,time,temperature`
//! header. Ingestion is deliberately forgiving at the row level: a row whose
//! timestamp or temperature does not parse is skipped and counted, never
//! aborting the batch (an unreadable file is still an error).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thermazone_types::RawMeasurement;
use tracing::warn;

use crate::error::{Error, Result};

/// Result of loading a measurement file.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Well-formed rows, in file order.
    pub measurements: Vec<RawMeasurement>,
    /// Number of malformed rows that were dropped.
    pub skipped: usize,
}

/// Read raw measurements from a CSV stream.
///
/// # Errors
///
/// Returns an error if the stream itself cannot be read. Malformed rows do
/// not error; they are counted in [`LoadOutcome::skipped`].
pub fn read_measurements<R: Read>(reader: R) -> Result<LoadOutcome> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut outcome = LoadOutcome::default();

    for (index, row) in csv.deserialize::<RawMeasurement>().enumerate() {
        match row {
            Ok(measurement) => outcome.measurements.push(measurement),
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => return Err(err.into()),
            Err(err) => {
                // Line 1 is the header, so data rows start at line 2.
                warn!("skipping malformed row at line {}: {err}", index + 2);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Load a measurement file from disk.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened, or a CSV/IO error
/// if the stream fails mid-read.
pub fn load_csv(path: impl AsRef<Path>) -> Result<LoadOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_measurements(file)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_read_well_formed_rows() {
        let data = "\
Name,time,temperature
Classe 1,2024-01-09T09:00:00Z,18.8
Classe 1 Eteindre,2024-01-09T09:10:00Z,18.9
Cantine,2024-01-09T09:00:00Z,20.5
";
        let outcome = read_measurements(data.as_bytes()).unwrap();

        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.measurements.len(), 3);
        assert_eq!(outcome.measurements[0].room_label, "Classe 1");
        assert_eq!(
            outcome.measurements[0].timestamp,
            datetime!(2024-01-09 09:00:00 UTC)
        );
        assert!((outcome.measurements[0].temperature - 18.8).abs() < f64::EPSILON);
        assert_eq!(outcome.measurements[1].room_label, "Classe 1 Eteindre");
    }

    #[test]
    fn test_malformed_rows_are_skipped_not_fatal() {
        let data = "\
Name,time,temperature
Classe 1,2024-01-09T09:00:00Z,18.8
Classe 2,not-a-timestamp,18.9
Classe 3,2024-01-09T09:00:00Z,warm
Cantine,2024-01-09T09:00:00Z,20.5
";
        let outcome = read_measurements(data.as_bytes()).unwrap();

        assert_eq!(outcome.measurements.len(), 2);
        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.measurements[1].room_label, "Cantine");
    }

    #[test]
    fn test_empty_file_yields_empty_outcome() {
        let outcome = read_measurements("Name,time,temperature\n".as_bytes()).unwrap();
        assert!(outcome.measurements.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_csv("/nonexistent/measurements.csv").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn test_load_csv_from_disk() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,time,temperature").unwrap();
        writeln!(file, "Préau,2024-01-13T09:00:00Z,14.0").unwrap();

        let outcome = load_csv(file.path()).unwrap();
        assert_eq!(outcome.measurements.len(), 1);
        assert_eq!(outcome.measurements[0].room_label, "Préau");
    }
}
