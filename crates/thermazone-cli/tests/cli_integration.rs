//! CLI integration tests.
//!
//! These cover argument parsing, configuration resolution, and the
//! load/enrich/summarize path the commands drive, everything short of
//! terminal rendering.

use std::io::Write as _;

use clap::Parser as _;
use thermazone_cli::app::App;
use thermazone_cli::cli::{Cli, Commands, OutputFormat};
use thermazone_cli::config::Config;
use thermazone_core::stats;
use thermazone_types::Zone;

fn temp_csv(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Name,time,temperature").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

// ==================== Argument parsing ====================

#[test]
fn test_parse_stats_with_zone() {
    let cli = Cli::try_parse_from(["thermazone", "stats", "--zone", "Classrooms"]).unwrap();

    match cli.command {
        Commands::Stats { zone, room, format } => {
            assert_eq!(zone, Some(Zone::Classrooms));
            assert_eq!(room, None);
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected stats command"),
    }
}

#[test]
fn test_parse_zone_label_with_spaces() {
    let cli = Cli::try_parse_from(["thermazone", "stats", "--zone", "multipurpose hall"]).unwrap();

    match cli.command {
        Commands::Stats { zone, .. } => assert_eq!(zone, Some(Zone::MultipurposeHall)),
        _ => panic!("expected stats command"),
    }
}

#[test]
fn test_parse_unknown_zone_fails() {
    assert!(Cli::try_parse_from(["thermazone", "stats", "--zone", "Gymnasium"]).is_err());
}

#[test]
fn test_parse_export_options() {
    let cli = Cli::try_parse_from([
        "thermazone",
        "export",
        "--format",
        "json",
        "--output",
        "out.json",
        "--data",
        "measurements.csv",
    ])
    .unwrap();

    assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("measurements.csv")));
    match cli.command {
        Commands::Export { format, output } => {
            assert_eq!(format, OutputFormat::Json);
            assert_eq!(output.as_deref(), Some(std::path::Path::new("out.json")));
        }
        _ => panic!("expected export command"),
    }
}

// ==================== End-to-end pipeline ====================

#[test]
fn test_end_to_end_zone_statistics() {
    let data = temp_csv(&[
        "Classe 1,2024-01-09T09:00:00Z,18.8",
        "Classe 1 Eteindre,2024-01-09T10:00:00Z,19.2",
        "Salle fantôme,2024-01-09T09:00:00Z,23.0",
        "Préau,2024-01-13T09:00:00Z,14.0",
    ]);

    let config = Config::default();
    let mut app = App::new(&config, Some(data.path().to_path_buf()), true).unwrap();
    let rows = app.enriched_measurements().unwrap();
    assert_eq!(rows.len(), 4);

    let classrooms: Vec<_> = stats::by_zone(&rows, Zone::Classrooms).collect();
    assert_eq!(classrooms.len(), 2);
    let summary = stats::summarize(classrooms).unwrap();
    assert_eq!(summary.samples, 2);
    assert!((summary.mean_setpoint.unwrap() - 19.0).abs() < 1e-9);
    assert!((summary.pct_in_tolerance - 100.0).abs() < 1e-9);

    // The Saturday hall reading misses its 15.0 weekend setpoint by a degree.
    let hall = stats::summarize(stats::by_zone(&rows, Zone::MultipurposeHall)).unwrap();
    assert!((hall.max_abs_deviation.unwrap() - 1.0).abs() < 1e-9);
    assert!(hall.pct_in_tolerance.abs() < 1e-9);

    // The unknown room is retained, not silently dropped.
    let unknown = stats::summarize(stats::by_zone(&rows, Zone::Unknown)).unwrap();
    assert_eq!(unknown.samples, 1);
    assert_eq!(unknown.mean_setpoint, None);
}

#[test]
fn test_end_to_end_with_config_overrides() {
    let data = temp_csv(&["Couloir bureaux,2024-01-09T09:00:00Z,15.6"]);

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
utc_offset = "+02:00"
tolerance = 1.0

[schedule.Corridors]
day_start = "07:00"
day_end = "18:00"
day = 16.5
off_hours = 15.0
weekend = 14.0
"#
    )
    .unwrap();
    config_file.flush().unwrap();

    let config = Config::load(Some(config_file.path())).unwrap();
    let mut app = App::new(&config, Some(data.path().to_path_buf()), true).unwrap();
    let rows = app.enriched_measurements().unwrap();

    // 09:00 UTC is 11:00 at +02:00, inside the overridden day window.
    assert_eq!(rows[0].zone, Zone::Corridors);
    assert_eq!(rows[0].setpoint, Some(16.5));
    // |15.6 - 16.5| is outside the default band but inside the widened one.
    assert!(rows[0].in_tolerance);

    // Zones the override does not mention keep their built-in rule.
    assert!(app.enricher.schedule().rule(Zone::Classrooms).is_some());
}

#[test]
fn test_missing_data_path_is_an_error() {
    let config = Config::default();
    let mut app = App::new(&config, None, true).unwrap();
    assert!(app.enriched_measurements().is_err());
}

#[test]
fn test_malformed_rows_do_not_fail_the_batch() {
    let data = temp_csv(&[
        "Classe 1,2024-01-09T09:00:00Z,18.8",
        "Classe 2,not-a-timestamp,19.0",
    ]);

    let config = Config::default();
    let mut app = App::new(&config, Some(data.path().to_path_buf()), true).unwrap();
    let rows = app.enriched_measurements().unwrap();
    assert_eq!(rows.len(), 1);
}
