//! End-to-end enrichment tests over the default building configuration.

use thermazone_core::{Enricher, FacilityClock, Schedule, ZoneRegistry, stats};
use thermazone_types::{RawMeasurement, Zone};
use time::macros::datetime;

fn default_enricher() -> Enricher {
    Enricher::new(
        ZoneRegistry::with_default_layout(),
        Schedule::default(),
        FacilityClock::from_offset_name("+01:00"),
    )
}

#[test]
fn classroom_weekday_morning_reading_is_in_tolerance() {
    // 09:00 UTC on 2024-01-09 is 10:00 local on a Tuesday.
    let row = default_enricher().enrich(&RawMeasurement {
        room_label: "Classe 1".to_string(),
        timestamp: datetime!(2024-01-09 09:00:00 UTC),
        temperature: 18.8,
    });

    assert_eq!(row.room, "Classe 1");
    assert_eq!(row.zone, Zone::Classrooms);
    assert_eq!(row.local_time, datetime!(2024-01-09 10:00:00));
    assert_eq!(row.setpoint, Some(19.0));
    assert!((row.deviation.unwrap() - (-0.2)).abs() < 1e-9);
    assert!(row.in_tolerance);
}

#[test]
fn multipurpose_hall_saturday_reading_is_out_of_tolerance() {
    // 2024-01-13 is a Saturday.
    let row = default_enricher().enrich(&RawMeasurement {
        room_label: "Préau".to_string(),
        timestamp: datetime!(2024-01-13 09:00:00 UTC),
        temperature: 14.0,
    });

    assert_eq!(row.zone, Zone::MultipurposeHall);
    assert_eq!(row.setpoint, Some(15.0));
    assert!((row.deviation.unwrap() - (-1.0)).abs() < 1e-9);
    assert!(!row.in_tolerance);
}

#[test]
fn unknown_rooms_are_retained_and_flagged() {
    let enricher = default_enricher();
    let rows = enricher.enrich_all(&[
        RawMeasurement {
            room_label: "Classe 1".to_string(),
            timestamp: datetime!(2024-01-09 09:00:00 UTC),
            temperature: 18.8,
        },
        RawMeasurement {
            room_label: "Salle des cartes".to_string(),
            timestamp: datetime!(2024-01-09 09:00:00 UTC),
            temperature: 23.4,
        },
    ]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].zone, Zone::Unknown);
    assert_eq!(rows[1].setpoint, None);
    assert_eq!(rows[1].deviation, None);
    assert!(!rows[1].in_tolerance);
}

#[test]
fn power_off_marker_does_not_hide_the_room() {
    let row = default_enricher().enrich(&RawMeasurement {
        room_label: "Classe 1 Eteindre".to_string(),
        timestamp: datetime!(2024-01-09 09:00:00 UTC),
        temperature: 17.2,
    });

    assert_eq!(row.room, "Classe 1");
    assert_eq!(row.zone, Zone::Classrooms);
}

#[test]
fn day_window_boundaries_seen_through_the_pipeline() {
    let enricher = default_enricher();
    // 04:30 UTC = 05:30 local, first minute of the classroom day window.
    let at_start = enricher.enrich(&RawMeasurement {
        room_label: "Classe 1".to_string(),
        timestamp: datetime!(2024-01-09 04:30:00 UTC),
        temperature: 18.0,
    });
    assert_eq!(at_start.setpoint, Some(19.0));

    // 16:00 UTC = 17:00 local, first minute past the window.
    let at_end = enricher.enrich(&RawMeasurement {
        room_label: "Classe 1".to_string(),
        timestamp: datetime!(2024-01-09 16:00:00 UTC),
        temperature: 18.0,
    });
    assert_eq!(at_end.setpoint, Some(17.0));
}

#[test]
fn zone_statistics_over_an_enriched_batch() {
    let enricher = default_enricher();
    let rows = enricher.enrich_all(&[
        RawMeasurement {
            room_label: "Classe 1".to_string(),
            timestamp: datetime!(2024-01-09 09:00:00 UTC),
            temperature: 19.0,
        },
        RawMeasurement {
            room_label: "Classe 2".to_string(),
            timestamp: datetime!(2024-01-09 09:00:00 UTC),
            temperature: 17.8,
        },
        RawMeasurement {
            room_label: "Cantine".to_string(),
            timestamp: datetime!(2024-01-09 09:00:00 UTC),
            temperature: 20.9,
        },
    ]);

    let classrooms: Vec<_> = stats::by_zone(&rows, Zone::Classrooms).cloned().collect();
    let summary = stats::summarize(&classrooms).expect("two classroom rows");
    assert_eq!(summary.samples, 2);
    assert!((summary.mean_temperature - 18.4).abs() < 1e-9);
    assert!((summary.mean_setpoint.unwrap() - 19.0).abs() < 1e-9);
    assert!((summary.pct_in_tolerance - 50.0).abs() < 1e-9);

    let cafeteria = stats::summarize(stats::by_zone(&rows, Zone::Cafeteria)).expect("one row");
    assert_eq!(cafeteria.samples, 1);
    assert!(cafeteria.pct_in_tolerance > 99.9);

    // No corridor sensor reported anything: explicit "no data".
    assert_eq!(stats::summarize(stats::by_zone(&rows, Zone::Corridors)), None);
}
