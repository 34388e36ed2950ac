//! Summary statistics over enriched measurements.

use thermazone_types::{EnrichedMeasurement, Zone, ZoneStatistics};

/// Reduce a set of enriched measurements to summary statistics.
///
/// Returns `None` for an empty input so callers can tell "no data" apart
/// from a summary that happens to contain zeros. Rows with an undefined
/// setpoint are excluded from the setpoint and deviation aggregates but
/// still count in the tolerance percentage denominator (their
/// `in_tolerance` is false). All reductions are order-independent.
pub fn summarize<'a, I>(rows: I) -> Option<ZoneStatistics>
where
    I: IntoIterator<Item = &'a EnrichedMeasurement>,
{
    let mut samples = 0usize;
    let mut in_tolerance = 0usize;
    let mut temperature_sum = 0.0;
    let mut min_temperature = f64::INFINITY;
    let mut max_temperature = f64::NEG_INFINITY;

    let mut defined = 0usize;
    let mut setpoint_sum = 0.0;
    let mut deviation_sum = 0.0;
    let mut max_abs_deviation = 0.0f64;

    for row in rows {
        samples += 1;
        temperature_sum += row.temperature;
        min_temperature = min_temperature.min(row.temperature);
        max_temperature = max_temperature.max(row.temperature);
        if row.in_tolerance {
            in_tolerance += 1;
        }
        if let (Some(setpoint), Some(deviation)) = (row.setpoint, row.deviation) {
            defined += 1;
            setpoint_sum += setpoint;
            deviation_sum += deviation;
            max_abs_deviation = max_abs_deviation.max(deviation.abs());
        }
    }

    if samples == 0 {
        return None;
    }

    let mean_of_defined = |sum: f64| (defined > 0).then(|| sum / defined as f64);
    Some(ZoneStatistics {
        samples,
        mean_temperature: temperature_sum / samples as f64,
        mean_setpoint: mean_of_defined(setpoint_sum),
        mean_deviation: mean_of_defined(deviation_sum),
        max_abs_deviation: (defined > 0).then_some(max_abs_deviation),
        min_temperature,
        max_temperature,
        pct_in_tolerance: 100.0 * in_tolerance as f64 / samples as f64,
    })
}

/// Rows belonging to one zone.
pub fn by_zone(
    rows: &[EnrichedMeasurement],
    zone: Zone,
) -> impl Iterator<Item = &EnrichedMeasurement> {
    rows.iter().filter(move |row| row.zone == zone)
}

/// Rows for one normalized room name.
pub fn by_room<'a>(
    rows: &'a [EnrichedMeasurement],
    room: &'a str,
) -> impl Iterator<Item = &'a EnrichedMeasurement> {
    rows.iter().filter(move |row| row.room == room)
}
