//! Output formatting utilities for text, JSON, and CSV output.

use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use thermazone_types::{EnrichedMeasurement, ZoneStatistics};

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
}

/// Serialize a value as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

/// Serialize enriched rows as CSV (header row included).
pub fn enriched_csv(rows: &[EnrichedMeasurement]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let data = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("CSV buffer error: {err}"))?;
    Ok(String::from_utf8(data)?)
}

fn degrees(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2} °C"))
}

/// Render statistics as a label/value listing.
///
/// Temperatures print with two decimals, the tolerance percentage with one,
/// matching the presentation contract of the summary.
pub fn format_stats_text(stats: &ZoneStatistics, opts: &FormatOptions) -> String {
    let pct = format!("{:.1} %", stats.pct_in_tolerance);
    let pct = if opts.no_color {
        pct
    } else if stats.pct_in_tolerance >= 90.0 {
        pct.green().to_string()
    } else if stats.pct_in_tolerance >= 50.0 {
        pct.yellow().to_string()
    } else {
        pct.red().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "Measurements:           {}", stats.samples);
    let _ = writeln!(
        out,
        "Mean temperature:       {:.2} °C",
        stats.mean_temperature
    );
    let _ = writeln!(out, "Mean setpoint:          {}", degrees(stats.mean_setpoint));
    let _ = writeln!(out, "Mean deviation:         {}", degrees(stats.mean_deviation));
    let _ = writeln!(
        out,
        "Max absolute deviation: {}",
        degrees(stats.max_abs_deviation)
    );
    let _ = writeln!(out, "Min temperature:        {:.2} °C", stats.min_temperature);
    let _ = writeln!(out, "Max temperature:        {:.2} °C", stats.max_temperature);
    let _ = writeln!(out, "Within tolerance:       {pct}");
    out
}
