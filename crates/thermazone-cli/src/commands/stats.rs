//! Stats command implementation.
//!
//! Computes summary statistics over a subset of the enriched batch, chosen
//! by zone and/or room: whole building, one zone, or one room.

use anyhow::Result;
use thermazone_core::{normalize_room_name, stats};
use thermazone_types::{EnrichedMeasurement, Zone};

use crate::app::App;
use crate::cli::OutputFormat;
use crate::format::{self, FormatOptions};

/// Arguments for the stats command.
#[derive(Debug)]
pub struct StatsArgs {
    pub zone: Option<Zone>,
    pub room: Option<String>,
    pub format: OutputFormat,
}

pub fn cmd_stats(app: &mut App, args: StatsArgs, opts: &FormatOptions) -> Result<()> {
    let rows = app.enriched_measurements()?;

    // Users type raw labels; match against the normalized name.
    let room = args.room.as_deref().map(|r| normalize_room_name(Some(r)));

    let subset: Vec<&EnrichedMeasurement> = rows
        .iter()
        .filter(|row| args.zone.is_none_or(|zone| row.zone == zone))
        .filter(|row| room.as_deref().is_none_or(|name| row.room == name))
        .collect();

    let Some(summary) = stats::summarize(subset.into_iter()) else {
        println!("No data for the selected subset.");
        return Ok(());
    };

    match args.format {
        OutputFormat::Json => print!("{}", format::to_json(&summary)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.serialize(&summary)?;
            let data = writer
                .into_inner()
                .map_err(|err| anyhow::anyhow!("CSV buffer error: {err}"))?;
            print!("{}", String::from_utf8(data)?);
        }
        OutputFormat::Text => {
            if !app.quiet {
                match (&args.zone, &room) {
                    (Some(zone), Some(room)) => println!("Room {room} ({zone})"),
                    (Some(zone), None) => println!("Zone {zone}"),
                    (None, Some(room)) => println!("Room {room}"),
                    (None, None) => println!("Whole building"),
                }
                println!();
            }
            print!("{}", format::format_stats_text(&summary, opts));
        }
    }

    Ok(())
}
