//! Rooms command implementation.
//!
//! Lists the registry contents, optionally restricted to one zone.

use anyhow::{Result, bail};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};
use thermazone_types::Zone;

use crate::app::App;
use crate::cli::OutputFormat;
use crate::format;

#[derive(Debug, Serialize)]
struct RoomEntry<'a> {
    room: &'a str,
    zone: Zone,
}

pub fn cmd_rooms(app: &App, zone: Option<Zone>, output: OutputFormat) -> Result<()> {
    let registry = app.enricher.registry();

    let zones: Vec<Zone> = match zone {
        Some(zone) => vec![zone],
        None => Zone::ALL.to_vec(),
    };

    let entries: Vec<RoomEntry<'_>> = zones
        .iter()
        .flat_map(|&zone| {
            registry
                .rooms_in(zone)
                .into_iter()
                .map(move |room| RoomEntry { room, zone })
        })
        .collect();

    match output {
        OutputFormat::Json => {
            print!("{}", format::to_json(&entries)?);
        }
        OutputFormat::Csv => bail!("CSV output is not supported for this command"),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No rooms configured for this selection.");
                return Ok(());
            }

            let mut builder = Builder::default();
            builder.push_record(["Room", "Zone"]);
            for entry in &entries {
                builder.push_record([entry.room, entry.zone.label()]);
            }

            let mut table = builder.build();
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}
