//! Zones command implementation.
//!
//! Lists every zone with its room count and schedule rule.

use anyhow::{Result, bail};
use tabled::{builder::Builder, settings::Style};
use thermazone_types::Zone;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::app::App;
use crate::cli::OutputFormat;
use crate::format;

const HHMM: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

fn hhmm(t: Time) -> String {
    t.format(HHMM).unwrap_or_else(|_| t.to_string())
}

pub fn cmd_zones(app: &App, output: OutputFormat) -> Result<()> {
    let schedule = app.enricher.schedule();

    match output {
        OutputFormat::Json => {
            print!("{}", format::to_json(schedule)?);
        }
        OutputFormat::Csv => bail!("CSV output is not supported for this command"),
        OutputFormat::Text => {
            let mut builder = Builder::default();
            builder.push_record([
                "Zone",
                "Rooms",
                "Day window",
                "Day °C",
                "Off-hours °C",
                "Weekend °C",
            ]);

            for zone in Zone::ALL {
                let rooms = app.enricher.registry().rooms_in(zone).len();
                match schedule.rule(zone) {
                    Some(rule) => builder.push_record([
                        zone.to_string(),
                        rooms.to_string(),
                        format!("{}–{}", hhmm(rule.day_start), hhmm(rule.day_end)),
                        format!("{:.1}", rule.day),
                        format!("{:.1}", rule.off_hours),
                        format!("{:.1}", rule.weekend),
                    ]),
                    None => builder.push_record([
                        zone.to_string(),
                        rooms.to_string(),
                        "n/a".to_string(),
                        "n/a".to_string(),
                        "n/a".to_string(),
                        "n/a".to_string(),
                    ]),
                }
            }

            let mut table = builder.build();
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}
