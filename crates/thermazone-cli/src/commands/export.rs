//! Export command implementation.
//!
//! Dumps the enriched batch as CSV or JSON, to stdout or a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::app::App;
use crate::cli::OutputFormat;
use crate::format;

pub fn cmd_export(app: &mut App, output: OutputFormat, target: Option<&Path>) -> Result<()> {
    let rows = app.enriched_measurements()?;

    let text = match output {
        OutputFormat::Csv => format::enriched_csv(&rows)?,
        OutputFormat::Json => format::to_json(&rows)?,
        OutputFormat::Text => bail!("Use --format csv or --format json for export"),
    };

    match target {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !app.quiet {
                println!("Wrote {} rows to {}", rows.len(), path.display());
            }
        }
        None => print!("{text}"),
    }

    Ok(())
}
