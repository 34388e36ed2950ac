//! Shared command context: configuration resolved into a ready pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use thermazone_core::{DEFAULT_TOLERANCE, Enricher, FacilityClock, Schedule, ZoneRegistry};
use thermazone_store::CachedLoader;
use thermazone_types::EnrichedMeasurement;

use crate::config::Config;

/// Everything a command needs: the enrichment pipeline and the data source.
#[derive(Debug)]
pub struct App {
    /// The configured enrichment pipeline.
    pub enricher: Enricher,
    /// Suppress non-essential output.
    pub quiet: bool,
    loader: Option<CachedLoader>,
}

impl App {
    /// Resolve a configuration (plus an optional `--data` override) into a
    /// ready-to-run context.
    pub fn new(config: &Config, data_override: Option<PathBuf>, quiet: bool) -> Result<Self> {
        let layout = config.layout.clone().unwrap_or_default();
        let registry = ZoneRegistry::from_layout(&layout).context("Invalid zone layout")?;

        // Schedule overrides are per zone: zones the config does not mention
        // keep their built-in rule.
        let mut schedule = Schedule::default();
        if let Some(overrides) = &config.schedule {
            for (zone, rule) in overrides.iter() {
                schedule.set_rule(zone, *rule);
            }
        }

        let clock = FacilityClock::from_offset_name(config.facility_offset());
        let enricher = Enricher::new(registry, schedule, clock)
            .with_tolerance(config.tolerance.unwrap_or(DEFAULT_TOLERANCE));

        let loader = data_override
            .or_else(|| config.data.clone())
            .map(CachedLoader::new);

        Ok(Self {
            enricher,
            quiet,
            loader,
        })
    }

    /// Load the measurement batch and run it through the pipeline.
    pub fn enriched_measurements(&mut self) -> Result<Vec<EnrichedMeasurement>> {
        let loader = self.loader.as_mut().context(
            "No measurement file configured; pass --data or set `data` in the config file",
        )?;
        let batch = loader.load()?;
        if batch.skipped > 0 {
            tracing::warn!("{} malformed rows were skipped", batch.skipped);
        }
        Ok(self.enricher.enrich_all(&batch.measurements))
    }
}
