//! Command-line interface for thermal-zone temperature analytics.
//!
//! This crate drives the enrichment core from the terminal: it loads the
//! measurement CSV, runs the pipeline, and renders zone/room statistics and
//! enriched exports.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `zones` | List zones with room counts and schedule rules |
//! | `rooms` | List configured rooms and their zones |
//! | `stats` | Summary statistics for a zone, a room, or the whole building |
//! | `export` | Export enriched measurements as CSV or JSON |
//!
//! # Output Formats
//!
//! - **Text** (default): human-readable tables and listings
//! - **JSON**: machine-readable output
//! - **CSV**: for spreadsheets and data analysis
//!
//! # Configuration
//!
//! Settings live in `~/.config/thermazone/config.toml` (or the platform
//! equivalent): the measurement file path, the facility UTC offset, the
//! tolerance band, and optional zone-layout and schedule overrides.
//!
//! # Environment Variables
//!
//! - `THERMAZONE_DATA`: measurement CSV path (overridden by `--data`)
//! - `NO_COLOR`: disable colored output when set
//!
//! # Examples
//!
//! Show the schedule table:
//! ```bash
//! thermazone zones
//! ```
//!
//! Statistics for one zone:
//! ```bash
//! thermazone stats --zone Classrooms --data measurements.csv
//! ```
//!
//! Export the enriched batch:
//! ```bash
//! thermazone export --format csv --output enriched.csv
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod format;

// Re-export core dependencies for convenience
pub use thermazone_core;
pub use thermazone_types;
