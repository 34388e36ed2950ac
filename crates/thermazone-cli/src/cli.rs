//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thermazone_types::Zone;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "thermazone")]
#[command(author, version, about = "Thermal-zone temperature analytics", long_about = None)]
pub struct Cli {
    /// Measurement CSV file (overrides the config file)
    #[arg(short, long, global = true, env = "THERMAZONE_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List zones and their schedule rules
    Zones {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List configured rooms and their zones
    Rooms {
        /// Restrict to one zone
        #[arg(short, long)]
        zone: Option<Zone>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summary statistics for a zone, a room, or the whole building
    Stats {
        /// Zone to analyze
        #[arg(short, long)]
        zone: Option<Zone>,

        /// Room to analyze (raw labels are normalized first)
        #[arg(short, long)]
        room: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Export enriched measurements
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
