use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use thermazone_cli::app::App;
use thermazone_cli::cli::{Cli, Commands};
use thermazone_cli::commands::{self, StatsArgs};
use thermazone_cli::config::Config;
use thermazone_cli::format::FormatOptions;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let mut app = App::new(&config, cli.data.clone(), cli.quiet)?;
    let opts = FormatOptions {
        no_color: std::env::var_os("NO_COLOR").is_some(),
    };

    match cli.command {
        Commands::Zones { format } => commands::cmd_zones(&app, format),
        Commands::Rooms { zone, format } => commands::cmd_rooms(&app, zone, format),
        Commands::Stats { zone, room, format } => {
            commands::cmd_stats(&mut app, StatsArgs { zone, room, format }, &opts)
        }
        Commands::Export { format, output } => {
            commands::cmd_export(&mut app, format, output.as_deref())
        }
    }
}
