//! ## vattenvakt-cli
//! **Operational entrypoint for the water monitoring simulator**
//!
//! Two modes:
//! - `run`: timer-driven loop rendering the gauge at the configured period
//! - `simulate`: deterministic fast-forward run with an optional YAML report
//!   and state-hash validation

use clap::Parser;
use vattenvakt_telemetry::EventLogger;

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config(cli.config.as_deref())?;
    EventLogger::init(&config.telemetry.log_level);

    match cli.command {
        Commands::Run(args) => commands::run_live_mode(config, args).await,
        Commands::Simulate(args) => commands::run_simulation_mode(config, args),
    }
}
