use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use vattenvakt_config::VattenvaktConfig;
use vattenvakt_engine::{NullGauge, TerminalGauge, WaterRuntime};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file; defaults to the layered config/ hierarchy.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer-driven gauge loop
    Run(RunArgs),
    /// Run a deterministic fast-forward simulation
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Stop after this many ticks (runs until interrupted if omitted)
    #[arg(long)]
    pub ticks: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    pub ticks: u64,
    /// Override the configured seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Fail unless the run's state hash equals this hex digest
    #[arg(long)]
    pub validate_hash: Option<String>,
    /// Write the full report as YAML to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<VattenvaktConfig> {
    let config = match path {
        Some(path) => VattenvaktConfig::load_from_path(path)?,
        None => VattenvaktConfig::load()?,
    };
    Ok(config)
}

pub async fn run_live_mode(config: VattenvaktConfig, args: RunArgs) -> anyhow::Result<()> {
    let mut runtime = WaterRuntime::new(config, Box::new(TerminalGauge::default()));
    runtime.run(args.ticks).await;
    Ok(())
}

pub fn run_simulation_mode(mut config: VattenvaktConfig, args: SimulateArgs) -> anyhow::Result<()> {
    if let Some(seed) = args.seed {
        config.simulator.seed = seed;
    }
    let prometheus = config.telemetry.prometheus;

    let mut runtime = WaterRuntime::new(config, Box::new(NullGauge));
    let report = runtime.run_simulation(args.ticks);

    info!(
        ticks = report.ticks,
        tank_litres = report.tank_litres,
        home_litres = report.home_litres,
        leakage_litres = report.leakage_litres,
        alert_ticks = report.alert_ticks,
        state_hash = %report.state_hash,
        "simulation complete"
    );

    if prometheus {
        let rendered = runtime
            .metrics()
            .gather_metrics()
            .context("rendering metrics")?;
        print!("{rendered}");
    }

    if let Some(path) = &args.report {
        let yaml = serde_yaml::to_string(&report).context("serializing report")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    if let Some(expected) = &args.validate_hash {
        report.validate_hash(expected)?;
        info!("state hash validated");
    }

    Ok(())
}
