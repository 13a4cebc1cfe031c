use std::path::PathBuf;

use anyhow::Context;
use big_red_button::config::{Config, Overrides};
use big_red_button::{logging, ui};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "big-red-button")]
#[command(about = "Press the big red button. Three seconds later: boom.")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/big-red-button/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Length of one countdown step in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Number of explosion particles
    #[arg(long, value_name = "N")]
    particles: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "big_red_button=trace"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            tick_ms: self.tick_ms,
            particle_count: self.particles,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.overrides())?;

    logging::init_tracing(&config.logging).context("Failed to open log file")?;
    info!("Starting big-red-button v{}", env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("countdown-timer")
        .enable_time()
        .build()
        .context("Failed to start timer runtime")?;

    ui::runtime::run(&config, runtime.handle().clone())?;

    runtime.shutdown_background();
    info!("Shutdown complete");
    Ok(())
}
