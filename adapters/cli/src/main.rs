#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that walks a ghost through a scenario file.

mod scenario;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scenario::LoadedScenario;

/// Walks a ghost through a maze scenario and prints every visited tile.
#[derive(Debug, Parser)]
#[command(name = "ghost-maze", version)]
struct Cli {
    /// Path to the scenario TOML file.
    scenario: PathBuf,
    /// Overrides the scenario's move budget.
    #[arg(long)]
    max_steps: Option<usize>,
    /// Log filter such as `debug` or `ghost_maze_system_navigation=trace`.
    /// Falls back to `RUST_LOG`, then to `info`.
    #[arg(long)]
    log_level: Option<String>,
}

/// Entry point for the ghost maze command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let source = fs::read_to_string(&cli.scenario)
        .with_context(|| format!("failed to read {}", cli.scenario.display()))?;
    let loaded = LoadedScenario::parse(&source)
        .with_context(|| format!("failed to load {}", cli.scenario.display()))?;

    print!("{}", loaded.run(cli.max_steps).render());
    Ok(())
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter {level:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
