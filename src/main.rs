//! Tic-tac-toe in a native window.

use anyhow::Result;
use clap::Parser;
use tictactoe_gui::{GameConfig, cli::Cli, gui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument]
fn run(cli: Cli) -> Result<()> {
    let config = GameConfig::new(cli.size, cli.first.into())?;
    info!(?config, "Starting tic-tac-toe");
    gui::run(config)?;
    Ok(())
}
