//! Tic Tac Go - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictacgo::{Cli, Settings, init_tracing, run_window};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let settings = Settings::resolve(&cli).context("Failed to load settings")?;
    info!(?settings, "Starting Tic Tac Go");

    let mut stdout = std::io::stdout();
    if let Err(e) = run_window(&settings, &mut stdout) {
        error!(error = ?e, "Window failed");
        return Err(e);
    }

    info!("Window closed");
    Ok(())
}
