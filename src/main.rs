//! Strictly Tic-Tac-Toe - console game
//!
//! Runs one interactive game on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use strictly_tictactoe_console::Session;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();
    initialize_tracing();

    info!("Starting Strictly Tic-Tac-Toe");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    let phase = session
        .run()
        .inspect_err(|e| error!(error = %e, "Session aborted"))
        .context("Game session ended without a result")?;

    info!(%phase, "Game over");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
