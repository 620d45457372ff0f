//! Command-line interface for strictly_tictactoe_console.

use clap::Parser;

/// Strictly Tic-Tac-Toe - two players, one terminal
///
/// Moves are typed as `row col`, each 0-2. Set `RUST_LOG` (or put it in a
/// `.env` file) to see diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe_console")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
#[command(version)]
pub struct Cli {}
