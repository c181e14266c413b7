//! Command-line interface for solo_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Solo Tic Tac Toe - a ten game session against the computer
#[derive(Parser, Debug)]
#[command(name = "solo_tictactoe")]
#[command(about = "Play tic-tac-toe against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML engine config (session_limit, seed)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible session (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rounds per session (overrides the config file)
    #[arg(long)]
    pub session_limit: Option<u32>,

    /// File that receives log output while the TUI owns the terminal
    #[arg(long, default_value = "solo_tictactoe.log")]
    pub log_file: PathBuf,
}
