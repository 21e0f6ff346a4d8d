//! Command-line interface for console_tictactoe.

use clap::{Parser, Subcommand};

/// Console tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start from an empty board
    Play,

    /// Enter a nine-character starting board, then play it out
    Load,
}
