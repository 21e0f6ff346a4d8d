//! Console tic-tac-toe binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use console_tictactoe::{Console, Game, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    initialize_tracing(&config);

    run(cli.command.unwrap_or(Command::Play), &config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run(command: Command, config: &GameConfig) -> Result<()> {
    info!("Starting session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let game = match command {
        Command::Play => console.play(Game::new()),
        Command::Load => console.play_from_input(),
    }
    .context("Game session ended early")?;

    if *config.show_history() {
        console.show_history(&game)?;
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
