//! Console tic-tac-toe library.
//!
//! Two players share one keyboard. The board can start empty or be loaded
//! from a nine-character literal, and every position is judged the same way:
//! a win, a draw, still in progress, or impossible to reach by alternating
//! play.
//!
//! # Architecture
//!
//! - **Games**: board, moves and rules (`evaluate`) with no I/O
//! - **Console**: the prompt / apply / evaluate loop over any reader and writer
//! - **Config**: optional TOML settings for the session around the game
//!
//! # Example
//!
//! ```
//! use console_tictactoe::{Board, GameStatus, rules};
//!
//! let board: Board = "XXXOO    ".parse().unwrap();
//! assert_eq!(rules::evaluate(&board), GameStatus::XWon);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console session
pub use console::Console;
pub use error::ConsoleError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Coordinates, Game, GameStatus, InputError, Line, Move,
    MoveError, Player, Square, rules,
};
