//! Moves and the ways they can be rejected.

use super::{Coordinates, Player};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub at: Coordinates,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} {}", self.player, self.at.row(), self.at.col())
    }
}

/// Problem with the coordinates a player typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input was not two integers.
    #[display("You should enter numbers!")]
    NotNumbers,

    /// Integers outside 1..=3.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange {
        /// Row as typed.
        row: i64,
        /// Column as typed.
        col: i64,
    },
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// Row or column is non-numeric or out of range.
    #[display("{}", _0)]
    #[from]
    InvalidInput(InputError),

    /// The square at the position is already occupied.
    #[display("This cell is occupied! Choose another one!")]
    CellOccupied(#[error(not(source))] Coordinates),

    /// The game has already reached a terminal status.
    #[display("The game is already over")]
    GameOver,
}
