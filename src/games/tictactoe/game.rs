//! Tic-tac-toe game engine: a board, whose turn it is, and the status.

use super::action::{Move, MoveError};
use super::position::Coordinates;
use super::rules;
use super::types::{Board, GameStatus, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A single game session.
///
/// The status is recomputed after every successful move and is never set
/// directly from outside, so a game can be serialized but not restored;
/// rebuild one with [`Game::from_board`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Resumes play from an arbitrary position.
    ///
    /// X moves next unless X already has more marks than O. The position is
    /// evaluated immediately, so a finished or impossible board comes back
    /// terminal.
    #[instrument]
    pub fn from_board(board: Board) -> Self {
        let to_move = if board.count(Player::X) <= board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        let status = rules::evaluate(&board);
        debug!(?to_move, %status, "Game created");
        Self {
            board,
            to_move,
            status,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves applied since the game was created.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Move history as JSON.
    pub fn history_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.history)
    }

    /// Re-evaluates the board and stores the resulting status.
    pub fn evaluate(&mut self) -> GameStatus {
        self.status = rules::evaluate(&self.board);
        self.status
    }

    /// Places the current player's mark at `(row, col)`, 1-indexed.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when either coordinate is outside 1..=3.
    /// - `CellOccupied` when the square already holds a mark.
    /// - `GameOver` once the status is terminal.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<GameStatus, MoveError> {
        let at = Coordinates::new(row, col)?;
        self.play(at)
    }

    /// Like [`Game::apply_move`], with coordinates already validated.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play(&mut self, at: Coordinates) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move attempted after game end");
            return Err(MoveError::GameOver);
        }

        self.board
            .place(at, self.to_move)
            .map_err(MoveError::CellOccupied)?;
        self.history.push(Move::new(self.to_move, at));
        self.to_move = self.to_move.opponent();

        let status = self.evaluate();
        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game finished");
        }
        Ok(status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
