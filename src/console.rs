//! Interactive console session.
//!
//! The session is generic over its reader and writer so the same loop
//! drives a terminal in the binary and in-memory buffers in tests.

use crate::error::ConsoleError;
use crate::games::tictactoe::{Board, Coordinates, Game, GameStatus, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const CELLS_PROMPT: &str = "Enter cells: ";
const MOVE_PROMPT: &str = "Enter the coordinates: ";

/// A game session bound to an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Releases the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its line terminator.
    ///
    /// End of input before a line arrives is an error: the game cannot go on
    /// without a player.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::new("Input closed before the game finished"));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Writes the framed board.
    pub fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", board)?;
        Ok(())
    }

    /// Asks for a nine-character board literal until one parses.
    ///
    /// Spaces are cells, so only the line terminator is stripped.
    #[instrument(skip(self))]
    pub fn read_board(&mut self) -> Result<Board, ConsoleError> {
        loop {
            let line = self.prompt(CELLS_PROMPT)?;
            match Board::from_cells(&line) {
                Ok(board) => return Ok(board),
                Err(e) => {
                    debug!(error = %e, input = %line, "Rejected board literal");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Asks for coordinates until a move is accepted, then returns the new
    /// status.
    ///
    /// Bad input and occupied squares are reported and asked again; the
    /// board only changes on an accepted move.
    #[instrument(skip(self, game))]
    pub fn read_move(&mut self, game: &mut Game) -> Result<GameStatus, ConsoleError> {
        loop {
            let line = self.prompt(MOVE_PROMPT)?;
            let outcome = Coordinates::parse(&line)
                .map_err(MoveError::from)
                .and_then(|at| game.play(at));

            match outcome {
                Ok(status) => return Ok(status),
                Err(MoveError::GameOver) => {
                    return Err(ConsoleError::new("Move requested after the game ended"));
                }
                Err(e) => {
                    debug!(error = ?e, input = %line, "Rejected move");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Runs the display / prompt / apply / evaluate loop until the game ends,
    /// then prints the final board and status line.
    #[instrument(skip_all)]
    pub fn play(&mut self, mut game: Game) -> Result<Game, ConsoleError> {
        while !game.status().is_terminal() {
            self.show_board(game.board())?;
            self.read_move(&mut game)?;
        }

        self.show_board(game.board())?;
        writeln!(self.output, "{}", game.status())?;
        info!(status = %game.status(), "Session finished");
        Ok(game)
    }

    /// Input mode A: reads a starting board, then plays it out.
    #[instrument(skip_all)]
    pub fn play_from_input(&mut self) -> Result<Game, ConsoleError> {
        let board = self.read_board()?;
        self.play(Game::from_board(board))
    }

    /// Lists the moves of a finished game, one per line.
    pub fn show_history(&mut self, game: &Game) -> Result<(), ConsoleError> {
        for (turn, mv) in game.history().iter().enumerate() {
            writeln!(self.output, "{}. {}", turn + 1, mv)?;
        }
        Ok(())
    }
}
