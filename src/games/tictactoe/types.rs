//! Core domain types for tic-tac-toe.

use super::position::Coordinates;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Returns true if a player has marked this square.
    pub fn is_occupied(self) -> bool {
        matches!(self, Square::Occupied(_))
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            ' ' | '_' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// A row, column or diagonal of three squares.
pub type Line = [Square; 3];

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The literal does not hold exactly nine cells.
    #[display("Expected 9 cells, got {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A cell is neither X, O, space nor underscore.
    #[display("Unexpected character {:?} at cell {}", found, index)]
    BadCell {
        /// The offending character.
        found: char,
        /// Zero-based row-major index of the cell.
        index: usize,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a nine-character row-major literal such as `"XO XO XO "`.
    #[instrument]
    pub fn from_cells(cells: &str) -> Result<Self, BoardParseError> {
        let count = cells.chars().count();
        if count != 9 {
            return Err(BoardParseError::WrongLength(count));
        }

        let mut board = Self::new();
        for (index, c) in cells.chars().enumerate() {
            let square =
                Square::from_symbol(c).ok_or(BoardParseError::BadCell { found: c, index })?;
            board.squares[index / 3][index % 3] = square;
        }
        Ok(board)
    }

    /// Gets the square at the given coordinates.
    pub fn get(&self, at: Coordinates) -> Square {
        self.squares[at.row_index()][at.col_index()]
    }

    fn set(&mut self, at: Coordinates, square: Square) {
        self.squares[at.row_index()][at.col_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, at: Coordinates) -> bool {
        self.get(at) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// The board is left untouched when the square is occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, at: Coordinates, player: Player) -> Result<(), Coordinates> {
        if !self.is_empty(at) {
            return Err(at);
        }
        self.set(at, Square::Occupied(player));
        Ok(())
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> [Line; 3] {
        self.squares
    }

    /// The three columns, left to right (the transpose of the rows).
    pub fn columns(&self) -> [Line; 3] {
        let mut transposed = [[Square::Empty; 3]; 3];
        for (i, row) in self.squares.iter().enumerate() {
            for (j, square) in row.iter().enumerate() {
                transposed[j][i] = *square;
            }
        }
        transposed
    }

    /// Main diagonal then anti-diagonal.
    pub fn diagonals(&self) -> [Line; 2] {
        let s = &self.squares;
        [[s[0][0], s[1][1], s[2][2]], [s[2][0], s[1][1], s[0][2]]]
    }

    /// All eight lines: rows, columns, diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        self.rows()
            .into_iter()
            .chain(self.columns())
            .chain(self.diagonals())
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Checks if every square is marked.
    pub fn is_full(&self) -> bool {
        self.squares.iter().flatten().all(|s| s.is_occupied())
    }

    /// Formats the board with a dashed frame, one `| c c c |` line per row.
    pub fn render(&self) -> String {
        const FRAME: &str = "---------";
        let mut result = String::from(FRAME);
        result.push('\n');
        for row in &self.squares {
            result.push_str("| ");
            for square in row {
                result.push(square.symbol());
                result.push(' ');
            }
            result.push_str("|\n");
        }
        result.push_str(FRAME);
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cells(s)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Game not finished")]
    InProgress,
    /// X completed a line.
    #[display("X wins")]
    XWon,
    /// O completed a line.
    #[display("O wins")]
    OWon,
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
    /// Board could not arise from alternating play.
    #[display("Impossible")]
    Impossible,
}

impl GameStatus {
    /// Status for a single winner.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWon,
            Player::O => GameStatus::OWon,
        }
    }

    /// Returns true once no further move can be made.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        let board = Board::from_cells("XO_ o X_x").unwrap();
        assert_eq!(board.count(Player::X), 3);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(
            board.get(Coordinates::new(1, 2).unwrap()),
            Square::Occupied(Player::O)
        );
        assert!(board.is_empty(Coordinates::new(1, 3).unwrap()));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Board::from_cells("XO"),
            Err(BoardParseError::WrongLength(2))
        );
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        assert_eq!(
            Board::from_cells("XO?      "),
            Err(BoardParseError::BadCell {
                found: '?',
                index: 2
            })
        );
    }

    #[test]
    fn test_columns_are_transpose() {
        let board = Board::from_cells("XO  X O  ").unwrap();
        let columns = board.columns();
        assert_eq!(columns[0], [
            Square::Occupied(Player::X),
            Square::Empty,
            Square::Occupied(Player::O)
        ]);
        assert_eq!(columns[1], [
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Empty
        ]);
        assert_eq!(columns[2], [Square::Empty; 3]);
    }

    #[test]
    fn test_render() {
        let board = Board::from_cells("XO XO XO ").unwrap();
        assert_eq!(
            board.render(),
            "---------\n| X O   |\n| X O   |\n| X O   |\n---------"
        );
    }

    #[test]
    fn test_place_refuses_occupied() {
        let mut board = Board::new();
        let center = Coordinates::new(2, 2).unwrap();
        board.place(center, Player::X).unwrap();
        let before = board.clone();
        assert_eq!(board.place(center, Player::O), Err(center));
        assert_eq!(board, before);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::XWon.to_string(), "X wins");
        assert_eq!(GameStatus::OWon.to_string(), "O wins");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
        assert_eq!(GameStatus::Impossible.to_string(), "Impossible");
        assert_eq!(GameStatus::InProgress.to_string(), "Game not finished");
    }
}
