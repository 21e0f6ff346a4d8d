//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};
use tracing::instrument;

/// Returns the player owning `line`, if all three squares carry their mark.
pub fn line_owner(line: Line) -> Option<Player> {
    match line {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some(a)
        }
        _ => None,
    }
}

/// Number of completed lines for `player` across rows, columns and diagonals.
#[instrument]
pub fn winning_lines(board: &Board, player: Player) -> usize {
    board
        .lines()
        .filter(|&line| line_owner(line) == Some(player))
        .count()
}

/// Whether X and O each have at least one completed line, as `(x, o)`.
#[instrument]
pub fn winners(board: &Board) -> (bool, bool) {
    board
        .lines()
        .filter_map(line_owner)
        .fold((false, false), |(x, o), player| match player {
            Player::X => (true, o),
            Player::O => (x, true),
        })
}
