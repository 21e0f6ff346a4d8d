//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so that a loaded position can be judged the same way as one reached by
//! play.

pub mod consistency;
pub mod draw;
pub mod win;

pub use consistency::is_consistent;
pub use draw::is_full;
pub use win::{winning_lines, winners};

use super::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Computes the status of a board.
///
/// Order matters: an inconsistent mark count is `Impossible` before any
/// line is looked at, and lines for both players are `Impossible` too.
/// One player's lines (any number of them) is a win, a full board with no
/// line is a draw, anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if !is_consistent(board) {
        debug!(
            x = board.count(Player::X),
            o = board.count(Player::O),
            "Mark counts differ by more than one"
        );
        return GameStatus::Impossible;
    }

    let status = match winners(board) {
        (true, true) => GameStatus::Impossible,
        (true, false) => GameStatus::XWon,
        (false, true) => GameStatus::OWon,
        (false, false) if is_full(board) => GameStatus::Draw,
        (false, false) => GameStatus::InProgress,
    };
    debug!(%status, "Board evaluated");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cells: &str) -> GameStatus {
        evaluate(&Board::from_cells(cells).unwrap())
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_top_row_literal() {
        assert_eq!(eval("XXXOO    "), GameStatus::XWon);
    }

    #[test]
    fn test_o_column() {
        assert_eq!(eval("XOX O XOX"), GameStatus::OWon);
    }

    #[test]
    fn test_anti_diagonal() {
        assert_eq!(eval("OOX X X  "), GameStatus::XWon);
    }

    #[test]
    fn test_draw() {
        assert_eq!(eval("XOXOXXOXO"), GameStatus::Draw);
    }

    #[test]
    fn test_count_mismatch_beats_win() {
        assert_eq!(eval("XXXXO    "), GameStatus::Impossible);
        assert_eq!(eval("OOO      "), GameStatus::Impossible);
    }

    #[test]
    fn test_two_winners_impossible() {
        assert_eq!(eval("XXXOOO   "), GameStatus::Impossible);
    }

    #[test]
    fn test_double_line_same_player_wins() {
        // Last X at the top-left corner completes the top row and left column.
        assert_eq!(eval("XXXXOOXOO"), GameStatus::XWon);
    }

    #[test]
    fn test_in_progress() {
        assert_eq!(eval("XO  X  O "), GameStatus::InProgress);
    }
}
