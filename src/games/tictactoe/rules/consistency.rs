//! Mark-count consistency for alternating play.

use super::super::{Board, Player};
use tracing::instrument;

/// Checks that the X and O counts differ by at most one.
///
/// Any board reached by alternating turns satisfies this; a board that
/// fails it is `Impossible` no matter what lines it contains.
#[instrument]
pub fn is_consistent(board: &Board) -> bool {
    board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
}
