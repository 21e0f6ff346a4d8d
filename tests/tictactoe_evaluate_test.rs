//! Tests for board evaluation.

use console_tictactoe::{Board, GameStatus, Player, rules};
use strum::IntoEnumIterator;

fn eval(cells: &str) -> GameStatus {
    rules::evaluate(&cells.parse::<Board>().expect("valid literal"))
}

/// Winning line templates; `#` marks the line, `.` an opponent mark.
const TEMPLATES: [&str; 8] = [
    "###.. .  ",
    ".. ###  .",
    " ..  .###",
    "#. #. #  ",
    ".#. #  #.",
    ". #. #  #",
    "#. .#   #",
    "  #.#.#  ",
];

#[test]
fn test_any_line_wins_with_consistent_counts() {
    for player in Player::iter() {
        let (mark, other) = match player {
            Player::X => ('X', 'O'),
            Player::O => ('O', 'X'),
        };
        for template in TEMPLATES {
            let cells: String = template
                .chars()
                .map(|c| match c {
                    '#' => mark,
                    '.' => other,
                    c => c,
                })
                .collect();
            assert_eq!(eval(&cells), GameStatus::won_by(player), "{cells:?}");
        }
    }
}

#[test]
fn test_example_literal() {
    assert_eq!(eval("XXXOO    "), GameStatus::XWon);
}

#[test]
fn test_count_gap_is_impossible() {
    assert_eq!(eval("XX       "), GameStatus::Impossible);
    assert_eq!(eval("XXXOXX   "), GameStatus::Impossible);
    assert_eq!(eval("OOO XO   "), GameStatus::Impossible);
    assert_eq!(eval("XXXXXXXXX"), GameStatus::Impossible);
}

#[test]
fn test_both_winners_impossible() {
    // Equal counts, so only the two completed lines make these impossible.
    assert_eq!(eval("XO XO XO "), GameStatus::Impossible);
    assert_eq!(eval("OOO   XXX"), GameStatus::Impossible);
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(eval("XOXXOOOXX"), GameStatus::Draw);
    assert_eq!(eval("OXOXXOXOX"), GameStatus::Draw);
}

#[test]
fn test_open_board_in_progress() {
    assert_eq!(eval("         "), GameStatus::InProgress);
    assert_eq!(eval("XO XO  X "), GameStatus::InProgress);
}
