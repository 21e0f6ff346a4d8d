//! Board coordinates as typed by the player: `row col`, both 1-indexed.

use super::action::InputError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A validated position on the board.
///
/// Rows and columns run from 1 to 3, top-left is `(1, 1)`. Deserialized
/// values go through the same range check as [`Coordinates::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Coordinates`].
#[derive(Deserialize)]
struct RawCoordinates {
    row: i64,
    col: i64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = InputError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl Coordinates {
    /// Creates coordinates, rejecting anything outside 1..=3.
    pub fn new(row: i64, col: i64) -> Result<Self, InputError> {
        let in_range = |v: i64| (1..=3).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(InputError::OutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Parses two whitespace-separated numbers, e.g. `"2 3"`.
    ///
    /// Each number must be plain ASCII digits; signs or any other character
    /// make the input `NotNumbers`, as does a token count other than two.
    /// Digits outside 1..=3, however long, are `OutOfRange`.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut parts = input.split_whitespace();
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InputError::NotNumbers);
        };

        Self::new(parse_digits(row)?, parse_digits(col)?)
    }

    /// Row, 1-indexed.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 1-indexed.
    pub fn col(self) -> u8 {
        self.col
    }

    pub(super) fn row_index(self) -> usize {
        usize::from(self.row - 1)
    }

    pub(super) fn col_index(self) -> usize {
        usize::from(self.col - 1)
    }
}

/// Digits-only token to a number; too many digits saturate so they still
/// land out of range.
fn parse_digits(token: &str) -> Result<i64, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumbers);
    }
    Ok(token.parse().unwrap_or(i64::MAX))
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
