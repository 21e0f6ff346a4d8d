mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{InputError, Move, MoveError};
pub use game::Game;
pub use position::Coordinates;
pub use types::{Board, BoardParseError, GameStatus, Line, Player, Square};
