//! Tic-tac-toe board model: squares, positions, moves and terminal detection.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
