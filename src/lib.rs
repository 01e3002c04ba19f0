//! Unbeatable tic-tac-toe - board model and minimax decision engine
//!
//! A human plays against a computer that searches the whole remaining game
//! tree before every move, so it never loses.
//!
//! # Architecture
//!
//! - **Games**: the board model - squares, moves, win and draw detection
//! - **Engine**: exhaustive minimax choosing the computer's move
//! - **Session**: one human against the computer over many games, with a tally
//! - **Tui**: a line-based terminal front end
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Player, Position, choose_move};
//!
//! // X threatens the top row; O must block.
//! let board: Board = "XX..O....".parse().unwrap();
//! assert_eq!(choose_move(&board, Player::O, Player::X), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod games;
mod session;
mod settings;
mod tui;

// Crate-level exports - Decision engine
pub use engine::{
    DRAW, LOSS, Score, ScoredMove, SearchReport, WIN, analyze, choose_move, self_play,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Game, GameStatus, Move, MoveError, Player, Position, Square, rules,
};

// Crate-level exports - Session management
pub use session::{GameEvent, GameSession, Marks, Role, ScoreTally};

// Crate-level exports - Settings
pub use settings::{ConfigError, FirstPlayer, Settings};

// Crate-level exports - Terminal front end
pub use tui::{App, Command, Orchestrator, ViewEvent, parse_command, run_terminal};
