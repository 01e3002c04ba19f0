//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Both the game model and the
//! search call into these, so terminal detection has one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
