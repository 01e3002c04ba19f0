//! Decision engine: picks the computer's move by exhaustive minimax.
//!
//! The engine only reads positions. It never mutates a [`Game`]; callers apply
//! the returned move exactly like a human move.

mod minimax;
mod placement;

pub use minimax::{DRAW, LOSS, SearchReport, Score, ScoredMove, WIN, analyze, choose_move};

use crate::games::tictactoe::{Game, MoveError, Player};
use tracing::{info, instrument};

/// Plays the engine against itself until the game ends.
///
/// Each side searches as the computer with the other as its opponent.
///
/// # Errors
///
/// Propagates a [`MoveError`] if the engine ever proposes an illegal move.
#[instrument]
pub fn self_play(first_player: Player) -> Result<Game, MoveError> {
    let mut game = Game::start(first_player);
    while !game.is_over() {
        let mover = game.to_move();
        let Some(position) = choose_move(game.board(), mover, mover.opponent()) else {
            break;
        };
        game.apply_move(position.to_index(), mover)?;
    }
    info!(status = %game.status(), moves = game.history().len(), "Self-play finished");
    Ok(game)
}
