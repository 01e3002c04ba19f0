//! The authoritative game: board, turn, status and history.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game state.
///
/// Owns the board exclusively. Moves go through [`Game::apply_move`], which
/// rejects illegal moves without changing anything and records the outcome
/// once a line is completed or the board fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::start(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn start(first_player: Player) -> Self {
        debug!("Starting game");
        Self {
            board: Board::new(),
            to_move: first_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and outcome for a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self, first_player: Player) {
        *self = Self::start(first_player);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if the square at a raw index is empty. Off-board indices are not.
    pub fn is_empty(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// True iff all nine squares are taken.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// The player holding a complete line, if any.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Empty squares in ascending index order.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Places `player`'s mark at `index` and updates the status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has an outcome
    /// - [`MoveError::OutOfRange`] for an index past 8
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::NotYourTurn`] if `player` is not the one to move
    ///
    /// On error nothing changes.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or_else(|| {
            warn!("Move rejected: off the board");
            MoveError::OutOfRange(index)
        })?;

        if player != self.to_move {
            warn!("Move rejected: out of turn");
            return Err(MoveError::NotYourTurn(player));
        }

        self.board.apply_move(pos, player).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.history.push(Move::new(player, pos));
        self.update_status();

        debug!(position = %pos, status = %self.status, "Move applied");
        Ok(self.status)
    }

    /// Applies a move for whoever is to move.
    pub fn make_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.apply_move(index, self.to_move)
    }

    fn update_status(&mut self) {
        if let Some(winner) = self.check_winner() {
            info!(%winner, "Game won");
            self.status = GameStatus::Won(winner);
        } else if self.is_full() {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
