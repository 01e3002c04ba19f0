//! Exhaustive minimax over the remaining game tree.
//!
//! Scores are always from the computer's point of view: a finished line for
//! the computer is [`WIN`], for the human [`LOSS`], a full board [`DRAW`].
//! There is no pruning, caching or depth limit; the tic-tac-toe tree is small
//! enough to search to the end on every move.

use super::placement::Placement;
use crate::games::tictactoe::{Board, Player, Position, rules};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Minimax value of a position.
pub type Score = i8;

/// The computer completes a line.
pub const WIN: Score = 1;
/// The board fills with no line.
pub const DRAW: Score = 0;
/// The human completes a line.
pub const LOSS: Score = -1;

/// A candidate move and the value the computer can guarantee by playing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct ScoredMove {
    /// The square played.
    position: Position,
    /// Its minimax value.
    score: Score,
}

/// Outcome of a full search from one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SearchReport {
    /// The chosen move: highest score, lowest index on ties.
    best: ScoredMove,
    /// Every candidate in ascending index order.
    scored: Vec<ScoredMove>,
    /// Positions visited, the root's children included.
    nodes: u64,
}

impl SearchReport {
    /// Score recorded for `position`, if it was a candidate.
    pub fn score_of(&self, position: Position) -> Option<Score> {
        self.scored
            .iter()
            .find(|m| m.position == position)
            .map(|m| m.score)
    }
}

struct Search {
    computer: Player,
    human: Player,
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: &mut Board, computer_turn: bool) -> Score {
        self.nodes += 1;

        // Whoever completed a line moved last, i.e. is not the side to move now.
        if rules::check_winner(board).is_some() {
            return if computer_turn { LOSS } else { WIN };
        }
        if rules::is_full(board) {
            return DRAW;
        }

        let mover = if computer_turn {
            self.computer
        } else {
            self.human
        };

        let mut best = if computer_turn { Score::MIN } else { Score::MAX };
        for pos in board.empty_positions() {
            let score = {
                let mut placed = Placement::new(board, pos, mover);
                self.minimax(&mut placed, !computer_turn)
            };
            best = if computer_turn {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Scores every empty square for `computer` and picks the best.
///
/// The caller's board is never touched; the search runs on a private copy.
/// Returns `None` when the position is already decided (a line is complete
/// or no square is empty).
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &Board, computer: Player, human: Player) -> Option<SearchReport> {
    if board.is_terminal() {
        debug!("Position already decided, nothing to search");
        return None;
    }

    let mut scratch = board.clone();
    let mut search = Search {
        computer,
        human,
        nodes: 0,
    };

    let scored: Vec<ScoredMove> = scratch
        .empty_positions()
        .into_iter()
        .map(|position| {
            let mut placed = Placement::new(&mut scratch, position, computer);
            let score = search.minimax(&mut placed, false);
            ScoredMove { position, score }
        })
        .collect();

    let best = scored
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })?;

    debug!(
        best = %best.position,
        score = best.score,
        nodes = search.nodes,
        "Search complete"
    );

    Some(SearchReport {
        best,
        scored,
        nodes: search.nodes,
    })
}

/// Returns the optimal square for `computer`, or `None` if the game is decided.
pub fn choose_move(board: &Board, computer: Player, human: Player) -> Option<Position> {
    analyze(board, computer, human).map(|report| report.best.position)
}
