//! Terminal view state, rebuilt purely from orchestrator events.

use super::orchestrator::ViewEvent;
use crate::games::tictactoe::{Board, GameStatus};
use crate::session::{GameEvent, Marks, Role, ScoreTally};
use tracing::debug;

/// What the terminal shows: a mirror of the board, a status line and the tally.
pub struct App {
    board: Board,
    marks: Option<Marks>,
    tally: ScoreTally,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            marks: None,
            tally: ScoreTally::default(),
            status_message: "Waiting for game to start...".to_string(),
        }
    }

    /// The mirrored board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The tally as last reported.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Handles a view event. Returns `true` when the board should be redrawn.
    pub fn handle_event(&mut self, event: ViewEvent) -> bool {
        debug!(?event, "Handling view event");

        match event {
            ViewEvent::Game(GameEvent::GameStarted { marks, first }) => {
                self.board = Board::new();
                self.marks = Some(marks);
                let opener = if first == marks.human { "You" } else { "Computer" };
                self.status_message = format!(
                    "New game. You are {}, computer is {}. {} first.",
                    marks.human, marks.computer, opener
                );
                true
            }
            ViewEvent::Game(GameEvent::CellUpdated {
                position,
                player,
                role,
            }) => {
                // Events come from an authoritative game, so the square is free here.
                let _ = self.board.apply_move(position, player);
                self.status_message = match role {
                    Role::Human => format!("You played {}.", position.label()),
                    Role::Computer => {
                        format!("Computer played {}. Your move (1-9).", position.label())
                    }
                };
                true
            }
            ViewEvent::Game(GameEvent::GameOver { status, winner }) => {
                self.status_message = match (status, winner) {
                    (GameStatus::Won(mark), Some(Role::Human)) => format!("{} - you win!", mark),
                    (GameStatus::Won(mark), _) => format!("{} - computer wins.", mark),
                    _ => "It's a tie!".to_string(),
                };
                self.status_message.push_str(" Press 'r' to restart or 'q' to quit.");
                false
            }
            ViewEvent::Game(GameEvent::ScoreChanged(tally)) => {
                self.tally = tally;
                true
            }
            ViewEvent::ComputerThinking => {
                self.status_message = "Computer is thinking...".to_string();
                false
            }
            ViewEvent::MoveRejected(e) => {
                self.status_message = format!("{}.", e);
                false
            }
            ViewEvent::InputRejected(text) => {
                self.status_message =
                    format!("Didn't understand {:?}. Type 1-9, 'r' or 'q'.", text);
                false
            }
        }
    }

    /// Renders board, tally and status as plain text.
    pub fn render(&self) -> String {
        let marks = self
            .marks
            .map(|m| format!("You: {}  Computer: {}\n", m.human, m.computer))
            .unwrap_or_default();
        format!(
            "\n{}\n\n{}{}\n{}",
            self.board.display(),
            marks,
            self.tally,
            self.status_message
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
