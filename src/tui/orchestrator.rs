//! Game orchestration between the terminal and the session.

use super::input::Command;
use crate::games::tictactoe::MoveError;
use crate::session::{GameEvent, GameSession};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Something happened in the game.
    Game(GameEvent),
    /// The computer is about to move; input is ignored until it does.
    ComputerThinking,
    /// A move was refused and nothing changed.
    MoveRejected(MoveError),
    /// A line could not be understood.
    InputRejected(String),
}

/// Drives a [`GameSession`] from terminal commands.
///
/// Human moves are applied as they arrive. When the computer is to move the
/// orchestrator waits out the thinking delay, then plays the engine's move.
/// During the delay moves are refused; a restart or quit cancels the pending
/// computer move.
pub struct Orchestrator {
    session: GameSession,
    delay: Duration,
    input_rx: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<ViewEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator. The delay comes from the session's settings.
    pub fn new(
        session: GameSession,
        input_rx: mpsc::UnboundedReceiver<Command>,
        event_tx: mpsc::UnboundedSender<ViewEvent>,
    ) -> Self {
        let delay = session.settings().think_delay();
        Self {
            session,
            delay,
            input_rx,
            event_tx,
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs games until the player quits or input closes.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.start_game()?;

        loop {
            if self.session.awaiting_computer() {
                if !self.computer_turn().await? {
                    break;
                }
                continue;
            }

            let Some(command) = self.input_rx.recv().await else {
                break;
            };
            match command {
                Command::Quit => break,
                Command::Restart => self.start_game()?,
                Command::Move(position) => {
                    match self.session.submit_move(position.to_index()) {
                        Ok(events) => self.emit_all(events)?,
                        Err(e) => self.event_tx.send(ViewEvent::MoveRejected(e))?,
                    }
                }
                Command::Unrecognized(text) => {
                    self.event_tx.send(ViewEvent::InputRejected(text))?;
                }
            }
        }

        info!(tally = %self.session.tally(), "Leaving game loop");
        Ok(())
    }

    /// Waits out the delay and plays the computer's move.
    ///
    /// Returns `false` when the player quit during the wait.
    async fn computer_turn(&mut self) -> Result<bool> {
        self.event_tx.send(ViewEvent::ComputerThinking)?;

        let thinking = sleep(self.delay);
        tokio::pin!(thinking);

        loop {
            tokio::select! {
                _ = &mut thinking => {
                    let events = self.session.play_computer_move()?;
                    self.emit_all(events)?;
                    return Ok(true);
                }
                command = self.input_rx.recv() => match command {
                    None | Some(Command::Quit) => {
                        debug!("Quit while computer was thinking");
                        return Ok(false);
                    }
                    Some(Command::Restart) => {
                        debug!("Restart cancelled pending computer move");
                        self.start_game()?;
                        return Ok(true);
                    }
                    Some(Command::Move(position)) => {
                        warn!(%position, "Move ignored while computer is thinking");
                        let rejected = MoveError::NotYourTurn(self.session.marks().human);
                        self.event_tx.send(ViewEvent::MoveRejected(rejected))?;
                    }
                    Some(Command::Unrecognized(text)) => {
                        self.event_tx.send(ViewEvent::InputRejected(text))?;
                    }
                },
            }
        }
    }

    fn start_game(&mut self) -> Result<()> {
        let events = self.session.start_game();
        self.emit_all(events)
    }

    fn emit_all(&self, events: Vec<GameEvent>) -> Result<()> {
        for event in events {
            self.event_tx.send(ViewEvent::Game(event))?;
        }
        Ok(())
    }
}
