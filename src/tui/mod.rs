//! Line-based terminal front end.
//!
//! Three workers cooperate over channels: a stdin reader turning lines into
//! [`Command`]s, the [`Orchestrator`] driving the session, and this module's
//! view loop printing [`App::render`] after each event.

mod app;
mod input;
mod orchestrator;

pub use app::App;
pub use input::{Command, parse_command};
pub use orchestrator::{Orchestrator, ViewEvent};

use crate::session::GameSession;
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Plays games in the terminal until the player quits.
#[instrument]
pub async fn run_terminal(settings: Settings) -> Result<()> {
    info!("Starting terminal game");

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    // Interactive stdin blocks; a detached thread keeps it from holding up shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(parse_command(&line)).is_err() {
                break;
            }
        }
        debug!("Input closed");
    });

    let mut orchestrator = Orchestrator::new(GameSession::new(settings), input_rx, event_tx);
    let game_loop = tokio::spawn(async move { orchestrator.run().await });

    println!("Tic-tac-toe. Type 1-9 to play a square, 'r' to restart, 'q' to quit.");
    let mut app = App::new();
    while let Some(event) = event_rx.recv().await {
        if app.handle_event(event) {
            println!("{}", app.render());
        } else {
            println!("{}", app.status_message());
        }
    }

    game_loop.await.context("Game loop panicked")??;
    println!("Final score: {}", app.tally());
    Ok(())
}
