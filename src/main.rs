//! Unbeatable tic-tac-toe - CLI
//!
//! Interactive play, engine self-play, and position analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{
    Board, FirstPlayer, GameStatus, Player, Settings, analyze, run_terminal, self_play,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mark,
            first,
            delay_ms,
        } => run_play(config, mark, first, delay_ms).await,
        Command::SelfPlay { games, first } => run_self_play(games, first),
        Command::Analyze {
            board,
            to_move,
            json,
        } => run_analyze(&board, to_move, json),
    }
}

/// Interactive game in the terminal
#[instrument]
async fn run_play(
    config: Option<PathBuf>,
    mark: Option<Player>,
    first: Option<FirstPlayer>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let mut settings = match config {
        Some(path) => Settings::from_file(&path)
            .with_context(|| format!("Loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(mark) = mark {
        settings = settings.with_human_mark(mark);
    }
    if let Some(first) = first {
        settings = settings.with_first_player(first);
    }
    if let Some(delay_ms) = delay_ms {
        settings = settings.with_think_delay_ms(delay_ms);
    }

    info!(?settings, "Starting play");
    run_terminal(settings).await
}

/// Engine against itself
#[instrument]
fn run_self_play(games: u32, first: Player) -> Result<()> {
    let mut draws = 0;
    for number in 1..=games {
        let game = self_play(first)?;
        let moves: Vec<String> = game
            .history()
            .iter()
            .map(|m| format!("{}{}", m.player, m.position.to_index() + 1))
            .collect();
        println!("Game {}: {} ({})", number, game.status(), moves.join(" "));
        if game.status() == GameStatus::Draw {
            draws += 1;
        }
    }
    println!("{} of {} games drawn", draws, games);
    Ok(())
}

/// Per-square scores for one position
#[instrument]
fn run_analyze(board: &str, to_move: Option<Player>, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let mover = to_move.unwrap_or_else(|| board.inferred_to_move());

    let Some(report) = analyze(&board, mover, mover.opponent()) else {
        bail!("Position is already decided: nothing to analyze");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    println!("{} to move, {} positions searched", mover, report.nodes());
    for scored in report.scored() {
        let verdict = match *scored.score() {
            s if s > 0 => "win",
            0 => "draw",
            _ => "loss",
        };
        println!(
            "  {:>2}  {:<13} {:>2}  {}",
            scored.position().to_index() + 1,
            scored.position().label(),
            scored.score(),
            verdict
        );
    }
    println!("Best: {}", report.best().position());
    Ok(())
}
