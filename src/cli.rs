//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{FirstPlayer, Player};

/// Unbeatable tic-tac-toe - play against exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play {
        /// Settings file (TOML). Flags below override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Your mark (x or o)
        #[arg(short, long)]
        mark: Option<Player>,

        /// Who moves first (human or computer)
        #[arg(short, long)]
        first: Option<FirstPlayer>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Let the engine play itself
    SelfPlay {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Mark that opens each game
        #[arg(long, default_value = "X")]
        first: Player,
    },

    /// Score every empty square of a position
    Analyze {
        /// Board as nine cells, row-major: X, O, and . for empty (e.g. "XX.OO....")
        board: String,

        /// Mark to move. Inferred from the mark counts if omitted.
        #[arg(short, long)]
        to_move: Option<Player>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
