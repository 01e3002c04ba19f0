//! Parsing of typed lines into player commands.

use crate::games::tictactoe::Position;

/// What the person at the terminal asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Claim a square.
    Move(Position),
    /// Abandon the current game and start another.
    Restart,
    /// Leave.
    Quit,
    /// Input that matched nothing.
    Unrecognized(String),
}

/// Parses one line: `1`-`9` or a square label, `r`/`restart`, `q`/`quit`.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "restart" | "new" => Command::Restart,
        _ => Position::from_label_or_number(trimmed)
            .map(Command::Move)
            .unwrap_or_else(|| Command::Unrecognized(trimmed.to_string())),
    }
}
