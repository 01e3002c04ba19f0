//! Human-versus-computer game session.
//!
//! The session is the controller between a view and the core: it owns the
//! [`Game`], the mark assignment and the running [`ScoreTally`], turns
//! accepted moves into [`GameEvent`]s, and asks the engine for the
//! computer's replies.

use crate::engine;
use crate::games::tictactoe::{Game, GameStatus, MoveError, Player, Position};
use crate::settings::{FirstPlayer, Settings};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Which side of the table a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person at the keyboard.
    Human,
    /// The minimax engine.
    Computer,
}

/// Mark assignment for one game. Fixed from start to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marks {
    /// The human's mark.
    pub human: Player,
    /// The computer's mark.
    pub computer: Player,
}

impl Marks {
    /// Assigns `human` to the human and the other mark to the computer.
    pub fn for_human(human: Player) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    /// The role playing `mark`.
    pub fn role_of(&self, mark: Player) -> Role {
        if mark == self.human {
            Role::Human
        } else {
            Role::Computer
        }
    }
}

/// Completed-game counts, kept for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    ties: u32,
}

impl ScoreTally {
    /// Total number of finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }

    fn record(&mut self, winner: Option<Role>) {
        match winner {
            Some(Role::Human) => self.human_wins += 1,
            Some(Role::Computer) => self.computer_wins += 1,
            None => self.ties += 1,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - Computer {} - Ties {}",
            self.human_wins, self.computer_wins, self.ties
        )
    }
}

/// Notifications for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began with an empty board.
    GameStarted {
        /// Mark assignment for this game.
        marks: Marks,
        /// Mark that moves first.
        first: Player,
    },
    /// A square was claimed.
    CellUpdated {
        /// The square.
        position: Position,
        /// The mark placed there.
        player: Player,
        /// Who placed it.
        role: Role,
    },
    /// The game reached a win or a draw.
    GameOver {
        /// Final status, never `InProgress`.
        status: GameStatus,
        /// Role of the winner, `None` for a draw.
        winner: Option<Role>,
    },
    /// The tally changed after a finished game.
    ScoreChanged(ScoreTally),
}

/// A human-versus-computer session spanning any number of games.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    settings: Settings,
    marks: Marks,
    tally: ScoreTally,
}

impl GameSession {
    /// Creates a session. The first game is ready immediately.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        info!("Creating game session");
        let marks = Marks::for_human(*settings.human_mark());
        Self {
            game: Game::start(settings.opening_mark()),
            settings,
            marks,
            tally: ScoreTally::default(),
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Settings for the next game.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Marks in force for the current game.
    pub fn marks(&self) -> Marks {
        self.marks
    }

    /// Running tally.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Chooses the human's mark. Takes effect at the next [`start_game`](Self::start_game).
    #[instrument(skip(self))]
    pub fn configure_symbols(&mut self, human: Player) {
        debug!("Human mark configured for next game");
        self.settings = self.settings.with_human_mark(human);
    }

    /// Chooses who opens. Takes effect at the next [`start_game`](Self::start_game).
    #[instrument(skip(self))]
    pub fn configure_first_player(&mut self, first: FirstPlayer) {
        self.settings = self.settings.with_first_player(first);
    }

    /// Starts a fresh game with the configured marks, abandoning any game in progress.
    ///
    /// An abandoned game does not count towards the tally.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> Vec<GameEvent> {
        self.marks = Marks::for_human(*self.settings.human_mark());
        let first = self.settings.opening_mark();
        self.game.restart(first);
        info!(human = %self.marks.human, computer = %self.marks.computer, %first, "Game started");
        vec![GameEvent::GameStarted {
            marks: self.marks,
            first,
        }]
    }

    /// True while the game is live and the computer is to move.
    ///
    /// Human moves are refused in this window.
    pub fn awaiting_computer(&self) -> bool {
        !self.game.is_over() && self.game.to_move() == self.marks.computer
    }

    /// Applies a human move at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Any [`MoveError`]; the game is left unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<Vec<GameEvent>, MoveError> {
        if self.awaiting_computer() {
            warn!("Human move while computer is to move");
            return Err(MoveError::NotYourTurn(self.marks.human));
        }
        self.apply(index, self.marks.human)
    }

    /// Asks the engine for a move and applies it.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the game has ended, or
    /// [`MoveError::NotYourTurn`] if the human is to move.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<Vec<GameEvent>, MoveError> {
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.awaiting_computer() {
            return Err(MoveError::NotYourTurn(self.marks.computer));
        }

        let position = engine::choose_move(
            self.game.board(),
            self.marks.computer,
            self.marks.human,
        )
        .ok_or(MoveError::GameOver)?;

        debug!(%position, "Computer chose move");
        self.apply(position.to_index(), self.marks.computer)
    }

    fn apply(&mut self, index: usize, player: Player) -> Result<Vec<GameEvent>, MoveError> {
        let status = self.game.apply_move(index, player)?;
        let role = self.marks.role_of(player);

        let mut events = Vec::new();
        if let Some(&last) = self.game.history().last() {
            events.push(GameEvent::CellUpdated {
                position: last.position,
                player,
                role,
            });
        }

        if status.is_terminal() {
            let winner = status.winner().map(|mark| self.marks.role_of(mark));
            self.tally.record(winner);
            info!(%status, tally = %self.tally, "Game over");
            events.push(GameEvent::GameOver { status, winner });
            events.push(GameEvent::ScoreChanged(self.tally));
        }

        Ok(events)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
