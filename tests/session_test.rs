//! Tests for the human-versus-computer session.

use unbeatable_tictactoe::{
    FirstPlayer, GameEvent, GameSession, GameStatus, MoveError, Player, Position, Role,
    ScoreTally, Settings,
};

fn session(human: Player, first: FirstPlayer) -> GameSession {
    let settings = Settings::new()
        .with_human_mark(human)
        .with_first_player(first)
        .with_think_delay_ms(0);
    GameSession::new(settings)
}

/// Human plays the lowest free square every turn until the game ends.
fn play_naively(session: &mut GameSession) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while !session.game().is_over() {
        if session.awaiting_computer() {
            events.extend(session.play_computer_move().unwrap());
        } else {
            let index = session.game().valid_moves()[0].to_index();
            events.extend(session.submit_move(index).unwrap());
        }
    }
    events
}

#[test]
fn test_computer_beats_naive_human() {
    let mut session = session(Player::X, FirstPlayer::Human);
    let events = play_naively(&mut session);

    assert_eq!(session.game().status(), GameStatus::Won(Player::O));
    assert!(events.contains(&GameEvent::GameOver {
        status: GameStatus::Won(Player::O),
        winner: Some(Role::Computer),
    }));
    assert_eq!(session.tally().computer_wins(), &1);
    assert_eq!(session.tally().games(), 1);
}

#[test]
fn test_events_end_with_game_over_then_score() {
    let mut session = session(Player::O, FirstPlayer::Computer);
    let events = play_naively(&mut session);

    let n = events.len();
    assert!(matches!(events[n - 2], GameEvent::GameOver { .. }));
    assert_eq!(events[n - 1], GameEvent::ScoreChanged(session.tally()));

    let cells = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CellUpdated { .. }))
        .count();
    assert_eq!(cells, session.game().history().len());
}

#[test]
fn test_tally_counts_each_game_once() {
    let mut session = session(Player::X, FirstPlayer::Human);
    play_naively(&mut session);

    // Rejected moves after the end must not count again.
    assert_eq!(session.submit_move(8), Err(MoveError::GameOver));
    assert_eq!(session.play_computer_move(), Err(MoveError::GameOver));
    assert_eq!(session.tally().games(), 1);

    session.start_game();
    play_naively(&mut session);
    assert_eq!(session.tally().games(), 2);
    assert_eq!(session.tally().human_wins(), &0);
}

#[test]
fn test_abandoned_game_does_not_count() {
    let mut session = session(Player::X, FirstPlayer::Human);
    session.submit_move(0).unwrap();
    session.start_game();
    assert_eq!(session.tally(), ScoreTally::default());
    assert!(session.game().history().is_empty());
}

#[test]
fn test_computer_opens_when_configured() {
    let mut session = session(Player::X, FirstPlayer::Computer);
    assert!(session.awaiting_computer());
    assert_eq!(session.submit_move(4), Err(MoveError::NotYourTurn(Player::X)));

    let events = session.play_computer_move().unwrap();
    assert_eq!(
        events,
        vec![GameEvent::CellUpdated {
            position: Position::TopLeft,
            player: Player::O,
            role: Role::Computer,
        }]
    );
    assert!(!session.awaiting_computer());
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut session = session(Player::X, FirstPlayer::Human);
    session.submit_move(4).unwrap();
    session.play_computer_move().unwrap();

    let before = session.game().clone();
    let taken = session.game().history()[1].position();
    assert_eq!(
        session.submit_move(taken.to_index()),
        Err(MoveError::SquareOccupied(taken))
    );
    assert_eq!(session.submit_move(9), Err(MoveError::OutOfRange(9)));
    assert_eq!(session.game(), &before);
}

#[test]
fn test_optimal_human_only_draws() {
    let mut session = session(Player::X, FirstPlayer::Human);
    while !session.game().is_over() {
        if session.awaiting_computer() {
            session.play_computer_move().unwrap();
        } else {
            let board = session.game().board();
            let best = unbeatable_tictactoe::choose_move(board, Player::X, Player::O).unwrap();
            session.submit_move(best.to_index()).unwrap();
        }
    }
    assert_eq!(session.game().status(), GameStatus::Draw);
    assert_eq!(session.tally().ties(), &1);
}
