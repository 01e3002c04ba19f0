//! Tests for the minimax decision engine.

use std::collections::HashSet;
use unbeatable_tictactoe::{
    Board, DRAW, Game, GameStatus, LOSS, Player, Position, WIN, analyze, choose_move, rules,
    self_play,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_completes_top_row() {
    // X X . / O O . / . . .  with X to move
    let board = board("XX.OO....");
    assert_eq!(rules::check_winner(&board), None);
    assert_eq!(choose_move(&board, Player::X, Player::O), Some(Position::TopRight));
}

#[test]
fn test_takes_immediate_win_over_block() {
    // O O . / X X . / X . .  with O to move: winning at 2 beats blocking at 5.
    let board = board("OO.XX.X..");
    let report = analyze(&board, Player::O, Player::X).unwrap();
    assert_eq!(report.best().position(), &Position::TopRight);
    assert_eq!(report.best().score(), &WIN);
}

#[test]
fn test_blocks_when_no_win_available() {
    // X X . / . O . / . . .  with O to move
    let board = board("XX..O....");
    let report = analyze(&board, Player::O, Player::X).unwrap();
    assert_eq!(report.best().position(), &Position::TopRight);
    assert!(report.best().score() >= &DRAW);
    for scored in report.scored() {
        if scored.position() != &Position::TopRight {
            assert_eq!(scored.score(), &LOSS, "{} should lose", scored.position());
        }
    }
}

#[test]
fn test_blocks_column_threat() {
    // X . . / X O . / . . .  with O to move: X threatens 6.
    let board = board("X..XO....");
    let position = choose_move(&board, Player::O, Player::X).unwrap();
    assert_eq!(position, Position::BottomLeft);
}

#[test]
fn test_answers_center_with_corner() {
    let board = board("....X....");
    let report = analyze(&board, Player::O, Player::X).unwrap();

    assert!(Position::CORNERS.contains(report.best().position()));

    let worst_corner = Position::CORNERS
        .iter()
        .map(|&p| report.score_of(p).unwrap())
        .min()
        .unwrap();
    let best_edge = Position::EDGES
        .iter()
        .map(|&p| report.score_of(p).unwrap())
        .max()
        .unwrap();
    assert!(worst_corner >= best_edge);
    assert_eq!(worst_corner, DRAW);
    assert_eq!(best_edge, LOSS);
}

#[test]
fn test_empty_board_is_a_draw() {
    let report = analyze(&Board::new(), Player::X, Player::O).unwrap();
    assert_eq!(report.best().score(), &DRAW);
    assert!(report.scored().iter().all(|m| m.score() == &DRAW));
    // First of the equally good openings.
    assert_eq!(report.best().position(), &Position::TopLeft);
}

#[test]
fn test_self_play_always_draws() {
    for first in [Player::X, Player::O] {
        let game = self_play(first).unwrap();
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.history().len(), 9);
    }
}

fn reachable_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Game::new()];
    let mut live = Vec::new();
    while let Some(game) = stack.pop() {
        if game.is_over() || !seen.insert(game.board().clone()) {
            continue;
        }
        live.push(game.board().clone());
        for pos in game.valid_moves() {
            let mut next = game.clone();
            next.make_move(pos.to_index()).unwrap();
            stack.push(next);
        }
    }
    live
}

#[test]
fn test_never_picks_an_occupied_square() {
    // Skip the two most expensive plies; everything after is covered.
    for board in reachable_positions()
        .into_iter()
        .filter(|b| b.empty_positions().len() <= 7)
    {
        let mover = board.inferred_to_move();
        let position = choose_move(&board, mover, mover.opponent()).unwrap();
        assert!(board.is_empty(position), "{} on {}", position, board.notation());
    }
}

/// Plays every human line against the engine; returns the worst result for the computer.
fn worst_outcome(game: &Game, computer: Player) -> GameStatus {
    if game.is_over() {
        return game.status();
    }

    if game.to_move() == computer {
        let position = choose_move(game.board(), computer, computer.opponent()).unwrap();
        let mut next = game.clone();
        next.apply_move(position.to_index(), computer).unwrap();
        return worst_outcome(&next, computer);
    }

    let mut worst = GameStatus::Won(computer);
    for pos in game.valid_moves() {
        let mut next = game.clone();
        next.make_move(pos.to_index()).unwrap();
        match worst_outcome(&next, computer) {
            lost @ GameStatus::Won(winner) if winner != computer => return lost,
            GameStatus::Draw => worst = GameStatus::Draw,
            _ => {}
        }
    }
    worst
}

#[test]
fn test_computer_never_loses_moving_second() {
    let outcome = worst_outcome(&Game::start(Player::X), Player::O);
    assert_ne!(outcome, GameStatus::Won(Player::X));
}

#[test]
fn test_computer_never_loses_moving_first() {
    let outcome = worst_outcome(&Game::start(Player::X), Player::X);
    assert_ne!(outcome, GameStatus::Won(Player::O));
}

#[test]
fn test_punishes_a_blunder() {
    // X opens in a corner and O answers anywhere but the center: X forces a win.
    let board = board("XO.......");
    let report = analyze(&board, Player::X, Player::O).unwrap();
    assert_eq!(report.best().score(), &WIN);
}
