//! Scoped speculative placement for the search.

use crate::games::tictactoe::{Board, Player, Position, Square};
use std::ops::{Deref, DerefMut};

/// A mark placed on a scratch board for the lifetime of the guard.
///
/// The square is cleared again on drop, so every return path out of a search
/// branch leaves the board as it found it.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    /// Places `player` at `position`, which must be empty.
    pub(crate) fn new(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(position), "speculative move onto {position}");
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_is_undone_on_drop() {
        let mut board: Board = "X...O....".parse().unwrap();
        let before = board.clone();
        {
            let placed = Placement::new(&mut board, Position::TopRight, Player::X);
            assert_eq!(placed.get(Position::TopRight), Square::Occupied(Player::X));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_placements_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut outer = Placement::new(&mut board, Position::Center, Player::X);
            {
                let inner = Placement::new(&mut outer, Position::TopLeft, Player::O);
                assert_eq!(inner.empty_positions().len(), 7);
            }
            assert_eq!(outer.empty_positions().len(), 8);
        }
        assert_eq!(board, Board::new());
    }
}
