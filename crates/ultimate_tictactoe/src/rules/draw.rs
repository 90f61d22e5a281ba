//! Draw detection for a single sub-board.

use super::super::{Cell, SubBoard};
use super::win::check_winner;

/// Checks if the sub-board is full (all cells occupied).
pub fn is_full(board: &SubBoard) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full sub-board with no winner is drawn.
pub fn is_draw(board: &SubBoard) -> bool {
    is_full(board) && check_winner(&board.marks()).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(layout: [Player; 9]) -> SubBoard {
        let mut board = SubBoard::new();
        for (pos, player) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&SubBoard::new()));
        assert!(!is_draw(&SubBoard::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = SubBoard::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
