//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board being played into.
    pub board: Position,
    /// The cell within that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, board: Position, cell: Position) -> Self {
        Self {
            player,
            board,
            cell,
        }
    }

    /// Creates a move from raw grid indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside 0-8. Indices come from the caller's
    /// own grid, so an out-of-range value is a programming error.
    pub fn from_indices(player: Player, board: usize, cell: usize) -> Self {
        let Some(board_pos) = Position::from_index(board) else {
            panic!("sub-board index {board} out of range 0-8");
        };
        let Some(cell_pos) = Position::from_index(cell) else {
            panic!("cell index {cell} out of range 0-8");
        };
        Self::new(player, board_pos, cell_pos)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> board {} ({}), cell {} ({})",
            self.player,
            self.board.to_index() + 1,
            self.board.label(),
            self.cell.to_index() + 1,
            self.cell.label()
        )
    }
}

/// Why a move was rejected.
///
/// Variants are listed in the order the checks run; the first failing
/// check wins and the state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The move targets a sub-board other than the forced one.
    #[display("Must play in sub-board {} ({}), not {}", required.to_index() + 1, required.label(), attempted.label())]
    WrongSubBoard {
        /// Sub-board the move was forced into.
        required: Position,
        /// Sub-board the move targeted.
        attempted: Position,
    },

    /// The target sub-board is already won or drawn.
    #[display("Sub-board {} is already decided", _0)]
    SubBoardDecided(Position),

    /// The target cell is already occupied.
    #[display("Cell {} of sub-board {} is already occupied", cell, board)]
    CellOccupied {
        /// Sub-board of the occupied cell.
        board: Position,
        /// The occupied cell.
        cell: Position,
    },
}

impl std::error::Error for MoveError {}
