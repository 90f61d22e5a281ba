//! Monotonic board invariant: cells never change once set.

use super::super::{Cell, GameState, MetaBoard};
use super::Invariant;

/// Invariant: Cells are monotonic (never overwritten).
///
/// Replaying the history onto empty boards must never hit an occupied cell
/// and must reproduce the current boards exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = MetaBoard::new();

        for mov in state.history() {
            let board = reconstructed.board_mut(mov.board);
            if !board.is_empty(mov.cell) {
                return false;
            }
            board.set(mov.cell, Cell::Occupied(mov.player));
        }

        reconstructed.boards() == state.meta_board().boards()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
