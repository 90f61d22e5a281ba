//! Meta-cells mirror sub-board winners.

use super::super::{GameState, Position};
use super::Invariant;

/// Invariant: Each meta-cell equals the winner of its sub-board.
///
/// Drawn and open sub-boards both leave their meta-cell empty.
pub struct MetaConsistentInvariant;

impl Invariant<GameState> for MetaConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let meta = state.meta_board();
        Position::ALL
            .into_iter()
            .all(|pos| meta.meta_cell(pos) == meta.board(pos).winner())
    }

    fn description() -> &'static str {
        "Meta-cells match sub-board winners"
    }
}
