//! Status agrees with the meta-board.

use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: the status follows from the meta-board.
///
/// - `Won(p)` implies a meta-line of `p`
/// - `Draw` implies every sub-board decided and no meta-line
/// - `InProgress` implies neither
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let meta = state.meta_board();
        match state.status() {
            GameStatus::Won(p) => meta.winner() == Some(p),
            GameStatus::Draw => meta.winner().is_none() && meta.all_decided(),
            GameStatus::InProgress => meta.winner().is_none() && !meta.all_decided(),
        }
    }

    fn description() -> &'static str {
        "Status is consistent with the meta-board"
    }
}
