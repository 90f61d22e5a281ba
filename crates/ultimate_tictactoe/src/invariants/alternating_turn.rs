//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// The player to move always matches history parity, including after the
/// game has ended.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        state.turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, replay};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves = [
            Move::new(Player::X, Position::TopLeft, Position::TopRight),
            Move::new(Player::O, Position::TopRight, Position::TopLeft),
            Move::new(Player::X, Position::TopLeft, Position::Center),
        ];
        let state = replay(&moves).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.turn(), Player::O);
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut state = GameState::new();
        state.turn = Player::O;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
