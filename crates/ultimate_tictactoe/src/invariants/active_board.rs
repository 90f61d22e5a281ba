//! The forced sub-board is always playable.

use super::super::GameState;
use super::Invariant;

/// Invariant: `active_board`, if set, names an undecided sub-board.
pub struct ActiveBoardOpenInvariant;

impl Invariant<GameState> for ActiveBoardOpenInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .active_board()
            .is_none_or(|pos| !state.board(pos).is_decided())
    }

    fn description() -> &'static str {
        "Active sub-board is undecided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position, replay};

    #[test]
    fn test_free_choice_holds() {
        assert!(ActiveBoardOpenInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_routing_into_won_board_frees_choice() {
        // X takes the top row of the top-left board; the last X move lands on
        // cell TopLeft, whose board is now won, so O gets a free choice.
        let moves = [
            Move::new(Player::X, Position::TopLeft, Position::TopCenter),
            Move::new(Player::O, Position::TopCenter, Position::TopLeft),
            Move::new(Player::X, Position::TopLeft, Position::TopRight),
            Move::new(Player::O, Position::TopRight, Position::TopLeft),
            Move::new(Player::X, Position::TopLeft, Position::TopLeft),
        ];
        let state = replay(&moves).unwrap();
        assert_eq!(state.active_board(), None);
        assert!(ActiveBoardOpenInvariant::holds(&state));
    }
}
