//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions reject illegal moves; postconditions catch
//! engine bugs.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, UltimateInvariants};
use super::types::{GameState, GameStatus};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// Returns a description of every violated invariant.
    fn post(before: &S, after: &S) -> Result<(), String>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects moves once the game has ended.
    pub fn check(_mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.status() != GameStatus::InProgress {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects out-of-turn moves.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.player != state.turn() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The move must target the forced sub-board, if there is one.
pub struct ForcedSubBoard;

impl ForcedSubBoard {
    /// Rejects moves outside the active sub-board.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        match state.active_board() {
            Some(required) if required != mov.board => Err(MoveError::WrongSubBoard {
                required,
                attempted: mov.board,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: The target sub-board must not be won or drawn.
pub struct SubBoardOpen;

impl SubBoardOpen {
    /// Rejects moves into decided sub-boards.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board(mov.board).is_decided() {
            Err(MoveError::SubBoardDecided(mov.board))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves into occupied cells.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board(mov.board).is_empty(mov.cell) {
            Err(MoveError::CellOccupied {
                board: mov.board,
                cell: mov.cell,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: all five checks, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move. The first failure is returned.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameInProgress::check(mov, state)?;
        PlayersTurn::check(mov, state)?;
        ForcedSubBoard::check(mov, state)?;
        SubBoardOpen::check(mov, state)?;
        CellIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Exactly one more cell is occupied than before
/// - Every invariant in `UltimateInvariants` holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), String> {
        let mut problems = Vec::new();

        let filled_before = before.meta_board().occupied_count();
        let filled_after = after.meta_board().occupied_count();
        if filled_after != filled_before + 1 {
            warn!(filled_before, filled_after, "Move did not fill exactly one cell");
            problems.push(format!(
                "Move must fill exactly one cell ({} -> {})",
                filled_before, filled_after
            ));
        }

        if let Err(violations) = UltimateInvariants::check_all(after) {
            problems.extend(violations.into_iter().map(|v| v.description));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(format!("Postcondition failed: {}", problems.join("; ")))
        }
    }
}

/// Panics if the postcondition of a move does not hold.
///
/// Only active in debug builds. A failure here is an engine bug and must not
/// be mistaken for an illegal move.
pub fn assert_postcondition(before: &GameState, after: &GameState) {
    if cfg!(debug_assertions)
        && let Err(message) = MoveContract::post(before, after)
    {
        panic!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position, apply_move};

    fn x(board: Position, cell: Position) -> Move {
        Move::new(Player::X, board, cell)
    }

    #[test]
    fn test_precondition_passes_on_empty_board() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &x(Position::Center, Position::Center)).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let state = GameState::new();
        let action = Move::new(Player::O, Position::Center, Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_precondition_order_turn_before_board() {
        // O is out of turn and also ignores the forced board: turn is reported.
        let state = apply_move(&GameState::new(), x(Position::TopLeft, Position::Center)).unwrap();
        let action = Move::new(Player::X, Position::TopLeft, Position::TopLeft);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::WrongPlayer(Player::X))
        );
    }

    #[test]
    fn test_precondition_forced_board() {
        let state = apply_move(&GameState::new(), x(Position::TopLeft, Position::Center)).unwrap();
        let action = Move::new(Player::O, Position::TopLeft, Position::TopLeft);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::WrongSubBoard {
                required: Position::Center,
                attempted: Position::TopLeft,
            })
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        // X plays center/center, which sends O back into the center board.
        let state = apply_move(&GameState::new(), x(Position::Center, Position::Center)).unwrap();
        let action = Move::new(Player::O, Position::Center, Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::CellOccupied {
                board: Position::Center,
                cell: Position::Center,
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = apply_move(&before, x(Position::Center, Position::TopLeft)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = apply_move(&before, x(Position::Center, Position::TopLeft)).unwrap();

        // A second mark appears without a matching history entry.
        after
            .meta_board
            .board_mut(Position::BottomRight)
            .set(Position::BottomRight, Cell::Occupied(Player::O));

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.contains("exactly one cell"));
        assert!(err.contains("monotonic"));
    }
}
