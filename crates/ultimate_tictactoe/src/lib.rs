//! Ultimate tic-tac-toe rule engine.
//!
//! A 3x3 grid of 3x3 sub-boards. A mark placed at cell `k` of any sub-board
//! sends the opponent to sub-board `k`, unless that sub-board is already
//! won or drawn, in which case the opponent may play in any open sub-board.
//! Winning three sub-boards in a row wins the game.
//!
//! # Architecture
//!
//! - **State**: `GameState` is a value owned by the caller. The engine keeps
//!   nothing between calls.
//! - **Transition**: `apply_move` is the only way to advance a game. It
//!   returns a new snapshot or a `MoveError` explaining the rejection.
//! - **Contracts**: preconditions are the five legality checks; invariants
//!   are verified as postconditions in debug builds.
//! - **CPU**: `choose_move` picks uniformly among legal moves through an
//!   injectable `MoveSelector`.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{apply_move, initial_state, Move, Player, Position};
//!
//! let state = initial_state();
//! let state = apply_move(&state, Move::new(Player::X, Position::TopLeft, Position::Center))?;
//! assert_eq!(state.active_board(), Some(Position::Center));
//! assert_eq!(state.turn(), Player::O);
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod cpu;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{
    CellIsEmpty, Contract, ForcedSubBoard, GameInProgress, LegalMove, MoveContract, PlayersTurn,
    SubBoardOpen,
};
pub use cpu::{MoveSelector, RandomSelector, ScriptedSelector, choose_move, play_cpu_turn};
pub use engine::{UltimateBoardEngine, apply_move, initial_state, legal_moves, replay};
pub use invariants::{
    ActiveBoardOpenInvariant, AlternatingTurnInvariant, Invariant, InvariantSet,
    InvariantViolation, MetaConsistentInvariant, MonotonicBoardInvariant,
    StatusConsistentInvariant, UltimateInvariants,
};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full};
pub use types::{
    Cell, GameState, GameStatus, MetaBoard, Player, StateError, SubBoard, SubBoardOutcome,
};
pub use view::BoardView;
