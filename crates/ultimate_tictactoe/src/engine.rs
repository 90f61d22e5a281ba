//! The ultimate tic-tac-toe state machine.
//!
//! `apply_move` is the only transition. It never mutates its input: an
//! accepted move yields a new `GameState`, a rejected one yields a
//! `MoveError` and the caller keeps the state it already had.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, assert_postcondition};
use super::types::{Cell, GameState, GameStatus, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// Creates the state every game starts from.
#[instrument]
pub fn initial_state() -> GameState {
    GameState::new()
}

/// Applies a move, returning the next state.
///
/// # Errors
///
/// Returns the first failing precondition, checked in this order:
/// game over, wrong player, wrong sub-board, sub-board decided, cell occupied.
#[instrument(skip(state), fields(player = %mv.player, board = ?mv.board, cell = ?mv.cell))]
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    MoveContract::pre(state, &mv)?;

    let mut next = state.clone();
    next.meta_board
        .board_mut(mv.board)
        .set(mv.cell, Cell::Occupied(mv.player));
    next.history.push(mv);

    if let Some(winner) = next.board(mv.board).winner() {
        debug!(board = ?mv.board, %winner, "Sub-board won");
        next.meta_board.record_winner(mv.board, winner);
    } else if next.board(mv.board).is_full() {
        debug!(board = ?mv.board, "Sub-board drawn");
    }

    next.status = if let Some(winner) = next.meta_board.winner() {
        info!(%winner, moves = next.history.len(), "Game won");
        GameStatus::Won(winner)
    } else if next.meta_board.all_decided() {
        info!(moves = next.history.len(), "Game drawn");
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };

    next.active_board = (!next.board(mv.cell).is_decided()).then_some(mv.cell);

    // Flips even when the move ended the game.
    next.turn = mv.player.opponent();

    assert_postcondition(state, &next);
    Ok(next)
}

/// Lists every legal move for `player`.
///
/// Empty when the game is over or it is not `player`'s turn. Otherwise the
/// empty cells of the forced sub-board, or of every undecided sub-board when
/// the choice is free. Ordered by sub-board, then cell.
#[instrument(skip(state))]
pub fn legal_moves(state: &GameState, player: Player) -> Vec<Move> {
    if state.status().is_over() || state.turn() != player {
        return Vec::new();
    }

    let boards: Vec<Position> = match state.active_board() {
        Some(pos) if !state.board(pos).is_decided() => vec![pos],
        _ => Position::ALL
            .into_iter()
            .filter(|pos| !state.board(*pos).is_decided())
            .collect(),
    };

    boards
        .into_iter()
        .flat_map(|board| {
            state
                .board(board)
                .empty_cells()
                .map(move |cell| Move::new(player, board, cell))
        })
        .collect()
}

/// Replays moves from the initial state.
///
/// # Errors
///
/// Returns the error of the first illegal move.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
    moves
        .iter()
        .try_fold(initial_state(), |state, mv| apply_move(&state, *mv))
}

/// Holds the current state for an embedding application.
///
/// The engine is the single writer of its state: `play` swaps in the next
/// snapshot only when the move is accepted.
#[derive(Debug, Clone, Default)]
pub struct UltimateBoardEngine {
    state: GameState,
}

impl UltimateBoardEngine {
    /// Creates an engine with a fresh game.
    pub fn new() -> Self {
        Self {
            state: initial_state(),
        }
    }

    /// Wraps an existing state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays a move against the current state.
    ///
    /// # Errors
    ///
    /// Returns why the move is illegal; the current state is unchanged.
    pub fn play(&mut self, mv: Move) -> Result<&GameState, MoveError> {
        self.state = apply_move(&self.state, mv)?;
        Ok(&self.state)
    }

    /// Legal moves for the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.state, self.state.turn())
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = initial_state();
    }
}
