//! Random CPU opponent.
//!
//! Picks uniformly among the legal moves with no look-ahead. Randomness
//! comes through `MoveSelector`, which callers can seed or script.

use super::action::Move;
use super::engine::{apply_move, legal_moves};
use super::types::{GameState, GameStatus};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Source of choices for the CPU.
pub trait MoveSelector {
    /// Picks an index in `0..count`. `count` is never zero.
    fn select(&mut self, count: usize) -> usize;
}

/// Uniform random selection backed by ChaCha8.
///
/// The same seed always produces the same sequence of choices.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RandomSelector {
    /// Create a selector with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a selector seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this selector started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, count: usize) -> usize {
        self.inner.gen_range(0..count)
    }
}

/// Replays a fixed sequence of choices, cycling when exhausted.
///
/// Each choice is reduced modulo the number of options it is asked about.
#[derive(Clone, Debug)]
pub struct ScriptedSelector {
    choices: Vec<usize>,
    next: usize,
}

impl ScriptedSelector {
    /// Creates a selector from the given choices.
    ///
    /// An empty script always picks the first option.
    pub fn new(choices: impl Into<Vec<usize>>) -> Self {
        Self {
            choices: choices.into(),
            next: 0,
        }
    }
}

impl MoveSelector for ScriptedSelector {
    fn select(&mut self, count: usize) -> usize {
        if self.choices.is_empty() {
            return 0;
        }
        let choice = self.choices[self.next % self.choices.len()];
        self.next += 1;
        choice % count
    }
}

/// Chooses the CPU's move for the player to move.
///
/// Returns `None` once the game is over.
///
/// # Panics
///
/// Panics if the game is in progress but has no legal move, or if the
/// selector returns an index out of range. Both are bugs, never a
/// recoverable game condition.
#[instrument(skip(state, selector), fields(turn = %state.turn()))]
pub fn choose_move<S: MoveSelector + ?Sized>(state: &GameState, selector: &mut S) -> Option<Move> {
    if state.status() != GameStatus::InProgress {
        return None;
    }

    let moves = legal_moves(state, state.turn());
    assert!(
        !moves.is_empty(),
        "game in progress with no legal moves: active board {:?}",
        state.active_board()
    );

    let choice = selector.select(moves.len());
    assert!(
        choice < moves.len(),
        "selector picked {} of {} moves",
        choice,
        moves.len()
    );

    let mv = moves[choice];
    debug!(options = moves.len(), %mv, "CPU chose move");
    Some(mv)
}

/// Chooses and applies the CPU's move.
///
/// Returns `None` once the game is over.
///
/// # Panics
///
/// Panics under the same conditions as [`choose_move`], or if the chosen
/// move is rejected by the engine.
pub fn play_cpu_turn<S: MoveSelector + ?Sized>(
    state: &GameState,
    selector: &mut S,
) -> Option<GameState> {
    let mv = choose_move(state, selector)?;
    match apply_move(state, mv) {
        Ok(next) => Some(next),
        Err(e) => panic!("engine rejected its own legal move {mv}: {e}"),
    }
}
