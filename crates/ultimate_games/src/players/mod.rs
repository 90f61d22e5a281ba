//! Player trait and implementations.

mod cpu;
mod human;

pub use cpu::CpuPlayer;
pub use human::{HumanPlayer, parse_move};

use anyhow::Result;
use ultimate_tictactoe::{GameState, Move};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the player to move in `state`.
    async fn get_move(&mut self, state: &GameState) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
