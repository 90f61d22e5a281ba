//! CPU player backed by the engine's random policy.

use super::Player;
use anyhow::Result;
use std::time::Duration;
use tracing::debug;
use ultimate_tictactoe::{GameState, Move, MoveSelector, choose_move};

/// CPU that picks uniformly among legal moves after a short pause.
pub struct CpuPlayer {
    name: String,
    selector: Box<dyn MoveSelector + Send>,
    delay: Duration,
}

impl CpuPlayer {
    /// Creates a new CPU player.
    pub fn new(
        name: impl Into<String>,
        selector: impl MoveSelector + Send + 'static,
        delay: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            selector: Box::new(selector),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for CpuPlayer {
    async fn get_move(&mut self, state: &GameState) -> Result<Move> {
        debug!(cpu = %self.name, "CPU making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mv = choose_move(state, self.selector.as_mut())
            .ok_or_else(|| anyhow::anyhow!("No move: game is already over"))?;
        debug!(cpu = %self.name, %mv, "CPU chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
