//! Game orchestration between players.
//!
//! The orchestrator is the single writer of the current `GameState`. It asks
//! one player at a time for a move, so exactly one `apply_move` call is ever
//! in flight.

use crate::players::Player;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{BoardView, GameState, GameStatus, Move, Player as Mark, apply_move};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Board rendering and status line after a change.
    StateChanged {
        /// Rendered board.
        board: String,
        /// Whose turn it is, or the result.
        status: String,
    },
    /// A player is expected to type a move.
    AwaitingInput {
        /// Name of the player.
        player: String,
    },
    /// Typed input could not be read as a move.
    InputRejected {
        /// What was wrong with it.
        reason: String,
    },
    /// Move was made.
    MoveMade {
        /// Name of the player.
        player: String,
        /// The move.
        mv: Move,
    },
    /// Move broke a rule; the state is unchanged.
    MoveRejected {
        /// Name of the player.
        player: String,
        /// Which rule it broke.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Winner's name, `None` for a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            state: GameState::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    fn publish_state(&self) -> Result<()> {
        let view = BoardView::new(&self.state);
        self.event_tx.send(GameEvent::StateChanged {
            board: view.render(),
            status: view.status_line(),
        })?;
        Ok(())
    }

    /// Runs the game loop until the game ends.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.publish_state()?;

        loop {
            if self.state.status().is_over() {
                let status = self.state.status();
                let winner = status.winner().map(|p| self.name_of(p).to_string());
                info!(?status, moves = self.state.history().len(), "Game over");
                self.event_tx.send(GameEvent::GameOver { winner })?;
                return Ok(status);
            }

            let mark = self.state.turn();
            let player_name = self.name_of(mark).to_string();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player_name, "Waiting for move");
            let mv = player.get_move(&self.state).await?;

            match apply_move(&self.state, mv) {
                Ok(next) => {
                    self.state = next;
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mv,
                    })?;
                    self.publish_state()?;
                }
                Err(e) => {
                    warn!(player = %player_name, %mv, error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: player_name,
                        reason: e.to_string(),
                    })?;
                }
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.state = GameState::new();
    }
}
