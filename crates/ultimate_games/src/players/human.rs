//! Human player that reads moves from text input.

use super::Player;
use crate::orchestrator::GameEvent;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;
use ultimate_tictactoe::{GameState, Move, Position};

/// Parses a move typed by a human.
///
/// Accepts `"<board> <cell>"`, where each part is a number 1-9 or a label
/// such as `center`. Commas and slashes also separate the parts. When a
/// sub-board is forced, the cell alone is enough.
pub fn parse_move(input: &str, state: &GameState) -> Result<Move, String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|s| !s.is_empty())
        .collect();

    let parse = |s: &str| {
        Position::from_label_or_number(s).ok_or_else(|| format!("'{}' is not a position (1-9)", s))
    };

    let (board, cell) = match parts.as_slice() {
        [board, cell] => (parse(*board)?, parse(*cell)?),
        [cell] => match state.active_board() {
            Some(board) => (board, parse(*cell)?),
            None => return Err("Any sub-board is open: enter '<board> <cell>'".to_string()),
        },
        [] => return Err("Enter '<board> <cell>', e.g. '5 1'".to_string()),
        _ => return Err(format!("Too many parts in '{}'", input.trim())),
    };

    Ok(Move::new(state.turn(), board, cell))
}

/// Human player fed by lines of text.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
    feedback_tx: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    ///
    /// Unparseable input is reported on `feedback_tx` and the player waits
    /// for the next line.
    pub fn new(
        name: impl Into<String>,
        input_rx: mpsc::UnboundedReceiver<String>,
        feedback_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input_rx,
            feedback_tx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, state: &GameState) -> Result<Move> {
        self.feedback_tx.send(GameEvent::AwaitingInput {
            player: self.name.clone(),
        })?;

        while let Some(line) = self.input_rx.recv().await {
            match parse_move(&line, state) {
                Ok(mv) => return Ok(mv),
                Err(reason) => {
                    debug!(input = %line, %reason, "Unparseable move");
                    self.feedback_tx.send(GameEvent::InputRejected { reason })?;
                }
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
