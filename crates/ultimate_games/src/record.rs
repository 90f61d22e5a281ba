//! Saved games as JSON move lists.

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{GameState, Move, MoveError, apply_move};

/// A finished or partial game, stored as the moves that were played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
}

/// A recorded move the rules refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} ({}) is illegal: {}", number, mv, source)]
pub struct ReplayError {
    /// 1-based position of the move in the record.
    pub number: usize,
    /// The offending move.
    pub mv: Move,
    /// Why it was refused.
    pub source: MoveError,
}

impl GameRecord {
    /// Captures the history of `state`.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            moves: state.history().to_vec(),
        }
    }

    /// Reads a record from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        let record: Self = serde_json::from_str(&content).context("Failed to parse game record")?;
        debug!(moves = record.moves.len(), "Record loaded");
        Ok(record)
    }

    /// Writes the record as pretty JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), moves = self.moves.len()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        info!("Game record saved");
        Ok(())
    }

    /// Replays every move from an empty board.
    pub fn replay(&self) -> Result<GameState, ReplayError> {
        self.moves
            .iter()
            .enumerate()
            .try_fold(GameState::new(), |state, (i, mv)| {
                apply_move(&state, *mv).map_err(|source| ReplayError {
                    number: i + 1,
                    mv: *mv,
                    source,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultimate_tictactoe::{GameStatus, Player, Position};

    fn opening() -> Vec<Move> {
        vec![
            Move::from_indices(Player::X, 4, 0),
            Move::from_indices(Player::O, 0, 4),
            Move::from_indices(Player::X, 4, 8),
        ]
    }

    #[test]
    fn test_replay_rebuilds_state() {
        let record = GameRecord { moves: opening() };
        let state = record.replay().unwrap();
        assert_eq!(state.history(), opening().as_slice());
        assert_eq!(state.active_board(), Some(Position::BottomRight));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(GameRecord::from_state(&state), record);
    }

    #[test]
    fn test_replay_reports_failing_move() {
        let mut moves = opening();
        moves.push(Move::from_indices(Player::O, 0, 0));
        let err = GameRecord { moves }.replay().unwrap_err();
        assert_eq!(err.number, 4);
        assert_eq!(
            err.source,
            MoveError::WrongSubBoard {
                required: Position::BottomRight,
                attempted: Position::TopLeft,
            }
        );
        assert!(err.to_string().starts_with("Move 4 "));
    }

    #[test]
    fn test_empty_record_is_a_new_game() {
        assert_eq!(GameRecord::default().replay().unwrap(), GameState::new());
    }
}
