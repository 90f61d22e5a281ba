//! CPU-vs-CPU self-play.

use crate::orchestrator::Orchestrator;
use crate::players::CpuPlayer;
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use ultimate_tictactoe::{GameStatus, Player, RandomSelector};

/// Tally of finished self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SimulationSummary {
    /// Records one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Number of games recorded.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays `games` random games between two CPUs.
///
/// Both CPUs are seeded from `seed`, so the same seed gives the same tally.
#[instrument]
pub async fn simulate(games: u32, seed: u64) -> Result<SimulationSummary> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let player_x = CpuPlayer::new("CPU X", RandomSelector::new(seed), Duration::ZERO);
    let player_o = CpuPlayer::new(
        "CPU O",
        RandomSelector::new(seed.wrapping_add(1)),
        Duration::ZERO,
    );
    let mut orchestrator = Orchestrator::new(Box::new(player_x), Box::new(player_o), event_tx);

    let mut summary = SimulationSummary::default();
    for game in 0..games {
        if game > 0 {
            orchestrator.restart();
        }
        let status = orchestrator.run().await?;
        summary.record(status);
        while event_rx.try_recv().is_ok() {}
    }

    info!(%summary, "Simulation finished");
    Ok(summary)
}
