//! Ultimate tic-tac-toe in the terminal.
//!
//! Wraps the `ultimate_tictactoe` engine with players, a game loop, and
//! saved games.
//!
//! # Architecture
//!
//! - **Players**: `HumanPlayer` reads typed moves, `CpuPlayer` picks at random
//! - **Orchestrator**: single owner of the game state, asks players for moves in turn
//! - **Simulation**: CPU-vs-CPU self-play with a win/draw tally
//! - **Records**: JSON move lists that can be replayed and checked
//!
//! # Example
//!
//! ```no_run
//! use ultimate_games::simulate;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let summary = simulate(100, 42).await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod record;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game loop
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{CpuPlayer, HumanPlayer, Player, parse_move};

// Crate-level exports - Saved games
pub use record::{GameRecord, ReplayError};

// Crate-level exports - Self-play
pub use simulate::{SimulationSummary, simulate};
