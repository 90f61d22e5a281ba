//! Command-line interface for ultimate_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ultimate_tictactoe::Player;

/// Ultimate Tic-Tac-Toe - play the CPU in your terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate_games")]
#[command(about = "Ultimate tic-tac-toe against a CPU opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "ultimate.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the CPU
    Play {
        /// Seed for the CPU's choices
        #[arg(long)]
        seed: Option<u64>,

        /// Mark the CPU plays
        #[arg(long, value_enum)]
        cpu_mark: Option<MarkArg>,

        /// Pause before each CPU move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Your display name
        #[arg(long)]
        name: Option<String>,

        /// Save the finished game to this JSON file
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Run CPU-vs-CPU games and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both CPUs
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Check a saved game and print its final position
    Replay {
        /// JSON game record
        file: PathBuf,
    },
}

/// Mark choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Crosses, moves first
    X,
    /// Noughts
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}
