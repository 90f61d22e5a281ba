//! Ultimate Games - terminal CLI
//!
//! Play ultimate tic-tac-toe against the CPU, run self-play, or check saved games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;
use ultimate_games::{
    CpuPlayer, GameEvent, GameRecord, HumanPlayer, Orchestrator, PlayConfig, Player, simulate,
};
use ultimate_tictactoe::{BoardView, Player as Mark, RandomSelector};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    // The subscriber needs the loaded filter, so loading itself goes unlogged.
    config.log_loaded(&cli.config);

    match cli.command {
        Command::Play {
            seed,
            cpu_mark,
            delay_ms,
            name,
            record,
        } => {
            let config = config.with_overrides(name, cpu_mark.map(Mark::from), delay_ms, seed);
            run_play(config, record).await
        }
        Command::Simulate { games, seed } => run_simulate(games, seed).await,
        Command::Replay { file } => run_replay(file),
    }
}

/// Play one game against the CPU on stdin/stdout.
#[instrument(skip(config), fields(cpu_mark = %config.cpu_mark()))]
async fn run_play(config: PlayConfig, record: Option<PathBuf>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    // Plain thread: a blocking stdin read would stall runtime shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    let selector = match config.seed() {
        Some(seed) => RandomSelector::new(*seed),
        None => RandomSelector::from_entropy(),
    };
    info!(seed = selector.seed(), "CPU seeded");

    let human: Box<dyn Player> = Box::new(HumanPlayer::new(
        config.player_name().clone(),
        input_rx,
        event_tx.clone(),
    ));
    let cpu: Box<dyn Player> = Box::new(CpuPlayer::new(
        "CPU",
        selector,
        Duration::from_millis(*config.cpu_delay_ms()),
    ));
    let (player_x, player_o) = match config.human_mark() {
        Mark::X => (human, cpu),
        Mark::O => (cpu, human),
    };

    println!(
        "You play {}. Enter moves as '<board> <cell>' with 1-9 or labels like 'center'.",
        config.human_mark()
    );

    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
    let game = tokio::spawn(async move {
        let result = orchestrator.run().await;
        result.map(|_| orchestrator.state().clone())
    });

    while let Some(event) = event_rx.recv().await {
        if print_event(event) {
            break;
        }
    }

    let state = game.await.context("Game task panicked")??;

    if let Some(path) = record {
        GameRecord::from_state(&state).save(&path)?;
        println!("Game saved to {}", path.display());
    }

    Ok(())
}

/// Prints one event. Returns true once the game is over.
fn print_event(event: GameEvent) -> bool {
    match event {
        GameEvent::StateChanged { board, status } => {
            println!("\n{}\n{}", board, status);
        }
        GameEvent::AwaitingInput { player } => {
            print!("{}> ", player);
            if let Err(e) = std::io::stdout().flush() {
                warn!(error = %e, "Failed to flush prompt");
            }
        }
        GameEvent::InputRejected { reason } => println!("{}", reason),
        GameEvent::MoveMade { player, mv } => println!("{} played {}", player, mv),
        GameEvent::MoveRejected { player, reason } => println!("{}: {}", player, reason),
        GameEvent::GameOver { winner } => {
            match winner {
                Some(name) => println!("{} wins!", name),
                None => println!("It's a draw!"),
            }
            return true;
        }
    }
    false
}

/// Run CPU-vs-CPU games and print the tally.
async fn run_simulate(games: u32, seed: u64) -> Result<()> {
    let summary = simulate(games, seed).await?;
    println!("X wins: {}", summary.x_wins);
    println!("O wins: {}", summary.o_wins);
    println!("Draws:  {}", summary.draws);
    Ok(())
}

/// Replay a saved game and print where it ended.
#[instrument(skip(file), fields(file = %file.display()))]
fn run_replay(file: PathBuf) -> Result<()> {
    let record = GameRecord::from_file(&file)?;
    let state = record.replay()?;

    let view = BoardView::new(&state);
    println!("{}", view.render());
    println!("{}", view.status_line());
    info!(moves = state.history().len(), "Replay finished");
    Ok(())
}
