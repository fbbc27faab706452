use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use radiant_app::game_loop::{self, LoopOptions};
use radiant_app::outro::RestartBudget;
use radiant_app::state::{AppState, GameLoopCommand};
use radiant_core::commands::PlayerCommand;
use radiant_core::constants::PLAYER_LIVES;
use radiant_sim::{levels, SimConfig, SimulationEngine};

/// Play RADIANT headless on autopilot and print the final state as JSON.
#[derive(Parser, Debug)]
#[command(name = "radiant", version)]
struct Cli {
    /// RNG seed. Same seed and same inputs replay the same game.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many frames (unlimited if absent).
    #[arg(long)]
    frames: Option<u64>,

    /// Lives at session start.
    #[arg(long, default_value_t = PLAYER_LIVES)]
    lives: u32,

    /// JSON level table to play instead of the shipped levels.
    #[arg(long, value_name = "PATH")]
    levels: Option<PathBuf>,

    /// Pace the loop at the tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Zero-based level index to jump to before the first frame.
    #[arg(long, value_name = "INDEX")]
    start_level: Option<usize>,

    /// How many times the outro answers "restart" before quitting.
    #[arg(long, default_value_t = 0)]
    restarts: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = SimConfig {
        seed: cli.seed,
        starting_lives: cli.lives,
        ..Default::default()
    };
    if let Some(path) = &cli.levels {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading level table {}", path.display()))?;
        let table = levels::from_json(&json)
            .with_context(|| format!("loading level table {}", path.display()))?;
        config = config.with_table(table);
    }
    let engine = SimulationEngine::new(config)?;

    let state = AppState::new();
    let options = LoopOptions {
        max_frames: cli.frames,
        realtime: cli.realtime,
    };
    let (command_tx, handle) = game_loop::spawn_game_loop(
        engine,
        options,
        Box::new(RestartBudget::new(cli.restarts)),
        Arc::clone(&state.latest_snapshot),
    )
    .context("spawning game loop thread")?;
    if let Ok(mut lock) = state.command_tx.lock() {
        *lock = Some(command_tx);
    }
    if let Some(index) = cli.start_level {
        let command = GameLoopCommand::PlayerCommand(PlayerCommand::BeginLevel { index });
        if !state.send(command) {
            tracing::warn!(index, "game loop gone before start level was sent");
        }
    }

    // Status line once a second while a paced game runs
    while cli.realtime && !handle.is_finished() {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snapshot) = state.snapshot() {
            tracing::info!(
                level = snapshot.level_number,
                lives = snapshot.lives,
                score = snapshot.score.display,
                phase = ?snapshot.phase,
                "status"
            );
        }
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    tracing::info!(
        frames = summary.frames,
        sessions = summary.sessions.len(),
        shots = summary.shots_requested,
        "game loop finished"
    );

    let final_snapshot = state.snapshot();
    let report = serde_json::json!({
        "summary": summary,
        "final_state": final_snapshot,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
