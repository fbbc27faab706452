//! Game loop thread: drives the simulation with autopilot input and
//! publishes the latest snapshot.
//!
//! The engine is moved into the thread. Commands arrive via `mpsc` channel.
//! With `realtime` set the loop paces itself at the tick rate, otherwise it
//! runs as fast as the engine allows.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;

use radiant_core::commands::PlayerCommand;
use radiant_core::constants::TICK_RATE;
use radiant_core::enums::GamePhase;
use radiant_core::state::GameStateSnapshot;
use radiant_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::outro::{OutroChoice, OutroPrompt};
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Stop after this many frames. `None` runs until the outro quits.
    pub max_frames: Option<u64>,
    pub realtime: bool,
}

/// How one session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    pub phase: GamePhase,
    pub level_number: u32,
    pub raw_score: u32,
    pub display_score: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoopSummary {
    pub frames: u64,
    pub sessions: Vec<SessionOutcome>,
    pub shots_requested: u64,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the loop summary.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
    mut outro: Box<dyn OutroPrompt + Send>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("radiant-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, options, outro.as_mut(), &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the outro quits, the frame limit is hit, or
/// a Shutdown command or channel disconnect arrives.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
    outro: &mut dyn OutroPrompt,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let mut autopilot = Autopilot::new();
    let mut summary = LoopSummary::default();
    let mut snapshot = engine.snapshot();
    let mut next_tick_time = Instant::now();

    'run: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'run,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'run,
            }
        }

        if options.max_frames.is_some_and(|max| summary.frames >= max) {
            tracing::info!(frames = summary.frames, "frame limit reached");
            break;
        }

        // 2. Advance one frame on autopilot input
        let input = autopilot.decide(&snapshot);
        let result = engine.advance(input);
        summary.frames += 1;
        for event in &result.events {
            tracing::debug!(tick = result.tick, ?event, "frame event");
        }
        snapshot = engine.snapshot();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. A finished session goes to the outro
        if result.phase.is_terminal() {
            let outcome = SessionOutcome {
                phase: result.phase,
                level_number: snapshot.level_number,
                raw_score: snapshot.score.raw,
                display_score: snapshot.score.display,
            };
            summary.sessions.push(outcome);
            match outro.choose(outcome.phase, outcome.display_score) {
                OutroChoice::Restart => engine.queue_command(PlayerCommand::ResetSession),
                OutroChoice::Quit => break,
            }
        }

        // 5. Sleep until next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    summary.shots_requested = autopilot.shots_requested();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiant_core::enums::{BattleshipVariant, Wing};
    use radiant_sim::levels::{self, BattleshipTemplate, FleetLayout, LevelConfig, PartTemplate};
    use radiant_sim::SimConfig;

    use crate::outro::RestartBudget;
    use crate::state::AppState;

    fn dot_engine() -> SimulationEngine {
        let mut drone_shapes = levels::default_drone_shapes();
        drone_shapes.insert("dot".to_string(), vec![PartTemplate::new(0, 0, Wing::None)]);
        let level = LevelConfig {
            level_number: 1,
            fleet_speed: 0.0,
            fleet: FleetLayout::Grid {
                rows: 1,
                columns: 1,
                shape: "dot".to_string(),
            },
            battleship: BattleshipTemplate {
                variant: BattleshipVariant::FixedShape,
                offsets: Vec::new(),
                core: None,
            },
        };
        SimulationEngine::new(SimConfig {
            levels: vec![level],
            drone_shapes,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::BeginLevel {
            index: 2,
        }))
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::ResetSession))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::BeginLevel { index: 2 })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::ResetSession)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();

        // Run enough frames to populate projectiles
        for _ in 0..50 {
            engine.advance(Default::default());
        }

        let snapshot = engine.snapshot();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_frame_limit_stops_loop() {
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        let options = LoopOptions {
            max_frames: Some(120),
            realtime: false,
        };

        let summary = run_game_loop(engine, rx, options, &mut RestartBudget::new(0), &latest);

        assert_eq!(summary.frames, 120);
        assert!(summary.sessions.is_empty());
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        // The first frame only deploys the fleet
        assert_eq!(snapshot.time.tick, 119);
    }

    #[test]
    fn test_begin_level_command_reaches_engine() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);
        assert!(state.send(GameLoopCommand::PlayerCommand(
            PlayerCommand::BeginLevel { index: 2 }
        )));

        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let options = LoopOptions {
            max_frames: Some(1),
            realtime: false,
        };
        let summary = run_game_loop(
            engine,
            rx,
            options,
            &mut RestartBudget::new(0),
            &state.latest_snapshot,
        );

        assert_eq!(summary.frames, 1);
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.level_index, 2);
        assert_eq!(snapshot.level_number, 3);
        assert_eq!(snapshot.phase, GamePhase::Playing);
    }

    #[test]
    fn test_shutdown_and_disconnect_stop_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        let latest = Mutex::new(None);
        let summary = run_game_loop(
            dot_engine(),
            rx,
            LoopOptions::default(),
            &mut RestartBudget::new(0),
            &latest,
        );
        assert_eq!(summary.frames, 0);
        assert!(latest.lock().unwrap().is_none());

        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        let summary = run_game_loop(
            dot_engine(),
            rx,
            LoopOptions::default(),
            &mut RestartBudget::new(0),
            &latest,
        );
        assert_eq!(summary.frames, 0);
    }

    #[test]
    fn test_outro_restart_replays_session() {
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        let options = LoopOptions {
            max_frames: Some(1000),
            realtime: false,
        };
        let mut outro = RestartBudget::new(1);

        let summary = run_game_loop(dot_engine(), rx, options, &mut outro, &latest);

        assert!(summary.frames < 1000, "autopilot should clear the dot twice");
        assert_eq!(summary.sessions.len(), 2);
        for outcome in &summary.sessions {
            assert_eq!(outcome.phase, GamePhase::Win);
            assert_eq!(outcome.raw_score, 60);
            assert_eq!(outcome.display_score, 9999);
        }
        assert!(summary.shots_requested > 0);
        assert_eq!(outro.remaining(), 0);
    }

    #[test]
    fn test_spawned_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let options = LoopOptions {
            max_frames: Some(30),
            realtime: false,
        };
        let (tx, handle) = spawn_game_loop(
            dot_engine(),
            options,
            Box::new(RestartBudget::new(0)),
            Arc::clone(&latest),
        )
        .unwrap();

        let summary = handle.join().unwrap();
        drop(tx);
        assert_eq!(summary.frames, 30);
        assert!(latest.lock().unwrap().is_some());
    }
}
