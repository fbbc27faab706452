//! Simulation engine.
//!
//! `SimulationEngine` owns the world, the seeded RNG and the session. Each
//! `advance` consumes one `FrameInput`, runs the frame for the current phase,
//! and reports what happened as a `FrameResult`. A seed and an input sequence
//! fully determine a run.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use radiant_core::commands::{FrameInput, PlayerCommand};
use radiant_core::components::{Battleship, Drone, FleetState};
use radiant_core::constants::PLAYER_LIVES;
use radiant_core::enums::{Direction, GamePhase};
use radiant_core::events::GameEvent;
use radiant_core::state::{display_score, FrameResult, GameStateSnapshot};
use radiant_core::types::SimTime;

use crate::error::SimError;
use crate::levels::{self, DroneShapeCatalog, LevelConfig, LevelTable};
use crate::session::{FrameLog, Session};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Lives at session start.
    pub starting_lives: u32,
    pub levels: Vec<LevelConfig>,
    pub drone_shapes: DroneShapeCatalog,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_lives: PLAYER_LIVES,
            levels: levels::default_levels(),
            drone_shapes: levels::default_drone_shapes(),
        }
    }
}

impl SimConfig {
    /// Use a level table loaded from JSON in place of the shipped one.
    pub fn with_table(mut self, table: LevelTable) -> Self {
        self.levels = table.levels;
        self.drone_shapes = table.drone_shapes;
        self
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    levels: Vec<LevelConfig>,
    drone_shapes: DroneShapeCatalog,
    starting_lives: u32,
    session: Session,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new engine with level 0 built and waiting in `Intro`.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if config.levels.is_empty() {
            return Err(SimError::NoLevels);
        }

        let total_attainable =
            world_setup::total_attainable_score(&config.levels, &config.drone_shapes);

        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            levels: config.levels,
            drone_shapes: config.drone_shapes,
            starting_lives: config.starting_lives,
            session: Session {
                lives: config.starting_lives,
                total_attainable,
                ..Default::default()
            },
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        };
        world_setup::spawn_player_ship(&mut engine.world);
        engine.begin_level(0)?;

        tracing::info!(
            seed = config.seed,
            levels = engine.levels.len(),
            total_attainable,
            "simulation created"
        );
        Ok(engine)
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame with the given input.
    pub fn advance(&mut self, input: FrameInput) -> FrameResult {
        self.process_commands();

        let mut log = FrameLog::default();
        match self.phase {
            GamePhase::Intro => self.deploy(&mut log),
            GamePhase::Playing => {
                self.run_systems(input, &mut log);
                self.time.advance();
            }
            GamePhase::LevelComplete => self.next_level(&mut log),
            // Session is over until a reset
            GamePhase::Win | GamePhase::GameOver => {}
        }

        self.session.raw_score += log.score_delta;

        FrameResult {
            tick: self.time.tick,
            phase: self.phase,
            score_delta: log.score_delta,
            life_lost: log.life_lost,
            events: log.events,
        }
    }

    /// Rebuild level `index` and wait in `Intro` for the next advance.
    pub fn begin_level(&mut self, index: usize) -> Result<(), SimError> {
        let level = self.levels.get(index).ok_or(SimError::LevelOutOfRange {
            index,
            level_count: self.levels.len(),
        })?;

        world_setup::clear_level(&mut self.world, &mut self.despawn_buffer);
        let setup = world_setup::setup_level(&mut self.world, level, &self.drone_shapes);
        systems::player::recentre(&mut self.world, world_setup::ship_start_x());

        self.session.level_index = index;
        self.session.fleet = setup.fleet;
        self.session.fleet_columns = setup.fleet_columns;
        self.phase = GamePhase::Intro;

        tracing::info!(level = level.level_number, index, "level built");
        Ok(())
    }

    /// Full restart: score, lives, level index, and entities are reset.
    pub fn reset_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.session = Session {
            lives: self.starting_lives,
            total_attainable: self.session.total_attainable,
            ..Default::default()
        };
        world_setup::spawn_player_ship(&mut self.world);
        // Level 0 always exists: `new` rejects an empty table
        if let Err(err) = self.begin_level(0) {
            tracing::warn!(%err, "failed to rebuild first level");
        }
        tracing::info!("session reset");
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            self.level_number(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn lives(&self) -> u32 {
        self.session.lives
    }

    pub fn raw_score(&self) -> u32 {
        self.session.raw_score
    }

    pub fn total_attainable_score(&self) -> u32 {
        self.session.total_attainable
    }

    /// Score normalised to the display range.
    pub fn display_score(&self) -> u32 {
        display_score(self.session.raw_score, self.session.total_attainable)
    }

    pub fn level_index(&self) -> usize {
        self.session.level_index
    }

    /// Human-facing number of the current level.
    pub fn level_number(&self) -> u32 {
        self.levels
            .get(self.session.level_index)
            .map_or(0, |level| level.level_number)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Current formation state.
    pub fn fleet(&self) -> FleetState {
        self.session.fleet
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage specific situations.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::BeginLevel { index } => {
                if let Err(err) = self.begin_level(index) {
                    tracing::warn!(%err, "begin level command dropped");
                }
            }
            PlayerCommand::ResetSession => self.reset_session(),
        }
    }

    /// Hand the built level over to play: drones snap to their slots.
    fn deploy(&mut self, log: &mut FrameLog) {
        systems::formation::snap(&mut self.world, &self.session.fleet);
        self.phase = GamePhase::Playing;
        log.emit(GameEvent::LevelStarted {
            level_number: self.level_number(),
        });
    }

    fn next_level(&mut self, log: &mut FrameLog) {
        let next = self.session.level_index + 1;
        if next >= self.levels.len() {
            self.phase = GamePhase::Win;
            log.emit(GameEvent::Victory);
            tracing::info!(score = self.session.raw_score, "victory");
            return;
        }
        match self.begin_level(next) {
            Ok(()) => self.deploy(log),
            Err(err) => tracing::warn!(%err, "failed to build next level"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: FrameInput, log: &mut FrameLog) {
        // 1. Boss part tween
        systems::boss_tween::run(&mut self.world);
        // 2. Player steering and fire
        systems::player::run(&mut self.world, input, log);
        // 3. Formation sweep
        systems::formation::run(&mut self.world, &mut self.session.fleet);
        // 4. Battleship collision (+ reflow)
        systems::battleship_collision::run(
            &mut self.world,
            &mut self.rng,
            log,
            &mut self.despawn_buffer,
        );
        // 5. Fleet collision and scoring
        systems::fleet_collision::run(&mut self.world, log, &mut self.despawn_buffer);
        // 6. Battleship activation
        systems::activation::run(
            &mut self.world,
            &self.session.fleet,
            self.session.fleet_columns,
            log,
        );
        // 7. Shot-vs-shot interception
        systems::interception::run(&mut self.world, log, &mut self.despawn_buffer);
        // 8. Ship collision and life loss
        if systems::ship_collision::run(&mut self.world) {
            self.lose_life(log);
        }
        // 9. Battleship positioning
        systems::battleship_motion::run(&mut self.world);
        // 10. Projectile motion and cull
        systems::movement::run(&mut self.world, &mut self.despawn_buffer);
        // 11. Ship clamp
        systems::player::clamp(&mut self.world);
        // 12. Enemy fire
        systems::enemy_fire::run(&mut self.world, &mut self.rng, log);
        // 13. Active battleship wraparound
        systems::battleship_motion::wrap(&mut self.world);
        // 14. Level completion
        self.check_level_complete(log);
    }

    fn lose_life(&mut self, log: &mut FrameLog) {
        log.life_lost = true;

        if self.session.lives == 0 {
            self.phase = GamePhase::GameOver;
            log.emit(GameEvent::LifeLost { lives_remaining: 0 });
            log.emit(GameEvent::GameOver);
            tracing::info!(score = self.session.raw_score + log.score_delta, "game over");
            return;
        }

        self.session.lives -= 1;
        systems::player::recentre(&mut self.world, world_setup::ship_start_x());
        systems::projectiles::clear(
            &mut self.world,
            Some(Direction::Down),
            &mut self.despawn_buffer,
        );
        log.emit(GameEvent::LifeLost {
            lives_remaining: self.session.lives,
        });
        tracing::info!(lives = self.session.lives, "life lost");
    }

    fn check_level_complete(&mut self, log: &mut FrameLog) {
        if self.phase != GamePhase::Playing {
            return;
        }

        let fleet_cleared = self
            .world
            .query::<&Drone>()
            .iter()
            .all(|(_, drone)| !drone.is_alive());
        let hull_defeated = self
            .world
            .query::<&Battleship>()
            .iter()
            .all(|(_, battleship)| battleship.is_defeated());

        if fleet_cleared && hull_defeated {
            self.phase = GamePhase::LevelComplete;
            let level_number = self.level_number();
            log.emit(GameEvent::LevelComplete { level_number });
            tracing::info!(level = level_number, "level complete");
        }
    }
}
