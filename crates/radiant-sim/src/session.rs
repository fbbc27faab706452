//! Session data model: the per-run aggregates that are not ECS entities.
//!
//! Stored on `SimulationEngine`. Systems receive the pieces they mutate as
//! explicit arguments.

use radiant_core::components::FleetState;
use radiant_core::events::GameEvent;

/// Running session state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub level_index: usize,
    pub lives: u32,
    pub raw_score: u32,
    /// Sum of every point the level table can award.
    pub total_attainable: u32,
    pub fleet: FleetState,
    pub fleet_columns: u32,
}

/// Everything the systems report back during one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    pub score_delta: u32,
    pub events: Vec<GameEvent>,
    /// The battleship took a hit this frame (feeds activation).
    pub battleship_hit: bool,
    pub life_lost: bool,
}

impl FrameLog {
    pub fn award(&mut self, points: u32) {
        self.score_delta += points;
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
