//! Game state snapshot: the complete read-only view handed to a presentation layer.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DISPLAY_SCORE;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, Rect, SimTime};

/// Complete game state after a frame. Draw-only: nothing here feeds back
/// into the simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Zero-based index into the level table.
    pub level_index: usize,
    /// Human-facing level number from the level table.
    pub level_number: u32,
    pub lives: u32,
    pub score: ScoreView,
    pub ship: ShipView,
    /// Alive drones, ordered by (row, col).
    pub drones: Vec<DroneView>,
    pub battleship: Option<BattleshipView>,
    pub projectiles: Vec<ProjectileView>,
}

/// What a single `advance` produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameResult {
    pub tick: u64,
    /// Phase after the frame.
    pub phase: GamePhase,
    /// Raw points earned this frame.
    pub score_delta: u32,
    pub life_lost: bool,
    pub events: Vec<GameEvent>,
}

/// Score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub raw: u32,
    /// Sum of every attainable point across all levels.
    pub total_attainable: u32,
    /// `raw` scaled to `0..=MAX_DISPLAY_SCORE`.
    pub display: u32,
}

impl ScoreView {
    pub fn new(raw: u32, total_attainable: u32) -> Self {
        Self {
            raw,
            total_attainable,
            display: display_score(raw, total_attainable),
        }
    }
}

/// Normalise a raw score against the total attainable score.
pub fn display_score(raw: u32, total_attainable: u32) -> u32 {
    if total_attainable == 0 {
        return 0;
    }
    let scaled = raw as u64 * MAX_DISPLAY_SCORE as u64 / total_attainable as u64;
    scaled.min(MAX_DISPLAY_SCORE as u64) as u32
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

/// One part as it should be drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PartView {
    /// Render offset in grid units.
    pub offset: DVec2,
    pub wing: Wing,
    pub status: PartStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub row: u32,
    pub col: u32,
    pub position: Position,
    pub parts: Vec<PartView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleshipView {
    pub position: Position,
    pub status: BattleshipStatus,
    pub variant: BattleshipVariant,
    pub width: f64,
    pub height: f64,
    pub parts: Vec<PartView>,
    /// Shape offsets at spawn (reflowing boss only) for the ghost outline.
    pub blueprint: Vec<DVec2>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub rect: Rect,
    pub direction: Direction,
    pub owner: ProjectileOwner,
}
