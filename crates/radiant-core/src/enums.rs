//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Structural classification of a part. Drives cascade destruction and scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wing {
    Left,
    Right,
    /// The single vital part. Destroying it destroys the owner.
    Core,
    /// Structural filler. A body part directly in front of the core shields it.
    Body,
    #[default]
    None,
}

/// Part lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartStatus {
    #[default]
    Alive,
    Destroyed,
}

/// Drone lifecycle. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroneStatus {
    #[default]
    Alive,
    Destroyed,
}

/// Battleship lifecycle. Only ever moves forward: passive -> active -> destroyed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BattleshipStatus {
    /// Riding above the fleet, recentred over it every frame.
    #[default]
    Passive,
    /// Moving on its own velocity with horizontal wraparound, firing.
    Active,
    Destroyed,
}

/// Battleship variant. Selects hit-testing and destruction behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleshipVariant {
    /// Parts are marked destroyed in place; the silhouette never changes.
    #[default]
    FixedShape,
    /// Parts are removed on hit and the remaining row collapses toward the centre.
    Reflowing,
}

/// Vertical travel direction of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Player-origin, travelling toward the enemies.
    Up,
    /// Enemy-origin, travelling toward the player.
    Down,
}

/// Who fired a projectile. Drone owners rate-limit one live projectile per drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectileOwner {
    Player,
    Battleship,
    Drone { row: u32, col: u32 },
}

/// Level/game progression state (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Level built, deployment not yet handed back.
    #[default]
    Intro,
    Playing,
    /// Every enemy of the current level is defeated; awaiting the next advance.
    LevelComplete,
    Win,
    GameOver,
}

impl GamePhase {
    /// `Win` and `GameOver` end the session until a reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::GameOver)
    }
}
