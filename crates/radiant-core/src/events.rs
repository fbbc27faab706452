//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile was spawned.
    ShotFired { owner: ProjectileOwner },
    /// A drone part was shot off without killing the drone.
    DronePartDestroyed {
        row: u32,
        col: u32,
        wing: Wing,
        points: u32,
    },
    /// A drone died. `perfect` marks a core kill with the minimum hit count.
    DroneDestroyed {
        row: u32,
        col: u32,
        points: u32,
        perfect: bool,
    },
    /// A non-core battleship part was destroyed.
    BattleshipPartDestroyed { points: u32 },
    /// The battleship left its passive state.
    BattleshipActivated { dx: f64 },
    /// The battleship's core was destroyed.
    BattleshipDestroyed { points: u32 },
    /// A player shot and an enemy shot cancelled each other.
    ProjectilesIntercepted,
    /// The player ship was hit.
    LifeLost { lives_remaining: u32 },
    LevelStarted { level_number: u32 },
    LevelComplete { level_number: u32 },
    Victory,
    GameOver,
}
