//! Inputs sent from the host to the simulation.
//!
//! `FrameInput` is consumed by exactly one `advance` call. `PlayerCommand`s
//! are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// One discrete input snapshot for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Fire was pressed this frame.
    pub fire: bool,
    /// Horizontal movement axis. Anything outside {-1, 0, 1} is clamped.
    pub axis: i8,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn fire() -> Self {
        Self {
            fire: true,
            axis: 0,
        }
    }

    pub fn steer(axis: i8) -> Self {
        Self { fire: false, axis }
    }

    /// The axis normalised to -1, 0 or 1.
    pub fn axis(&self) -> i8 {
        self.axis.signum()
    }
}

/// Session-level commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Rebuild the given level and enter its intro.
    BeginLevel { index: usize },
    /// Full restart: score, lives, level index and entities are reset.
    ResetSession,
}
