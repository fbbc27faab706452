//! Errors surfaced by the engine's command surface.
//!
//! Frames never fail; these only come out of construction, level loading,
//! and explicit level selection.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The level table has no levels to play.
    NoLevels,
    LevelOutOfRange { index: usize, level_count: usize },
    /// A JSON level table could not be parsed.
    InvalidLevelTable { reason: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLevels => write!(f, "level table is empty"),
            Self::LevelOutOfRange { index, level_count } => write!(
                f,
                "level index out of range: {index} (table has {level_count} levels)"
            ),
            Self::InvalidLevelTable { reason } => write!(f, "invalid level table: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
