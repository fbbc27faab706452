//! Battleship logic for RADIANT.
//!
//! Implements the battleship activation state machine, the boss part
//! reflow and tween, and variant-driven hull profiles.

pub mod activation;
pub mod profiles;
pub mod reflow;

pub use radiant_core as core;
