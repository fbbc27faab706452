//! Simulation engine for RADIANT.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces FrameResults and GameStateSnapshots for a host.

pub mod engine;
pub mod error;
pub mod levels;
pub mod scoring;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use radiant_core as core;
