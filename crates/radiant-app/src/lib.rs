//! RADIANT host application.
//!
//! Runs the simulation engine on its own thread and feeds it from a headless
//! autopilot. The outro prompt decides whether a finished session restarts.

pub mod autopilot;
pub mod game_loop;
pub mod outro;
pub mod state;

pub use radiant_core as core;
