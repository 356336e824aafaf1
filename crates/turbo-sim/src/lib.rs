//! Simulation engine for TURBO RUNNER.
//!
//! Owns the hecs ECS world and the run state, runs systems at a fixed tick
//! rate, and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod high_score;
pub mod run_state;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use turbo_core as core;
