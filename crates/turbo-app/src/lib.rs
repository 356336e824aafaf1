//! TURBO runtime shell.
//!
//! Hosts the simulation engine on a fixed-cadence game-loop thread, persists
//! the high score to disk, and exposes a small command bridge for front ends.

pub mod autopilot;
pub mod bridge;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod logging;
pub mod persistence;
pub mod state;

pub use error::AppError;
pub use turbo_core as core;
