//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions over `&mut World` and the run's scalar state.
//! They do not own state; the engine passes in everything they touch.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod particles;
pub mod progression;
pub mod shield;
pub mod snapshot;
pub mod spawner;
pub mod steering;
pub mod timers;
