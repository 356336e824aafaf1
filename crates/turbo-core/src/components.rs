//! ECS components for hecs entities.
//!
//! Components are plain data structs.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Lifecycle of a road object. Collected or crashed objects become
/// tombstones that linger for their exit animation before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectState {
    Active,
    Destroyed { ticks_remaining: u32 },
}

impl ObjectState {
    pub fn is_active(self) -> bool {
        matches!(self, ObjectState::Active)
    }
}

/// An object travelling down the road toward the car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadObject {
    /// Unique per run, assigned in spawn order.
    pub id: u64,
    pub kind: ObjectKind,
    pub state: ObjectState,
}

/// Cosmetic particle emitted by pickups and crashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub color: ParticleColor,
    /// Ticks until removal.
    pub life: u32,
}
