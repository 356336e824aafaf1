//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of object travelling down the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Points, combo and shield charge.
    Coin,
    /// Fills the shield meter.
    Shield,
    /// Extra life.
    Life,
    Car,
    Truck,
}

impl ObjectKind {
    /// Whether colliding with this kind costs a life when unshielded.
    pub fn is_obstacle(self) -> bool {
        matches!(self, ObjectKind::Car | ObjectKind::Truck)
    }
}

/// Steering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to car position deltas.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet.
    #[default]
    Idle,
    Running,
    /// Terminal until restart.
    GameOver,
}

/// Particle tint, chosen by the event that produced the burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Gold,
    Cyan,
    Pink,
    Red,
    Orange,
}

impl ParticleColor {
    /// CSS-style hex color for renderers.
    pub fn hex(self) -> &'static str {
        match self {
            ParticleColor::Gold => "#facc15",
            ParticleColor::Cyan => "#22d3ee",
            ParticleColor::Pink => "#f472b6",
            ParticleColor::Red => "#ef4444",
            ParticleColor::Orange => "#f97316",
        }
    }
}
