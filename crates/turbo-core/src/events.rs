//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Per-tick feedback events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    RunStarted,
    CoinCollected { points: u64, combo: u32 },
    ShieldCollected,
    LifeCollected { lives: u32 },
    /// Unshielded hit on an obstacle.
    Crash { lives: u32 },
    /// Obstacle rammed while shielded.
    ShieldRam { points: u64 },
    ShieldActivated,
    ShieldExpired,
    /// Combo timed out without another coin.
    ComboLost { combo: u32 },
    LevelUp { level: u32 },
    SpeedUp { speed: f64 },
    GameOver { score: u64, new_high_score: bool },
}
