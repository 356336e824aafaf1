//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Begin the first run (Idle only).
    Start,
    /// Begin a fresh run after game over.
    Restart,

    // --- Steering ---
    /// Pointer/touch steering: move the car to a lane position in percent.
    SetCarTarget { position: f64 },
    /// Discrete left/right button press.
    NudgeCar { direction: Direction },
    /// Key-down / key-up for continuous steering.
    HoldDirection { direction: Direction, pressed: bool },

    // --- Power ---
    /// Spend a full shield charge.
    ActivateShield,
}
