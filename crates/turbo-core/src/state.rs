//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub run: RunView,
    /// Best score seen by this session (persisted value or better).
    pub high_score: u64,
    /// Objects sorted by id.
    pub objects: Vec<ObjectView>,
    pub particles: Vec<ParticleView>,
    /// Whether the renderer should shake the play field.
    pub screen_shake: bool,
    pub events: Vec<GameEvent>,
}

/// Scalar run statistics for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunView {
    pub score: u64,
    /// Meters travelled.
    pub distance: f64,
    pub lives: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub level: u32,
    pub speed: f64,
    /// Speed including the shield boost.
    pub effective_speed: f64,
    pub shield_active: bool,
    /// 0..=100.
    pub shield_charge: f64,
    /// Milliseconds until the active shield drops (0 when inactive).
    pub shield_remaining_ms: u64,
    /// Lane position in percent (10..=90).
    pub car_position: f64,
    /// Cosmetic road-line scroll (0..100).
    pub road_offset: f64,
    /// Survival time of this run.
    pub elapsed_ms: u64,
    pub started: bool,
    pub game_over: bool,
}

impl Default for RunView {
    fn default() -> Self {
        Self {
            score: 0,
            distance: 0.0,
            lives: crate::constants::STARTING_LIVES,
            combo: 0,
            max_combo: 0,
            level: 1,
            speed: crate::constants::STARTING_SPEED,
            effective_speed: crate::constants::STARTING_SPEED,
            shield_active: false,
            shield_charge: 0.0,
            shield_remaining_ms: 0,
            car_position: crate::constants::CAR_START_POSITION,
            road_offset: 0.0,
            elapsed_ms: 0,
            started: false,
            game_over: false,
        }
    }
}

/// A road object as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectView {
    pub id: u64,
    pub kind: ObjectKind,
    pub position: Position,
    /// True while the object plays its destroy animation.
    pub hit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub color: ParticleColor,
    pub life: u32,
}
