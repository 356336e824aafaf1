//! Scalar state of a single run.
//!
//! Stored directly on `SimulationEngine`, NOT as ECS entities. Road objects and
//! particles live in the hecs world; everything the HUD shows lives here.

use turbo_core::constants::*;

/// Mutable statistics of the current run. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub score: u64,
    /// Meters travelled.
    pub distance: f64,
    pub lives: u32,
    pub combo: u32,
    /// Highest combo reached this run; never decreases.
    pub max_combo: u32,
    /// Always `level_for_distance(distance)`.
    pub level: u32,
    pub speed: f64,
    pub shield_active: bool,
    pub shield_charge: f64,
    pub last_shield_spawn_distance: f64,
    /// Lane position in percent, clamped to [CAR_MIN_POSITION, CAR_MAX_POSITION].
    pub car_position: f64,
    pub road_offset: f64,
    pub started: bool,
    pub game_over: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            distance: 0.0,
            lives: STARTING_LIVES,
            combo: 0,
            max_combo: 0,
            level: 1,
            speed: STARTING_SPEED,
            shield_active: false,
            shield_charge: 0.0,
            last_shield_spawn_distance: 0.0,
            car_position: CAR_START_POSITION,
            road_offset: 0.0,
            started: false,
            game_over: false,
        }
    }
}

impl RunState {
    /// Fresh state for a run that has just begun.
    pub fn started() -> Self {
        Self {
            started: true,
            ..Self::default()
        }
    }

    /// Speed including the shield boost.
    pub fn effective_speed(&self) -> f64 {
        if self.shield_active {
            self.speed * SHIELD_SPEED_MULTIPLIER
        } else {
            self.speed
        }
    }

    /// Object speed multiplier for the current level.
    pub fn level_speed_multiplier(&self) -> f64 {
        1.0 + f64::from(self.level.saturating_sub(1)) * LEVEL_SPEED_FACTOR
    }

    /// Whether the distance gate allows another shield to spawn.
    pub fn shield_spawn_eligible(&self) -> bool {
        self.distance - self.last_shield_spawn_distance >= SHIELD_SPAWN_GATE
    }

    /// Move the car, keeping it on the road.
    pub fn set_car_position(&mut self, position: f64) {
        self.car_position = position.clamp(CAR_MIN_POSITION, CAR_MAX_POSITION);
    }
}

/// Level reached at a given distance: one level per 150m, capped at 10.
pub fn level_for_distance(distance: f64) -> u32 {
    let level = (distance.max(0.0) / LEVEL_DISTANCE).floor() as u32 + 1;
    level.min(MAX_LEVEL)
}
