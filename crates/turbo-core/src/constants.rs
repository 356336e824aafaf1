//! Simulation constants and tuning parameters.
//!
//! Positions are percentages of the play field: x runs 0..100 across the
//! road, y runs 0..100 from top to bottom.

/// Duration of one simulation tick (milliseconds).
pub const TICK_MS: u64 = 30;

/// Interval of the distance/level/speed phase (milliseconds).
pub const DISTANCE_INTERVAL_MS: u64 = 100;

/// Interval of the key-hold steering repeat (milliseconds).
pub const KEY_REPEAT_INTERVAL_MS: u64 = 50;

// --- Run defaults ---

pub const STARTING_LIVES: u32 = 3;
pub const MAX_LIVES: u32 = 5;
pub const STARTING_SPEED: f64 = 1.0;
pub const CAR_START_POSITION: f64 = 50.0;

// --- Steering ---

/// Leftmost car position (percent of road width).
pub const CAR_MIN_POSITION: f64 = 10.0;

/// Rightmost car position (percent of road width).
pub const CAR_MAX_POSITION: f64 = 90.0;

/// Step applied by a discrete left/right button press.
pub const NUDGE_STEP: f64 = 10.0;

/// Step applied per key-repeat interval while a direction is held.
pub const HOLD_STEP: f64 = 3.0;

// --- Progression ---

/// Distance covered per level.
pub const LEVEL_DISTANCE: f64 = 150.0;

pub const MAX_LEVEL: u32 = 10;

/// Distance between speed milestones.
pub const SPEED_MILESTONE_DISTANCE: f64 = 300.0;

/// Speed gained at each milestone.
pub const SPEED_MILESTONE_GAIN: f64 = 0.2;

pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 4.0;

/// Speed lost on an unshielded crash.
pub const CRASH_SPEED_PENALTY: f64 = 0.5;

/// Object speed gained per level above 1.
pub const LEVEL_SPEED_FACTOR: f64 = 0.2;

// --- Motion ---

/// Base vertical step per tick for objects at speed 1.0, level 1.
pub const OBJECT_BASE_STEP: f64 = 1.2;

/// Road line scroll per tick per unit of effective speed.
pub const ROAD_SCROLL_FACTOR: f64 = 2.0;

// --- Spawning ---

pub const SPAWN_Y: f64 = -10.0;
pub const SPAWN_MIN_X: f64 = 15.0;
pub const SPAWN_MAX_X: f64 = 85.0;

pub const SPAWN_BASE_RATE: f64 = 0.015;
pub const SPAWN_RATE_PER_LEVEL: f64 = 0.008;
pub const SPAWN_RATE_PER_SPEED: f64 = 0.003;

pub const COIN_BASE_CHANCE: f64 = 0.5;
pub const COIN_CHANCE_DECAY_PER_LEVEL: f64 = 0.04;
pub const COIN_MIN_CHANCE: f64 = 0.15;
pub const CAR_BASE_CHANCE: f64 = 0.2;
pub const CAR_CHANCE_PER_LEVEL: f64 = 0.02;
pub const TRUCK_BASE_CHANCE: f64 = 0.1;
pub const TRUCK_CHANCE_PER_LEVEL: f64 = 0.015;

/// Draws at or above this value roll a life pickup (the top 1%).
pub const LIFE_DRAW_THRESHOLD: f64 = 0.99;

/// Minimum distance between two shield spawns.
pub const SHIELD_SPAWN_GATE: f64 = 100.0;

// --- Collision ---

/// Top of the car band (exclusive).
pub const CAR_BAND_TOP: f64 = 80.0;

/// Bottom of the car band (exclusive).
pub const CAR_BAND_BOTTOM: f64 = 95.0;

/// Horizontal tolerance between car and object centers.
pub const COLLISION_TOLERANCE_X: f64 = 12.0;

/// Active objects at or below this y have left the field.
pub const DESPAWN_Y: f64 = 105.0;

/// Ticks a destroyed object lingers for its exit animation (~400ms).
pub const DESTROY_ANIMATION_TICKS: u32 = 14;

// --- Scoring ---

pub const COIN_BASE_POINTS: u64 = 10;
pub const COIN_COMBO_BONUS: u64 = 5;
pub const SHIELD_PICKUP_POINTS: u64 = 50;
pub const LIFE_PICKUP_POINTS: u64 = 100;
pub const SHIELD_RAM_POINTS: u64 = 30;

/// Combo resets when no coin is collected for this long (milliseconds).
pub const COMBO_TIMEOUT_MS: u64 = 2_000;

// --- Shield ---

pub const SHIELD_CHARGE_MAX: f64 = 100.0;
pub const SHIELD_CHARGE_PER_COIN: f64 = 10.0;
pub const SHIELD_DURATION_MS: u64 = 3_000;

/// Effective speed multiplier while the shield is up.
pub const SHIELD_SPEED_MULTIPLIER: f64 = 1.5;

// --- Effects ---

pub const SCREEN_SHAKE_MS: u64 = 500;
pub const PARTICLES_PER_BURST: usize = 8;
pub const PARTICLE_LIFE_TICKS: u32 = 20;
pub const PARTICLE_MAX_SPEED: f64 = 1.5;
pub const PARTICLE_GRAVITY: f64 = 0.15;
