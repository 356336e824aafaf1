//! Spawner: decides whether a new road object appears this tick and what it is.
//!
//! Pure with respect to the run: it reads a `SpawnContext` and draws from the
//! injected RNG, so a seeded RNG gives a reproducible spawn sequence. The
//! caller applies the result (and consumes the shield gate).

use rand::Rng;

use turbo_core::constants::*;
use turbo_core::enums::ObjectKind;

use crate::run_state::RunState;

/// Inputs the spawner depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnContext {
    pub level: u32,
    pub effective_speed: f64,
    pub distance: f64,
    pub last_shield_spawn_distance: f64,
}

impl SpawnContext {
    pub fn from_run(run: &RunState) -> Self {
        Self {
            level: run.level,
            effective_speed: run.effective_speed(),
            distance: run.distance,
            last_shield_spawn_distance: run.last_shield_spawn_distance,
        }
    }

    pub fn shield_eligible(&self) -> bool {
        self.distance - self.last_shield_spawn_distance >= SHIELD_SPAWN_GATE
    }
}

/// A new object to place at the top of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnDescriptor {
    pub kind: ObjectKind,
    pub x: f64,
    pub y: f64,
}

/// Cumulative probability bands for kind selection at a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindBands {
    pub coin: f64,
    pub car: f64,
    pub truck: f64,
}

impl KindBands {
    pub fn for_level(level: u32) -> Self {
        let steps = f64::from(level.saturating_sub(1));
        let coin = (COIN_BASE_CHANCE - steps * COIN_CHANCE_DECAY_PER_LEVEL).max(COIN_MIN_CHANCE);
        let car = CAR_BASE_CHANCE + steps * CAR_CHANCE_PER_LEVEL;
        let truck = TRUCK_BASE_CHANCE + steps * TRUCK_CHANCE_PER_LEVEL;
        Self {
            coin,
            car: coin + car,
            truck: coin + car + truck,
        }
    }
}

/// Per-tick spawn probability.
pub fn spawn_rate(level: u32, effective_speed: f64) -> f64 {
    SPAWN_BASE_RATE
        + f64::from(level) * SPAWN_RATE_PER_LEVEL
        + effective_speed * SPAWN_RATE_PER_SPEED
}

/// Map a uniform draw in [0, 1) to an object kind.
pub fn select_kind(draw: f64, level: u32, shield_eligible: bool) -> ObjectKind {
    let bands = KindBands::for_level(level);
    if draw < bands.coin {
        ObjectKind::Coin
    } else if draw < bands.car {
        ObjectKind::Car
    } else if draw < bands.truck {
        ObjectKind::Truck
    } else if draw < LIFE_DRAW_THRESHOLD && shield_eligible {
        ObjectKind::Shield
    } else if draw >= LIFE_DRAW_THRESHOLD {
        ObjectKind::Life
    } else {
        ObjectKind::Car
    }
}

/// Roll for a spawn this tick.
pub fn roll<R: Rng>(ctx: &SpawnContext, rng: &mut R) -> Option<SpawnDescriptor> {
    if rng.gen::<f64>() >= spawn_rate(ctx.level, ctx.effective_speed) {
        return None;
    }
    let x = rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X);
    let kind = select_kind(rng.gen::<f64>(), ctx.level, ctx.shield_eligible());
    Some(SpawnDescriptor { kind, x, y: SPAWN_Y })
}
