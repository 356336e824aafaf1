//! Collision system: resolves objects reaching the car.
//!
//! An object collides when it is active, inside the car band vertically and
//! within the horizontal tolerance of the car. Each collision is resolved
//! once; the object then becomes a tombstone for its exit animation.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use turbo_core::components::{ObjectState, RoadObject};
use turbo_core::constants::*;
use turbo_core::enums::{ObjectKind, ParticleColor};
use turbo_core::events::GameEvent;
use turbo_core::types::Position;

use crate::run_state::RunState;
use crate::systems::timers::Timers;
use crate::world_setup;

/// Whether an object at `pos` overlaps a car at `car_position`.
pub fn overlaps_car(pos: &Position, car_position: f64) -> bool {
    pos.y > CAR_BAND_TOP
        && pos.y < CAR_BAND_BOTTOM
        && (pos.x - car_position).abs() < COLLISION_TOLERANCE_X
}

/// Detect and resolve all collisions this tick, in object id order.
/// Stops early if a crash ends the run.
pub fn run(
    world: &mut World,
    run: &mut RunState,
    timers: &mut Timers,
    fx_rng: &mut ChaCha8Rng,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) {
    let mut hits: Vec<(u64, Entity, ObjectKind, Position)> = world
        .query::<(&Position, &RoadObject)>()
        .iter()
        .filter(|(_, (pos, object))| {
            object.state.is_active() && overlaps_car(pos, run.car_position)
        })
        .map(|(entity, (pos, object))| (object.id, entity, object.kind, *pos))
        .collect();
    hits.sort_by_key(|(id, ..)| *id);

    for (_id, entity, kind, pos) in hits {
        let color = resolve(run, timers, kind, now_ms, events);

        if let Ok(mut object) = world.get::<&mut RoadObject>(entity) {
            object.state = ObjectState::Destroyed {
                ticks_remaining: DESTROY_ANIMATION_TICKS,
            };
        }
        world_setup::spawn_burst(world, fx_rng, pos, color);

        if run.lives == 0 {
            break;
        }
    }
}

/// Apply the gameplay effect of touching one object. Returns the particle
/// color for the feedback burst.
pub fn resolve(
    run: &mut RunState,
    timers: &mut Timers,
    kind: ObjectKind,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) -> ParticleColor {
    match kind {
        ObjectKind::Coin => {
            let points = COIN_BASE_POINTS + COIN_COMBO_BONUS * u64::from(run.combo);
            run.score += points;
            run.combo += 1;
            run.max_combo = run.max_combo.max(run.combo);
            run.shield_charge = (run.shield_charge + SHIELD_CHARGE_PER_COIN).min(SHIELD_CHARGE_MAX);
            timers.arm_combo(now_ms);
            events.push(GameEvent::CoinCollected {
                points,
                combo: run.combo,
            });
            ParticleColor::Gold
        }
        ObjectKind::Shield => {
            run.shield_charge = SHIELD_CHARGE_MAX;
            run.score += SHIELD_PICKUP_POINTS;
            events.push(GameEvent::ShieldCollected);
            ParticleColor::Cyan
        }
        ObjectKind::Life => {
            run.lives = (run.lives + 1).min(MAX_LIVES);
            run.score += LIFE_PICKUP_POINTS;
            events.push(GameEvent::LifeCollected { lives: run.lives });
            ParticleColor::Pink
        }
        ObjectKind::Car | ObjectKind::Truck => {
            if run.shield_active {
                run.score += SHIELD_RAM_POINTS;
                events.push(GameEvent::ShieldRam {
                    points: SHIELD_RAM_POINTS,
                });
                ParticleColor::Orange
            } else {
                run.combo = 0;
                timers.combo_deadline_ms = None;
                run.speed = (run.speed - CRASH_SPEED_PENALTY).max(MIN_SPEED);
                run.lives = run.lives.saturating_sub(1);
                timers.arm_shake(now_ms);
                events.push(GameEvent::Crash { lives: run.lives });
                ParticleColor::Red
            }
        }
    }
}
