//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use turbo_core::components::{Particle, RoadObject};
use turbo_core::enums::GamePhase;
use turbo_core::events::GameEvent;
use turbo_core::state::*;
use turbo_core::types::{Position, SimTime};

use crate::run_state::RunState;
use crate::systems::timers::Timers;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    run: &RunState,
    timers: &Timers,
    high_score: u64,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        run: build_run(run, timers, time),
        high_score,
        objects: build_objects(world),
        particles: build_particles(world),
        screen_shake: timers.shaking(),
        events,
    }
}

fn build_run(run: &RunState, timers: &Timers, time: &SimTime) -> RunView {
    RunView {
        score: run.score,
        distance: run.distance,
        lives: run.lives,
        combo: run.combo,
        max_combo: run.max_combo,
        level: run.level,
        speed: run.speed,
        effective_speed: run.effective_speed(),
        shield_active: run.shield_active,
        shield_charge: run.shield_charge,
        shield_remaining_ms: timers.shield_remaining_ms(time.elapsed_ms),
        car_position: run.car_position,
        road_offset: run.road_offset,
        elapsed_ms: time.elapsed_ms,
        started: run.started,
        game_over: run.game_over,
    }
}

/// Build ObjectView list, sorted by id so renderers get a stable order.
fn build_objects(world: &World) -> Vec<ObjectView> {
    let mut objects: Vec<ObjectView> = world
        .query::<(&Position, &RoadObject)>()
        .iter()
        .map(|(_, (pos, object))| ObjectView {
            id: object.id,
            kind: object.kind,
            position: *pos,
            hit: !object.state.is_active(),
        })
        .collect();

    objects.sort_by_key(|o| o.id);
    objects
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: *pos,
            color: particle.color,
            life: particle.life,
        })
        .collect()
}
