//! Entity spawn factories for the road world.
//!
//! Creates road objects and particle bursts with the appropriate
//! component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use turbo_core::components::*;
use turbo_core::constants::*;
use turbo_core::enums::*;
use turbo_core::types::{Position, Velocity};

/// Spawn an active road object at the given field position.
pub fn spawn_object(
    world: &mut World,
    id: u64,
    kind: ObjectKind,
    x: f64,
    y: f64,
) -> hecs::Entity {
    world.spawn((
        Position::new(x, y),
        RoadObject {
            id,
            kind,
            state: ObjectState::Active,
        },
    ))
}

/// Spawn a burst of particles flying out from `origin`.
pub fn spawn_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: Position,
    color: ParticleColor,
) {
    for _ in 0..PARTICLES_PER_BURST {
        let velocity = Velocity::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..=0.0),
        );
        world.spawn((
            origin,
            velocity,
            Particle {
                color,
                life: PARTICLE_LIFE_TICKS,
            },
        ));
    }
}
