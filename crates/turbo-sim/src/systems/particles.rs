//! Particle integration: ballistic drift with gravity and a fixed lifetime.

use hecs::{Entity, World};

use turbo_core::components::Particle;
use turbo_core::constants::PARTICLE_GRAVITY;
use turbo_core::types::{Position, Velocity};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, particle)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Particle)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        vel.y += PARTICLE_GRAVITY;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
