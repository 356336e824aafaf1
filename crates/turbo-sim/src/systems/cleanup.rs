//! Cleanup system: removes objects that left the field or finished their exit animation.

use hecs::{Entity, World};

use turbo_core::components::{ObjectState, RoadObject};
use turbo_core::constants::DESPAWN_Y;
use turbo_core::types::Position;

/// Prune road objects. Active objects go once they pass the bottom of the
/// field; destroyed objects count down their animation and go at zero.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, object)) in world.query_mut::<(&Position, &mut RoadObject)>() {
        match object.state {
            ObjectState::Active => {
                if pos.y >= DESPAWN_Y {
                    despawn_buffer.push(entity);
                }
            }
            ObjectState::Destroyed { ticks_remaining } => {
                if ticks_remaining <= 1 {
                    despawn_buffer.push(entity);
                } else {
                    object.state = ObjectState::Destroyed {
                        ticks_remaining: ticks_remaining - 1,
                    };
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
