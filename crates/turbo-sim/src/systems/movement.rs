//! Kinematic integration: road scroll and object descent.

use hecs::World;

use turbo_core::components::RoadObject;
use turbo_core::constants::{OBJECT_BASE_STEP, ROAD_SCROLL_FACTOR};
use turbo_core::types::Position;

use crate::run_state::RunState;

/// Scroll the road lines. Purely cosmetic.
pub fn advance_road(run: &mut RunState) {
    run.road_offset = (run.road_offset + run.effective_speed() * ROAD_SCROLL_FACTOR) % 100.0;
}

/// Vertical distance an active object travels this tick.
pub fn object_step(run: &RunState) -> f64 {
    OBJECT_BASE_STEP * run.effective_speed() * run.level_speed_multiplier()
}

/// Move every active object down the field. Destroyed objects hold position.
pub fn run(world: &mut World, step: f64) {
    for (_entity, (pos, object)) in world.query_mut::<(&mut Position, &RoadObject)>() {
        if object.state.is_active() {
            pos.y += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_core::components::ObjectState;
    use turbo_core::enums::ObjectKind;

    #[test]
    fn test_object_step_scales_with_speed_and_level() {
        let mut run = RunState::started();
        assert!((object_step(&run) - 1.2).abs() < 1e-10);

        run.speed = 2.0;
        run.level = 3;
        // 1.2 * 2.0 * 1.4
        assert!((object_step(&run) - 3.36).abs() < 1e-10);

        run.shield_active = true;
        assert!((object_step(&run) - 5.04).abs() < 1e-10);
    }

    #[test]
    fn test_road_offset_wraps() {
        let mut run = RunState::started();
        run.road_offset = 99.0;
        advance_road(&mut run);
        assert!((run.road_offset - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_destroyed_objects_do_not_move() {
        let mut world = World::new();
        let active = world.spawn((
            Position::new(50.0, 10.0),
            RoadObject {
                id: 0,
                kind: ObjectKind::Coin,
                state: ObjectState::Active,
            },
        ));
        let destroyed = world.spawn((
            Position::new(50.0, 10.0),
            RoadObject {
                id: 1,
                kind: ObjectKind::Car,
                state: ObjectState::Destroyed { ticks_remaining: 5 },
            },
        ));

        for _ in 0..10 {
            run(&mut world, 1.2);
        }

        assert!((world.get::<&Position>(active).unwrap().y - 22.0).abs() < 1e-10);
        assert_eq!(world.get::<&Position>(destroyed).unwrap().y, 10.0);
    }
}
