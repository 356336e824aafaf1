//! Distance, level and speed progression.
//!
//! Runs on its own slower cadence: the engine feeds it tick time and it
//! advances distance once per DISTANCE_INTERVAL_MS.

use tracing::debug;

use turbo_core::constants::*;
use turbo_core::events::GameEvent;

use crate::run_state::{level_for_distance, RunState};

/// Accumulate tick time and run one distance step per elapsed interval.
pub fn run(run: &mut RunState, accum_ms: &mut u64, dt_ms: u64, events: &mut Vec<GameEvent>) {
    *accum_ms += dt_ms;
    while *accum_ms >= DISTANCE_INTERVAL_MS {
        *accum_ms -= DISTANCE_INTERVAL_MS;
        advance_distance(run, events);
    }
}

/// One distance step: travel at effective speed, then apply level and
/// speed milestones crossed along the way.
pub fn advance_distance(run: &mut RunState, events: &mut Vec<GameEvent>) {
    let before = run.distance;
    run.distance += run.effective_speed();

    let milestones = (run.distance / SPEED_MILESTONE_DISTANCE).floor()
        - (before / SPEED_MILESTONE_DISTANCE).floor();
    for _ in 0..milestones.max(0.0) as u32 {
        if run.speed < MAX_SPEED {
            run.speed = (run.speed + SPEED_MILESTONE_GAIN).min(MAX_SPEED);
            events.push(GameEvent::SpeedUp { speed: run.speed });
            debug!(speed = run.speed, distance = run.distance, "speed milestone");
        }
    }

    let level = level_for_distance(run.distance);
    if level != run.level {
        run.level = level;
        events.push(GameEvent::LevelUp { level });
        debug!(level, distance = run.distance, "level up");
    }
}
