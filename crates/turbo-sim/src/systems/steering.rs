//! Car steering: pointer targets, discrete nudges and key-hold repeat.

use turbo_core::constants::{HOLD_STEP, KEY_REPEAT_INTERVAL_MS, NUDGE_STEP};
use turbo_core::enums::Direction;

use crate::run_state::RunState;

/// Left/right keys currently held by the player.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    left: bool,
    right: bool,
    /// Most recently pressed direction; wins while both are held.
    latest: Option<Direction>,
    /// Time accumulated toward the next repeat step.
    repeat_accum_ms: u64,
}

impl HeldKeys {
    /// Record a key-down or key-up.
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        let before = self.active();
        match direction {
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
        if pressed {
            self.latest = Some(direction);
        }
        if self.active() != before {
            self.repeat_accum_ms = 0;
        }
    }

    /// Direction the car is currently being steered in, if any.
    pub fn active(&self) -> Option<Direction> {
        let held = |d: Direction| match d {
            Direction::Left => self.left,
            Direction::Right => self.right,
        };
        match self.latest {
            Some(d) if held(d) => Some(d),
            Some(d) if held(d.opposite()) => Some(d.opposite()),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pointer/touch steering. Non-finite positions are ignored.
pub fn set_target(run: &mut RunState, position: f64) {
    if position.is_finite() {
        run.set_car_position(position);
    }
}

/// Discrete button steering.
pub fn nudge(run: &mut RunState, direction: Direction) {
    run.set_car_position(run.car_position + direction.sign() * NUDGE_STEP);
}

/// Key-hold repeat: step the car once per elapsed repeat interval.
pub fn run(run: &mut RunState, held: &mut HeldKeys, dt_ms: u64) {
    let Some(direction) = held.active() else {
        held.repeat_accum_ms = 0;
        return;
    };

    held.repeat_accum_ms += dt_ms;
    while held.repeat_accum_ms >= KEY_REPEAT_INTERVAL_MS {
        held.repeat_accum_ms -= KEY_REPEAT_INTERVAL_MS;
        run.set_car_position(run.car_position + direction.sign() * HOLD_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_target_clamps_and_ignores_nan() {
        let mut run = RunState::started();
        set_target(&mut run, 95.0);
        assert_eq!(run.car_position, 90.0);
        set_target(&mut run, f64::NAN);
        assert_eq!(run.car_position, 90.0);
        set_target(&mut run, 22.5);
        assert_eq!(run.car_position, 22.5);
    }

    #[test]
    fn test_nudge_steps_and_clamps() {
        let mut run = RunState::started();
        nudge(&mut run, Direction::Left);
        assert_eq!(run.car_position, 40.0);
        for _ in 0..10 {
            nudge(&mut run, Direction::Left);
        }
        assert_eq!(run.car_position, 10.0);
        nudge(&mut run, Direction::Right);
        assert_eq!(run.car_position, 20.0);
    }

    #[test]
    fn test_hold_steps_on_repeat_interval() {
        let mut run = RunState::started();
        let mut held = HeldKeys::default();
        held.set(Direction::Right, true);

        // 30ms: not yet a full interval.
        run_ticks(&mut run, &mut held, 1);
        assert_eq!(run.car_position, 50.0);

        // 60ms total: one step.
        run_ticks(&mut run, &mut held, 1);
        assert_eq!(run.car_position, 53.0);

        // 300ms total: six steps.
        run_ticks(&mut run, &mut held, 8);
        assert!((run.car_position - 68.0).abs() < 1e-10);

        held.set(Direction::Right, false);
        run_ticks(&mut run, &mut held, 10);
        assert!((run.car_position - 68.0).abs() < 1e-10);
    }

    #[test]
    fn test_releasing_one_direction_resumes_the_other() {
        let mut held = HeldKeys::default();
        held.set(Direction::Left, true);
        assert_eq!(held.active(), Some(Direction::Left));

        held.set(Direction::Right, true);
        assert_eq!(held.active(), Some(Direction::Right));

        held.set(Direction::Right, false);
        assert_eq!(held.active(), Some(Direction::Left));

        held.set(Direction::Left, false);
        assert_eq!(held.active(), None);
    }

    fn run_ticks(run_state: &mut RunState, held: &mut HeldKeys, ticks: usize) {
        for _ in 0..ticks {
            run(run_state, held, 30);
        }
    }
}
