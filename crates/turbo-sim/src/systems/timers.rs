//! Simulation-clock deadlines: combo decay, shield expiry, screen shake.
//!
//! Deadlines are absolute sim times in milliseconds. Each one is a single
//! `Option`, so re-arming replaces the previous deadline instead of stacking.

use turbo_core::constants::{COMBO_TIMEOUT_MS, SCREEN_SHAKE_MS, SHIELD_DURATION_MS};
use turbo_core::events::GameEvent;

use crate::run_state::RunState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timers {
    pub combo_deadline_ms: Option<u64>,
    pub shield_deadline_ms: Option<u64>,
    pub shake_deadline_ms: Option<u64>,
}

impl Timers {
    pub fn arm_combo(&mut self, now_ms: u64) {
        self.combo_deadline_ms = Some(now_ms + COMBO_TIMEOUT_MS);
    }

    pub fn arm_shield(&mut self, now_ms: u64) {
        self.shield_deadline_ms = Some(now_ms + SHIELD_DURATION_MS);
    }

    pub fn arm_shake(&mut self, now_ms: u64) {
        self.shake_deadline_ms = Some(now_ms + SCREEN_SHAKE_MS);
    }

    pub fn shield_remaining_ms(&self, now_ms: u64) -> u64 {
        self.shield_deadline_ms
            .map_or(0, |deadline| deadline.saturating_sub(now_ms))
    }

    pub fn shaking(&self) -> bool {
        self.shake_deadline_ms.is_some()
    }

    pub fn cancel_all(&mut self) {
        *self = Self::default();
    }
}

/// Fire every deadline that has elapsed.
pub fn run(run: &mut RunState, timers: &mut Timers, now_ms: u64, events: &mut Vec<GameEvent>) {
    if timers.combo_deadline_ms.is_some_and(|d| now_ms >= d) {
        timers.combo_deadline_ms = None;
        if run.combo > 0 {
            events.push(GameEvent::ComboLost { combo: run.combo });
            run.combo = 0;
        }
    }

    if timers.shield_deadline_ms.is_some_and(|d| now_ms >= d) {
        timers.shield_deadline_ms = None;
        run.shield_active = false;
        events.push(GameEvent::ShieldExpired);
    }

    if timers.shake_deadline_ms.is_some_and(|d| now_ms >= d) {
        timers.shake_deadline_ms = None;
    }
}
