//! Shield activation.

use turbo_core::constants::SHIELD_CHARGE_MAX;

use crate::run_state::RunState;
use crate::systems::timers::Timers;

/// Spend a full charge to raise the shield. Returns false (and changes
/// nothing) unless the meter is full and the shield is down.
pub fn try_activate(run: &mut RunState, timers: &mut Timers, now_ms: u64) -> bool {
    if run.shield_active || run.shield_charge < SHIELD_CHARGE_MAX {
        return false;
    }
    run.shield_active = true;
    run.shield_charge = 0.0;
    timers.arm_shield(now_ms);
    true
}
