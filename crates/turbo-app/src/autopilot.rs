//! Snapshot-driven driver used by the headless binary.
//!
//! Looks at the objects approaching the car and picks the lane with the best
//! pickups and the fewest obstacles.

use turbo_core::commands::PlayerCommand;
use turbo_core::constants::{
    CAR_BAND_BOTTOM, CAR_MAX_POSITION, CAR_MIN_POSITION, SHIELD_CHARGE_MAX,
};
use turbo_core::enums::{GamePhase, ObjectKind};
use turbo_core::state::{GameStateSnapshot, ObjectView};

/// Objects above this line are too far away to react to.
const LOOKAHEAD_Y: f64 = 30.0;
/// Lateral clearance kept from obstacles.
const OBSTACLE_CLEARANCE: f64 = 16.0;
/// Lateral reach for collecting pickups.
const PICKUP_REACH: f64 = 9.0;
const LANE_STEP: f64 = 5.0;
/// Obstacles this close vertically trigger the shield.
const SHIELD_TRIGGER_Y: f64 = 65.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    last_target: Option<f64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to send in response to the latest snapshot.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if snapshot.phase != GamePhase::Running {
            self.last_target = None;
            return Vec::new();
        }

        let mut commands = Vec::new();
        if should_activate_shield(snapshot) {
            commands.push(PlayerCommand::ActivateShield);
        }

        let target = choose_target(snapshot);
        if self.last_target != Some(target) {
            self.last_target = Some(target);
            commands.push(PlayerCommand::SetCarTarget { position: target });
        }
        commands
    }
}

/// Lane with the best score for the objects ahead.
pub fn choose_target(snapshot: &GameStateSnapshot) -> f64 {
    let car = snapshot.run.car_position;
    let shielded = snapshot.run.shield_active;
    let ahead: Vec<&ObjectView> = snapshot
        .objects
        .iter()
        .filter(|o| !o.hit && o.position.y >= LOOKAHEAD_Y && o.position.y <= CAR_BAND_BOTTOM)
        .collect();

    let mut best = (car, f64::NEG_INFINITY);
    let mut lane = CAR_MIN_POSITION;
    while lane <= CAR_MAX_POSITION {
        let score = lane_score(lane, car, shielded, &ahead);
        if score > best.1 {
            best = (lane, score);
        }
        lane += LANE_STEP;
    }
    best.0
}

fn lane_score(lane: f64, car: f64, shielded: bool, ahead: &[&ObjectView]) -> f64 {
    // Prefer staying put when nothing else matters.
    let mut score = -(lane - car).abs() * 0.01;
    for object in ahead {
        let dx = (object.position.x - lane).abs();
        let urgency = object.position.y / CAR_BAND_BOTTOM;
        score += match object.kind {
            ObjectKind::Car | ObjectKind::Truck if !shielded && dx < OBSTACLE_CLEARANCE => {
                -100.0 * urgency
            }
            ObjectKind::Car | ObjectKind::Truck if dx < OBSTACLE_CLEARANCE => 3.0 * urgency,
            ObjectKind::Life if dx < PICKUP_REACH => 8.0 * urgency,
            ObjectKind::Shield if dx < PICKUP_REACH => 5.0 * urgency,
            ObjectKind::Coin if dx < PICKUP_REACH => 2.0 * urgency,
            _ => 0.0,
        };
    }
    score
}

/// Full charge and an obstacle about to reach the car.
pub fn should_activate_shield(snapshot: &GameStateSnapshot) -> bool {
    let run = &snapshot.run;
    if run.shield_active || run.shield_charge < SHIELD_CHARGE_MAX {
        return false;
    }
    snapshot.objects.iter().any(|o| {
        !o.hit
            && o.kind.is_obstacle()
            && o.position.y >= SHIELD_TRIGGER_Y
            && (o.position.x - run.car_position).abs() < OBSTACLE_CLEARANCE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_core::types::Position;

    fn running_snapshot(objects: Vec<ObjectView>) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.phase = GamePhase::Running;
        snapshot.run.started = true;
        snapshot.objects = objects;
        snapshot
    }

    fn object(id: u64, kind: ObjectKind, x: f64, y: f64) -> ObjectView {
        ObjectView {
            id,
            kind,
            position: Position::new(x, y),
            hit: false,
        }
    }

    #[test]
    fn test_stays_put_on_empty_road() {
        let snapshot = running_snapshot(Vec::new());
        assert_eq!(choose_target(&snapshot), 50.0);
    }

    #[test]
    fn test_dodges_obstacle_in_lane() {
        let snapshot = running_snapshot(vec![object(0, ObjectKind::Truck, 50.0, 70.0)]);
        let target = choose_target(&snapshot);
        assert!((target - 50.0).abs() >= OBSTACLE_CLEARANCE, "target {target}");
    }

    #[test]
    fn test_moves_toward_coin() {
        let snapshot = running_snapshot(vec![object(0, ObjectKind::Coin, 30.0, 60.0)]);
        let target = choose_target(&snapshot);
        assert!((target - 30.0).abs() < PICKUP_REACH, "target {target}");
    }

    #[test]
    fn test_shield_used_only_when_needed() {
        let mut snapshot = running_snapshot(vec![object(0, ObjectKind::Car, 52.0, 75.0)]);
        assert!(!should_activate_shield(&snapshot));

        snapshot.run.shield_charge = SHIELD_CHARGE_MAX;
        assert!(should_activate_shield(&snapshot));

        snapshot.objects = vec![object(0, ObjectKind::Coin, 52.0, 75.0)];
        assert!(!should_activate_shield(&snapshot));
    }

    #[test]
    fn test_decide_sends_target_once() {
        let mut autopilot = Autopilot::new();
        let snapshot = running_snapshot(vec![object(0, ObjectKind::Coin, 30.0, 60.0)]);

        let first = autopilot.decide(&snapshot);
        assert!(matches!(first[..], [PlayerCommand::SetCarTarget { .. }]));
        assert!(autopilot.decide(&snapshot).is_empty());

        let mut over = snapshot.clone();
        over.phase = GamePhase::GameOver;
        assert!(autopilot.decide(&over).is_empty());
    }

    #[test]
    fn test_autopilot_outlasts_standing_still() {
        use turbo_sim::engine::{SimConfig, SimulationEngine};

        fn survive(seed: u64, drive: bool) -> u64 {
            let mut engine = SimulationEngine::new(SimConfig { seed });
            let mut autopilot = Autopilot::new();
            engine.start();
            let mut snapshot = engine.tick();
            while snapshot.phase == GamePhase::Running && snapshot.time.tick < 50_000 {
                if drive {
                    engine.queue_commands(autopilot.decide(&snapshot));
                }
                snapshot = engine.tick();
            }
            snapshot.time.tick
        }

        let driven: u64 = (1..=3).map(|seed| survive(seed, true)).sum();
        let idle: u64 = (1..=3).map(|seed| survive(seed, false)).sum();
        assert!(driven > idle, "autopilot {driven} ticks vs idle {idle}");
    }
}
