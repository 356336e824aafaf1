//! Game loop thread: runs the simulation engine on a fixed 30ms cadence.
//!
//! The engine is created inside this thread so it has a single owner.
//! Commands arrive via an `mpsc` channel and are drained at tick boundaries.
//! Each snapshot is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use turbo_core::constants::TICK_MS;
use turbo_core::state::GameStateSnapshot;
use turbo_sim::engine::{SimConfig, SimulationEngine};
use turbo_sim::high_score::HighScoreStore;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one simulation tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MS);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the bridge to use.
pub fn spawn_game_loop(
    config: SimConfig,
    store: Box<dyn HighScoreStore>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("turbo-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::with_store(config, store);
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    info!(high_score = engine.high_score(), "game loop started");
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            info!(tick = engine.time().tick, "game loop stopped");
            return;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Store latest snapshot for synchronous polling
        match latest_snapshot.lock() {
            Ok(mut lock) => *lock = Some(snapshot),
            Err(_) => {
                warn!("snapshot lock poisoned, stopping game loop");
                return;
            }
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!(behind = ?(now - next_tick_time), "game loop fell behind");
            next_tick_time = now;
        }
    }
}

/// Forward every pending command to the engine.
/// Returns false once the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_core::commands::PlayerCommand;
    use turbo_core::enums::{Direction, GamePhase};
    use turbo_sim::high_score::MemoryHighScore;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::NudgeCar {
            direction: Direction::Left,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::NudgeCar { .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_commands_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Running);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.start();

        // Run enough ticks to populate objects
        for _ in 0..200 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            SimConfig::default(),
            Box::new(MemoryHighScore::default()),
            latest.clone(),
        )
        .unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
            .unwrap();
        std::thread::sleep(TICK_DURATION * 10);
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert!(snapshot.time.tick > 0);
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION.as_millis(), 30);
    }
}
