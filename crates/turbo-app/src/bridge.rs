//! Command bridge between a front end and the game loop thread.
//!
//! A front end calls these with the shared `AppState`; requests are forwarded
//! to the game loop over its channel.

use tracing::info;

use turbo_core::commands::PlayerCommand;
use turbo_core::state::GameStateSnapshot;
use turbo_sim::engine::SimConfig;
use turbo_sim::high_score::HighScoreStore;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    store: Box<dyn HighScoreStore>,
) -> Result<(), AppError> {
    let mut running = state.running.lock()?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let seed = config.seed;
    let cmd_tx = game_loop::spawn_game_loop(config, store, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock()?;
    *tx_lock = Some(cmd_tx);
    *running = true;
    info!(seed, "simulation started");

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock()?;
    Ok(lock.clone())
}

/// Ask the game loop to exit. The latest snapshot stays available.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    let mut tx_lock = state.command_tx.lock()?;

    let tx = tx_lock.take().ok_or(AppError::NotStarted)?;
    *running = false;
    // A loop that already exited has dropped its receiver; nothing left to stop.
    let _ = tx.send(GameLoopCommand::Shutdown);
    info!("simulation stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use turbo_core::enums::GamePhase;
    use turbo_sim::high_score::MemoryHighScore;

    use crate::game_loop::TICK_DURATION;

    fn memory_store() -> Box<dyn HighScoreStore> {
        Box::new(MemoryHighScore::default())
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let result = send_command(&state, PlayerCommand::Start);
        assert!(matches!(result, Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default(), memory_store()).unwrap();
        let again = start_simulation(&state, SimConfig::default(), memory_store());
        assert!(matches!(again, Err(AppError::AlreadyRunning)));
        stop_simulation(&state).unwrap();
    }

    #[test]
    fn test_commands_reach_the_engine() {
        let state = AppState::new();
        start_simulation(&state, SimConfig { seed: 9 }, memory_store()).unwrap();

        send_command(&state, PlayerCommand::Start).unwrap();
        send_command(&state, PlayerCommand::SetCarTarget { position: 20.0 }).unwrap();
        std::thread::sleep(TICK_DURATION * 10);

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert_eq!(snapshot.run.car_position, 20.0);

        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());

        // The loop is gone, but the last snapshot is still readable.
        std::thread::sleep(Duration::from_millis(100));
        assert!(get_snapshot(&state).unwrap().is_some());
        assert!(matches!(
            send_command(&state, PlayerCommand::Restart),
            Err(AppError::NotStarted)
        ));
    }
}
