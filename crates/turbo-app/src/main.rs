use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use turbo_app::autopilot::Autopilot;
use turbo_app::bridge;
use turbo_app::config::AppConfig;
use turbo_app::game_loop::TICK_DURATION;
use turbo_app::logging;
use turbo_app::persistence::JsonFileHighScore;
use turbo_app::state::AppState;
use turbo_app::AppError;
use turbo_core::commands::PlayerCommand;
use turbo_core::enums::GamePhase;
use turbo_core::events::GameEvent;

fn main() {
    let config = AppConfig::parse();
    logging::init(config.verbose);

    if let Err(e) = run(&config) {
        error!(error = %e, "turbo-runner failed");
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let state = AppState::new();
    let store = JsonFileHighScore::new(&config.high_score_path);
    info!(
        seed = config.seed,
        path = %config.high_score_path.display(),
        run_secs = config.run_secs,
        "starting headless run"
    );

    bridge::start_simulation(&state, config.sim_config(), Box::new(store))?;
    bridge::send_command(&state, PlayerCommand::Start)?;

    let mut autopilot = Autopilot::new();
    let mut last_tick = None;
    let mut runs_finished = 0u32;
    let deadline = Instant::now() + config.run_duration();

    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);

        let Some(snapshot) = bridge::get_snapshot(&state)? else {
            continue;
        };
        // Only react to fresh ticks.
        if last_tick == Some(snapshot.time.tick) && snapshot.phase == GamePhase::Running {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        for event in &snapshot.events {
            if let GameEvent::LevelUp { level } = event {
                info!(level, distance = snapshot.run.distance, "level up");
            }
        }

        if snapshot.phase == GamePhase::GameOver {
            runs_finished += 1;
            info!(
                score = snapshot.run.score,
                distance = snapshot.run.distance,
                max_combo = snapshot.run.max_combo,
                high_score = snapshot.high_score,
                "run over"
            );
            if !config.keep_playing {
                break;
            }
            bridge::send_command(&state, PlayerCommand::Restart)?;
            continue;
        }

        for command in autopilot.decide(&snapshot) {
            bridge::send_command(&state, command)?;
        }
    }

    let final_snapshot = bridge::get_snapshot(&state)?;
    bridge::stop_simulation(&state)?;

    if let Some(snapshot) = final_snapshot {
        info!(
            score = snapshot.run.score,
            high_score = snapshot.high_score,
            runs_finished,
            elapsed_secs = snapshot.time.elapsed_secs(),
            "headless run complete"
        );
    }
    Ok(())
}
