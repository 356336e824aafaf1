//! Runtime configuration for the shell, from flags or environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use turbo_sim::engine::SimConfig;

/// Headless lane-runner with an autopilot driver
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// RNG seed for the simulation
    #[arg(long, env = "TURBO_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Where the high score is stored
    #[arg(long, env = "TURBO_HIGH_SCORE_PATH", default_value = "turbo_high_score.json")]
    pub high_score_path: PathBuf,

    /// Wall-clock seconds to run before shutting down
    #[arg(long, env = "TURBO_RUN_SECS", default_value_t = 60)]
    pub run_secs: u64,

    /// Start a new run after each game over instead of stopping
    #[arg(long)]
    pub keep_playing: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig { seed: self.seed }
    }

    pub fn run_duration(&self) -> Duration {
        Duration::from_secs(self.run_secs)
    }
}
