//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the run state, processes
//! player commands, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace, warn};

use turbo_core::commands::PlayerCommand;
use turbo_core::constants::TICK_MS;
use turbo_core::enums::{Direction, GamePhase, ObjectKind};
use turbo_core::events::GameEvent;
use turbo_core::state::GameStateSnapshot;
use turbo_core::types::SimTime;

use crate::high_score::{HighScoreStore, MemoryHighScore};
use crate::run_state::RunState;
use crate::systems;
use crate::systems::spawner::{SpawnContext, SpawnDescriptor};
use crate::systems::steering::HeldKeys;
use crate::systems::timers::Timers;
use crate::world_setup;

/// RNG stream used for cosmetic particles, so effects never shift the spawn sequence.
const FX_RNG_STREAM: u64 = 1;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    run: RunState,
    rng: ChaCha8Rng,
    fx_rng: ChaCha8Rng,
    next_object_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    held_keys: HeldKeys,
    distance_accum_ms: u64,
    timers: Timers,
    high_score: u64,
    store: Box<dyn HighScoreStore>,
}

impl SimulationEngine {
    /// Create a new simulation engine with an in-memory high score.
    pub fn new(config: SimConfig) -> Self {
        Self::with_store(config, Box::new(MemoryHighScore::default()))
    }

    /// Create a new simulation engine backed by the given high score store.
    /// The stored value is read once here.
    pub fn with_store(config: SimConfig, store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load high score, starting from 0");
            0
        });

        let mut fx_rng = ChaCha8Rng::seed_from_u64(config.seed);
        fx_rng.set_stream(FX_RNG_STREAM);

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            run: RunState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            fx_rng,
            next_object_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            held_keys: HeldKeys::default(),
            distance_accum_ms: 0,
            timers: Timers::default(),
            high_score,
            store,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    pub fn start(&mut self) {
        self.queue_command(PlayerCommand::Start);
    }

    pub fn restart(&mut self) {
        self.queue_command(PlayerCommand::Restart);
    }

    pub fn set_car_target(&mut self, position: f64) {
        self.queue_command(PlayerCommand::SetCarTarget { position });
    }

    pub fn nudge_car(&mut self, direction: Direction) {
        self.queue_command(PlayerCommand::NudgeCar { direction });
    }

    pub fn hold_direction(&mut self, direction: Direction, pressed: bool) {
        self.queue_command(PlayerCommand::HoldDirection { direction, pressed });
    }

    pub fn activate_shield(&mut self) {
        self.queue_command(PlayerCommand::ActivateShield);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.run,
            &self.timers,
            self.high_score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current run state.
    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// Best score known to this session.
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an object directly on the road (for tests).
    #[cfg(test)]
    pub fn spawn_test_object(&mut self, kind: ObjectKind, x: f64, y: f64) -> u64 {
        self.spawn_object(SpawnDescriptor { kind, x, y })
    }

    /// Mutable run state (for tests that need a specific setup).
    #[cfg(test)]
    pub fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == GamePhase::Idle {
                    self.begin_run();
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.begin_run();
                }
            }
            command if self.phase != GamePhase::Running => {
                trace!(?command, phase = ?self.phase, "ignoring input outside a run");
            }
            PlayerCommand::SetCarTarget { position } => {
                systems::steering::set_target(&mut self.run, position);
            }
            PlayerCommand::NudgeCar { direction } => {
                systems::steering::nudge(&mut self.run, direction);
            }
            PlayerCommand::HoldDirection { direction, pressed } => {
                self.held_keys.set(direction, pressed);
            }
            PlayerCommand::ActivateShield => {
                let now = self.time.elapsed_ms;
                if systems::shield::try_activate(&mut self.run, &mut self.timers, now) {
                    self.events.push(GameEvent::ShieldActivated);
                }
            }
        }
    }

    /// Reset everything owned by a run and enter Running.
    fn begin_run(&mut self) {
        self.world.clear();
        self.run = RunState::started();
        self.time = SimTime::default();
        self.next_object_id = 0;
        self.held_keys.clear();
        self.distance_accum_ms = 0;
        self.timers.cancel_all();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::RunStarted);
        info!(high_score = self.high_score, "run started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_ms;

        // 1. Key-hold steering
        systems::steering::run(&mut self.run, &mut self.held_keys, TICK_MS);
        // 2. Distance, level, speed (slow cadence)
        systems::progression::run(
            &mut self.run,
            &mut self.distance_accum_ms,
            TICK_MS,
            &mut self.events,
        );
        // 3. Road scroll
        systems::movement::advance_road(&mut self.run);
        // 4. Object descent
        let step = systems::movement::object_step(&self.run);
        systems::movement::run(&mut self.world, step);
        // 5. Collision resolution
        systems::collision::run(
            &mut self.world,
            &mut self.run,
            &mut self.timers,
            &mut self.fx_rng,
            now,
            &mut self.events,
        );
        if self.run.lives == 0 {
            self.finish_run();
            return;
        }
        // 6. Cleanup (passed, finished animations)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Spawning
        let ctx = SpawnContext::from_run(&self.run);
        if let Some(descriptor) = systems::spawner::roll(&ctx, &mut self.rng) {
            self.spawn_object(descriptor);
        }
        // 8. Particles
        systems::particles::run(&mut self.world, &mut self.despawn_buffer);
        // 9. Timers (combo decay, shield expiry, shake)
        systems::timers::run(&mut self.run, &mut self.timers, now, &mut self.events);
    }

    /// Place a spawned object, consuming the shield gate if needed.
    fn spawn_object(&mut self, descriptor: SpawnDescriptor) -> u64 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        if descriptor.kind == ObjectKind::Shield {
            self.run.last_shield_spawn_distance = self.run.distance;
        }
        world_setup::spawn_object(
            &mut self.world,
            id,
            descriptor.kind,
            descriptor.x,
            descriptor.y,
        );
        id
    }

    /// Running → GameOver. Cancels every timer and records the high score.
    fn finish_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.run.game_over = true;
        self.run.shield_active = false;
        self.held_keys.clear();
        self.timers.cancel_all();

        let score = self.run.score;
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
            if let Err(e) = self.store.save(score) {
                warn!(error = %e, score, "failed to save high score");
            }
        }

        self.events.push(GameEvent::GameOver {
            score,
            new_high_score,
        });
        info!(
            score,
            distance = self.run.distance,
            max_combo = self.run.max_combo,
            new_high_score,
            "run finished"
        );
    }
}
