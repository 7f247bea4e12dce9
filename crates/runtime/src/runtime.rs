//! High-level runtime orchestrator.
//!
//! The runtime generates (or accepts) a world, spawns the simulation worker,
//! wires up command/event channels, and exposes a builder-based API.

use std::env;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{GameConfig, MapGenerator, World, rng};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for map generation and enemy movement. Random when unset.
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_MS: u64 = 100;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TILECRAWL_SEED` - RNG seed (default: random)
    /// - `TILECRAWL_TICK_MS` - Milliseconds per tick (default: 100)
    /// - `TILECRAWL_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `TILECRAWL_EVENT_BUFFER` - Events buffered per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("TILECRAWL_SEED") {
            config.seed = Some(seed);
        }
        if let Some(ms) = read_env::<u64>("TILECRAWL_TICK_MS") {
            config.tick_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(size) = read_env::<usize>("TILECRAWL_COMMAND_BUFFER") {
            config.command_buffer_size = size.max(1);
        }
        if let Some(size) = read_env::<usize>("TILECRAWL_EVENT_BUFFER") {
            config.event_buffer_size = size.max(1);
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            tick_interval: Duration::from_millis(Self::DEFAULT_TICK_MS),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that owns the simulation worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    seed: u64,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the session was started with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stops the worker and waits for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        // The worker may already be gone; joining below reports the outcome.
        let _ = self.handle.shutdown().await;

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    world: Option<World>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            world: None,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a prepared world instead of generating one.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Generates the dungeon if needed and spawns the simulation worker.
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = rng::seeded(seed);

        let world = match self.world {
            Some(world) => world,
            None => {
                let map = MapGenerator::new(&config.game_config).generate(&mut rng)?;
                info!(
                    seed,
                    rooms = map.rooms.len(),
                    passage_rows = map.passages.rows.len(),
                    passage_columns = map.passages.columns.len(),
                    "dungeon generated"
                );
                map.world
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(
            world,
            config.game_config.rules.clone(),
            rng,
            config.tick_interval,
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            seed,
            sim_worker_handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_pace() {
        let config = RuntimeConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.seed, None);
        assert_eq!(config.game_config, GameConfig::default());
    }

    #[test]
    fn with_seed_pins_the_seed() {
        assert_eq!(RuntimeConfig::default().with_seed(9).seed, Some(9));
    }
}
