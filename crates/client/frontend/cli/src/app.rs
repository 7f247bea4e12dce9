//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;

use game_core::CombatRules;
use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{
    Camera, Frontend, FrontendConfig, message::MessageLog, view_model::ViewModel,
};

/// Terminal frontend. Owns configuration only; the runtime lives elsewhere.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    /// Health that counts as 100% on health bars.
    max_health: i32,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
            max_health: CombatRules::DEFAULT_MAX_HEALTH,
        }
    }

    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting");

        // Subscribe before querying so no tick slips between the snapshot and the stream.
        let mut subscriptions = handle.subscribe_multiple(&[Topic::GameState, Topic::Lifecycle]);
        let game_rx = subscriptions
            .remove(&Topic::GameState)
            .context("missing game state subscription")?;
        let lifecycle_rx = subscriptions
            .remove(&Topic::Lifecycle)
            .context("missing lifecycle subscription")?;

        let world = handle
            .query_state()
            .await
            .context("failed to query initial world")?;

        let camera = Camera::from_config(&self.frontend_config.camera);
        let view_model = ViewModel::from_world(&world, &camera, self.max_health);

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text(format!(
            "[{}] You enter the dungeon. WASD or arrows to move, Space to attack, Q to quit.",
            world.tick()
        ));
        let consumer = CliEventConsumer::new(messages, self.frontend_config.messages.clone());

        let event_loop = EventLoop::new(
            handle,
            consumer,
            view_model,
            camera,
            self.max_health,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal, game_rx, lifecycle_rx).await;

        terminal::restore()?;
        tracing::info!("CLI frontend stopped");

        result.map(|_| ())
    }
}
