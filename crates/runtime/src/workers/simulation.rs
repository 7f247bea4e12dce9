//! Simulation worker that owns the authoritative [`game_core::World`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), resolves one
//! tick per interval via [`GameEngine`], and publishes events to the EventBus.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use game_core::{CombatRules, GameEngine, GameRng, HeroCommand, World};

use crate::events::{Event, EventBus, GameStateEvent, LifecycleEvent};

/// Commands that can be sent to the simulation worker.
pub enum Command {
    /// Queue hero input for the next tick.
    Submit { command: HeroCommand },
    /// Query the current world (read-only).
    QueryState { reply: oneshot::Sender<World> },
    /// Stop the worker loop.
    Shutdown,
}

/// Background task that advances the world on a fixed interval.
///
/// Input is only queued between ticks; each tick runs to completion before
/// the next command is handled.
pub struct SimulationWorker {
    world: World,
    rules: CombatRules,
    rng: GameRng,
    tick_interval: Duration,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    ticking: bool,
}

impl SimulationWorker {
    pub fn new(
        world: World,
        rules: CombatRules,
        rng: GameRng,
        tick_interval: Duration,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            hero = %world.hero().position(),
            enemies = world.enemies().len(),
            tick_ms = tick_interval.as_millis() as u64,
            "SimulationWorker initialized"
        );

        let ticking = !world.is_game_over();
        Self {
            world,
            rules,
            rng,
            tick_interval,
            command_rx,
            event_bus,
            ticking,
        }
    }

    /// Main worker loop. Ends on shutdown or when every handle is dropped.
    pub async fn run(mut self) {
        let mut interval = time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the first game tick comes one
        // period after start.
        interval.tick().await;

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                _ = interval.tick(), if self.ticking => self.resolve_tick(),
            }
        }

        info!(tick = %self.world.tick(), "SimulationWorker stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Submit { command } => {
                self.world.push_hero_input(command);
            }
            Command::QueryState { reply } => {
                if reply.send(self.world.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    fn resolve_tick(&mut self) {
        let mut engine = GameEngine::new(&mut self.world, &self.rules);
        let report = match engine.tick(&mut self.rng) {
            Ok(report) => report,
            Err(err) => {
                error!(tick = %self.world.tick(), error = %err, "world invariant violated");
                self.ticking = false;
                self.event_bus
                    .publish(Event::Lifecycle(LifecycleEvent::Halted {
                        tick: self.world.tick(),
                        reason: err.to_string(),
                    }));
                return;
            }
        };

        debug!(
            tick = %report.tick,
            events = report.events.len(),
            health = self.world.hero().health(),
            "tick resolved"
        );

        let status = report.status;
        let tick = report.tick;
        self.event_bus
            .publish(Event::GameState(GameStateEvent::TickResolved {
                report,
                snapshot: Box::new(self.world.clone()),
            }));

        if status.is_over() {
            info!(%tick, "hero defeated");
            self.ticking = false;
            self.event_bus
                .publish(Event::Lifecycle(LifecycleEvent::GameOver { tick }));
        }
    }
}
