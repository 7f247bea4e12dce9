//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! - Runtime events update the message log (via the consumer) and the
//!   [`ViewModel`] (via [`ViewModelUpdater`]).
//! - Key presses become hero commands submitted through the handle.
//! - Once the session ends the loop shows the defeat screen and exits on the
//!   next key press.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use tokio::{
    sync::broadcast::{self, error::RecvError},
    time::{self, Duration},
};

use client_frontend_core::{Camera, EventConsumer, ViewModelUpdater, view_model::ViewModel};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction},
    presentation::{terminal::Tui, ui},
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Waits for the next runtime event.
///
/// Game-state events take priority: the worker publishes the final tick before
/// the game-over event, and the defeat screen must show that tick.
async fn next_runtime_event(
    game_rx: &mut broadcast::Receiver<RuntimeEvent>,
    lifecycle_rx: &mut broadcast::Receiver<RuntimeEvent>,
) -> (Topic, Result<RuntimeEvent, RecvError>) {
    tokio::select! {
        biased;
        result = game_rx.recv() => (Topic::GameState, result),
        result = lifecycle_rx.recv() => (Topic::Lifecycle, result),
    }
}

/// Whether the loop keeps running after handling something.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct EventLoop<C>
where
    C: EventConsumer,
{
    handle: RuntimeHandle,
    input: InputHandler,
    consumer: C,
    /// Presentation state, updated incrementally from tick snapshots.
    view_model: ViewModel,
    camera: Camera,
    max_health: i32,
    cli_config: CliConfig,
    /// Set once the hero has died or the runtime halted.
    finished: bool,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        consumer: C,
        view_model: ViewModel,
        camera: Camera,
        max_health: i32,
        cli_config: CliConfig,
    ) -> Self {
        let finished = view_model.status.is_over();
        Self {
            handle,
            input: InputHandler::new(),
            consumer,
            view_model,
            camera,
            max_health,
            cli_config,
            finished,
        }
    }

    /// Runs until the user quits or dismisses the defeat screen.
    ///
    /// `game_rx` and `lifecycle_rx` must be subscribed before the initial
    /// state was queried so that no tick falls between the two.
    pub async fn run(
        mut self,
        terminal: &mut Tui,
        mut game_rx: broadcast::Receiver<RuntimeEvent>,
        mut lifecycle_rx: broadcast::Receiver<RuntimeEvent>,
    ) -> Result<C> {
        self.render(terminal)?;

        loop {
            let flow = tokio::select! {
                (topic, result) = next_runtime_event(&mut game_rx, &mut lifecycle_rx),
                    if !self.finished =>
                {
                    self.handle_runtime_event(result, topic, terminal)?
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    self.handle_input_tick(terminal).await?
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        Ok(self.consumer)
    }

    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        topic: Topic,
        terminal: &mut Tui,
    ) -> Result<Flow> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                let scope = ViewModelUpdater::update(
                    &mut self.view_model,
                    &event,
                    &self.camera,
                    self.max_health,
                );

                if impact.game_over {
                    tracing::info!(tick = %self.view_model.tick, "session over");
                    self.finished = true;
                }
                if impact.requires_redraw || !scope.is_empty() {
                    self.render(terminal)?;
                }
                Ok(Flow::Continue)
            }
            Err(RecvError::Closed) => {
                tracing::warn!(?topic, "event stream closed");
                Ok(Flow::Exit)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(?topic, skipped, "dropped stale events");
                Ok(Flow::Continue)
            }
        }
    }

    /// Polls the terminal without blocking and reacts to at most one event.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<Flow> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(Flow::Continue);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<Flow> {
        if self.finished {
            return Ok(Flow::Exit);
        }

        match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.consumer
                    .message_log_mut()
                    .push_text(format!("[{}] Quitting...", self.view_model.tick));
                self.render(terminal)?;
                Ok(Flow::Exit)
            }
            KeyAction::Submit(command) => {
                tracing::debug!(?command, "submitting hero input");
                if let Err(error) = self.handle.submit(command).await {
                    tracing::error!("failed to submit input: {error}");
                    return Ok(Flow::Exit);
                }
                Ok(Flow::Continue)
            }
            KeyAction::None => Ok(Flow::Continue),
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            messages: self.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
