//! Event handling for the CLI client.
//!
//! The event loop coordinates runtime events, keyboard input, and redraws;
//! the consumer turns runtime events into message log entries.

mod consumer;
mod r#loop;

pub use consumer::CliEventConsumer;
pub use r#loop::EventLoop;
