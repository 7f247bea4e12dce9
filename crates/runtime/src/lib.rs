//! Runtime orchestration for the dungeon simulation.
//!
//! The runtime owns the authoritative [`game_core::World`] inside a background
//! worker that resolves one tick per interval. Consumers embed [`Runtime`],
//! send hero input through [`RuntimeHandle`], and subscribe to topic-based
//! events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, GameStateEvent, LifecycleEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
