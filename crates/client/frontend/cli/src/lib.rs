//! Terminal UI frontend for tilecrawl.
//!
//! `CliFrontend` implements [`client_frontend_core::Frontend`]. It receives a
//! `RuntimeHandle`, subscribes to tick and lifecycle events, turns key presses
//! into hero commands, and draws a camera window of the dungeon with ratatui.
//! It never owns the runtime.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
