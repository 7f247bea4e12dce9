//! Event types for different topics.

use game_core::{Tick, TickReport, World};
use serde::{Deserialize, Serialize};

/// Events describing world changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// A tick was resolved.
    TickResolved {
        report: TickReport,
        /// World after the tick, for rendering.
        snapshot: Box<World>,
    },
}

/// Events about the session as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// The hero died. The worker stops ticking.
    GameOver { tick: Tick },
    /// The world failed its consistency check and the worker stopped ticking.
    Halted { tick: Tick, reason: String },
}
