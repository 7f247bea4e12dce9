//! Services that keep frontend state in step with runtime events.

mod updater;

pub use updater::{UpdateScope, ViewModelUpdater};
