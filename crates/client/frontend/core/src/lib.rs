//! Cross-frontend primitives for presenting the game.
//!
//! Houses the camera, message logging, event handling, and view-model types
//! that the terminal client and any future graphical client can reuse.
pub mod camera;
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod services;
pub mod view_model;

pub use camera::{Camera, Viewport};
pub use config::{CameraConfig, FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use services::{UpdateScope, ViewModelUpdater};
pub use view_model::{PresentationMapper, ViewModel};
