//! Frontend configuration structures and loaders.
//!
//! UI settings shared by every frontend implementation.

use std::env;

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub camera: CameraConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(camera: CameraConfig, messages: MessageConfig) -> Self {
        Self { camera, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TILECRAWL_CAMERA_WIDTH` - Visible columns (default: 21)
    /// - `TILECRAWL_CAMERA_HEIGHT` - Visible rows (default: 13)
    /// - `TILECRAWL_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `TILECRAWL_SHOW_MOVEMENT_MESSAGES` - Log hero steps (default: false)
    /// - `TILECRAWL_SHOW_BLOCKED_MESSAGES` - Log bumps into walls (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u32>("TILECRAWL_CAMERA_WIDTH") {
            config.camera.width = width.max(1);
        }
        if let Some(height) = read_env::<u32>("TILECRAWL_CAMERA_HEIGHT") {
            config.camera.height = height.max(1);
        }

        if let Some(capacity) = read_env::<usize>("TILECRAWL_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("TILECRAWL_SHOW_MOVEMENT_MESSAGES") {
            config.messages.show_movement = show;
        }
        if let Some(show) = read_env_bool("TILECRAWL_SHOW_BLOCKED_MESSAGES") {
            config.messages.show_blocked = show;
        }

        config
    }
}

/// Size of the window onto the map, in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 13,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Hero steps are visible on the map; logging them is noisy.
    pub show_movement: bool,
    pub show_blocked: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_movement: false,
            show_blocked: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
