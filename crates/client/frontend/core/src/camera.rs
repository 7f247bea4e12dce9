//! Viewport selection around the hero.

use game_core::{MapDimensions, Position};

use crate::config::CameraConfig;

/// Rectangular window of the map, in map coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Map position of the top-left visible cell.
    pub origin: Position,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn contains(&self, position: Position) -> bool {
        let dx = position.x - self.origin.x;
        let dy = position.y - self.origin.y;
        dx >= 0 && dy >= 0 && (dx as u32) < self.width && (dy as u32) < self.height
    }

    /// Screen cell `(column, row)` of a map position inside the viewport.
    pub fn to_screen(&self, position: Position) -> Option<(u16, u16)> {
        self.contains(position).then(|| {
            (
                (position.x - self.origin.x) as u16,
                (position.y - self.origin.y) as u16,
            )
        })
    }

    /// Map positions of visible row `row`, left to right.
    pub fn row_positions(&self, row: u32) -> impl Iterator<Item = Position> + '_ {
        let y = self.origin.y + row as i32;
        (0..self.width as i32).map(move |dx| Position::new(self.origin.x + dx, y))
    }
}

/// Follows the hero, keeping it centred until the window meets a map edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    width: u32,
    height: u32,
}

impl Camera {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Window of at most the camera size, centred on `focus` and clamped so
    /// it never extends past the map.
    pub fn viewport(&self, map: MapDimensions, focus: Position) -> Viewport {
        let width = self.width.min(map.width);
        let height = self.height.min(map.height);

        Viewport {
            origin: Position::new(
                axis_origin(focus.x, width, map.width),
                axis_origin(focus.y, height, map.height),
            ),
            width,
            height,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

fn axis_origin(focus: i32, size: u32, extent: u32) -> i32 {
    let max_origin = (extent - size) as i32;
    (focus - (size / 2) as i32).clamp(0, max_origin)
}
