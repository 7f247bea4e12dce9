//! Map view types for grid rendering.

use game_core::{Tile, World};

use crate::camera::Viewport;

/// Visible slice of the map, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapView {
    pub viewport: Viewport,
    pub rows: Vec<Vec<Tile>>,
}

impl MapView {
    pub fn from_world(world: &World, viewport: Viewport) -> Self {
        let rows = (0..viewport.height)
            .map(|row| {
                viewport
                    .row_positions(row)
                    .map(|position| world.tile(position).unwrap_or(Tile::Wall))
                    .collect()
            })
            .collect();

        Self { viewport, rows }
    }

    /// Tile at screen cell `(column, row)`.
    pub fn tile_at(&self, column: usize, row: usize) -> Option<Tile> {
        self.rows.get(row)?.get(column).copied()
    }

    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    pub fn height(&self) -> u32 {
        self.viewport.height
    }
}
