//! Plain data types that make up the world: coordinates, tiles, the grid,
//! and the hero and enemy records.
mod common;
mod entities;
mod grid;
mod tile;

pub use common::{EnemyId, MapDimensions, Position, Tick};
pub use entities::{Enemy, Hero};
pub use grid::Grid;
pub use tile::{Pickup, Tile};
