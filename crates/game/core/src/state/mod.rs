//! Authoritative game state representation.
//!
//! The [`World`] owns the tile grid together with the hero and enemy records.
//! Runtime layers clone or query it but mutate it only through the engine.
mod error;
pub mod types;
mod world;

pub use error::InvariantError;
pub use types::{Enemy, EnemyId, Grid, Hero, MapDimensions, Pickup, Position, Tick, Tile};
pub use world::{EntityRef, World};
