//! Deterministic game logic and data types for a tile dungeon crawler.
//!
//! `game-core` defines the world ([`World`]), the map generator
//! ([`MapGenerator`]) and the per-tick rules ([`GameEngine`]). It performs no
//! I/O; callers supply the random number generator, which keeps every run
//! reproducible from its seed.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod rng;
pub mod state;

pub use action::{
    ActionTransition, AttackAction, AttackOutcome, CardinalDirection, HeroCommand, Hit, MoveAction,
    MoveOutcome, PickupEffect,
};
pub use config::{CombatRules, CountRange, GameConfig, GeneratorConfig};
pub use engine::{GameEngine, GameStatus, TickEvent, TickReport};
pub use error::{ErrorSeverity, GameError};
pub use generator::{GeneratedMap, GenerationError, MapGenerator, Passages, Room};
pub use rng::{GameRng, random_int};
pub use state::{
    Enemy, EnemyId, EntityRef, Grid, Hero, InvariantError, MapDimensions, Pickup, Position, Tick,
    Tile, World,
};
