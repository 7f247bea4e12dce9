//! State consistency errors.
//!
//! The grid and the entities both record where the hero and enemies stand.
//! These errors describe the ways the two records can disagree.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EnemyId, Position, Tile};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantError {
    #[error("position {position} is outside the grid")]
    OutOfBounds { position: Position },

    #[error("hero at {position} but grid holds {found:?}")]
    HeroTileMismatch {
        position: Position,
        found: Option<Tile>,
    },

    #[error("enemy {enemy} at {position} but grid holds {found:?}")]
    EnemyTileMismatch {
        enemy: EnemyId,
        position: Position,
        found: Option<Tile>,
    },

    #[error("grid holds {found} {tile:?} tiles, expected {expected}")]
    TileCountMismatch {
        tile: Tile,
        expected: usize,
        found: usize,
    },

    #[error("enemy stored at index {index} carries id {enemy}")]
    EnemyIdMismatch { index: usize, enemy: EnemyId },

    #[error("no enemy with id {enemy}")]
    UnknownEnemy { enemy: EnemyId },

    #[error("enemy {enemy} is dead and cannot move")]
    DeadEnemy { enemy: EnemyId },
}

impl GameError for InvariantError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } | Self::UnknownEnemy { .. } | Self::DeadEnemy { .. } => {
                ErrorSeverity::Internal
            }
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "STATE_OUT_OF_BOUNDS",
            Self::HeroTileMismatch { .. } => "STATE_HERO_TILE_MISMATCH",
            Self::EnemyTileMismatch { .. } => "STATE_ENEMY_TILE_MISMATCH",
            Self::TileCountMismatch { .. } => "STATE_TILE_COUNT_MISMATCH",
            Self::EnemyIdMismatch { .. } => "STATE_ENEMY_ID_MISMATCH",
            Self::UnknownEnemy { .. } => "STATE_UNKNOWN_ENEMY",
            Self::DeadEnemy { .. } => "STATE_DEAD_ENEMY",
        }
    }
}
