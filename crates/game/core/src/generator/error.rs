use crate::error::{ErrorSeverity, GameError};
use crate::state::{InvariantError, Tile};

/// Reasons map generation can fail.
///
/// Every rejection-sampling loop in the generator is capped, so a map that
/// cannot be built yields one of these instead of spinning forever.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid generator configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("placed {placed} of {target} rooms before giving up after {attempts} attempts")]
    RoomAttemptsExhausted {
        placed: u32,
        target: u32,
        attempts: u32,
    },

    #[error("no free floor found for {tile:?} after {attempts} attempts")]
    PlacementAttemptsExhausted { tile: Tile, attempts: u32 },

    #[error("{available} floor cells left but {required} entities still to place")]
    NotEnoughFloor { required: u32, available: usize },

    #[error("generated world is inconsistent: {0}")]
    Invariant(#[from] InvariantError),
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig { .. } | Self::NotEnoughFloor { .. } => ErrorSeverity::Validation,
            Self::RoomAttemptsExhausted { .. } | Self::PlacementAttemptsExhausted { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::Invariant(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "GEN_INVALID_CONFIG",
            Self::RoomAttemptsExhausted { .. } => "GEN_ROOM_ATTEMPTS_EXHAUSTED",
            Self::PlacementAttemptsExhausted { .. } => "GEN_PLACEMENT_ATTEMPTS_EXHAUSTED",
            Self::NotEnoughFloor { .. } => "GEN_NOT_ENOUGH_FLOOR",
            Self::Invariant(inner) => inner.error_code(),
        }
    }
}
