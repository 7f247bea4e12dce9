//! Hero actions.
//!
//! Each action describes one thing the hero can do during a tick and knows how
//! to apply itself to a [`World`]. Gameplay boundary conditions (walls, map
//! edges, empty reach) are outcomes, not errors; the only error is a broken
//! grid/entity invariant.

mod combat;
mod movement;

pub use combat::{AttackAction, AttackOutcome, Hit};
pub use movement::{MoveAction, MoveOutcome, PickupEffect};

use crate::config::CombatRules;
use crate::engine::TickEvent;
use crate::state::{InvariantError, World};

/// One of the four grid directions. `North` is up, toward row 0.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    /// Unit offset `(dx, dy)` with `y` growing downward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::West => (-1, 0),
        }
    }
}

/// Input the player can queue for the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroCommand {
    Move(CardinalDirection),
    Attack,
}

/// Defines how a hero action mutates the world.
pub trait ActionTransition {
    type Outcome;

    fn apply(&self, world: &mut World, rules: &CombatRules)
    -> Result<Self::Outcome, InvariantError>;
}

impl HeroCommand {
    /// Applies the command and appends what happened to `events`.
    pub fn resolve(
        self,
        world: &mut World,
        rules: &CombatRules,
        events: &mut Vec<TickEvent>,
    ) -> Result<(), InvariantError> {
        match self {
            HeroCommand::Move(direction) => {
                MoveAction::new(direction)
                    .apply(world, rules)?
                    .record(events);
            }
            HeroCommand::Attack => {
                AttackAction.apply(world, rules)?.record(events);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    #[test]
    fn north_points_toward_row_zero() {
        let (dx, dy) = CardinalDirection::North.delta();
        assert_eq!(Position::new(3, 3).offset(dx, dy), Position::new(3, 2));
    }

    #[test]
    fn opposite_directions_cancel() {
        let (nx, ny) = CardinalDirection::North.delta();
        let (sx, sy) = CardinalDirection::South.delta();
        let (ex, ey) = CardinalDirection::East.delta();
        let (wx, wy) = CardinalDirection::West.delta();
        assert_eq!((nx + sx, ny + sy), (0, 0));
        assert_eq!((ex + wx, ey + wy), (0, 0));
    }
}
