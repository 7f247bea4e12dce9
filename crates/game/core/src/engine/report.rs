use crate::state::{EnemyId, EntityRef, Pickup, Position, Tick, Tile};

/// Whether play continues after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Running,
    /// The hero's health dropped to zero or below.
    Defeat,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Defeat)
    }
}

/// Something observable that happened during a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickEvent {
    HeroMoved {
        from: Position,
        to: Position,
    },
    ItemPickedUp {
        item: Pickup,
        position: Position,
    },
    AttackPowerRaised {
        attack_power: i32,
    },
    HeroHealed {
        amount: i32,
        health: i32,
    },
    /// The hero swung; `hits` living enemies were in reach.
    HeroAttacked {
        hits: usize,
    },
    EnemyDamaged {
        enemy: EnemyId,
        damage: i32,
        remaining: i32,
    },
    EnemySlain {
        enemy: EnemyId,
        position: Position,
    },
    HeroDamaged {
        enemy: EnemyId,
        damage: i32,
        remaining: i32,
    },
    EnemyMoved {
        enemy: EnemyId,
        from: Position,
        to: Position,
    },
    /// A move was not taken. `blocker` is `None` when the target lies off the map.
    MoveBlocked {
        entity: EntityRef,
        target: Position,
        blocker: Option<Tile>,
    },
}

/// Outcome of one tick.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Tick number after resolution.
    pub tick: Tick,
    pub events: Vec<TickEvent>,
    pub status: GameStatus,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
