/// Contents of a single grid cell.
///
/// The grid is the single source of truth for what occupies a cell. Items have
/// no object of their own; a sword or potion exists only as its tile.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Hero,
    Enemy,
    Sword,
    HealingPotion,
}

/// Item that the hero collects by stepping onto its tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Pickup {
    Sword,
    HealingPotion,
}

impl Tile {
    /// Tiles the hero may step onto. Pickups are consumed on entry.
    pub const fn is_enterable_by_hero(self) -> bool {
        matches!(self, Tile::Floor | Tile::Sword | Tile::HealingPotion)
    }

    /// Enemies only wander onto bare floor.
    pub const fn is_enterable_by_enemy(self) -> bool {
        matches!(self, Tile::Floor)
    }

    pub const fn pickup(self) -> Option<Pickup> {
        match self {
            Tile::Sword => Some(Pickup::Sword),
            Tile::HealingPotion => Some(Pickup::HealingPotion),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl Pickup {
    pub const fn tile(self) -> Tile {
        match self {
            Pickup::Sword => Tile::Sword,
            Pickup::HealingPotion => Tile::HealingPotion,
        }
    }
}
