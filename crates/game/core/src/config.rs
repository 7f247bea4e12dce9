//! Gameplay constants and tunable parameters.
//!
//! Defaults reproduce the classic layout: a 40×24 map, a handful of corridors,
//! 5 to 10 rooms, ten enemies, ten potions and two swords.

use crate::state::MapDimensions;

/// Inclusive integer range used for random counts and sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Top-level game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub dimensions: MapDimensions,
    pub generator: GeneratorConfig,
    pub rules: CombatRules,
}

impl GameConfig {
    pub const DEFAULT_WIDTH: u32 = 40;
    pub const DEFAULT_HEIGHT: u32 = 24;

    pub fn new() -> Self {
        Self {
            dimensions: MapDimensions::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            generator: GeneratorConfig::default(),
            rules: CombatRules::default(),
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = MapDimensions::new(width, height);
        self
    }

    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_rules(mut self, rules: CombatRules) -> Self {
        self.rules = rules;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the map generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of full-width corridor rows.
    pub passage_rows: CountRange,
    /// Number of full-height corridor columns.
    pub passage_columns: CountRange,
    pub room_count: CountRange,
    /// Room width and height, in cells.
    pub room_size: CountRange,
    pub enemy_count: u32,
    pub potion_count: u32,
    pub sword_count: u32,
    /// Candidate rectangles tried before room placement gives up.
    pub max_room_attempts: u32,
    /// Random cells sampled per entity before placement gives up.
    pub max_placement_attempts: u32,
}

impl GeneratorConfig {
    pub const DEFAULT_ENEMY_COUNT: u32 = 10;
    pub const DEFAULT_POTION_COUNT: u32 = 10;
    pub const DEFAULT_SWORD_COUNT: u32 = 2;
    pub const DEFAULT_MAX_ROOM_ATTEMPTS: u32 = 10_000;
    pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    pub fn new() -> Self {
        Self {
            passage_rows: CountRange::new(3, 5),
            passage_columns: CountRange::new(3, 5),
            room_count: CountRange::new(5, 10),
            room_size: CountRange::new(3, 8),
            enemy_count: Self::DEFAULT_ENEMY_COUNT,
            potion_count: Self::DEFAULT_POTION_COUNT,
            sword_count: Self::DEFAULT_SWORD_COUNT,
            max_room_attempts: Self::DEFAULT_MAX_ROOM_ATTEMPTS,
            max_placement_attempts: Self::DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Total number of entities placed after carving: hero, enemies and items.
    pub const fn entity_count(&self) -> u32 {
        1 + self.enemy_count + self.potion_count + self.sword_count
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Combat and item numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatRules {
    pub max_health: i32,
    /// Damage dealt by the hero per point of attack power.
    pub damage_per_attack_power: i32,
    pub enemy_damage: i32,
    pub potion_heal: i32,
    /// Enemies act once every `enemy_cooldown` ticks.
    pub enemy_cooldown: u32,
}

impl CombatRules {
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_HERO_ATTACK_POWER: i32 = 1;
    pub const DEFAULT_DAMAGE_PER_ATTACK_POWER: i32 = 10;
    pub const DEFAULT_ENEMY_DAMAGE: i32 = 10;
    pub const DEFAULT_POTION_HEAL: i32 = 50;
    pub const DEFAULT_ENEMY_COOLDOWN: u32 = 10;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            damage_per_attack_power: Self::DEFAULT_DAMAGE_PER_ATTACK_POWER,
            enemy_damage: Self::DEFAULT_ENEMY_DAMAGE,
            potion_heal: Self::DEFAULT_POTION_HEAL,
            enemy_cooldown: Self::DEFAULT_ENEMY_COOLDOWN,
        }
    }

    pub fn hero_damage(&self, attack_power: i32) -> i32 {
        self.damage_per_attack_power * attack_power
    }
}

impl Default for CombatRules {
    fn default() -> Self {
        Self::new()
    }
}
