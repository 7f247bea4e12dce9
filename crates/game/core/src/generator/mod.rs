//! Random dungeon generation.
//!
//! Generation runs in four stages on a fresh grid:
//!
//! 1. fill every cell with wall;
//! 2. carve full-length corridor rows and columns ([`Passages`]);
//! 3. carve rooms that touch existing floor ([`Room`]);
//! 4. drop the hero, enemies, potions and swords on random floor cells.
//!
//! The same seed and configuration always produce the same map.

mod error;
mod passages;
mod placement;
mod rooms;

pub use error::GenerationError;
pub use passages::Passages;
pub use rooms::{Room, place_rooms};

use rand::Rng;

use crate::config::{CombatRules, GameConfig, GeneratorConfig};
use crate::state::{Grid, MapDimensions, Tile, World};

/// Result of a successful generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedMap {
    pub world: World,
    pub passages: Passages,
    /// Rooms in the order they were accepted.
    pub rooms: Vec<Room>,
    /// Carved grid before any entity was placed.
    pub layout: Grid,
}

#[derive(Clone, Debug)]
pub struct MapGenerator {
    dimensions: MapDimensions,
    config: GeneratorConfig,
    rules: CombatRules,
}

impl MapGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            dimensions: config.dimensions,
            config: config.generator.clone(),
            rules: config.rules.clone(),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedMap, GenerationError> {
        self.validate()?;

        let mut grid = Grid::new(self.dimensions, Tile::Wall);

        let passages = Passages::generate(
            rng,
            &grid,
            self.config.passage_rows,
            self.config.passage_columns,
        );
        passages.carve(&mut grid);

        let rooms = place_rooms(
            rng,
            &mut grid,
            self.config.room_count,
            self.config.room_size,
            self.config.max_room_attempts,
        )?;

        let layout = grid.clone();
        let (hero, enemies) = placement::place_entities(rng, &mut grid, &self.config, &self.rules)?;
        let world = World::from_parts(grid, hero, enemies)?;

        Ok(GeneratedMap {
            world,
            passages,
            rooms,
            layout,
        })
    }

    fn validate(&self) -> Result<(), GenerationError> {
        let config = &self.config;
        let invalid = |reason| Err(GenerationError::InvalidConfig { reason });

        if self.dimensions.width == 0 || self.dimensions.height == 0 {
            return invalid("map dimensions must be non-zero");
        }
        if !config.passage_rows.is_valid()
            || !config.passage_columns.is_valid()
            || !config.room_count.is_valid()
            || !config.room_size.is_valid()
        {
            return invalid("range minimum exceeds maximum");
        }
        if config.room_size.min == 0 {
            return invalid("rooms must be at least one cell wide");
        }
        if config.room_size.min > self.dimensions.width
            || config.room_size.min > self.dimensions.height
        {
            return invalid("minimum room size exceeds map dimensions");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountRange;
    use crate::rng::seeded;

    fn generate(seed: u64) -> GeneratedMap {
        MapGenerator::new(&GameConfig::default())
            .generate(&mut seeded(seed))
            .unwrap()
    }

    #[test]
    fn default_maps_hold_the_expected_population() {
        for seed in 0..20 {
            let map = generate(seed);
            let grid = map.world.grid();

            assert_eq!(grid.dimensions(), MapDimensions::new(40, 24));
            assert_eq!(grid.count(Tile::Hero), 1);
            assert_eq!(grid.count(Tile::Enemy), 10);
            assert_eq!(grid.count(Tile::Sword), 2);
            assert_eq!(grid.count(Tile::HealingPotion), 10);
            assert_eq!(map.world.enemies().len(), 10);
            assert!(map.world.check_invariants().is_ok());
        }
    }

    #[test]
    fn entities_sit_on_carved_floor() {
        for seed in 0..20 {
            let map = generate(seed);
            assert_eq!(map.layout.count(Tile::Wall), map.world.grid().count(Tile::Wall));
            for (position, tile) in map.world.grid().iter() {
                if tile != Tile::Wall {
                    assert_eq!(map.layout.get(position), Some(Tile::Floor), "{position}");
                }
            }
        }
    }

    #[test]
    fn rooms_fit_and_touch_earlier_floor() {
        for seed in 0..20 {
            let map = generate(seed);
            assert!((5..=10).contains(&map.rooms.len()));

            let mut replay = Grid::new(map.layout.dimensions(), Tile::Wall);
            map.passages.carve(&mut replay);
            for room in &map.rooms {
                assert!(room.fits(&replay));
                assert!(room.is_attached(&replay));
                room.carve(&mut replay);
            }
            assert_eq!(replay, map.layout);
        }
    }

    #[test]
    fn same_seed_same_map() {
        assert_eq!(generate(1234), generate(1234));
    }

    #[test]
    fn tiny_maps_fail_instead_of_hanging() {
        let config = GameConfig::default().with_dimensions(4, 4);
        let err = MapGenerator::new(&config)
            .generate(&mut seeded(3))
            .unwrap_err();

        assert!(matches!(err, GenerationError::NotEnoughFloor { required: 23, .. }));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let config = GameConfig::default().with_generator(GeneratorConfig {
            room_size: CountRange::new(8, 3),
            ..GeneratorConfig::default()
        });
        let err = MapGenerator::new(&config)
            .generate(&mut seeded(0))
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig { .. }));
    }

    #[test]
    fn hero_starts_with_full_health() {
        let map = generate(77);
        let hero = map.world.hero();
        assert_eq!(hero.health(), 100);
        assert_eq!(hero.attack_power(), 1);
        assert!(map.world.dimensions().contains(hero.position()));
    }
}
