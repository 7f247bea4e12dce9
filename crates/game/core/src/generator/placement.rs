use rand::Rng;

use crate::config::{CombatRules, GeneratorConfig};
use crate::rng::random_position;
use crate::state::{Enemy, EnemyId, Grid, Hero, Position, Tile};

use super::GenerationError;

/// Places the hero, then enemies, potions and swords, each on a random floor cell.
///
/// Every placement consumes exactly one floor cell, so the floor supply is
/// checked once up front.
pub(super) fn place_entities<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    config: &GeneratorConfig,
    rules: &CombatRules,
) -> Result<(Hero, Vec<Enemy>), GenerationError> {
    let required = config.entity_count();
    let available = grid.count(Tile::Floor);
    if available < required as usize {
        return Err(GenerationError::NotEnoughFloor {
            required,
            available,
        });
    }

    let attempts = config.max_placement_attempts;

    let hero = Hero::new(place_on_floor(rng, grid, Tile::Hero, attempts)?)
        .with_health(rules.max_health);

    let enemies = (0..config.enemy_count)
        .map(|index| {
            let position = place_on_floor(rng, grid, Tile::Enemy, attempts)?;
            Ok(Enemy::new(EnemyId(index), position).with_health(rules.max_health))
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    for _ in 0..config.potion_count {
        place_on_floor(rng, grid, Tile::HealingPotion, attempts)?;
    }
    for _ in 0..config.sword_count {
        place_on_floor(rng, grid, Tile::Sword, attempts)?;
    }

    Ok((hero, enemies))
}

fn place_on_floor<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    tile: Tile,
    max_attempts: u32,
) -> Result<Position, GenerationError> {
    for _ in 0..max_attempts {
        let position = random_position(rng, grid.dimensions());
        if grid.get(position) == Some(Tile::Floor) {
            grid.set(position, tile);
            return Ok(position);
        }
    }
    Err(GenerationError::PlacementAttemptsExhausted {
        tile,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::state::MapDimensions;

    #[test]
    fn fills_only_floor_cells() {
        let mut grid = Grid::new(MapDimensions::new(12, 12), Tile::Wall);
        grid.fill_rect(Position::new(2, 2), Position::new(9, 9), Tile::Floor);
        let layout = grid.clone();

        let mut rng = seeded(4);
        let (hero, enemies) = place_entities(
            &mut rng,
            &mut grid,
            &GeneratorConfig::default(),
            &CombatRules::default(),
        )
        .unwrap();

        assert_eq!(grid.get(hero.position()), Some(Tile::Hero));
        assert_eq!(enemies.len(), 10);
        for (position, tile) in grid.iter() {
            if tile != Tile::Wall {
                assert_eq!(layout.get(position), Some(Tile::Floor));
            }
        }
        assert_eq!(grid.count(Tile::HealingPotion), 10);
        assert_eq!(grid.count(Tile::Sword), 2);
    }

    #[test]
    fn rejects_maps_without_room_for_everyone() {
        let mut grid = Grid::new(MapDimensions::new(4, 4), Tile::Floor);
        let mut rng = seeded(0);
        let err = place_entities(
            &mut rng,
            &mut grid,
            &GeneratorConfig::default(),
            &CombatRules::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            GenerationError::NotEnoughFloor {
                required: 23,
                available: 16,
            }
        );
    }

    fn hero_only() -> GeneratorConfig {
        GeneratorConfig {
            enemy_count: 0,
            potion_count: 0,
            sword_count: 0,
            max_placement_attempts: 1,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn gives_up_after_max_placement_attempts() {
        let dimensions = MapDimensions::new(40, 40);
        let rng = seeded(1);
        let first_sample = random_position(&mut rng.clone(), dimensions);
        let floor = if first_sample == Position::new(0, 0) {
            Position::new(1, 0)
        } else {
            Position::new(0, 0)
        };

        let mut grid = Grid::new(dimensions, Tile::Wall);
        grid.set(floor, Tile::Floor);
        let before = grid.clone();

        let err = place_entities(
            &mut rng.clone(),
            &mut grid,
            &hero_only(),
            &CombatRules::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            GenerationError::PlacementAttemptsExhausted {
                tile: Tile::Hero,
                attempts: 1,
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn places_on_the_first_floor_sample() {
        let dimensions = MapDimensions::new(40, 40);
        let rng = seeded(1);
        let first_sample = random_position(&mut rng.clone(), dimensions);

        let mut grid = Grid::new(dimensions, Tile::Wall);
        grid.set(first_sample, Tile::Floor);

        let (hero, enemies) = place_entities(
            &mut rng.clone(),
            &mut grid,
            &hero_only(),
            &CombatRules::default(),
        )
        .unwrap();

        assert_eq!(hero.position(), first_sample);
        assert!(enemies.is_empty());
        assert_eq!(grid.get(first_sample), Some(Tile::Hero));
    }
}
