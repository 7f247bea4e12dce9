use super::error::InvariantError;
use super::types::{Enemy, EnemyId, Grid, Hero, MapDimensions, Position, Tick, Tile};

/// Handle naming one movable entity in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityRef {
    Hero,
    Enemy(EnemyId),
}

impl EntityRef {
    /// Tile that marks this entity's cell on the grid.
    pub const fn occupancy_tile(self) -> Tile {
        match self {
            EntityRef::Hero => Tile::Hero,
            EntityRef::Enemy(_) => Tile::Enemy,
        }
    }
}

/// Authoritative game world: tile grid, hero, and enemy collection.
///
/// # Invariant
///
/// Between ticks, `grid[hero.position] == Tile::Hero` and
/// `grid[enemy.position] == Tile::Enemy` for every living enemy, and no other
/// cell holds a hero or enemy tile. [`World::move_entity`] is the only
/// operation that relocates an entity, and it updates both sides together.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    grid: Grid,
    hero: Hero,
    enemies: Vec<Enemy>,
    tick: Tick,
}

impl World {
    /// Assembles a world from pre-built parts and checks the occupancy invariant.
    pub fn from_parts(grid: Grid, hero: Hero, enemies: Vec<Enemy>) -> Result<Self, InvariantError> {
        let world = Self {
            grid,
            hero,
            enemies,
            tick: Tick::ZERO,
        };
        world.check_invariants()?;
        Ok(world)
    }

    /// Builds a world from glyph rows, deriving the hero and enemies from
    /// their tiles (enemies numbered in row-major order).
    ///
    /// Returns `None` if the rows do not parse or do not contain exactly one hero.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let grid = Grid::from_rows(rows)?;
        let hero = {
            let mut heroes = grid.positions_of(Tile::Hero);
            let hero = Hero::new(heroes.next()?);
            if heroes.next().is_some() {
                return None;
            }
            hero
        };
        let enemies: Vec<Enemy> = grid
            .positions_of(Tile::Enemy)
            .enumerate()
            .map(|(index, position)| Enemy::new(EnemyId(index as u32), position))
            .collect();

        Self::from_parts(grid, hero, enemies).ok()
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.grid.dimensions()
    }

    /// Tile at `position`, or `None` outside the grid.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.grid.get(position)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id.index())
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|enemy| enemy.is_alive())
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_game_over(&self) -> bool {
        !self.hero.is_alive()
    }

    /// Queues an input for the hero. It is considered on the next tick.
    pub fn push_hero_input(&mut self, command: crate::HeroCommand) {
        self.hero.push_input(command);
    }

    pub(crate) fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub(crate) fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.get_mut(id.index())
    }

    pub(crate) fn advance_tick(&mut self) -> Tick {
        self.tick = self.tick.next();
        self.tick
    }

    /// Relocates `entity` to `to`, updating grid and cached position together.
    ///
    /// The vacated cell becomes floor; whatever was at `to` is overwritten.
    /// Callers decide beforehand whether the destination may be entered.
    /// Returns the position the entity left.
    pub fn move_entity(
        &mut self,
        entity: EntityRef,
        to: Position,
    ) -> Result<Position, InvariantError> {
        if !self.grid.contains(to) {
            return Err(InvariantError::OutOfBounds { position: to });
        }

        let from = match entity {
            EntityRef::Hero => self.hero.position(),
            EntityRef::Enemy(id) => {
                let enemy = self
                    .enemy(id)
                    .ok_or(InvariantError::UnknownEnemy { enemy: id })?;
                if !enemy.is_alive() {
                    return Err(InvariantError::DeadEnemy { enemy: id });
                }
                enemy.position()
            }
        };

        self.grid
            .set(from, Tile::Floor)
            .ok_or(InvariantError::OutOfBounds { position: from })?;
        let _ = self.grid.set(to, entity.occupancy_tile());

        match entity {
            EntityRef::Hero => self.hero.set_position(to),
            EntityRef::Enemy(id) => {
                if let Some(enemy) = self.enemy_mut(id) {
                    enemy.set_position(to);
                }
            }
        }

        Ok(from)
    }

    /// Clears a slain enemy's cell to floor. The enemy stays in the collection.
    pub(crate) fn clear_enemy_cell(&mut self, id: EnemyId) {
        if let Some(position) = self.enemy(id).map(Enemy::position) {
            let _ = self.grid.set(position, Tile::Floor);
        }
    }

    /// Verifies that grid and entity records agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let hero_position = self.hero.position();
        match self.grid.get(hero_position) {
            Some(Tile::Hero) => {}
            found => {
                return Err(InvariantError::HeroTileMismatch {
                    position: hero_position,
                    found,
                });
            }
        }

        let hero_tiles = self.grid.count(Tile::Hero);
        if hero_tiles != 1 {
            return Err(InvariantError::TileCountMismatch {
                tile: Tile::Hero,
                expected: 1,
                found: hero_tiles,
            });
        }

        for (index, enemy) in self.enemies.iter().enumerate() {
            if enemy.id().index() != index {
                return Err(InvariantError::EnemyIdMismatch {
                    index,
                    enemy: enemy.id(),
                });
            }
            if !enemy.is_alive() {
                continue;
            }
            match self.grid.get(enemy.position()) {
                Some(Tile::Enemy) => {}
                found => {
                    return Err(InvariantError::EnemyTileMismatch {
                        enemy: enemy.id(),
                        position: enemy.position(),
                        found,
                    });
                }
            }
        }

        let living = self.living_enemies().count();
        let enemy_tiles = self.grid.count(Tile::Enemy);
        if enemy_tiles != living {
            return Err(InvariantError::TileCountMismatch {
                tile: Tile::Enemy,
                expected: living,
                found: enemy_tiles,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::from_rows(&[
            "#####", //
            "#@.e#", //
            "#..!#", //
            "#####",
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_derives_entities() {
        let world = world();
        assert_eq!(world.hero().position(), Position::new(1, 1));
        assert_eq!(world.enemies().len(), 1);
        assert_eq!(world.enemies()[0].position(), Position::new(3, 1));
        assert!(world.check_invariants().is_ok());
    }

    #[test]
    fn from_rows_requires_exactly_one_hero() {
        assert!(World::from_rows(&["..e"]).is_none());
        assert!(World::from_rows(&["@.@"]).is_none());

        let world = World::from_rows(&["e@e"]).unwrap();
        assert_eq!(world.enemies().len(), 2);
        assert_eq!(world.enemies()[1].id(), EnemyId(1));
    }

    #[test]
    fn move_entity_updates_grid_and_position_together() {
        let mut world = world();
        let from = world
            .move_entity(EntityRef::Hero, Position::new(2, 1))
            .unwrap();

        assert_eq!(from, Position::new(1, 1));
        assert_eq!(world.hero().position(), Position::new(2, 1));
        assert_eq!(world.tile(Position::new(1, 1)), Some(Tile::Floor));
        assert_eq!(world.tile(Position::new(2, 1)), Some(Tile::Hero));
        assert!(world.check_invariants().is_ok());
    }

    #[test]
    fn move_entity_rejects_out_of_bounds() {
        let mut world = world();
        let before = world.clone();
        let err = world
            .move_entity(EntityRef::Hero, Position::new(-1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            InvariantError::OutOfBounds {
                position: Position::new(-1, 1)
            }
        );
        assert_eq!(world, before);
    }

    #[test]
    fn detects_desynced_enemy() {
        let grid = Grid::from_rows(&["@.e"]).unwrap();
        let hero = Hero::new(Position::new(0, 0));
        let enemies = vec![Enemy::new(EnemyId(0), Position::new(1, 0))];

        let err = World::from_parts(grid, hero, enemies).unwrap_err();
        assert!(matches!(err, InvariantError::EnemyTileMismatch { .. }));
    }

    #[test]
    fn dead_enemies_need_no_tile() {
        let grid = Grid::from_rows(&["@.."]).unwrap();
        let hero = Hero::new(Position::new(0, 0));
        let enemies = vec![Enemy::new(EnemyId(0), Position::new(2, 0)).with_health(0)];

        let world = World::from_parts(grid, hero, enemies).unwrap();
        assert_eq!(world.living_enemies().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn world_round_trips_through_json() {
        let mut world = world();
        world.push_hero_input(crate::HeroCommand::Attack);

        let json = serde_json::to_string(&world).unwrap();
        let restored: World = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, world);
    }
}
