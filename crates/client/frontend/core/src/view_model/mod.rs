//! View-model snapshots derived from a [`game_core::World`].

mod map;
mod presentation;

pub use map::MapView;
pub use presentation::PresentationMapper;

use game_core::{EnemyId, GameStatus, Position, Tick, World};

use crate::camera::Camera;

/// Everything a frontend needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub tick: Tick,
    pub status: GameStatus,
    pub map: MapView,
    pub hero: HeroView,
    /// Living enemies inside the viewport.
    pub visible_enemies: Vec<EnemyView>,
    pub living_enemies: usize,
}

impl ViewModel {
    pub fn from_world(world: &World, camera: &Camera, max_health: i32) -> Self {
        let hero = world.hero();
        let viewport = camera.viewport(world.dimensions(), hero.position());

        let visible_enemies = world
            .living_enemies()
            .filter(|enemy| viewport.contains(enemy.position()))
            .map(|enemy| EnemyView {
                id: enemy.id(),
                position: enemy.position(),
                health: enemy.health(),
                max_health,
            })
            .collect();

        Self {
            tick: world.tick(),
            status: if world.is_game_over() {
                GameStatus::Defeat
            } else {
                GameStatus::Running
            },
            map: MapView::from_world(world, viewport),
            hero: HeroView {
                position: hero.position(),
                health: hero.health(),
                max_health,
                attack_power: hero.attack_power(),
            },
            visible_enemies,
            living_enemies: world.living_enemies().count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
}

impl HeroView {
    pub fn health_percent(&self) -> u8 {
        health_percent(self.health, self.max_health)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}

impl EnemyView {
    pub fn health_percent(&self) -> u8 {
        health_percent(self.health, self.max_health)
    }
}

/// Health as a whole percentage of `max`, clamped to `0..=100`.
pub fn health_percent(health: i32, max: i32) -> u8 {
    if max <= 0 {
        return 0;
    }
    (health.clamp(0, max) * 100 / max) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Tile;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(health_percent(50, 100), 50);
        assert_eq!(health_percent(-10, 100), 0);
        assert_eq!(health_percent(150, 100), 100);
        assert_eq!(health_percent(10, 0), 0);
    }

    #[test]
    fn only_visible_living_enemies_are_listed() {
        let row = format!("@..e{}e", ".".repeat(30));
        let world = World::from_rows(&[row.as_str()]).unwrap();

        let view = ViewModel::from_world(&world, &Camera::new(21, 13), 100);

        assert_eq!(view.living_enemies, 2);
        assert_eq!(view.visible_enemies.len(), 1);
        assert_eq!(view.visible_enemies[0].id, EnemyId(0));
        assert_eq!(view.map.tile_at(0, 0), Some(Tile::Hero));
        assert_eq!(view.status, GameStatus::Running);
    }
}
