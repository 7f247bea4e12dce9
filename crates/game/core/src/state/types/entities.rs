use std::collections::VecDeque;

use crate::action::HeroCommand;
use crate::config::CombatRules;

use super::{EnemyId, Position};

/// The player character.
///
/// Position is cached here and mirrored by a [`Tile::Hero`](super::Tile::Hero)
/// cell on the grid; only [`World::move_entity`](crate::World::move_entity)
/// changes it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    position: Position,
    health: i32,
    attack_power: i32,
    /// Inputs queued since the last tick, oldest first.
    pending: VecDeque<HeroCommand>,
}

impl Hero {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: CombatRules::DEFAULT_MAX_HEALTH,
            attack_power: CombatRules::DEFAULT_HERO_ATTACK_POWER,
            pending: VecDeque::new(),
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_attack_power(mut self, attack_power: i32) -> Self {
        self.attack_power = attack_power;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Number of inputs waiting for the next tick.
    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    /// Appends an input to the back of the queue.
    pub fn push_input(&mut self, command: HeroCommand) {
        self.pending.push_back(command);
    }

    /// Takes the oldest queued input and discards everything queued after it.
    ///
    /// At most one input is acted on per tick; extra key presses between two
    /// ticks are dropped rather than replayed on later ticks.
    pub fn take_input(&mut self) -> Option<HeroCommand> {
        let oldest = self.pending.pop_front();
        self.pending.clear();
        oldest
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Restores health up to `max_health` and returns the amount actually gained.
    pub(crate) fn heal(&mut self, amount: i32, max_health: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount).min(max_health);
        self.health - before
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub(crate) fn upgrade_attack_power(&mut self) {
        self.attack_power += 1;
    }
}

/// A wandering monster.
///
/// Dead enemies stay in the world's collection so their [`EnemyId`] remains
/// stable; they no longer act, occupy a cell, or get drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    id: EnemyId,
    position: Position,
    health: i32,
    /// Ticks elapsed since this enemy last acted.
    cooldown: u32,
}

impl Enemy {
    pub fn new(id: EnemyId, position: Position) -> Self {
        Self {
            id,
            position,
            health: CombatRules::DEFAULT_MAX_HEALTH,
            cooldown: 0,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Counts one more tick of waiting. Returns true once `threshold` is reached.
    pub(crate) fn advance_cooldown(&mut self, threshold: u32) -> bool {
        self.cooldown += 1;
        self.cooldown >= threshold
    }

    pub(crate) fn reset_cooldown(&mut self) {
        self.cooldown = 0;
    }

    /// Applies damage and returns true if this hit killed the enemy.
    pub(crate) fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.health -= amount;
        was_alive && !self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CardinalDirection;

    #[test]
    fn take_input_keeps_oldest_and_drops_the_rest() {
        let mut hero = Hero::new(Position::ORIGIN);
        hero.push_input(HeroCommand::Move(CardinalDirection::East));
        hero.push_input(HeroCommand::Attack);
        hero.push_input(HeroCommand::Move(CardinalDirection::South));

        assert_eq!(
            hero.take_input(),
            Some(HeroCommand::Move(CardinalDirection::East))
        );
        assert_eq!(hero.pending_inputs(), 0);
        assert_eq!(hero.take_input(), None);
    }

    #[test]
    fn heal_is_capped() {
        let mut hero = Hero::new(Position::ORIGIN).with_health(60);
        assert_eq!(hero.heal(50, 100), 40);
        assert_eq!(hero.health(), 100);

        let mut hero = Hero::new(Position::ORIGIN).with_health(40);
        assert_eq!(hero.heal(50, 100), 50);
        assert_eq!(hero.health(), 90);
    }

    #[test]
    fn enemy_reports_the_killing_blow_once() {
        let mut enemy = Enemy::new(EnemyId(0), Position::ORIGIN).with_health(15);
        assert!(!enemy.take_damage(10));
        assert!(enemy.take_damage(10));
        assert!(!enemy.take_damage(10));
        assert!(!enemy.is_alive());
    }

    #[test]
    fn cooldown_reaches_threshold_after_n_ticks() {
        let mut enemy = Enemy::new(EnemyId(0), Position::ORIGIN);
        for _ in 0..9 {
            assert!(!enemy.advance_cooldown(10));
        }
        assert!(enemy.advance_cooldown(10));
        enemy.reset_cooldown();
        assert_eq!(enemy.cooldown(), 0);
    }
}
