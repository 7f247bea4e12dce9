use arrayvec::ArrayVec;

use crate::config::CombatRules;
use crate::engine::TickEvent;
use crate::state::{EnemyId, InvariantError, Position, World};

use super::ActionTransition;

/// Hero strikes every living enemy directly beside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackAction;

/// One enemy struck by an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub enemy: EnemyId,
    pub position: Position,
    pub damage: i32,
    pub remaining: i32,
    pub slain: bool,
}

/// At most four enemies can stand orthogonally adjacent to the hero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackOutcome {
    pub hits: ArrayVec<Hit, 4>,
}

impl AttackAction {
    /// Living enemies at Manhattan distance exactly one from the hero.
    pub fn targets(world: &World) -> ArrayVec<EnemyId, 4> {
        let hero = world.hero().position();
        world
            .living_enemies()
            .filter(|enemy| enemy.position().is_adjacent(hero))
            .map(|enemy| enemy.id())
            .take(4)
            .collect()
    }
}

impl ActionTransition for AttackAction {
    type Outcome = AttackOutcome;

    fn apply(
        &self,
        world: &mut World,
        rules: &CombatRules,
    ) -> Result<AttackOutcome, InvariantError> {
        let damage = rules.hero_damage(world.hero().attack_power());
        let mut outcome = AttackOutcome::default();

        for id in Self::targets(world) {
            let Some(enemy) = world.enemy_mut(id) else {
                continue;
            };
            let slain = enemy.take_damage(damage);
            let hit = Hit {
                enemy: id,
                position: enemy.position(),
                damage,
                remaining: enemy.health(),
                slain,
            };
            if slain {
                world.clear_enemy_cell(id);
            }
            outcome.hits.push(hit);
        }

        Ok(outcome)
    }
}

impl AttackOutcome {
    pub fn record(self, events: &mut Vec<TickEvent>) {
        events.push(TickEvent::HeroAttacked {
            hits: self.hits.len(),
        });
        for hit in self.hits {
            events.push(TickEvent::EnemyDamaged {
                enemy: hit.enemy,
                damage: hit.damage,
                remaining: hit.remaining,
            });
            if hit.slain {
                events.push(TickEvent::EnemySlain {
                    enemy: hit.enemy,
                    position: hit.position,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Tile;

    #[test]
    fn hits_adjacent_enemies_only() {
        // Enemy #0 at distance 1, enemy #1 at distance 2.
        let mut world = World::from_rows(&[
            ".e..", //
            ".@.e",
        ])
        .unwrap();

        let outcome = AttackAction
            .apply(&mut world, &CombatRules::default())
            .unwrap();

        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(world.enemies()[0].health(), 90);
        assert_eq!(world.enemies()[1].health(), 100);
    }

    #[test]
    fn damage_scales_with_attack_power() {
        let mut world = World::from_rows(&["e@e"]).unwrap();
        world.hero_mut().upgrade_attack_power();
        world.hero_mut().upgrade_attack_power();

        AttackAction
            .apply(&mut world, &CombatRules::default())
            .unwrap();

        assert!(world.enemies().iter().all(|enemy| enemy.health() == 70));
    }

    #[test]
    fn killing_blow_clears_the_cell() {
        let mut world = World::from_rows(&["@e."]).unwrap();
        world.enemy_mut(EnemyId(0)).unwrap().take_damage(95);

        let outcome = AttackAction
            .apply(&mut world, &CombatRules::default())
            .unwrap();

        assert!(outcome.hits[0].slain);
        assert_eq!(world.tile(Position::new(1, 0)), Some(Tile::Floor));
        assert_eq!(world.living_enemies().count(), 0);
        assert!(world.check_invariants().is_ok());
    }

    #[test]
    fn dead_enemies_are_not_targeted() {
        let mut world = World::from_rows(&["@e"]).unwrap();
        let rules = CombatRules::default();
        world.enemy_mut(EnemyId(0)).unwrap().take_damage(100);
        world.clear_enemy_cell(EnemyId(0));

        let outcome = AttackAction.apply(&mut world, &rules).unwrap();

        assert!(outcome.hits.is_empty());
        assert_eq!(world.enemies()[0].health(), 0);
    }

    #[test]
    fn record_lists_damage_then_death() {
        let mut world = World::from_rows(&["@e"]).unwrap();
        world.enemy_mut(EnemyId(0)).unwrap().take_damage(90);
        let mut events = Vec::new();
        AttackAction
            .apply(&mut world, &CombatRules::default())
            .unwrap()
            .record(&mut events);

        assert_eq!(
            events,
            vec![
                TickEvent::HeroAttacked { hits: 1 },
                TickEvent::EnemyDamaged {
                    enemy: EnemyId(0),
                    damage: 10,
                    remaining: 0,
                },
                TickEvent::EnemySlain {
                    enemy: EnemyId(0),
                    position: Position::new(1, 0),
                },
            ]
        );
    }
}
