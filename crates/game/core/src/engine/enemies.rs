use rand::Rng;

use crate::config::CombatRules;
use crate::rng::random_direction;
use crate::state::{EnemyId, EntityRef, InvariantError, Tile, World};

use super::TickEvent;

/// Runs every enemy's turn in collection order.
///
/// Each enemy sees the hero's new position and the positions earlier enemies
/// moved to during the same tick.
pub(super) fn resolve_enemy_turns<R: Rng + ?Sized>(
    world: &mut World,
    rules: &CombatRules,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Result<(), InvariantError> {
    for index in 0..world.enemies().len() {
        take_turn(world, EnemyId(index as u32), rules, rng, events)?;
    }
    Ok(())
}

fn take_turn<R: Rng + ?Sized>(
    world: &mut World,
    id: EnemyId,
    rules: &CombatRules,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Result<(), InvariantError> {
    let hero_position = world.hero().position();
    let Some(enemy) = world.enemy_mut(id) else {
        return Ok(());
    };
    if !enemy.is_alive() || !enemy.advance_cooldown(rules.enemy_cooldown) {
        return Ok(());
    }
    enemy.reset_cooldown();
    let position = enemy.position();

    if position.is_adjacent(hero_position) {
        let hero = world.hero_mut();
        hero.take_damage(rules.enemy_damage);
        events.push(TickEvent::HeroDamaged {
            enemy: id,
            damage: rules.enemy_damage,
            remaining: hero.health(),
        });
        return Ok(());
    }

    let (dx, dy) = random_direction(rng).delta();
    let target = position.offset(dx, dy);
    match world.tile(target) {
        Some(tile) if tile.is_enterable_by_enemy() => {
            let from = world.move_entity(EntityRef::Enemy(id), target)?;
            events.push(TickEvent::EnemyMoved {
                enemy: id,
                from,
                to: target,
            });
        }
        blocker => events.push(TickEvent::MoveBlocked {
            entity: EntityRef::Enemy(id),
            target,
            blocker,
        }),
    }

    Ok(())
}
