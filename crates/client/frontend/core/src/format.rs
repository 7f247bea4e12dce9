//! Player-facing text for tick events.

use game_core::{EnemyId, EntityRef, Pickup, Tile, TickEvent};

use crate::config::MessageConfig;
use crate::message::MessageLevel;

pub fn enemy_name(id: EnemyId) -> String {
    format!("Enemy{id}")
}

pub fn item_name(item: Pickup) -> &'static str {
    match item {
        Pickup::Sword => "a sword",
        Pickup::HealingPotion => "a healing potion",
    }
}

fn blocker_name(blocker: Option<Tile>) -> &'static str {
    match blocker {
        None => "the edge of the map",
        Some(Tile::Wall) => "a wall",
        Some(Tile::Enemy) => "an enemy",
        Some(Tile::Hero) => "the hero",
        Some(Tile::Floor | Tile::Sword | Tile::HealingPotion) => "something",
    }
}

/// Formats one tick event, or returns `None` if it should not be logged.
///
/// Enemy wandering is never logged.
pub fn format_tick_event(
    event: &TickEvent,
    config: &MessageConfig,
) -> Option<(String, MessageLevel)> {
    let info = |text: String| Some((text, MessageLevel::Info));

    match event {
        TickEvent::HeroMoved { to, .. } => {
            if config.show_movement {
                info(format!("You step to {to}"))
            } else {
                None
            }
        }
        TickEvent::ItemPickedUp { item, .. } => info(format!("You pick up {}", item_name(*item))),
        TickEvent::AttackPowerRaised { attack_power } => {
            info(format!("Attack power rises to {attack_power}"))
        }
        TickEvent::HeroHealed { amount, health } => {
            info(format!("You recover {amount} health ({health})"))
        }
        TickEvent::HeroAttacked { hits: 0 } => info("You swing at nothing".to_string()),
        TickEvent::HeroAttacked { .. } => None,
        TickEvent::EnemyDamaged {
            enemy,
            damage,
            remaining,
        } => info(format!(
            "You hit {} for {damage} ({} left)",
            enemy_name(*enemy),
            (*remaining).max(0)
        )),
        TickEvent::EnemySlain { enemy, .. } => info(format!("{} is slain", enemy_name(*enemy))),
        TickEvent::HeroDamaged {
            enemy,
            damage,
            remaining,
        } => Some((
            format!(
                "{} hits you for {damage} ({} left)",
                enemy_name(*enemy),
                (*remaining).max(0)
            ),
            MessageLevel::Warning,
        )),
        TickEvent::EnemyMoved { .. } => None,
        TickEvent::MoveBlocked {
            entity: EntityRef::Hero,
            blocker,
            ..
        } => {
            if config.show_blocked {
                info(format!("You bump into {}", blocker_name(*blocker)))
            } else {
                None
            }
        }
        TickEvent::MoveBlocked {
            entity: EntityRef::Enemy(_),
            ..
        } => None,
    }
}
