use crate::config::CombatRules;
use crate::engine::TickEvent;
use crate::state::{EntityRef, InvariantError, Pickup, Position, Tile, World};

use super::{ActionTransition, CardinalDirection};

/// Step the hero one cell in a direction, collecting any item found there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

/// Effect of collecting an item on entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupEffect {
    AttackPowerRaised { attack_power: i32 },
    Healed { amount: i32, health: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        from: Position,
        to: Position,
        pickup: Option<(Pickup, PickupEffect)>,
    },
    /// Nothing changed. `blocker` is `None` when the target is off the map.
    Blocked {
        target: Position,
        blocker: Option<Tile>,
    },
}

impl MoveAction {
    pub const fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }

    pub fn target(&self, world: &World) -> Position {
        let (dx, dy) = self.direction.delta();
        world.hero().position().offset(dx, dy)
    }
}

impl ActionTransition for MoveAction {
    type Outcome = MoveOutcome;

    fn apply(&self, world: &mut World, rules: &CombatRules) -> Result<MoveOutcome, InvariantError> {
        let target = self.target(world);
        let tile = match world.tile(target) {
            Some(tile) if tile.is_enterable_by_hero() => tile,
            blocker => return Ok(MoveOutcome::Blocked { target, blocker }),
        };

        let from = world.move_entity(EntityRef::Hero, target)?;

        let pickup = tile.pickup().map(|item| {
            let hero = world.hero_mut();
            let effect = match item {
                Pickup::Sword => {
                    hero.upgrade_attack_power();
                    PickupEffect::AttackPowerRaised {
                        attack_power: hero.attack_power(),
                    }
                }
                Pickup::HealingPotion => {
                    let amount = hero.heal(rules.potion_heal, rules.max_health);
                    PickupEffect::Healed {
                        amount,
                        health: hero.health(),
                    }
                }
            };
            (item, effect)
        });

        Ok(MoveOutcome::Moved {
            from,
            to: target,
            pickup,
        })
    }
}

impl MoveOutcome {
    pub fn record(self, events: &mut Vec<TickEvent>) {
        match self {
            MoveOutcome::Moved { from, to, pickup } => {
                events.push(TickEvent::HeroMoved { from, to });
                if let Some((item, effect)) = pickup {
                    events.push(TickEvent::ItemPickedUp { item, position: to });
                    events.push(match effect {
                        PickupEffect::AttackPowerRaised { attack_power } => {
                            TickEvent::AttackPowerRaised { attack_power }
                        }
                        PickupEffect::Healed { amount, health } => {
                            TickEvent::HeroHealed { amount, health }
                        }
                    });
                }
            }
            MoveOutcome::Blocked { target, blocker } => events.push(TickEvent::MoveBlocked {
                entity: EntityRef::Hero,
                target,
                blocker,
            }),
        }
    }
}
