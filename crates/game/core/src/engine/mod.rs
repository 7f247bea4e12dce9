//! Per-tick action resolution.
//!
//! The [`GameEngine`] is the only code path that advances a [`World`]. One
//! call to [`GameEngine::tick`] runs the hero's turn, then each enemy's turn,
//! then the game-over check.

mod enemies;
mod report;

pub use report::{GameStatus, TickEvent, TickReport};

use rand::Rng;

use crate::config::CombatRules;
use crate::state::{InvariantError, World};

pub struct GameEngine<'a> {
    world: &'a mut World,
    rules: &'a CombatRules,
}

impl<'a> GameEngine<'a> {
    pub fn new(world: &'a mut World, rules: &'a CombatRules) -> Self {
        Self { world, rules }
    }

    /// Resolves one tick.
    ///
    /// Only the oldest queued hero input is acted on; later inputs queued since
    /// the previous tick are discarded. A world whose hero is already dead is
    /// left untouched and reported as [`GameStatus::Defeat`].
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TickReport, InvariantError> {
        if self.world.is_game_over() {
            return Ok(TickReport {
                tick: self.world.tick(),
                events: Vec::new(),
                status: GameStatus::Defeat,
            });
        }

        let mut events = Vec::new();

        if let Some(command) = self.world.hero_mut().take_input() {
            command.resolve(self.world, self.rules, &mut events)?;
        }

        enemies::resolve_enemy_turns(self.world, self.rules, rng, &mut events)?;

        let status = if self.world.hero().is_alive() {
            GameStatus::Running
        } else {
            GameStatus::Defeat
        };

        #[cfg(debug_assertions)]
        self.world.check_invariants()?;

        let tick = self.world.advance_tick();
        Ok(TickReport {
            tick,
            events,
            status,
        })
    }
}
