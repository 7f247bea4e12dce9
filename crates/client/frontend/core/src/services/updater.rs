//! Event-driven view-model updates.
//!
//! [`ViewModelUpdater`] interprets runtime events, rebuilds the
//! [`ViewModel`] from the published snapshot, and reports which parts changed
//! so widgets can skip redrawing untouched areas.

use bitflags::bitflags;
use game_core::GameStatus;
use runtime::{Event, GameStateEvent, LifecycleEvent};

use crate::camera::Camera;
use crate::view_model::ViewModel;

bitflags! {
    /// Tracks which parts of the ViewModel have been updated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u32 {
        /// Tick counter advanced.
        const TICK    = 0b0000_0001;
        /// Visible tiles changed (movement, pickups, deaths, scrolling).
        const MAP     = 0b0000_0010;
        /// Hero health or attack power changed.
        const HERO    = 0b0000_0100;
        /// Enemy health or count changed.
        const ENEMIES = 0b0000_1000;
        /// Game status changed.
        const STATUS  = 0b0001_0000;

        const ALL = Self::TICK.bits()
                  | Self::MAP.bits()
                  | Self::HERO.bits()
                  | Self::ENEMIES.bits()
                  | Self::STATUS.bits();
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Stateless service applying runtime events to a [`ViewModel`].
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    pub fn update(
        view_model: &mut ViewModel,
        event: &Event,
        camera: &Camera,
        max_health: i32,
    ) -> UpdateScope {
        match event {
            Event::GameState(GameStateEvent::TickResolved { snapshot, .. }) => {
                let next = ViewModel::from_world(snapshot, camera, max_health);
                let scope = Self::diff(view_model, &next);
                *view_model = next;
                scope
            }
            Event::Lifecycle(LifecycleEvent::GameOver { .. } | LifecycleEvent::Halted { .. }) => {
                if view_model.status == GameStatus::Defeat {
                    UpdateScope::empty()
                } else {
                    view_model.status = GameStatus::Defeat;
                    UpdateScope::STATUS
                }
            }
        }
    }

    fn diff(before: &ViewModel, after: &ViewModel) -> UpdateScope {
        let mut scope = UpdateScope::empty();
        scope.set(UpdateScope::TICK, before.tick != after.tick);
        scope.set(UpdateScope::MAP, before.map != after.map);
        scope.set(UpdateScope::HERO, before.hero != after.hero);
        scope.set(
            UpdateScope::ENEMIES,
            before.visible_enemies != after.visible_enemies
                || before.living_enemies != after.living_enemies,
        );
        scope.set(UpdateScope::STATUS, before.status != after.status);
        scope
    }
}
