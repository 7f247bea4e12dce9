//! Maintains the CLI message log in response to runtime events.
use runtime::{Event, GameStateEvent, LifecycleEvent};

use client_frontend_core::{
    EventConsumer,
    EventImpact,
    MessageConfig,
    format::format_tick_event,
    message::{MessageEntry, MessageLevel, MessageLog},
};

pub struct CliEventConsumer {
    log: MessageLog,
    config: MessageConfig,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, config: MessageConfig) -> Self {
        Self { log, config }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::GameState(GameStateEvent::TickResolved { report, .. }) => {
                for tick_event in &report.events {
                    if let Some((text, level)) = format_tick_event(tick_event, &self.config) {
                        self.log
                            .push(MessageEntry::new(text, Some(report.tick.0), level));
                    }
                }
                EventImpact::redraw()
            }
            Event::Lifecycle(LifecycleEvent::GameOver { tick }) => {
                self.log.push(MessageEntry::new(
                    "You have died. Press any key to exit.",
                    Some(tick.0),
                    MessageLevel::Error,
                ));
                EventImpact::game_over()
            }
            Event::Lifecycle(LifecycleEvent::Halted { tick, reason }) => {
                self.log.push(MessageEntry::new(
                    format!("The dungeon collapsed: {reason}"),
                    Some(tick.0),
                    MessageLevel::Error,
                ));
                EventImpact::game_over()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CombatRules, GameEngine, HeroCommand, Tick, World, rng};

    fn consumer() -> CliEventConsumer {
        CliEventConsumer::new(MessageLog::new(16), MessageConfig::default())
    }

    #[test]
    fn logs_combat_from_tick_reports() {
        let mut world = World::from_rows(&["@e"]).unwrap();
        world.push_hero_input(HeroCommand::Attack);
        let rules = CombatRules::default();
        let report = GameEngine::new(&mut world, &rules)
            .tick(&mut rng::seeded(1))
            .unwrap();

        let mut consumer = consumer();
        let impact = consumer.on_event(&Event::GameState(GameStateEvent::TickResolved {
            report,
            snapshot: Box::new(world),
        }));

        assert!(impact.requires_redraw);
        assert!(!impact.game_over);
        let entry = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(entry.text, "You hit Enemy#0 for 10 (90 left)");
        assert_eq!(entry.level, MessageLevel::Info);
    }

    #[test]
    fn game_over_requests_final_screen() {
        let mut consumer = consumer();
        let impact = consumer.on_event(&Event::Lifecycle(LifecycleEvent::GameOver {
            tick: Tick(42),
        }));

        assert!(impact.game_over);
        let entry = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(entry.tick, Some(42));
        assert_eq!(entry.level, MessageLevel::Error);
    }
}
