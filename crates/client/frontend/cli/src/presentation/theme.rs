//! Ratatui theme implementation of PresentationMapper.
//!
//! Concrete glyphs and colours for the terminal UI, implementing the
//! framework-agnostic trait from client-frontend-core.

use client_frontend_core::{message::MessageLevel, view_model::PresentationMapper};
use game_core::{GameStatus, Tile};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn render_tile(&self, tile: Tile) -> (char, Self::Style) {
        match tile {
            Tile::Wall => ('#', Style::default().fg(Color::Gray)),
            Tile::Floor => ('.', Style::default().fg(Color::DarkGray)),
            Tile::Hero => (
                '@',
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Tile::Enemy => ('e', Style::default().fg(Color::LightRed)),
            Tile::Sword => ('/', Style::default().fg(Color::LightCyan)),
            Tile::HealingPotion => ('!', Style::default().fg(Color::LightMagenta)),
        }
    }

    fn style_health(&self, percent: u8) -> Self::Style {
        let color = match percent {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_status(&self, status: GameStatus) -> Self::Style {
        match status {
            GameStatus::Running => Style::default().fg(Color::LightGreen),
            GameStatus::Defeat => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }
}
