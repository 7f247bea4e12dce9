//! Hero panel: health, attack power, and health bars of enemies in view.

use client_frontend_core::{
    format::enemy_name,
    view_model::{PresentationMapper, ViewModel},
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::health_bar;

const BAR_WIDTH: usize = 10;

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let hero = &view_model.hero;
    let label = Style::default().fg(Color::White);
    let hero_percent = hero.health_percent();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Health: ", label),
            Span::styled(
                format!("{}/{}", hero.health.max(0), hero.max_health),
                theme.style_health(hero_percent),
            ),
        ]),
        Line::from(Span::styled(
            health_bar(hero_percent, BAR_WIDTH),
            theme.style_health(hero_percent),
        )),
        Line::from(vec![
            Span::styled("Attack: ", label),
            Span::raw(hero.attack_power.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Position: ", label),
            Span::raw(hero.position.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Enemies: ", label),
            Span::raw(view_model.living_enemies.to_string()),
        ]),
        Line::default(),
    ];

    if view_model.visible_enemies.is_empty() {
        lines.push(Line::from(Span::styled(
            "No enemies in sight",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled("In sight:", label)));
        for enemy in &view_model.visible_enemies {
            let percent = enemy.health_percent();
            lines.push(Line::from(vec![
                Span::raw(format!("{:<9}", enemy_name(enemy.id))),
                Span::styled(health_bar(percent, BAR_WIDTH), theme.style_health(percent)),
            ]));
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Hero"));

    frame.render_widget(paragraph, area);
}
