//! Defeat popup shown over the game once the session ends.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "You have died.",
            theme.style_status(view_model.status),
        )),
        Line::default(),
        Line::from(format!("You survived {} ticks.", view_model.tick)),
        Line::from(format!(
            "{} enemies still roam the dungeon.",
            view_model.living_enemies
        )),
        Line::default(),
        Line::from("Press any key to exit."),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Game Over ")
                .border_style(theme.style_status(view_model.status)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
