//! Header widget displaying the tick counter and session status.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use game_core::GameStatus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let status = match view_model.status {
        GameStatus::Running => "Exploring",
        GameStatus::Defeat => "Defeated",
    };

    let text = vec![Line::from(vec![
        Span::raw("Tick: "),
        Span::styled(
            view_model.tick.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(status, theme.style_status(view_model.status)),
        Span::raw(" | Enemies left: "),
        Span::styled(
            view_model.living_enemies.to_string(),
            Style::default().fg(Color::LightRed),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("tilecrawl"));

    frame.render_widget(paragraph, area);
}
