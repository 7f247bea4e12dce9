//! Message log panel, oldest visible entry on top.

use client_frontend_core::{message::MessageLog, view_model::PresentationMapper};
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
    messages: &MessageLog,
    theme: &T,
) {
    let visible = usize::from(area.height.saturating_sub(2));

    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| {
            let mut spans = Vec::with_capacity(2);
            if let Some(tick) = entry.tick {
                spans.push(Span::styled(
                    format!("[{tick}] "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                entry.text.clone(),
                theme.style_message(entry.level),
            ));
            Line::from(spans)
        })
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
