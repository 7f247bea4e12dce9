//! Map widget drawing the camera window onto the dungeon.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let lines: Vec<Line> = view_model
        .map
        .rows
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&tile| {
                        let (glyph, style) = theme.render_tile(tile);
                        Span::styled(glyph.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let origin = view_model.map.viewport.origin;
    let title = format!("Dungeon {origin}");

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
