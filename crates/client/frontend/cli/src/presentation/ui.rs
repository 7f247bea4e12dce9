//! Main render entry point composing all widgets into one frame.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Width of the hero panel to the right of the map, borders included.
const SIDE_PANEL_WIDTH: u16 = 30;

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

/// Draws the game screen, plus the defeat popup once the session is over.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        render_game_ui(frame, ctx, &theme);

        if ctx.view_model.status.is_over() {
            let area = centered_rect(50, 30, frame.area());
            widgets::game_over::render(frame, area, ctx.view_model, &theme);
        }
    })?;

    Ok(())
}

/// Header, then map beside the hero panel, then messages.
fn render_game_ui(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Map + hero panel
            Constraint::Length(ctx.message_panel_height), // Messages
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], ctx.view_model, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(rows[1]);

    widgets::map::render(frame, body[0], ctx.view_model, theme);
    widgets::hero_stats::render(frame, body[1], ctx.view_model, theme);
    widgets::messages::render(frame, rows[2], ctx.messages, theme);
}

/// Rectangle of `percent_x` by `percent_y` of `area`, centred within it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
