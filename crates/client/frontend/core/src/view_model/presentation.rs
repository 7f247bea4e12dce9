//! Framework-agnostic presentation mapping traits.
//!
//! Each frontend implements [`PresentationMapper`] with its own styling
//! system while sharing the same view model.

use game_core::{GameStatus, Tile};

use crate::message::MessageLevel;

/// Maps game concepts to glyphs and styles.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///
///     fn render_tile(&self, tile: Tile) -> (char, Self::Style) {
///         match tile {
///             Tile::Hero => ('@', Style::default().fg(Color::Yellow)),
///             // ...
///         }
///     }
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Glyph and style for one map cell. Implementations match every variant.
    fn render_tile(&self, tile: Tile) -> (char, Self::Style);

    /// Style for a health bar or number at `percent` of maximum.
    fn style_health(&self, percent: u8) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn style_status(&self, status: GameStatus) -> Self::Style;
}
