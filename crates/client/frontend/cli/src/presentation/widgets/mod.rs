//! Individual panels of the game screen.
pub mod game_over;
pub mod header;
pub mod hero_stats;
pub mod map;
pub mod messages;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Text health bar `width` cells wide. Any living amount shows at least one cell.
pub fn health_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let mut filled = percent * width / 100;
    if percent > 0 && filled == 0 {
        filled = 1;
    }

    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_with_percent() {
        assert_eq!(health_bar(100, 4), "████");
        assert_eq!(health_bar(50, 4), "██░░");
        assert_eq!(health_bar(0, 4), "░░░░");
    }

    #[test]
    fn low_health_still_shows_a_sliver() {
        assert_eq!(health_bar(5, 10), "█░░░░░░░░░");
    }

    #[test]
    fn overflow_is_clamped() {
        assert_eq!(health_bar(250, 3), "███");
    }
}
