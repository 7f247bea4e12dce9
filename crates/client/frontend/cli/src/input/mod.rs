//! Input processing for the CLI client.
//!
//! Owns the keyboard-to-command mapping so the event loop stays agnostic
//! about concrete key bindings and `crossterm` details.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{CardinalDirection, HeroCommand};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Queue the decoded command with the runtime.
    Submit(HeroCommand),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into hero commands.
///
/// `W/A/S/D` and the arrow keys move, `Space` attacks, `Q`, `Esc` and
/// `Ctrl+C` quit.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => movement(CardinalDirection::West),
            KeyCode::Right => movement(CardinalDirection::East),
            KeyCode::Up => movement(CardinalDirection::North),
            KeyCode::Down => movement(CardinalDirection::South),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'w' => movement(CardinalDirection::North),
            'a' => movement(CardinalDirection::West),
            's' => movement(CardinalDirection::South),
            'd' => movement(CardinalDirection::East),
            ' ' => KeyAction::Submit(HeroCommand::Attack),
            _ => KeyAction::None,
        }
    }
}

fn movement(direction: CardinalDirection) -> KeyAction {
    KeyAction::Submit(HeroCommand::Move(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_wasd_and_arrows_to_the_same_moves() {
        let handler = InputHandler::new();
        let pairs = [
            ('w', KeyCode::Up, CardinalDirection::North),
            ('d', KeyCode::Right, CardinalDirection::East),
            ('s', KeyCode::Down, CardinalDirection::South),
            ('a', KeyCode::Left, CardinalDirection::West),
        ];

        for (ch, arrow, direction) in pairs {
            let expected = KeyAction::Submit(HeroCommand::Move(direction));
            assert_eq!(handler.handle_key(key(KeyCode::Char(ch))), expected);
            assert_eq!(handler.handle_key(key(arrow)), expected);
        }
    }

    #[test]
    fn uppercase_letters_still_move() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W'))),
            KeyAction::Submit(HeroCommand::Move(CardinalDirection::North))
        );
    }

    #[test]
    fn space_attacks() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' '))),
            KeyAction::Submit(HeroCommand::Attack)
        );
    }

    #[test]
    fn maps_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::None);
    }
}
