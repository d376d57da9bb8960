//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::InputCommand;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the decoded command to the battle.
    Submit(InputCommand),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into battle commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::Submit(InputCommand::MoveUp),
            KeyCode::Down => KeyAction::Submit(InputCommand::MoveDown),
            KeyCode::Enter => KeyAction::Submit(InputCommand::Confirm),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        // Number keys pick menu options directly, 1-based.
        if let Some(digit) = raw.to_digit(10).filter(|d| (1..=9).contains(d)) {
            return KeyAction::Submit(InputCommand::SelectOption(digit as usize - 1));
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'k' | 'w' => KeyAction::Submit(InputCommand::MoveUp),
            'j' | 's' => KeyAction::Submit(InputCommand::MoveDown),
            ' ' => KeyAction::Submit(InputCommand::Confirm),
            'r' => KeyAction::Submit(InputCommand::Restart),
            _ => KeyAction::None,
        }
    }
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
    fn number_keys_select_options() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1'))),
            KeyAction::Submit(InputCommand::SelectOption(0))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('4'))),
            KeyAction::Submit(InputCommand::SelectOption(3))
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('0'))), KeyAction::None);
    }

    #[test]
    fn maps_navigation_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Up)),
            KeyAction::Submit(InputCommand::MoveUp)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('J'))),
            KeyAction::Submit(InputCommand::MoveDown)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Submit(InputCommand::Confirm)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' '))),
            KeyAction::Submit(InputCommand::Confirm)
        );
    }

    #[test]
    fn maps_restart_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r'))),
            KeyAction::Submit(InputCommand::Restart)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
    }
}
