//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Classifies global key bindings.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks for Ctrl+C, which quits even while a popup owns input.
    #[must_use]
    pub fn is_interrupt_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Checks if key moves to the next tab.
    #[must_use]
    pub fn is_next_tab(key: &KeyEvent) -> bool {
        key.code == KeyCode::Tab
    }

    /// Checks if key moves to the previous tab.
    #[must_use]
    pub fn is_previous_tab(key: &KeyEvent) -> bool {
        key.code == KeyCode::BackTab
    }

    /// Returns the zero-based tab index for digit shortcuts `1`..=`6`.
    #[must_use]
    pub fn tab_shortcut(key: &KeyEvent) -> Option<usize> {
        if key.modifiers != KeyModifiers::NONE {
            return None;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='6') => c
                .to_digit(10)
                .and_then(|d| usize::try_from(d - 1).ok()),
            _ => None,
        }
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter | KeyCode::Char(' '),
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_interrupt_event() {
        assert!(EventHandler::is_interrupt_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_interrupt_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_interrupt_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_non_quit_events() {
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_tab_navigation() {
        assert!(EventHandler::is_next_tab(&make_key_event(
            KeyCode::Tab,
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_previous_tab(&make_key_event(
            KeyCode::BackTab,
            KeyModifiers::SHIFT
        )));
    }

    #[test_case('1', Some(0))]
    #[test_case('6', Some(5))]
    #[test_case('7', None)]
    #[test_case('0', None)]
    fn test_tab_shortcut(c: char, expected: Option<usize>) {
        let key = make_key_event(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(EventHandler::tab_shortcut(&key), expected);
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char(' '),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
