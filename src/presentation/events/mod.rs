//! Event handling.

use crossterm::event::{KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Key was not bound in the current context.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Only presses drive the screen; release and repeat reports are ignored.
#[must_use]
pub fn is_actionable(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    #[test]
    fn test_release_is_not_actionable() {
        assert!(is_actionable(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
        assert!(!is_actionable(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release
        )));
    }
}
