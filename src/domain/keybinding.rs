use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Quit,

    // Navigation / Focus
    FocusNext,
    FocusPrevious,
    NavigateUp,
    NavigateDown,
    Activate,

    // Option picker
    ToggleOption,
    Cancel,

    // Cart
    RemoveLine,
}

/// A key bound to an action, with its footer label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a binding shown in the footer.
    #[must_use]
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Keeps the binding active but out of the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Compares code and modifiers only. Shift is ignored for characters and
    /// back-tab since terminals disagree on reporting it.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        normalize(self.key.code, self.key.modifiers) == normalize(key.code, key.modifiers)
    }
}

fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => (code, modifiers.difference(KeyModifiers::SHIFT)),
        _ => (code, modifiers),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Bindings active while browsing the menu and the cart.
#[must_use]
pub fn ordering_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(key(KeyCode::Enter), Action::Activate, "Select / Add"),
        Keybind::new(key(KeyCode::Tab), Action::FocusNext, "Next Pane"),
        Keybind::new(key(KeyCode::BackTab), Action::FocusPrevious, "Prev Pane").hidden(),
        Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('d')), Action::RemoveLine, "Remove"),
        Keybind::new(key(KeyCode::Delete), Action::RemoveLine, "Remove").hidden(),
        Keybind::new(key(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Bindings active while the option picker is open.
#[must_use]
pub fn picker_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(key(KeyCode::Char(' ')), Action::ToggleOption, "Toggle"),
        Keybind::new(key(KeyCode::Enter), Action::Activate, "Confirm"),
        Keybind::new(key(KeyCode::Esc), Action::Cancel, "Cancel"),
        Keybind::new(key(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
        Keybind::new(key(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Finds the action bound to a key press.
#[must_use]
pub fn find_action(bindings: &[Keybind], key: &KeyEvent) -> Option<Action> {
    bindings
        .iter()
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}
