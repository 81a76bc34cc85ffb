use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Keymap context shown at the left of the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub enum FocusContext {
    #[default]
    Categories,
    Items,
    Cart,
    OptionPicker,
    ConfirmQuit,
}

impl FocusContext {
    /// Label printed in the focus indicator.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Categories => "CATEGORIES",
            Self::Items => "ITEMS",
            Self::Cart => "CART",
            Self::OptionPicker => "ADD-ONS",
            Self::ConfirmQuit => "CONFIRM",
        }
    }
}

/// Colors of the footer parts.
#[allow(missing_docs)]
pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    /// Derives footer colors from the accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let key_bg = theme.selection_style.bg.unwrap_or(Color::DarkGray);

        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            focus_indicator: Style::default()
                .bg(key_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// One-line strip of the bindings usable in the focused context.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus_context: Option<FocusContext>,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Creates a footer listing `keybindings`.
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            focus_context: None,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    /// Sets the focus indicator.
    #[must_use]
    pub const fn focus_context(mut self, context: FocusContext) -> Self {
        self.focus_context = Some(context);
        self
    }

    /// Sets right-aligned text.
    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    /// Overrides the style.
    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn format_key(key: &crossterm::event::KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::BackTab => s.push_str("S-Tab"),
            KeyCode::Delete => s.push_str("Del"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            other => {
                let _ = write!(s, "{other:?}");
            }
        }
        s
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        if let Some(context) = self.focus_context {
            spans.push(Span::styled(
                format!(" {} ", context.display_name()),
                self.style.focus_indicator,
            ));
            spans.push(Span::raw(" "));
        }

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self.right_info.map_or(0, |s| s.width() as u16);
        let left_width = area.width.saturating_sub(right_width + 1);

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(Span::styled(info, self.style.info)))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::{ordering_keybinds, picker_keybinds};
    use crossterm::event::KeyEvent;

    fn render_to_string(bar: FooterBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_format_key() {
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            "Space"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "C-c"
        );
        assert_eq!(
            FooterBar::format_key(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            "S-Tab"
        );
    }

    #[test]
    fn test_hidden_bindings_are_not_rendered() {
        let bindings = ordering_keybinds();
        let text = render_to_string(
            FooterBar::new(&bindings).focus_context(FocusContext::Items),
            120,
        );

        assert!(text.starts_with(" ITEMS "));
        assert!(text.contains("Select / Add"));
        assert!(text.contains("Remove"));
        assert!(!text.contains("Prev Pane"));
    }

    #[test]
    fn test_right_info_is_right_aligned() {
        let bindings = picker_keybinds();
        let text = render_to_string(
            FooterBar::new(&bindings).right_info(Some("+ $ 0.75")),
            80,
        );

        assert!(text.contains("Toggle"));
        assert!(text.ends_with("+ $ 0.75"));
    }
}
