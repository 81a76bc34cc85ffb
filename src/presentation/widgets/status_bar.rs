//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Last outcome message on the left, order summary on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
    level: StatusLevel,
    summary: String,
}

impl StatusBar {
    /// Creates an empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            level: StatusLevel::Info,
            summary: String::new(),
        }
    }

    /// Replaces the message and its severity.
    #[must_use]
    pub fn message(mut self, level: StatusLevel, message: impl Into<String>) -> Self {
        self.level = level;
        self.message = message.into();
        self
    }

    /// Sets the right-aligned cart summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().message(StatusLevel::Info, message)
    }

    /// Success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new().message(StatusLevel::Success, message)
    }

    /// Warning message.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new().message(StatusLevel::Warning, message)
    }

    /// Error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().message(StatusLevel::Error, message)
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.message
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let summary_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let message_width = self.message.width();
        let summary_width = self.summary.width();

        let mut spans = vec![Span::styled(self.message.as_str(), message_style)];

        // The summary yields to the message when both do not fit.
        if message_width + summary_width < width {
            let padding = width - message_width - summary_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(self.summary.as_str(), summary_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(bar: &StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(StatusBar::success("ok").level(), StatusLevel::Success);
        assert_eq!(StatusBar::error("bad").level(), StatusLevel::Error);
        assert_eq!(StatusBar::warning("hm").text(), "hm");
    }

    #[test]
    fn test_summary_right_aligned() {
        let bar = StatusBar::info("Added Hamburger").summary("2 lines");
        let text = render_to_string(&bar, 30);

        assert!(text.starts_with("Added Hamburger"));
        assert!(text.ends_with("2 lines"));
    }

    #[test]
    fn test_summary_dropped_when_narrow() {
        let bar = StatusBar::info("Added Hamburger").summary("2 lines");
        let text = render_to_string(&bar, 20);

        assert!(text.starts_with("Added Hamburger"));
        assert!(!text.contains("lines"));
    }
}
