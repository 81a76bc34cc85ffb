use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Colors of the header parts.
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub source: Style,
}

impl HeaderBarStyle {
    /// Derives header colors from the accent.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default()
                .bg(theme.selection_style.bg.unwrap_or(Color::DarkGray))
                .fg(Color::White),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            source: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top line: application name and version on the left, menu source on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    menu_source: Option<&'a str>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates a header for `app_name` at `version`.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            menu_source: None,
            style: HeaderBarStyle::default(),
        }
    }

    /// Shows where the menu was loaded from.
    #[must_use]
    pub const fn menu_source(mut self, source: &'a str) -> Self {
        self.menu_source = Some(source);
        self
    }

    /// Overrides the style.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn source_text(&self) -> Option<String> {
        self.menu_source.map(|source| format!(" ● {source} "))
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = (name.width() + 1 + version.width()) as u16;

        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        if let Some(text) = self.source_text() {
            let source_width = text.width() as u16;
            if source_width < area.width.saturating_sub(left_width) {
                let right_x = area.right().saturating_sub(source_width);
                let right_area = Rect::new(right_x, area.y, source_width, 1);
                Paragraph::new(Line::from(Span::styled(text, self.style.source)))
                    .render(right_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(header: HeaderBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_header_bar_creation() {
        let header = HeaderBar::new("orderpad", "0.1.0").menu_source("embedded menu");

        assert_eq!(header.app_name, "orderpad");
        assert_eq!(header.version, "0.1.0");
        assert_eq!(header.source_text().as_deref(), Some(" ● embedded menu "));
    }

    #[test]
    fn test_renders_name_and_source() {
        let text = render_to_string(
            HeaderBar::new("orderpad", "0.1.0").menu_source("http://localhost:5080"),
            60,
        );

        assert!(text.starts_with(" ORDERPAD   v0.1.0 "));
        assert!(text.trim_end().ends_with("http://localhost:5080"));
    }

    #[test]
    fn test_source_dropped_when_too_narrow() {
        let text = render_to_string(
            HeaderBar::new("orderpad", "0.1.0").menu_source("http://localhost:5080"),
            24,
        );

        assert!(!text.contains("localhost"));
    }
}
