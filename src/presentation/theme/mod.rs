//! Color theme derived from a single accent color.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles used across the screen.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub struct Theme {
    pub accent: Color,
    pub selection_style: Style,
    pub focused_border: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub price_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow")
    }
}

impl Theme {
    /// Builds the theme from a color name or `#rrggbb`, falling back to yellow.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds the theme from an already parsed accent.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            selection_style: Style::default()
                .bg(darken(accent))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            focused_border: Style::default().fg(accent),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            price_style: Style::default().fg(accent),
        }
    }

    /// Border style for a pane, brighter when it owns focus.
    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.dimmed_style
        }
    }
}

/// Background shade for highlighted rows.
const fn darken(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 4, g / 4, b / 4),
        _ => Color::DarkGray,
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Yellow,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let short = |i: usize| channel(&s[i..=i].repeat(2));
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "named")]
    #[test_case("blue", Color::Blue ; "lowercase name")]
    #[test_case("#FF0000", Color::Rgb(255, 0, 0) ; "long hex")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "short hex")]
    #[test_case("Orange", Color::Indexed(208) ; "orange alias")]
    #[test_case("Invalid", Color::Yellow ; "fallback")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_rgb_accent_darkens_selection() {
        let theme = Theme::from_color(Color::Rgb(200, 100, 40));
        assert_eq!(theme.selection_style.bg, Some(Color::Rgb(50, 25, 10)));
    }

    #[test]
    fn test_border_follows_focus() {
        let theme = Theme::default();
        assert_eq!(theme.border(true).fg, Some(Color::Yellow));
        assert_eq!(theme.border(false).fg, Some(Color::DarkGray));
    }
}
