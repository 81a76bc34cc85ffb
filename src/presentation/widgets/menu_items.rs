//! Item column for the selected category.

use crate::application::session::CategoryPanel;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::priced_line;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Suffix for items that open the add-on picker.
pub const OPTIONS_HINT: &str = " +";

/// Items of the selected category with their prices.
pub struct MenuItemsList<'a> {
    panel: Option<&'a CategoryPanel>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> MenuItemsList<'a> {
    /// Lists the items of `panel`, or nothing when no category is selected.
    #[must_use]
    pub const fn new(panel: Option<&'a CategoryPanel>, theme: &'a Theme) -> Self {
        Self {
            panel,
            focused: false,
            theme,
        }
    }

    /// Highlights the border when focused.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for MenuItemsList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let title = self
            .panel
            .map_or_else(|| " Items ".to_string(), |panel| format!(" {} ", panel.name()));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(panel) = self.panel else {
            Paragraph::new(Line::styled("Select a category", self.theme.dimmed_style))
                .render(inner, buf);
            return;
        };

        let width = inner.width as usize;
        let rows: Vec<ListItem> = panel
            .items()
            .map(|item| {
                let label = if item.has_options() {
                    format!("{}{OPTIONS_HINT}", item.name())
                } else {
                    item.name().to_string()
                };
                ListItem::new(priced_line(
                    &label,
                    self.theme.base_style,
                    item.price().to_string(),
                    self.theme.price_style,
                    width,
                ))
            })
            .collect();

        let mut list = List::new(rows);
        if self.focused {
            list = list.highlight_style(self.theme.selection_style);
        }
        StatefulWidget::render(list, inner, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::OrderSession;
    use crate::application::session::fixtures::burger_menu;

    fn render_rows(panel: Option<&CategoryPanel>) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();
        MenuItemsList::new(panel, &theme).render(area, &mut buf, &mut state);

        (1..4)
            .map(|y| (1..29).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_rows_show_price_and_options_hint() {
        let mut session = OrderSession::new(burger_menu());
        session.select_category(0).unwrap();

        let rows = render_rows(session.selected_panel());

        assert!(rows[0].starts_with("Hamburger +"));
        assert!(rows[0].ends_with("$ 4.25"));
    }

    #[test]
    fn test_placeholder_without_selection() {
        let rows = render_rows(None);
        assert!(rows[0].starts_with("Select a category"));
    }
}
