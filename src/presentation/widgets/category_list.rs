//! Category column.

use crate::application::session::CategoryPanel;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::truncate_to_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

const SELECTED_MARKER: &str = "▸ ";
const UNSELECTED_MARKER: &str = "  ";

/// Lists every category; the one whose items are shown carries a marker.
pub struct CategoryList<'a> {
    panels: &'a [CategoryPanel],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CategoryList<'a> {
    /// Lists one row per category panel.
    #[must_use]
    pub const fn new(panels: &'a [CategoryPanel], theme: &'a Theme) -> Self {
        Self {
            panels,
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

    fn row(&self, panel: &CategoryPanel, width: usize) -> ListItem<'static> {
        let (marker, style) = if panel.is_selected() {
            (
                SELECTED_MARKER,
                self.theme.base_style.add_modifier(Modifier::BOLD),
            )
        } else {
            (UNSELECTED_MARKER, self.theme.base_style)
        };
        let count = format!(" ({})", panel.len());
        let name = truncate_to_width(panel.name(), width.saturating_sub(2 + count.len()));

        ListItem::new(Line::from(vec![
            Span::styled(marker, self.theme.price_style),
            Span::styled(name, style),
            Span::styled(count, self.theme.dimmed_style),
        ]))
    }
}

impl StatefulWidget for CategoryList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(" Categories ");
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let rows: Vec<ListItem> = self
            .panels
            .iter()
            .map(|panel| self.row(panel, width))
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

    fn render_rows(session: &OrderSession, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 24, height);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();
        CategoryList::new(session.panels(), &theme)
            .focused(true)
            .render(area, &mut buf, &mut state);

        (1..height - 1)
            .map(|y| (1..23).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_marks_selected_category() {
        let mut session = OrderSession::new(burger_menu());
        session.select_category(1).unwrap();

        let rows = render_rows(&session, 6);

        assert!(rows[0].starts_with("  Burgers (1)"));
        assert!(rows[1].starts_with("▸ Sides (1)"));
    }
}
