//! Cart column with per-line prices and the order total.

use crate::application::session::CartLine;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{priced_line, truncate_to_width};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Cart lines with their prices and the order total.
pub struct CartPane<'a> {
    lines: &'a [CartLine],
    total: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CartPane<'a> {
    /// Lists `lines` above the formatted `total`.
    #[must_use]
    pub const fn new(lines: &'a [CartLine], total: &'a str, theme: &'a Theme) -> Self {
        Self {
            lines,
            total,
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

    fn row(&self, line: &CartLine, width: usize) -> ListItem<'static> {
        let mut text = line.display_lines().into_iter();
        let name = text.next().unwrap_or_default();

        let mut rows = vec![priced_line(
            &name,
            self.theme.base_style,
            line.display_price(),
            self.theme.price_style,
            width,
        )];
        rows.extend(text.map(|option| {
            Line::styled(
                truncate_to_width(&format!("  {option}"), width),
                self.theme.dimmed_style,
            )
        }));

        ListItem::new(rows)
    }
}

impl StatefulWidget for CartPane<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(format!(" Cart ({}) ", self.lines.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [list_area, total_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let width = inner.width as usize;

        if self.lines.is_empty() {
            Paragraph::new(Line::styled("Cart is empty", self.theme.dimmed_style))
                .render(list_area, buf);
        } else {
            let rows: Vec<ListItem> = self.lines.iter().map(|line| self.row(line, width)).collect();
            let mut list = List::new(rows);
            if self.focused {
                list = list.highlight_style(self.theme.selection_style);
            }
            StatefulWidget::render(list, list_area, buf, state);
        }

        let bold = Modifier::BOLD;
        Paragraph::new(priced_line(
            "Total",
            self.theme.base_style.add_modifier(bold),
            self.total.to_string(),
            self.theme.price_style.add_modifier(bold),
            width,
        ))
        .render(total_area, buf);
    }
}
