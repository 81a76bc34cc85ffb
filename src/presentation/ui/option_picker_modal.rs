use crate::application::session::OptionPicker;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{centered_rect, priced_line};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Centered overlay listing the add-ons of the item being picked.
pub struct OptionPickerModal<'a> {
    picker: &'a OptionPicker,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> OptionPickerModal<'a> {
    /// Creates the modal over an open picker with row `cursor` highlighted.
    #[must_use]
    pub const fn new(picker: &'a OptionPicker, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            picker,
            cursor,
            theme,
        }
    }
}

impl Widget for OptionPickerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.picker.is_visible() {
            return;
        }

        let area = centered_rect(60, 60, area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border)
            .title(format!(" {}: add-ons ", self.picker.item_name()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [list_area, surcharge_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let width = inner.width as usize;

        let rows: Vec<ListItem> = self
            .picker
            .entries()
            .iter()
            .map(|entry| {
                let check = if entry.is_selected() { CHECKED } else { UNCHECKED };
                ListItem::new(priced_line(
                    &format!("{check} {}", entry.name()),
                    self.theme.base_style,
                    format!("+ {}", entry.price()),
                    self.theme.price_style,
                    width,
                ))
            })
            .collect();

        let list = List::new(rows).highlight_style(self.theme.selection_style);
        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, list_area, buf, &mut state);

        Paragraph::new(priced_line(
            "Add-ons",
            self.theme.dimmed_style,
            format!("+ {}", self.picker.surcharge()),
            self.theme.price_style.add_modifier(Modifier::BOLD),
            width,
        ))
        .render(surcharge_area, buf);
    }
}
