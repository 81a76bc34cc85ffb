//! The ordering screen: state machine for keys and the composed layout.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{ListState, StatefulWidget, Widget},
};
use tracing::{debug, warn};

use crate::application::session::{AddOutcome, CartLine, OrderSession, PickerEntry};
use crate::domain::entities::{CartLineId, MenuItem};
use crate::domain::keybinding::{Action, Keybind, find_action, ordering_keybinds, picker_keybinds};
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::ui::option_picker_modal::OptionPickerModal;
use crate::presentation::widgets::{
    CartPane, CategoryList, FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle,
    MenuItemsList, StatusBar,
};

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFocus {
    /// Category list on the left.
    #[default]
    Categories,
    /// Items of the selected category.
    Items,
    /// Cart lines and total.
    Cart,
}

impl OrderFocus {
    /// Returns the pane to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Categories => Self::Items,
            Self::Items => Self::Cart,
            Self::Cart => Self::Categories,
        }
    }

    /// Returns the pane to the left, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Categories => Self::Cart,
            Self::Items => Self::Categories,
            Self::Cart => Self::Items,
        }
    }

    const fn context(self) -> FocusContext {
        match self {
            Self::Categories => FocusContext::Categories,
            Self::Items => FocusContext::Items,
            Self::Cart => FocusContext::Cart,
        }
    }
}

/// Moves a list cursor one step, clamped to `len`.
fn step(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = match state.selected() {
        None => 0,
        Some(i) if forward => (i + 1).min(len - 1),
        Some(i) => i.saturating_sub(1).min(len - 1),
    };
    state.select(Some(next));
}

/// Ordering session plus everything the screen tracks around it: focus,
/// list cursors, the picker cursor, the status line and quit confirmation.
pub struct OrderScreenState {
    session: OrderSession,
    focus: OrderFocus,
    category_state: ListState,
    items_state: ListState,
    cart_state: ListState,
    picker_cursor: usize,
    confirm_quit: bool,
    quit_pending: bool,
    status: StatusBar,
    status_since: Option<Instant>,
    ordering_keys: Vec<Keybind>,
    picker_keys: Vec<Keybind>,
}

impl OrderScreenState {
    /// Wraps a session and shows the first category.
    #[must_use]
    pub fn new(session: OrderSession, confirm_quit: bool) -> Self {
        let mut state = Self {
            session,
            focus: OrderFocus::default(),
            category_state: ListState::default(),
            items_state: ListState::default(),
            cart_state: ListState::default(),
            picker_cursor: 0,
            confirm_quit,
            quit_pending: false,
            status: StatusBar::info("Pick a category and press Enter"),
            status_since: None,
            ordering_keys: ordering_keybinds(),
            picker_keys: picker_keybinds(),
        };
        if !state.session.panels().is_empty() {
            state.category_state.select(Some(0));
            state.open_category(0);
        }
        state
    }

    /// Returns the wrapped session.
    #[must_use]
    pub const fn session(&self) -> &OrderSession {
        &self.session
    }

    /// Returns the focused pane.
    #[must_use]
    pub const fn focus(&self) -> OrderFocus {
        self.focus
    }

    /// Returns the status line contents.
    #[must_use]
    pub const fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Returns whether a quit is waiting for confirmation.
    #[must_use]
    pub const fn quit_pending(&self) -> bool {
        self.quit_pending
    }

    /// Returns the highlighted row of the option picker.
    #[must_use]
    pub const fn picker_cursor(&self) -> usize {
        self.picker_cursor
    }

    /// Returns the bindings shown in the footer for the current context.
    #[must_use]
    pub fn active_keybinds(&self) -> &[Keybind] {
        if self.session.picker().is_visible() {
            &self.picker_keys
        } else {
            &self.ordering_keys
        }
    }

    /// Returns the keymap context: the picker while it is open, else the focused pane.
    #[must_use]
    pub fn focus_context(&self) -> FocusContext {
        if self.quit_pending {
            FocusContext::ConfirmQuit
        } else if self.session.picker().is_visible() {
            FocusContext::OptionPicker
        } else {
            self.focus.context()
        }
    }

    /// Clears a status message older than `ttl`. Returns whether it changed.
    pub fn expire_status(&mut self, now: Instant, ttl: Duration) -> bool {
        match self.status_since {
            Some(since) if now.duration_since(since) >= ttl && !self.quit_pending => {
                self.status = StatusBar::new();
                self.status_since = None;
                true
            }
            _ => false,
        }
    }

    fn set_status(&mut self, status: StatusBar) {
        self.status = status;
        self.status_since = Some(Instant::now());
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if self.quit_pending {
            self.quit_pending = false;
            if find_action(&self.ordering_keys, &key) == Some(Action::Quit) {
                return EventResult::Exit;
            }
            self.set_status(StatusBar::info("Quit cancelled"));
            return EventResult::Consumed;
        }

        let picker_open = self.session.picker().is_visible();
        let Some(action) = find_action(self.active_keybinds(), &key) else {
            return EventResult::Continue;
        };
        debug!(?action, picker_open, focus = ?self.focus, "Key action");

        if picker_open {
            self.handle_picker_action(action)
        } else {
            self.handle_ordering_action(action)
        }
    }

    fn handle_ordering_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrevious => self.focus = self.focus.previous(),
            Action::NavigateUp => self.move_cursor(false),
            Action::NavigateDown => self.move_cursor(true),
            Action::Activate => self.activate(),
            Action::RemoveLine if self.focus == OrderFocus::Cart => self.remove_highlighted_line(),
            Action::Quit => return self.request_quit(),
            Action::RemoveLine | Action::ToggleOption | Action::Cancel => {
                return EventResult::Continue;
            }
        }
        EventResult::Consumed
    }

    fn handle_picker_action(&mut self, action: Action) -> EventResult {
        let entries = self.session.picker().entries().len();
        match action {
            Action::NavigateUp => self.picker_cursor = self.picker_cursor.saturating_sub(1),
            Action::NavigateDown => {
                if self.picker_cursor + 1 < entries {
                    self.picker_cursor += 1;
                }
            }
            Action::ToggleOption => self.toggle_highlighted_option(),
            Action::Activate => self.confirm_picker(),
            Action::Cancel => {
                let name = self.session.picker().item_name().to_string();
                self.session.cancel_options();
                self.set_status(StatusBar::info(format!("Cancelled {name}")));
            }
            Action::Quit => return self.request_quit(),
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn move_cursor(&mut self, forward: bool) {
        match self.focus {
            OrderFocus::Categories => {
                step(&mut self.category_state, self.session.panels().len(), forward);
            }
            OrderFocus::Items => {
                let len = self.session.selected_panel().map_or(0, |panel| panel.len());
                step(&mut self.items_state, len, forward);
            }
            OrderFocus::Cart => step(&mut self.cart_state, self.session.cart().len(), forward),
        }
    }

    fn activate(&mut self) {
        match self.focus {
            OrderFocus::Categories => {
                if let Some(index) = self.category_state.selected()
                    && self.open_category(index)
                {
                    self.focus = OrderFocus::Items;
                }
            }
            OrderFocus::Items => self.add_highlighted_item(),
            OrderFocus::Cart => {}
        }
    }

    fn open_category(&mut self, index: usize) -> bool {
        match self.session.select_category(index) {
            Ok(()) => {
                let has_items = self
                    .session
                    .selected_panel()
                    .is_some_and(|panel| !panel.is_empty());
                self.items_state.select(has_items.then_some(0));
                true
            }
            Err(e) => {
                warn!(error = %e, "Category selection rejected");
                self.set_status(StatusBar::error(e.to_string()));
                false
            }
        }
    }

    fn add_highlighted_item(&mut self) {
        let Some(item_id) = self
            .session
            .selected_panel()
            .zip(self.items_state.selected())
            .and_then(|(panel, index)| panel.item(index))
            .map(MenuItem::id)
        else {
            return;
        };

        match self.session.add_item(item_id) {
            Ok(AddOutcome::Added(line_id)) => self.line_added(line_id),
            Ok(AddOutcome::PickerOpened) => {
                self.picker_cursor = 0;
                let name = self.session.picker().item_name().to_string();
                self.set_status(StatusBar::info(format!("Choose add-ons for {name}")));
            }
            Err(e) => {
                warn!(error = %e, item = %item_id, "Add rejected");
                self.set_status(StatusBar::error(e.to_string()));
            }
        }
    }

    fn toggle_highlighted_option(&mut self) {
        let Some(option_id) = self
            .session
            .picker()
            .entries()
            .get(self.picker_cursor)
            .map(PickerEntry::id)
        else {
            return;
        };

        if let Err(e) = self.session.toggle_option(option_id) {
            warn!(error = %e, option = %option_id, "Toggle rejected");
            self.set_status(StatusBar::error(e.to_string()));
        }
    }

    fn confirm_picker(&mut self) {
        match self.session.confirm_options() {
            Ok(line_id) => self.line_added(line_id),
            Err(e) => {
                warn!(error = %e, "Confirm rejected");
                self.set_status(StatusBar::error(e.to_string()));
            }
        }
    }

    fn line_added(&mut self, line_id: CartLineId) {
        let Some(line) = self.session.cart_line(line_id) else {
            return;
        };
        let message = format!(
            "Added {} ({})",
            line.display_lines().join(" "),
            line.display_price()
        );
        self.cart_state.select(Some(self.session.cart().len() - 1));
        self.set_status(StatusBar::success(message));
    }

    fn remove_highlighted_line(&mut self) {
        let Some(line_id) = self
            .cart_state
            .selected()
            .and_then(|index| self.session.cart().get(index))
            .map(CartLine::id)
        else {
            return;
        };

        match self.session.remove(line_id) {
            Ok(line) => {
                let remaining = self.session.cart().len();
                let cursor = self.cart_state.selected().map(|i| i.min(remaining.saturating_sub(1)));
                self.cart_state.select(cursor.filter(|_| remaining > 0));
                self.set_status(StatusBar::success(format!(
                    "Removed {}",
                    line.base_item().name()
                )));
            }
            Err(e) => {
                warn!(error = %e, "Remove rejected");
                self.set_status(StatusBar::error(e.to_string()));
            }
        }
    }

    fn request_quit(&mut self) -> EventResult {
        let lines = self.session.cart().len();
        if self.confirm_quit && lines > 0 {
            self.quit_pending = true;
            self.set_status(StatusBar::warning(format!(
                "{lines} line(s) in the cart ({}). Press q again to quit",
                self.session.formatted_total()
            )));
            EventResult::Consumed
        } else {
            EventResult::Exit
        }
    }
}

/// Renders header, the three panes, status and footer, plus the picker overlay.
pub struct OrderScreen<'a> {
    state: &'a OrderScreenState,
    theme: &'a Theme,
    menu_source: &'a str,
    show_footer: bool,
}

impl<'a> OrderScreen<'a> {
    /// Creates the widget over a screen state.
    #[must_use]
    pub const fn new(state: &'a OrderScreenState, theme: &'a Theme, menu_source: &'a str) -> Self {
        Self {
            state,
            theme,
            menu_source,
            show_footer: true,
        }
    }

    /// Sets whether the keybinding footer is drawn.
    #[must_use]
    pub const fn show_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }
}

impl Widget for OrderScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let session = &state.session;
        let picker_open = session.picker().is_visible();

        let [header_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(u16::from(self.show_footer)),
        ])
        .areas(area);

        HeaderBar::new(crate::NAME, crate::VERSION)
            .menu_source(self.menu_source)
            .style(HeaderBarStyle::from_theme(self.theme))
            .render(header_area, buf);

        let [categories_area, items_area, cart_area] = Layout::horizontal([
            Constraint::Percentage(22),
            Constraint::Percentage(39),
            Constraint::Percentage(39),
        ])
        .areas(body_area);

        let focused = |pane: OrderFocus| !picker_open && state.focus == pane;

        let mut category_state = state.category_state;
        CategoryList::new(session.panels(), self.theme)
            .focused(focused(OrderFocus::Categories))
            .render(categories_area, buf, &mut category_state);

        let mut items_state = state.items_state;
        MenuItemsList::new(session.selected_panel(), self.theme)
            .focused(focused(OrderFocus::Items))
            .render(items_area, buf, &mut items_state);

        let total = session.formatted_total();
        let mut cart_state = state.cart_state;
        CartPane::new(session.cart(), &total, self.theme)
            .focused(focused(OrderFocus::Cart))
            .render(cart_area, buf, &mut cart_state);

        let status = state
            .status
            .clone()
            .summary(format!("{} line(s) · {total}", session.cart().len()));
        (&status).render(status_area, buf);

        if self.show_footer {
            let surcharge = picker_open.then(|| format!("add-ons + {}", session.picker().surcharge()));
            FooterBar::new(state.active_keybinds())
                .focus_context(state.focus_context())
                .right_info(surcharge.as_deref())
                .style(FooterBarStyle::from_theme(self.theme))
                .render(footer_area, buf);
        }

        if picker_open {
            OptionPickerModal::new(session.picker(), state.picker_cursor, self.theme)
                .render(body_area, buf);
        }
    }
}
