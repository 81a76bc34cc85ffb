//! Root aggregate of the ordering screen.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{CartLine, CategoryPanel, ConfirmedSelection, OptionPicker};
use crate::domain::entities::{CartLineId, Menu, MenuItemId, Price};
use crate::domain::errors::{InvalidOperation, SessionError};

/// What activating a menu item did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item had no options and is now in the cart.
    Added(CartLineId),
    /// The item has options; the picker is open and nothing was added yet.
    PickerOpened,
}

/// One ordering session: category panels, option picker and cart.
///
/// A session can only be built from a loaded `Menu`, so every catalog read it
/// performs goes against complete data. All operations are synchronous and
/// either succeed completely or leave the session untouched.
#[derive(Debug)]
pub struct OrderSession {
    menu: Arc<Menu>,
    panels: Vec<CategoryPanel>,
    picker: OptionPicker,
    cart: Vec<CartLine>,
    next_line_id: CartLineId,
}

impl OrderSession {
    /// Builds one panel per category, in catalog order, none selected.
    #[must_use]
    pub fn new(menu: Arc<Menu>) -> Self {
        let panels = menu
            .categories()
            .iter()
            .map(|category| CategoryPanel::new(Arc::clone(&menu), category.clone()))
            .collect::<Vec<_>>();

        info!(
            categories = panels.len(),
            items = menu.items().len(),
            "Order session started"
        );

        Self {
            menu,
            panels,
            picker: OptionPicker::new(),
            cart: Vec::new(),
            next_line_id: CartLineId(1),
        }
    }

    /// Returns the category panels in catalog order.
    #[must_use]
    pub fn panels(&self) -> &[CategoryPanel] {
        &self.panels
    }

    /// Returns the currently selected panel, if any.
    #[must_use]
    pub fn selected_panel(&self) -> Option<&CategoryPanel> {
        self.panels.iter().find(|panel| panel.is_selected())
    }

    /// Returns the position of the currently selected panel, if any.
    #[must_use]
    pub fn selected_panel_index(&self) -> Option<usize> {
        self.panels.iter().position(CategoryPanel::is_selected)
    }

    /// Selects one panel and deselects every other one.
    ///
    /// # Errors
    /// Returns `InvalidOperation::UnknownCategory` for an out-of-range index.
    pub fn select_category(&mut self, index: usize) -> Result<(), InvalidOperation> {
        if index >= self.panels.len() {
            return Err(InvalidOperation::UnknownCategory { index });
        }
        for (position, panel) in self.panels.iter_mut().enumerate() {
            panel.set_selected(position == index);
        }
        debug!(index, category = %self.panels[index].name(), "Category selected");
        Ok(())
    }

    /// Returns the option picker.
    #[must_use]
    pub const fn picker(&self) -> &OptionPicker {
        &self.picker
    }

    /// Returns the cart lines in the order they were added.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Looks up a cart line by identity.
    #[must_use]
    pub fn cart_line(&self, id: CartLineId) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id() == id)
    }

    /// Activates an item: straight into the cart, or through the picker when
    /// it has options.
    ///
    /// # Errors
    /// Returns `SessionError` if the item does not exist.
    pub fn add_item(&mut self, item_id: MenuItemId) -> Result<AddOutcome, SessionError> {
        if self.menu.item(item_id)?.has_options() {
            self.add_with_options(item_id)?;
            Ok(AddOutcome::PickerOpened)
        } else {
            self.add_direct(item_id).map(AddOutcome::Added)
        }
    }

    /// Appends a line for an item without options.
    ///
    /// # Errors
    /// Returns `InvalidOperation::ItemHasOptions` for items with options, or a
    /// lookup error for unknown items.
    pub fn add_direct(&mut self, item_id: MenuItemId) -> Result<CartLineId, SessionError> {
        let item = self.menu.item(item_id)?;
        if item.has_options() {
            warn!(item = %item_id, "Rejected direct add of item with options");
            return Err(InvalidOperation::ItemHasOptions { item: item_id }.into());
        }
        self.push_line(item_id, &[])
    }

    /// Opens the picker for an item with options. Nothing is added until the
    /// picker is confirmed.
    ///
    /// # Errors
    /// Returns `InvalidOperation::ItemHasNoOptions` for items without options,
    /// or a lookup error for unknown items and options.
    pub fn add_with_options(&mut self, item_id: MenuItemId) -> Result<&OptionPicker, SessionError> {
        let item = self.menu.item(item_id)?;
        if !item.has_options() {
            warn!(item = %item_id, "Rejected option pick for item without options");
            return Err(InvalidOperation::ItemHasNoOptions { item: item_id }.into());
        }
        self.picker.open(&self.menu, item)?;
        Ok(&self.picker)
    }

    /// Flips one option in the open picker and returns its new state.
    ///
    /// # Errors
    /// Returns `InvalidOperation` if the picker is closed or lacks the option.
    pub fn toggle_option(&mut self, option_id: MenuItemId) -> Result<bool, InvalidOperation> {
        self.picker.toggle(option_id)
    }

    /// Confirms the picker and appends the resulting line.
    ///
    /// # Errors
    /// Returns `InvalidOperation::PickerClosed` if no pick is pending.
    pub fn confirm_options(&mut self) -> Result<CartLineId, SessionError> {
        let selection = self.picker.confirm()?;
        self.commit(selection)
    }

    /// Closes the picker without touching the cart.
    pub fn cancel_options(&mut self) {
        self.picker.cancel();
    }

    /// Appends the line described by a confirmed selection.
    ///
    /// # Errors
    /// Returns a lookup error if the selection names an unknown item or an
    /// option the item does not offer.
    pub fn commit(&mut self, selection: ConfirmedSelection) -> Result<CartLineId, SessionError> {
        self.push_line(selection.item_id, &selection.chosen_option_ids)
    }

    fn push_line(
        &mut self,
        item_id: MenuItemId,
        chosen_option_ids: &[MenuItemId],
    ) -> Result<CartLineId, SessionError> {
        let id = self.next_line_id;
        let line = CartLine::new(id, Arc::clone(&self.menu), item_id, chosen_option_ids)?;

        debug!(
            line = %id,
            item = %item_id,
            options = chosen_option_ids.len(),
            price = %line.price(),
            "Cart line added"
        );

        self.cart.push(line);
        self.next_line_id = id.next();
        Ok(id)
    }

    /// Removes exactly the line with this identity.
    ///
    /// # Errors
    /// Returns `InvalidOperation::UnknownCartLine` if it is not in the cart.
    pub fn remove(&mut self, line_id: CartLineId) -> Result<CartLine, InvalidOperation> {
        let position = self
            .cart
            .iter()
            .position(|line| line.id() == line_id)
            .ok_or(InvalidOperation::UnknownCartLine { line: line_id })?;
        let line = self.cart.remove(position);
        debug!(line = %line_id, remaining = self.cart.len(), "Cart line removed");
        Ok(line)
    }

    /// Sum of every line price; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.iter().map(CartLine::price).sum()
    }

    /// The total formatted as `$ D.CC`.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        self.total().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::fixtures::{
        CHEESE_SAUCE, COLA, FRIES, HAMBURGER, LETTUCE, ONIONS, PICKLES, TOMATOES, burger_menu,
    };
    use crate::domain::entities::{MenuCategory, MenuItem};
    use crate::domain::errors::LookupError;
    use test_case::test_case;

    fn session() -> OrderSession {
        OrderSession::new(burger_menu())
    }

    #[test]
    fn test_session_builds_one_panel_per_category() {
        let session = session();

        let names: Vec<&str> = session.panels().iter().map(CategoryPanel::name).collect();
        assert_eq!(names, vec!["Burgers", "Sides", "Drinks", "Condiments"]);
        assert!(session.selected_panel().is_none());
        assert!(session.cart().is_empty());
        assert!(!session.picker().is_visible());
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let session = session();

        assert!(session.total().is_zero());
        assert_eq!(session.formatted_total(), "$ 0.00");
    }

    #[test]
    fn test_add_direct_appends_base_price_line() {
        let mut session = session();

        let id = session.add_direct(COLA).unwrap();

        assert_eq!(session.cart().len(), 1);
        let line = session.cart_line(id).unwrap();
        assert_eq!(line.price().cents(), 175);
        assert!(line.chosen_option_ids().is_empty());
    }

    #[test]
    fn test_add_direct_rejects_item_with_options() {
        let mut session = session();

        let err = session.add_direct(HAMBURGER).unwrap_err();

        assert_eq!(
            err,
            SessionError::Invalid(InvalidOperation::ItemHasOptions { item: HAMBURGER })
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_with_options_rejects_item_without_options() {
        let mut session = session();

        let err = session.add_with_options(COLA).unwrap_err();

        assert_eq!(
            err,
            SessionError::Invalid(InvalidOperation::ItemHasNoOptions { item: COLA })
        );
        assert!(!session.picker().is_visible());
    }

    #[test]
    fn test_unknown_item_is_a_lookup_error() {
        let mut session = session();

        assert_eq!(
            session.add_item(MenuItemId(99)),
            Err(SessionError::Lookup(LookupError::UnknownItem {
                id: MenuItemId(99)
            }))
        );
    }

    #[test]
    fn test_add_with_options_waits_for_confirm() {
        let mut session = session();

        let picker = session.add_with_options(HAMBURGER).unwrap();
        assert!(picker.is_visible());
        assert_eq!(picker.entries().len(), 4);
        assert!(session.cart().is_empty());

        session.toggle_option(PICKLES).unwrap();
        assert!(session.cart().is_empty());

        session.confirm_options().unwrap();
        assert_eq!(session.cart().len(), 1);
        assert!(!session.picker().is_visible());
    }

    #[test]
    fn test_cancel_leaves_cart_unchanged() {
        let mut session = session();
        session.add_direct(COLA).unwrap();

        session.add_with_options(HAMBURGER).unwrap();
        session.toggle_option(LETTUCE).unwrap();
        session.cancel_options();

        assert_eq!(session.cart().len(), 1);
        assert!(!session.picker().is_visible());
        assert_eq!(
            session.confirm_options(),
            Err(SessionError::Invalid(InvalidOperation::PickerClosed))
        );
    }

    #[test]
    fn test_confirm_with_nothing_ticked_adds_base_line() {
        let mut session = session();

        session.add_with_options(HAMBURGER).unwrap();
        let id = session.confirm_options().unwrap();

        let line = session.cart_line(id).unwrap();
        assert!(line.chosen_option_ids().is_empty());
        assert_eq!(line.price().cents(), 425);
    }

    #[test]
    fn test_hamburger_with_pickles_scenario() {
        let mut session = session();

        assert_eq!(session.add_item(HAMBURGER), Ok(AddOutcome::PickerOpened));
        let candidates: Vec<MenuItemId> = session
            .picker()
            .entries()
            .iter()
            .map(|entry| entry.id())
            .collect();
        assert_eq!(candidates, vec![LETTUCE, PICKLES, ONIONS, TOMATOES]);

        session.toggle_option(PICKLES).unwrap();
        let id = session.confirm_options().unwrap();

        let line = session.cart_line(id).unwrap();
        assert_eq!(line.price().cents(), 425);
        assert_eq!(line.display_name(), "Hamburger<br/>+ Pickles");
        assert_eq!(session.total().cents(), 425);
        assert_eq!(session.formatted_total(), "$ 4.25");
    }

    #[test]
    fn test_total_sums_lines() {
        let mut session = session();
        session.add_with_options(HAMBURGER).unwrap();
        session.confirm_options().unwrap();
        session
            .commit(ConfirmedSelection {
                item_id: FRIES,
                chosen_option_ids: vec![CHEESE_SAUCE],
            })
            .unwrap();
        session.add_direct(CHEESE_SAUCE).unwrap();

        assert_eq!(session.total().cents(), 425 + 300 + 75);

        let mut session = self::session();
        session.add_with_options(HAMBURGER).unwrap();
        session.confirm_options().unwrap();
        session.add_direct(CHEESE_SAUCE).unwrap();
        assert_eq!(session.total().cents(), 500);
        assert_eq!(session.formatted_total(), "$ 5.00");
    }

    #[test]
    fn test_add_item_dispatches_direct_for_plain_items() {
        let mut session = session();

        let outcome = session.add_item(COLA).unwrap();

        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert!(!session.picker().is_visible());
        assert_eq!(session.cart().len(), 1);
    }

    #[test_case(None, 2 ; "from_nothing_selected")]
    #[test_case(Some(0), 2 ; "from_other_panel")]
    #[test_case(Some(2), 2 ; "reselect_same_panel")]
    #[test_case(Some(3), 0 ; "switch_back_to_first")]
    fn test_select_category_is_exclusive(initial: Option<usize>, target: usize) {
        let mut session = session();
        if let Some(index) = initial {
            session.select_category(index).unwrap();
        }

        session.select_category(target).unwrap();

        let flags: Vec<bool> = session
            .panels()
            .iter()
            .map(CategoryPanel::is_selected)
            .collect();
        assert_eq!(flags.iter().filter(|&&selected| selected).count(), 1);
        assert!(flags[target]);
        assert_eq!(session.selected_panel_index(), Some(target));
    }

    #[test]
    fn test_select_unknown_category_keeps_selection() {
        let mut session = session();
        session.select_category(1).unwrap();

        assert_eq!(
            session.select_category(9),
            Err(InvalidOperation::UnknownCategory { index: 9 })
        );
        assert_eq!(session.selected_panel_index(), Some(1));
    }

    #[test]
    fn test_remove_targets_one_identical_line() {
        let mut session = session();
        let first = session.add_direct(COLA).unwrap();
        let second = session.add_direct(COLA).unwrap();
        assert_ne!(first, second);

        let removed = session.remove(second).unwrap();

        assert_eq!(removed.id(), second);
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart()[0].id(), first);
        assert_eq!(session.total().cents(), 175);
    }

    #[test]
    fn test_remove_unknown_line() {
        let mut session = session();
        let id = session.add_direct(COLA).unwrap();
        session.remove(id).unwrap();

        assert_eq!(
            session.remove(id).map(|line| line.id()),
            Err(InvalidOperation::UnknownCartLine { line: id })
        );
    }

    #[test]
    fn test_total_saturates_on_huge_prices() {
        let menu = Menu::new(
            vec![MenuItem::new(0_u32, "Gold Burger", 0_u32, Price::from_cents(u64::MAX))],
            vec![MenuCategory::new(0_u32, "Burgers")],
        )
        .unwrap();
        let mut session = OrderSession::new(Arc::new(menu));
        session.add_direct(MenuItemId(0)).unwrap();
        session.add_direct(MenuItemId(0)).unwrap();

        assert_eq!(session.total(), Price::from_cents(u64::MAX));
        assert_eq!(session.formatted_total(), "$ 184467440737095516.15");
    }

    #[test]
    fn test_commit_rejects_options_not_offered() {
        let mut session = session();

        let err = session
            .commit(ConfirmedSelection {
                item_id: HAMBURGER,
                chosen_option_ids: vec![CHEESE_SAUCE],
            })
            .unwrap_err();

        assert!(matches!(err, SessionError::Lookup(_)));
        assert!(session.cart().is_empty());
    }
}
