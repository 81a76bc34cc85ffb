//! Modal state for choosing add-ons before an item enters the cart.

use tracing::debug;

use crate::domain::entities::{Menu, MenuItem, MenuItemId, Price};
use crate::domain::errors::{InvalidOperation, LookupError};

/// One selectable add-on in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    id: MenuItemId,
    name: String,
    price: Price,
    selected: bool,
}

impl PickerEntry {
    /// Returns the option item ID.
    #[must_use]
    pub const fn id(&self) -> MenuItemId {
        self.id
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the surcharge for this option.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns whether the option is ticked.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Outcome of confirming the picker: which item, with which add-ons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedSelection {
    /// The item being added.
    pub item_id: MenuItemId,
    /// Ticked options, in the order the item lists them.
    pub chosen_option_ids: Vec<MenuItemId>,
}

/// The option picker.
///
/// `closed -> open -> (confirm | cancel) -> closed`. Opening while already
/// open replaces the previous candidates; there is never more than one
/// pending pick.
#[derive(Debug, Clone, Default)]
pub struct OptionPicker {
    visible: bool,
    item_id: Option<MenuItemId>,
    item_name: String,
    entries: Vec<PickerEntry>,
}

impl OptionPicker {
    /// Creates a closed picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the picker for an item, one unticked entry per option.
    ///
    /// # Errors
    /// Returns `LookupError` if an option ID does not resolve; the picker is
    /// left as it was.
    pub fn open(&mut self, menu: &Menu, item: &MenuItem) -> Result<&mut Self, LookupError> {
        let entries = item
            .option_ids()
            .iter()
            .map(|&id| {
                menu.item(id).map(|option| PickerEntry {
                    id,
                    name: option.name().to_string(),
                    price: option.price(),
                    selected: false,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.visible {
            debug!(previous = ?self.item_id, "Replacing open option picker");
        }

        self.visible = true;
        self.item_id = Some(item.id());
        self.item_name = item.name().to_string();
        self.entries = entries;

        debug!(item = %item.id(), candidates = self.entries.len(), "Option picker opened");
        Ok(self)
    }

    /// Flips one option and returns its new state.
    ///
    /// # Errors
    /// Returns `InvalidOperation` if the picker is closed or does not offer
    /// this option.
    pub fn toggle(&mut self, option_id: MenuItemId) -> Result<bool, InvalidOperation> {
        if !self.visible {
            return Err(InvalidOperation::PickerClosed);
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == option_id)
            .ok_or(InvalidOperation::UnknownOption { option: option_id })?;
        entry.selected = !entry.selected;
        Ok(entry.selected)
    }

    /// Closes the picker and hands back the ticked options.
    ///
    /// # Errors
    /// Returns `InvalidOperation::PickerClosed` if nothing is being picked.
    pub fn confirm(&mut self) -> Result<ConfirmedSelection, InvalidOperation> {
        let item_id = match (self.visible, self.item_id) {
            (true, Some(item_id)) => item_id,
            _ => return Err(InvalidOperation::PickerClosed),
        };
        let chosen_option_ids = self
            .entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.id)
            .collect();
        self.close();
        Ok(ConfirmedSelection {
            item_id,
            chosen_option_ids,
        })
    }

    /// Closes the picker without producing anything.
    pub fn cancel(&mut self) {
        if self.visible {
            debug!(item = ?self.item_id, "Option picker cancelled");
        }
        self.close();
    }

    fn close(&mut self) {
        self.visible = false;
        self.item_id = None;
        self.item_name.clear();
        self.entries.clear();
    }

    /// Returns whether the picker is open.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the item being configured.
    #[must_use]
    pub const fn item_id(&self) -> Option<MenuItemId> {
        self.item_id
    }

    /// Returns the name of the item being configured.
    #[must_use]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the candidate options in item order.
    #[must_use]
    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    /// Returns the sum of the ticked options' prices.
    #[must_use]
    pub fn surcharge(&self) -> Price {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.price)
            .sum()
    }
}
