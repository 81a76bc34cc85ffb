//! A single entry of the order.

use std::sync::Arc;

use crate::domain::entities::{CartLineId, Menu, MenuItem, MenuItemId, Price};
use crate::domain::errors::LookupError;

/// Separator placed before each add-on in the markup form of a line's name.
pub const LINE_BREAK: &str = "<br/>";

/// One ordered item plus its chosen add-ons.
///
/// Only the references are stored; price and display strings are computed
/// from the catalog on every read.
#[derive(Debug, Clone)]
pub struct CartLine {
    id: CartLineId,
    menu: Arc<Menu>,
    base: usize,
    options: Vec<usize>,
    quantity: u32,
}

impl CartLine {
    /// Resolves the item and its chosen options against the catalog.
    ///
    /// Options are kept in the order the item lists them, each at most once.
    pub(crate) fn new(
        id: CartLineId,
        menu: Arc<Menu>,
        item_id: MenuItemId,
        chosen_option_ids: &[MenuItemId],
    ) -> Result<Self, LookupError> {
        let base = menu
            .position(item_id)
            .ok_or(LookupError::UnknownItem { id: item_id })?;
        let item = &menu.items()[base];

        if let Some(&option) = chosen_option_ids
            .iter()
            .find(|option| !item.option_ids().contains(option))
        {
            return Err(LookupError::UnknownOption {
                item: item_id,
                option,
            });
        }

        let options = item
            .option_ids()
            .iter()
            .filter(|option| chosen_option_ids.contains(option))
            .map(|&option| {
                menu.position(option).ok_or(LookupError::UnknownOption {
                    item: item_id,
                    option,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            menu,
            base,
            options,
            quantity: 1,
        })
    }

    /// Returns the line identity.
    #[must_use]
    pub const fn id(&self) -> CartLineId {
        self.id
    }

    /// Returns the ordered item.
    #[must_use]
    pub fn base_item(&self) -> &MenuItem {
        &self.menu.items()[self.base]
    }

    /// Returns the chosen add-ons.
    pub fn chosen_options(&self) -> impl ExactSizeIterator<Item = &MenuItem> {
        let items = self.menu.items();
        self.options.iter().map(move |&position| &items[position])
    }

    /// Returns the IDs of the chosen add-ons.
    #[must_use]
    pub fn chosen_option_ids(&self) -> Vec<MenuItemId> {
        self.chosen_options().map(MenuItem::id).collect()
    }

    /// Always 1: repeated items become separate lines.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Base price plus every chosen add-on.
    #[must_use]
    pub fn price(&self) -> Price {
        self.base_item().price() + self.chosen_options().map(MenuItem::price).sum::<Price>()
    }

    /// Item name followed by `<br/>+ option` for each add-on.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.chosen_options()
            .fold(self.base_item().name().to_string(), |mut name, option| {
                name.push_str(LINE_BREAK);
                name.push_str("+ ");
                name.push_str(option.name());
                name
            })
    }

    /// Item name and one `+ option` line per add-on, for plain-text output.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        std::iter::once(self.base_item().name().to_string())
            .chain(self.chosen_options().map(|option| format!("+ {}", option.name())))
            .collect()
    }

    /// Formatted price.
    #[must_use]
    pub fn display_price(&self) -> String {
        self.price().to_string()
    }
}
