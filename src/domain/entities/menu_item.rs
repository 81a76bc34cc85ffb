//! Menu item entity.

use serde::{Deserialize, Serialize};

use super::{CategoryId, Price};

/// Unique identifier for a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl MenuItemId {
    /// Returns the underlying value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MenuItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An orderable product.
///
/// `option_ids` point at other items that can be added on top of this one
/// (condiments, extra toppings). An item with no options goes straight into
/// the cart when activated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    category_id: CategoryId,
    price: Price,
    option_ids: Vec<MenuItemId>,
}

impl MenuItem {
    /// Creates a new item without add-on options.
    #[must_use]
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        category_id: impl Into<CategoryId>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            price,
            option_ids: Vec::new(),
        }
    }

    /// Sets the add-on options, in display order.
    #[must_use]
    pub fn with_options(mut self, option_ids: impl IntoIterator<Item = MenuItemId>) -> Self {
        self.option_ids = option_ids.into_iter().collect();
        self
    }

    /// Returns the item ID.
    #[must_use]
    pub const fn id(&self) -> MenuItemId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category this item belongs to.
    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Returns the base price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the add-on option IDs.
    #[must_use]
    pub fn option_ids(&self) -> &[MenuItemId] {
        &self.option_ids
    }

    /// Returns whether activating this item needs the option picker.
    #[must_use]
    pub fn has_options(&self) -> bool {
        !self.option_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = MenuItem::new(8_u32, "Cola", 2_u32, Price::from_cents(175));

        assert_eq!(item.id().as_u32(), 8);
        assert_eq!(item.name(), "Cola");
        assert_eq!(item.category_id(), CategoryId(2));
        assert_eq!(item.price().cents(), 175);
        assert!(!item.has_options());
    }

    #[test]
    fn test_item_with_options() {
        let item = MenuItem::new(0_u32, "Hamburger", 0_u32, Price::from_cents(425))
            .with_options([22, 23, 24, 25].map(MenuItemId));

        assert!(item.has_options());
        assert_eq!(item.option_ids().len(), 4);
        assert_eq!(item.option_ids()[1], MenuItemId(23));
    }
}
