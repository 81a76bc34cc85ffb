//! Per-category view of the catalog.

use std::sync::Arc;

use crate::domain::entities::{Menu, MenuCategory, MenuItem};

/// The items of one category plus its selection flag.
///
/// The item list is filtered once at construction; the catalog never changes
/// afterwards. Selection is driven by `OrderSession::select_category`, which
/// keeps at most one panel selected.
#[derive(Debug, Clone)]
pub struct CategoryPanel {
    menu: Arc<Menu>,
    category: MenuCategory,
    positions: Vec<usize>,
    selected: bool,
}

impl CategoryPanel {
    pub(crate) fn new(menu: Arc<Menu>, category: MenuCategory) -> Self {
        let positions = menu.positions_in(category.id());
        Self {
            menu,
            category,
            positions,
            selected: false,
        }
    }

    /// Returns the category name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.category.name()
    }

    /// Returns the items of this category in catalog order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &MenuItem> {
        let items = self.menu.items();
        self.positions.iter().map(move |&position| &items[position])
    }

    /// Returns the item at a position within this panel.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.positions
            .get(index)
            .and_then(|&position| self.menu.item_at(position))
    }

    /// Returns the number of items in this panel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether the category has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns whether this panel is the selected one.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::fixtures::{COLA, burger_menu};

    #[test]
    fn test_panel_filters_items_by_category() {
        let menu = burger_menu();
        let category = menu.categories()[3].clone();
        let panel = CategoryPanel::new(Arc::clone(&menu), category);

        let names: Vec<&str> = panel.items().map(MenuItem::name).collect();
        assert_eq!(
            names,
            vec!["Cheese Sauce", "Lettuce", "Pickles", "Onions", "Tomatoes"]
        );
        assert_eq!(panel.len(), 5);
        assert!(!panel.is_selected());
    }

    #[test]
    fn test_panel_item_by_index() {
        let menu = burger_menu();
        let category = menu.categories()[2].clone();
        let panel = CategoryPanel::new(menu, category);

        assert_eq!(panel.name(), "Drinks");
        assert_eq!(panel.item(0).map(MenuItem::id), Some(COLA));
        assert!(panel.item(1).is_none());
    }
}
