//! The immutable menu catalog.

use std::collections::{HashMap, HashSet};

use super::{CategoryId, MenuCategory, MenuItem, MenuItemId};
use crate::domain::errors::LookupError;

/// Every category and item available for ordering.
///
/// Built once from the loaded records and never mutated afterwards. A `Menu`
/// value always satisfies its invariants: item and category IDs are unique,
/// every item points at an existing category and every option ID resolves to
/// an existing item.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    categories: Vec<MenuCategory>,
    positions: HashMap<MenuItemId, usize>,
}

impl Menu {
    /// Validates the records and builds the catalog.
    ///
    /// # Errors
    /// Returns the first broken reference or duplicate ID found.
    pub fn new(items: Vec<MenuItem>, categories: Vec<MenuCategory>) -> Result<Self, LookupError> {
        let mut category_ids = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !category_ids.insert(category.id()) {
                return Err(LookupError::DuplicateCategory { id: category.id() });
            }
        }

        let mut positions = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if positions.insert(item.id(), position).is_some() {
                return Err(LookupError::DuplicateItem { id: item.id() });
            }
        }

        let mut seen_options = HashSet::new();
        for item in &items {
            if !category_ids.contains(&item.category_id()) {
                return Err(LookupError::UnknownCategory {
                    item: item.id(),
                    category: item.category_id(),
                });
            }
            if let Some(&option) = item
                .option_ids()
                .iter()
                .find(|option| !positions.contains_key(option))
            {
                return Err(LookupError::UnknownOption {
                    item: item.id(),
                    option,
                });
            }
            seen_options.clear();
            if let Some(&option) = item
                .option_ids()
                .iter()
                .find(|option| !seen_options.insert(**option))
            {
                return Err(LookupError::DuplicateOption {
                    item: item.id(),
                    option,
                });
            }
        }

        Ok(Self {
            items,
            categories,
            positions,
        })
    }

    /// Returns all items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns all categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Looks up an item by ID.
    ///
    /// # Errors
    /// Returns `LookupError::UnknownItem` if no item has this ID.
    pub fn item(&self, id: MenuItemId) -> Result<&MenuItem, LookupError> {
        self.position(id)
            .map(|position| &self.items[position])
            .ok_or(LookupError::UnknownItem { id })
    }

    /// Returns the catalog position of an item.
    #[must_use]
    pub fn position(&self, id: MenuItemId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Returns the item at a catalog position.
    #[must_use]
    pub fn item_at(&self, position: usize) -> Option<&MenuItem> {
        self.items.get(position)
    }

    /// Returns the catalog positions of the items in a category, in catalog order.
    #[must_use]
    pub fn positions_in(&self, category_id: CategoryId) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category_id() == category_id)
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns the total number of add-on references across all items.
    #[must_use]
    pub fn option_link_count(&self) -> usize {
        self.items.iter().map(|item| item.option_ids().len()).sum()
    }
}
