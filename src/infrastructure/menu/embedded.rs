//! Menu compiled into the binary.

use async_trait::async_trait;

use crate::domain::entities::{MenuCategory, MenuItem, MenuItemId, Price};
use crate::domain::errors::CatalogLoadError;
use crate::domain::ports::MenuSourcePort;

const CATEGORIES: &[(u32, &str)] = &[
    (0, "Burgers"),
    (1, "Sides"),
    (2, "Drinks"),
    (3, "Desserts"),
    (4, "Extras"),
];

const BURGER_TOPPINGS: &[u32] = &[22, 23, 24, 25];

/// `(id, name, category, price in cents, options)`. IDs equal positions.
const ITEMS: &[(u32, &str, u32, u64, &[u32])] = &[
    (0, "Hamburger", 0, 425, BURGER_TOPPINGS),
    (1, "Cheeseburger", 0, 475, &[21, 22, 23, 24, 25]),
    (2, "Double Burger", 0, 650, &[20, 21, 22, 23, 24, 25]),
    (3, "Chicken Sandwich", 0, 550, &[22, 24, 25]),
    (4, "Veggie Burger", 0, 500, &[21, 22, 23, 24, 25]),
    (5, "French Fries", 1, 225, &[19]),
    (6, "Onion Rings", 1, 275, &[]),
    (7, "Side Salad", 1, 300, &[]),
    (8, "Cola", 2, 175, &[]),
    (9, "Lemonade", 2, 195, &[]),
    (10, "Iced Tea", 2, 175, &[]),
    (11, "Milkshake", 2, 350, &[18]),
    (12, "Coffee", 2, 150, &[17]),
    (13, "Apple Pie", 3, 199, &[]),
    (14, "Sundae", 3, 249, &[16, 18]),
    (15, "Cookie", 3, 99, &[]),
    (16, "Hot Fudge", 4, 50, &[]),
    (17, "Extra Shot", 4, 60, &[]),
    (18, "Whipped Cream", 4, 0, &[]),
    (19, "Cheese Sauce", 4, 75, &[]),
    (20, "Bacon", 4, 100, &[]),
    (21, "Extra Cheese", 4, 50, &[]),
    (22, "Lettuce", 4, 0, &[]),
    (23, "Pickles", 4, 0, &[]),
    (24, "Onions", 4, 0, &[]),
    (25, "Tomatoes", 4, 0, &[]),
];

/// Serves the built-in burger stand menu. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMenuSource;

impl EmbeddedMenuSource {
    /// Creates the embedded source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the built-in items.
    #[must_use]
    pub fn items() -> Vec<MenuItem> {
        ITEMS
            .iter()
            .map(|&(id, name, category, price, options)| {
                MenuItem::new(id, name, category, Price::from_cents(price))
                    .with_options(options.iter().copied().map(MenuItemId))
            })
            .collect()
    }

    /// Returns the built-in categories.
    #[must_use]
    pub fn categories() -> Vec<MenuCategory> {
        CATEGORIES
            .iter()
            .map(|&(id, name)| MenuCategory::new(id, name))
            .collect()
    }
}

#[async_trait]
impl MenuSourcePort for EmbeddedMenuSource {
    async fn fetch_items(&self) -> Result<Vec<MenuItem>, CatalogLoadError> {
        Ok(Self::items())
    }

    async fn fetch_categories(&self) -> Result<Vec<MenuCategory>, CatalogLoadError> {
        Ok(Self::categories())
    }

    fn describe(&self) -> String {
        "embedded menu".to_string()
    }
}
