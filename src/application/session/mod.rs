//! In-memory ordering state: category panels, option picker and cart.

mod cart_line;
mod category_panel;
mod option_picker;
mod order_session;

pub use cart_line::{CartLine, LINE_BREAK};
pub use category_panel::CategoryPanel;
pub use option_picker::{ConfirmedSelection, OptionPicker, PickerEntry};
pub use order_session::{AddOutcome, OrderSession};

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use crate::domain::entities::{Menu, MenuCategory, MenuItem, MenuItemId, Price};

    pub const HAMBURGER: MenuItemId = MenuItemId(0);
    pub const FRIES: MenuItemId = MenuItemId(1);
    pub const COLA: MenuItemId = MenuItemId(2);
    pub const CHEESE_SAUCE: MenuItemId = MenuItemId(19);
    pub const LETTUCE: MenuItemId = MenuItemId(22);
    pub const PICKLES: MenuItemId = MenuItemId(23);
    pub const ONIONS: MenuItemId = MenuItemId(24);
    pub const TOMATOES: MenuItemId = MenuItemId(25);

    /// Burgers, sides, drinks and a condiments category.
    pub fn burger_menu() -> Arc<Menu> {
        let categories = vec![
            MenuCategory::new(0_u32, "Burgers"),
            MenuCategory::new(1_u32, "Sides"),
            MenuCategory::new(2_u32, "Drinks"),
            MenuCategory::new(3_u32, "Condiments"),
        ];
        let items = vec![
            MenuItem::new(HAMBURGER, "Hamburger", 0_u32, Price::from_cents(425))
                .with_options([LETTUCE, PICKLES, ONIONS, TOMATOES]),
            MenuItem::new(FRIES, "French Fries", 1_u32, Price::from_cents(225))
                .with_options([CHEESE_SAUCE]),
            MenuItem::new(COLA, "Cola", 2_u32, Price::from_cents(175)),
            MenuItem::new(CHEESE_SAUCE, "Cheese Sauce", 3_u32, Price::from_cents(75)),
            MenuItem::new(LETTUCE, "Lettuce", 3_u32, Price::ZERO),
            MenuItem::new(PICKLES, "Pickles", 3_u32, Price::ZERO),
            MenuItem::new(ONIONS, "Onions", 3_u32, Price::ZERO),
            MenuItem::new(TOMATOES, "Tomatoes", 3_u32, Price::ZERO),
        ];
        Arc::new(Menu::new(items, categories).expect("fixture menu is consistent"))
    }
}
