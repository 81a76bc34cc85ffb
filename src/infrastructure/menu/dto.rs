use serde::Deserialize;

use crate::domain::entities::{MenuCategory, MenuItem, MenuItemId, Price};

/// Menu API item record.
#[derive(Debug, Deserialize)]
pub struct MenuItemResponse {
    /// Item ID.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Category the item is listed under.
    pub type_id: u32,
    /// Base price in cents.
    pub price: u64,
    /// Add-on item IDs; absent for plain items.
    #[serde(default)]
    pub options: Option<Vec<u32>>,
}

impl From<MenuItemResponse> for MenuItem {
    fn from(response: MenuItemResponse) -> Self {
        Self::new(
            response.id,
            response.name,
            response.type_id,
            Price::from_cents(response.price),
        )
        .with_options(response.options.unwrap_or_default().into_iter().map(MenuItemId))
    }
}

/// Menu API category record.
#[derive(Debug, Deserialize)]
pub struct MenuTypeResponse {
    /// Category ID.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl From<MenuTypeResponse> for MenuCategory {
    fn from(response: MenuTypeResponse) -> Self {
        Self::new(response.id, response.name)
    }
}
