//! Domain entity definitions.

mod cart_line_id;
mod category;
mod menu;
mod menu_item;
mod price;

pub use cart_line_id::CartLineId;
pub use category::{CategoryId, MenuCategory};
pub use menu::Menu;
pub use menu_item::{MenuItem, MenuItemId};
pub use price::{CURRENCY_MARKER, Price};
