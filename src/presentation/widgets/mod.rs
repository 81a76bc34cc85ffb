//! Reusable widgets.

mod cart_pane;
mod category_list;
mod footer_bar;
mod header_bar;
mod menu_items;
mod status_bar;

pub use cart_pane::CartPane;
pub use category_list::CategoryList;
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use menu_items::{MenuItemsList, OPTIONS_HINT};
pub use status_bar::{StatusBar, StatusLevel};
