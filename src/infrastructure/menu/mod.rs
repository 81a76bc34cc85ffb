//! Menu sources: the menu API client and the built-in menu.

mod client;
mod dto;
mod embedded;

pub use client::{
    DEFAULT_CATEGORIES_PATH, DEFAULT_ITEMS_PATH, DEFAULT_MENU_HOST, HttpMenuClient,
};
pub use embedded::EmbeddedMenuSource;
