//! Menu source port definition.

use async_trait::async_trait;

use crate::domain::entities::{MenuCategory, MenuItem};
use crate::domain::errors::CatalogLoadError;

/// Port for reading the raw menu records.
///
/// Items and categories are two independent reads; the caller merges and
/// validates them into a `Menu`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSourcePort: Send + Sync {
    /// Fetches every menu item.
    async fn fetch_items(&self) -> Result<Vec<MenuItem>, CatalogLoadError>;

    /// Fetches every menu category.
    async fn fetch_categories(&self) -> Result<Vec<MenuCategory>, CatalogLoadError>;

    /// Short description of where the records come from, for logs.
    fn describe(&self) -> String;
}
