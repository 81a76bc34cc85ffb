//! Menu loading use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Menu;
use crate::domain::errors::CatalogLoadError;
use crate::domain::ports::MenuSourcePort;

/// Loads and validates the catalog once, before any session exists.
#[derive(Clone)]
pub struct LoadMenuUseCase {
    source: Arc<dyn MenuSourcePort>,
}

impl LoadMenuUseCase {
    /// Creates new load menu use case.
    #[must_use]
    pub const fn new(source: Arc<dyn MenuSourcePort>) -> Self {
        Self { source }
    }

    /// Reads items and categories concurrently and merges them into a `Menu`.
    ///
    /// # Errors
    /// Returns error if either read fails or the records are inconsistent.
    /// There is no partial menu and no retry.
    pub async fn execute(&self) -> Result<Arc<Menu>, CatalogLoadError> {
        let source = self.source.describe();
        debug!(source = %source, "Loading menu");

        let (items, categories) =
            tokio::try_join!(self.source.fetch_items(), self.source.fetch_categories())
                .inspect_err(|e| warn!(source = %source, error = %e, "Menu read failed"))?;

        debug!(
            items = items.len(),
            categories = categories.len(),
            "Menu records received"
        );

        let menu = Menu::new(items, categories).map_err(|e| {
            warn!(error = %e, "Menu failed validation");
            CatalogLoadError::from(e)
        })?;

        info!(
            source = %source,
            items = menu.items().len(),
            categories = menu.categories().len(),
            "Menu loaded"
        );

        Ok(Arc::new(menu))
    }
}
