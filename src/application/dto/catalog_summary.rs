use crate::domain::entities::Menu;

/// Counts reported by the menu check mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct CatalogSummary {
    pub source: String,
    pub categories: usize,
    pub items: usize,
    pub option_links: usize,
    pub items_with_options: usize,
}

impl CatalogSummary {
    /// Counts the records of a loaded menu.
    #[must_use]
    pub fn from_menu(source: impl Into<String>, menu: &Menu) -> Self {
        Self {
            source: source.into(),
            categories: menu.categories().len(),
            items: menu.items().len(),
            option_links: menu.option_link_count(),
            items_with_options: menu.items().iter().filter(|item| item.has_options()).count(),
        }
    }
}

impl std::fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "menu OK from {}: {} categories, {} items ({} with add-ons, {} add-on links)",
            self.source, self.categories, self.items, self.items_with_options, self.option_links
        )
    }
}
