//! Catalog loading and lookup error types.

use thiserror::Error;

use crate::domain::entities::{CategoryId, MenuItemId};

/// An ID referenced by the catalog does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum LookupError {
    #[error("menu item {id} does not exist")]
    UnknownItem { id: MenuItemId },

    #[error("menu item {item} references unknown category {category}")]
    UnknownCategory {
        item: MenuItemId,
        category: CategoryId,
    },

    #[error("menu item {item} references unknown option {option}")]
    UnknownOption { item: MenuItemId, option: MenuItemId },

    #[error("menu item {item} lists option {option} more than once")]
    DuplicateOption { item: MenuItemId, option: MenuItemId },

    #[error("menu item id {id} is used more than once")]
    DuplicateItem { id: MenuItemId },

    #[error("category id {id} is used more than once")]
    DuplicateCategory { id: CategoryId },
}

/// The one-time catalog load failed. Fatal: no session can start.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogLoadError {
    #[error("network error while loading {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("menu API returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to parse {endpoint}: {message}")]
    Parse { endpoint: String, message: String },

    #[error("catalog is inconsistent: {0}")]
    Invalid(#[from] LookupError),

    #[error("unexpected catalog error: {message}")]
    Unexpected { message: String },
}

impl CatalogLoadError {
    /// Creates network error.
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Creates parse error.
    #[must_use]
    pub fn parse(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_converts_into_load_error() {
        let err: CatalogLoadError = LookupError::UnknownItem { id: MenuItemId(9) }.into();

        assert!(matches!(err, CatalogLoadError::Invalid(_)));
        assert!(!err.is_network_error());
        assert_eq!(
            err.to_string(),
            "catalog is inconsistent: menu item 9 does not exist"
        );
    }

    #[test]
    fn test_network_classification() {
        assert!(CatalogLoadError::network("/menuitems", "refused").is_network_error());
        assert!(CatalogLoadError::status("/menutypes", 503).is_network_error());
        assert!(!CatalogLoadError::parse("/menutypes", "eof").is_network_error());
    }
}
