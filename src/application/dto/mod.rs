//! Data transfer objects for the application layer.

mod catalog_summary;

pub use catalog_summary::CatalogSummary;
