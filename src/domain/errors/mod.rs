//! Domain error types.

mod catalog_error;
mod order_error;

pub use catalog_error::{CatalogLoadError, LookupError};
pub use order_error::{InvalidOperation, SessionError};
