//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{Menu, MenuCategory, MenuItem, Price};
pub use errors::{CatalogLoadError, InvalidOperation, LookupError, SessionError};
pub use ports::MenuSourcePort;
