//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Menu catalog sources.
pub mod menu;

pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel, MenuConfig, MenuSourceKind};
pub use menu::{EmbeddedMenuSource, HttpMenuClient};
