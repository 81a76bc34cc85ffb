//! Application configuration.

/// Config file model.
pub mod app_config;
/// Command-line flags.
pub mod args;
/// Config file location and loading.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, MenuConfig, MenuSourceKind, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{CONFIG_FILE_NAME, ConfigError, ConfigStore};
