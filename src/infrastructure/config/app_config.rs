//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::infrastructure::menu::{DEFAULT_CATEGORIES_PATH, DEFAULT_ITEMS_PATH, DEFAULT_MENU_HOST};

const APP_NAME: &str = "orderpad";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MenuSourceKind {
    /// Two reads from the menu API.
    #[default]
    Http,
    /// The menu compiled into the binary.
    Embedded,
}

impl std::fmt::Display for MenuSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Embedded => write!(f, "embedded"),
        }
    }
}

/// Application configuration: `config.toml` merged with CLI arguments.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Validate the menu and exit instead of starting the UI.
    #[serde(skip)]
    pub check_menu: bool,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Menu source configuration.
    #[serde(default)]
    pub menu: MenuConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Menu source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Which source to load from.
    #[serde(default)]
    pub source: MenuSourceKind,

    /// Menu API base URL.
    #[serde(default = "default_menu_host")]
    pub host: String,

    /// Path of the items endpoint.
    #[serde(default = "default_items_path")]
    pub items_path: String,

    /// Path of the categories endpoint.
    #[serde(default = "default_categories_path")]
    pub categories_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            source: MenuSourceKind::default(),
            host: default_menu_host(),
            items_path: default_items_path(),
            categories_path: default_categories_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the keybinding footer.
    #[serde(default = "default_true")]
    pub show_footer: bool,

    /// Ask before quitting while the cart holds lines.
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_footer: true,
            confirm_quit: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_menu_host() -> String {
    DEFAULT_MENU_HOST.to_string()
}

fn default_items_path() -> String {
    DEFAULT_ITEMS_PATH.to_string()
}

fn default_categories_path() -> String {
    DEFAULT_CATEGORIES_PATH.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(source) = args.menu_source {
            self.menu.source = source;
        }
        if let Some(host) = args.menu_host {
            self.menu.host = host;
        }
        if let Some(timeout) = args.request_timeout {
            self.menu.timeout_secs = timeout;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        self.check_menu = args.check_menu;
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("orderpad.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            check_menu: false,
            log_level: LogLevel::Info,
            menu: MenuConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r#"
            log_level = "debug"

            [menu]
            source = "embedded"
            host = "http://pos-server:8080"

            [ui]
            confirm_quit = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.menu.source, MenuSourceKind::Embedded);
        assert_eq!(config.menu.host, "http://pos-server:8080");
        assert_eq!(config.menu.items_path, "/menuitems");
        assert_eq!(config.menu.timeout_secs, 10);
        assert!(!config.ui.confirm_quit);
        assert!(config.ui.show_footer);
        assert_eq!(config.theme.accent_color, "Yellow");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.menu.source, MenuSourceKind::Http);
        assert_eq!(config.menu.host, DEFAULT_MENU_HOST);
        assert_eq!(config.menu.categories_path, "/menutypes");
        assert!(config.ui.confirm_quit);
        assert!(!config.check_menu);
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [menu]
            host = "http://from-file:1"
            timeout_secs = 3
        "#,
        )
        .unwrap();
        let args = CliArgs::parse_from([
            "orderpad",
            "--menu-source",
            "embedded",
            "--menu-host",
            "http://from-cli:2",
            "--log-level",
            "warn",
            "--check-menu",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.menu.source, MenuSourceKind::Embedded);
        assert_eq!(config.menu.host, "http://from-cli:2");
        assert_eq!(config.menu.timeout_secs, 3);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.check_menu);
    }
}
