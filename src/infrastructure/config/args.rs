use super::app_config::{LogLevel, MenuSourceKind};
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Each one overrides the matching config file value.
#[derive(Debug, Parser)]
#[command(
    name = "orderpad",
    version,
    about = "A terminal point-of-sale ordering screen",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Where to load the menu from.
    #[arg(long, value_enum)]
    pub menu_source: Option<MenuSourceKind>,

    /// Menu API base URL.
    #[arg(long, value_name = "URL", env = "ORDERPAD_MENU_HOST")]
    pub menu_host: Option<String>,

    /// Menu API request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Load and validate the menu, print a summary and exit.
    #[arg(long)]
    pub check_menu: bool,
}
