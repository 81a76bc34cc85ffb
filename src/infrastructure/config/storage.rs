//! On-disk `config.toml` handling.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

/// File name looked up inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Reading or seeding the configuration file failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No per-user configuration directory exists on this platform.
    #[error("no configuration directory is available for this user")]
    NoConfigDir,
    /// Filesystem access to `path` failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// The default configuration could not be rendered as TOML.
    #[error("cannot render default configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Resolves and reads the configuration file, seeding it with defaults on first run.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Uses the platform configuration directory for orderpad.
    ///
    /// # Errors
    /// Returns `ConfigError::NoConfigDir` when the platform has none.
    pub fn from_project_dirs() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::at)
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Uses `dir` as the configuration directory.
    #[must_use]
    pub const fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the file to read: `explicit` if given, else `config.toml` in the directory.
    #[must_use]
    pub fn config_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| self.dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration.
    ///
    /// A missing file is created with the defaults. A file that does not parse
    /// is kept as written and the defaults are used for this run.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot be written.
    pub fn load(&self, explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_file(explicit);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                Self::seed(&path, &config)?;
                return Ok(config);
            }
            Err(e) => return Err(ConfigError::io(&path)(e)),
        };

        toml::from_str(&content).or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
            Ok(AppConfig::default())
        })
    }

    fn seed(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let rendered = toml::to_string_pretty(config)?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(ConfigError::io(dir))?;

        let mut staged = NamedTempFile::new_in(dir).map_err(ConfigError::io(dir))?;
        staged
            .write_all(rendered.as_bytes())
            .map_err(ConfigError::io(staged.path()))?;
        staged
            .persist(path)
            .map_err(|e| ConfigError::io(path)(e.error))?;

        info!(path = %path.display(), "Wrote default config file");
        debug!(bytes = rendered.len(), "Default config size");
        Ok(())
    }
}
