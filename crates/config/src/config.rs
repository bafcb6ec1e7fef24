//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the snvl dashboard.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snvl_protocol::{Page, WeekStart};

use crate::env::{EnvOverrides, process_env};
use crate::error::{ConfigError, Result};
use crate::persistence::{
    find_config_file, read_config_file, read_config_file_async, write_config_file,
};

/// Default number of rows per table page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Smallest allowed table page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest allowed table page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// The colour palette of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// Returns the other palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_config::Theme;
    ///
    /// assert_eq!(Theme::Dark.toggled(), Theme::Light);
    /// assert_eq!(Theme::Light.toggled(), Theme::Dark);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme {other:?} (expected dark or light)")),
        }
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `snvl_tui=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// File receiving log lines. Nothing is logged when unset, since the
    /// terminal is occupied by the interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// The main configuration struct for the snvl dashboard.
///
/// # Examples
///
/// ```
/// use snvl_config::{Config, Theme};
/// use snvl_protocol::Page;
///
/// let config = Config::default();
/// assert_eq!(config.start_view, Page::Analytics);
/// assert_eq!(config.page_size, 5);
/// assert_eq!(config.theme, Theme::Dark);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The page shown at startup.
    #[serde(default)]
    pub start_view: Page,

    /// Rows per page on the data tables page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// The colour palette.
    #[serde(default)]
    pub theme: Theme,

    /// The first column of the calendar grid.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_view: Page::default(),
            page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::default(),
            week_start: WeekStart::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations and environment.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./snvl.json5` or `./snvl.json`
    /// 2. User: `~/.config/snvl/config.json5` or `~/.config/snvl/config.json`
    ///
    /// If no configuration file is found, the defaults are used. `SNVL_*`
    /// environment variables are applied on top before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, if an environment variable holds an unusable value,
    /// or if the result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snvl_config::Config;
    ///
    /// # async fn example() -> snvl_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Starting on {}", config.start_view);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file_async(&path).await?,
            None => {
                tracing::debug!("no config file found, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(&process_env())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snvl_config::Config;
    ///
    /// # fn example() -> snvl_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the whole configuration to a file, as JSON5 when the path ends
    /// in `.json5`.
    ///
    /// Values applied from the environment are written too. To record only
    /// a theme change use [`store_theme`](crate::persistence::store_theme).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snvl_config::Config;
    ///
    /// # fn example() -> snvl_config::Result<()> {
    /// let config = Config::default();
    /// config.save_to("my-config.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment overrides on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a variable cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_config::{Config, EnvOverrides, Theme};
    ///
    /// let mut config = Config::default();
    /// let env = EnvOverrides::from_lookup(|name| match name {
    ///     "SNVL_THEME" => Some("light".to_string()),
    ///     _ => None,
    /// });
    ///
    /// config.apply_overrides(&env).unwrap();
    /// assert_eq!(config.theme, Theme::Light);
    /// ```
    pub fn apply_overrides(&mut self, env: &EnvOverrides) -> Result<()> {
        if let Some(value) = &env.start_view {
            self.start_view = value.parse().map_err(|err: snvl_protocol::ProtocolError| {
                ConfigError::InvalidEnv {
                    var: crate::env::START_VIEW,
                    value: value.clone(),
                    reason: err.to_string(),
                }
            })?;
        }
        if let Some(value) = &env.page_size {
            self.page_size = value.trim().parse().map_err(|err: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    var: crate::env::PAGE_SIZE,
                    value: value.clone(),
                    reason: err.to_string(),
                }
            })?;
        }
        if let Some(value) = &env.theme {
            self.theme = value.parse().map_err(|reason: String| ConfigError::InvalidEnv {
                var: crate::env::THEME,
                value: value.clone(),
                reason,
            })?;
        }
        if let Some(value) = &env.log_level {
            self.log.level.clone_from(value);
        }
        if let Some(value) = &env.log_file {
            self.log.file = Some(PathBuf::from(value));
        }
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is outside
    /// `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.page_size = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.page_size < MIN_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                reason: format!(
                    "page size {} is below minimum of {MIN_PAGE_SIZE}",
                    self.page_size
                ),
            });
        }

        if self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                reason: format!(
                    "page size {} exceeds maximum of {MAX_PAGE_SIZE}",
                    self.page_size
                ),
            });
        }

        Ok(())
    }

    /// Returns the table page size as a non-zero count.
    ///
    /// Falls back to one row per page for an unvalidated zero.
    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(NonZeroUsize::MIN)
    }
}
