//! Configuration management for the snvl dashboard.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`env`]: `SNVL_*` environment variable overrides
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`SNVL_*`)
//! 2. Local config (`./snvl.json5` or `./snvl.json`)
//! 3. User config (`~/.config/snvl/config.json5` or `~/.config/snvl/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   start_view: "tables",   // analytics | tables | calendar | kanban
//!   page_size: 5,           // 1..=100
//!   theme: "dark",          // dark | light
//!   week_start: "sunday",   // sunday | monday
//!   log: { level: "info", file: "/tmp/snvl.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use snvl_config::Config;
//!
//! # async fn example() -> snvl_config::Result<()> {
//! let config = Config::load().await?;
//! println!("{} rows per page", config.page_size);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, DEFAULT_PAGE_SIZE, LogConfig, MAX_PAGE_SIZE, MIN_PAGE_SIZE, Theme};
pub use env::EnvOverrides;
pub use error::{ConfigError, Result};
