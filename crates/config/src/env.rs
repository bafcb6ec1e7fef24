//! Environment variable overrides.
//!
//! Variables are read once into an [`EnvOverrides`] snapshot, which keeps
//! the parsing in [`Config::apply_overrides`](crate::Config::apply_overrides)
//! independent of the process environment.

/// Overrides the start page (`analytics`, `tables`, `calendar`, `kanban`).
pub const START_VIEW: &str = "SNVL_START_VIEW";

/// Overrides the table page size.
pub const PAGE_SIZE: &str = "SNVL_PAGE_SIZE";

/// Overrides the theme (`dark`, `light`).
pub const THEME: &str = "SNVL_THEME";

/// Overrides the log filter directive.
pub const LOG: &str = "SNVL_LOG";

/// Overrides the log file path.
pub const LOG_FILE: &str = "SNVL_LOG_FILE";

/// Raw values of the `SNVL_*` variables that were set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Value of `SNVL_START_VIEW`.
    pub start_view: Option<String>,
    /// Value of `SNVL_PAGE_SIZE`.
    pub page_size: Option<String>,
    /// Value of `SNVL_THEME`.
    pub theme: Option<String>,
    /// Value of `SNVL_LOG`.
    pub log_level: Option<String>,
    /// Value of `SNVL_LOG_FILE`.
    pub log_file: Option<String>,
}

impl EnvOverrides {
    /// Collects overrides through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_config::EnvOverrides;
    ///
    /// let env = EnvOverrides::from_lookup(|name| {
    ///     (name == "SNVL_PAGE_SIZE").then(|| "10".to_string())
    /// });
    /// assert_eq!(env.page_size.as_deref(), Some("10"));
    /// assert!(env.theme.is_none());
    /// ```
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value: &String| !value.trim().is_empty());
        Self {
            start_view: get(START_VIEW),
            page_size: get(PAGE_SIZE),
            theme: get(THEME),
            log_level: get(LOG),
            log_file: get(LOG_FILE),
        }
    }

    /// Returns `true` if no variable was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Reads the overrides from the process environment.
#[must_use]
pub fn process_env() -> EnvOverrides {
    let overrides = EnvOverrides::from_lookup(|name| std::env::var(name).ok());
    if !overrides.is_empty() {
        tracing::debug!(?overrides, "applying environment overrides");
    }
    overrides
}
