//! Finding, reading and writing snvl configuration files.
//!
//! Files are parsed as JSON5, which accepts plain JSON as well. Writes keep
//! the flavour of the target file: a `.json5` path is written with bare keys
//! and trailing commas, anything else as pretty-printed JSON. Comments are
//! not preserved across a rewrite.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./snvl.json5` or `./snvl.json`
//! 2. User: `~/.config/snvl/config.json5` or `~/.config/snvl/config.json`

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::Theme;
use crate::error::{ConfigError, Result};

/// File names looked up in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["snvl.json5", "snvl.json"];

/// Directory below the platform config directory holding the user file.
const USER_CONFIG_DIR: &str = "snvl";

/// File names looked up in the user directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// The syntax a configuration file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Bare keys and trailing commas.
    Json5,
    /// Strict JSON.
    Json,
}

impl FileFormat {
    /// Picks the format from the file extension. Unknown extensions get JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use snvl_config::persistence::FileFormat;
    ///
    /// assert_eq!(FileFormat::of(Path::new("snvl.json5")), FileFormat::Json5);
    /// assert_eq!(FileFormat::of(Path::new("config.json")), FileFormat::Json);
    /// ```
    #[must_use]
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json5") => Self::Json5,
            _ => Self::Json,
        }
    }

    fn render(self, value: &Value) -> Result<String> {
        let mut out = match self {
            Self::Json => serde_json::to_string_pretty(value)?,
            Self::Json5 => {
                let mut out = String::new();
                write_json5(&mut out, value, 0)?;
                out
            }
        };
        out.push('\n');
        Ok(out)
    }
}

fn write_json5(out: &mut String, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push_str("{\n");
            for (key, item) in map {
                indent(out, depth + 1);
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    out.push_str(&serde_json::to_string(key)?);
                }
                out.push_str(": ");
                write_json5(out, item, depth + 1)?;
                out.push_str(",\n");
            }
            indent(out, depth);
            out.push('}');
        }
        Value::Array(items) if !items.is_empty() => {
            out.push_str("[\n");
            for item in items {
                indent(out, depth + 1);
                write_json5(out, item, depth + 1)?;
                out.push_str(",\n");
            }
            indent(out, depth);
            out.push(']');
        }
        scalar => out.push_str(&serde_json::to_string(scalar)?),
    }
    Ok(())
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Whether `key` can be written without quotes.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Finds the configuration file in effect.
///
/// Returns `None` when neither a local nor a user file exists.
///
/// # Examples
///
/// ```no_run
/// use snvl_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR));
    search(Path::new(""), user_dir.as_deref())
}

fn search(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).find(|path| path.is_file())
}

/// Returns the file preferences should be saved to.
///
/// This is the configuration file currently in effect if there is one,
/// otherwise `~/.config/snvl/config.json5`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if no file exists and the
/// platform config directory cannot be determined.
pub fn save_path() -> Result<PathBuf> {
    if let Some(path) = find_config_file() {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_FILE_NAMES[0]))
        .ok_or(ConfigError::NoHomeDirectory)
}

fn parse_config<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    let parsed = serde_json5::from_str(content)?;
    tracing::debug!(path = %path.display(), "parsed config file");
    Ok(parsed)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed.
///
/// # Examples
///
/// ```no_run
/// use snvl_config::persistence::read_config_file;
/// use snvl_config::Config;
///
/// # fn main() -> snvl_config::Result<()> {
/// let config: Config = read_config_file("snvl.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content, path)
}

/// Reads and parses a configuration file without blocking the runtime.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed.
pub async fn read_config_file_async<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_config(&content, path)
}

/// Writes `config` to `path` in the format its extension calls for,
/// creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file cannot
/// be written.
///
/// # Examples
///
/// ```no_run
/// use snvl_config::persistence::write_config_file;
/// use snvl_config::Config;
///
/// # fn main() -> snvl_config::Result<()> {
/// write_config_file("snvl.json5", &Config::default())?;
/// # Ok(())
/// # }
/// ```
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let content = FileFormat::of(path).render(&serde_json::to_value(config)?)?;
    let write_error = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, content).map_err(write_error)?;
    tracing::debug!(path = %path.display(), "wrote config file");
    Ok(())
}

/// Records `theme` in the file at `path`, leaving every other entry as the
/// file has it.
///
/// Only what the file holds is written back, so values that came from
/// `SNVL_*` variables never reach disk. A missing file is created with just
/// the theme.
///
/// # Errors
///
/// Returns an error if an existing file cannot be parsed or its top level
/// is not an object, in which case it is left untouched, or if the file
/// cannot be written.
///
/// # Examples
///
/// ```no_run
/// use snvl_config::Theme;
/// use snvl_config::persistence::{save_path, store_theme};
///
/// # fn main() -> snvl_config::Result<()> {
/// store_theme(save_path()?, Theme::Light)?;
/// # Ok(())
/// # }
/// ```
pub fn store_theme(path: impl AsRef<Path>, theme: Theme) -> Result<()> {
    let path = path.as_ref();
    let mut document = if path.exists() {
        match read_config_file::<Value>(path)? {
            Value::Object(map) => map,
            _ => {
                return Err(ConfigError::NotAnObject {
                    path: path.to_path_buf(),
                });
            }
        }
    } else {
        Map::new()
    };

    document.insert("theme".to_string(), serde_json::to_value(theme)?);
    write_config_file(path, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, EnvOverrides};
    use serde_json::json;
    use snvl_protocol::Page;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        std::fs::write(path, "{}").unwrap();
    }

    #[test]
    fn search_prefers_json5_over_json() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("snvl.json"));
        touch(&dir.path().join("snvl.json5"));

        assert_eq!(
            search(dir.path(), None),
            Some(dir.path().join("snvl.json5"))
        );
    }

    #[test]
    fn search_prefers_local_over_user() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        touch(&local.path().join("snvl.json"));
        touch(&user.path().join("config.json5"));

        assert_eq!(
            search(local.path(), Some(user.path())),
            Some(local.path().join("snvl.json"))
        );
    }

    #[test]
    fn search_falls_back_to_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert_eq!(search(local.path(), Some(user.path())), None);

        touch(&user.path().join("config.json"));
        // A directory with a config name is not a config file
        std::fs::create_dir(local.path().join("snvl.json5")).unwrap();

        assert_eq!(
            search(local.path(), Some(user.path())),
            Some(user.path().join("config.json"))
        );
    }

    #[test]
    fn read_json5_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snvl.json5");
        std::fs::write(
            &path,
            r#"
            {
                // the board first
                start_view: "kanban",
                page_size: 12,  // trailing comma
            }
            "#,
        )
        .unwrap();

        let config: Config = read_config_file(&path).unwrap();
        assert_eq!(config.start_view, Page::Kanban);
        assert_eq!(config.page_size, 12);
    }

    #[tokio::test]
    async fn read_async_matches_sync() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snvl.json5");
        std::fs::write(&path, "{ theme: 'light', page_size: 9 }").unwrap();

        let sync: Config = read_config_file(&path).unwrap();
        let not_sync: Config = read_config_file_async(&path).await.unwrap();
        assert_eq!(sync, not_sync);
    }

    #[test]
    fn read_missing_file_names_path() {
        let err = read_config_file::<Config>("/nonexistent/snvl.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/snvl.json"));
    }

    #[test]
    fn write_json5_keeps_json5_form() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snvl.json5");
        let config = Config {
            page_size: 7,
            ..Config::default()
        };

        write_config_file(&path, &config).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("  page_size: 7,\n"));
        assert!(content.contains("  start_view: \"analytics\",\n"));
        assert!(!content.contains("\"page_size\""));
        assert_eq!(read_config_file::<Config>(&path).unwrap(), config);
    }

    #[test]
    fn write_json_stays_strict() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        write_config_file(&path, &Config::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Config = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn json5_quotes_only_non_identifier_keys() {
        let value = json!({"a-b": 1, "empty": {}, "ok": [true, null]});

        let rendered = FileFormat::Json5.render(&value).unwrap();

        assert_eq!(
            rendered,
            "{\n  \"a-b\": 1,\n  empty: {},\n  ok: [\n    true,\n    null,\n  ],\n}\n"
        );
    }

    #[test]
    fn store_theme_keeps_other_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snvl.json5");
        std::fs::write(
            &path,
            "{ page_size: 8, week_start: 'monday', log: { level: 'debug' } }",
        )
        .unwrap();

        store_theme(&path, Theme::Light).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.page_size, 8);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn store_theme_ignores_environment_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"page_size": 5}"#).unwrap();

        let mut effective = Config::load_from(&path).unwrap();
        effective
            .apply_overrides(&EnvOverrides::from_lookup(|name| match name {
                "SNVL_PAGE_SIZE" => Some("20".to_string()),
                "SNVL_START_VIEW" => Some("calendar".to_string()),
                _ => None,
            }))
            .unwrap();
        store_theme(&path, effective.theme.toggled()).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.page_size, 5);
        assert_eq!(reloaded.start_view, Page::Analytics);
        assert_eq!(reloaded.theme, Theme::Light);
    }

    #[test]
    fn store_theme_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snvl").join("config.json5");

        store_theme(&path, Theme::Light).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  theme: \"light\",\n}\n"
        );
    }

    #[test]
    fn store_theme_leaves_unusable_file_alone() {
        let dir = TempDir::new().unwrap();

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "not json").unwrap();
        assert!(matches!(
            store_theme(&broken, Theme::Light),
            Err(ConfigError::ParseJson5(_))
        ));
        assert_eq!(std::fs::read_to_string(&broken).unwrap(), "not json");

        let list = dir.path().join("list.json");
        std::fs::write(&list, "[1, 2]").unwrap();
        assert!(matches!(
            store_theme(&list, Theme::Light),
            Err(ConfigError::NotAnObject { .. })
        ));
        assert_eq!(std::fs::read_to_string(&list).unwrap(), "[1, 2]");
    }
}
