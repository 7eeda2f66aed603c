//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order:
//! 1. An explicit path passed to [`Config::load`]
//! 2. `$RECIPEBOOK_CONFIG` if set
//!
//! With neither, defaults are used: an empty catalog whose keys start at 1.
//!
//! # Example
//!
//! ```no_run
//! use recipebook::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("recipebook.toml"))).unwrap();
//! let storage = config.build_storage();
//! println!("{} recipes", storage.recipes().len());
//! ```

pub mod schema;

pub use schema::{CatalogConfig, SeedMode};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::RecordId;
use crate::store::Storage;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "RECIPEBOOK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The parsed catalog settings
    pub catalog: CatalogConfig,
    /// Path the settings were read from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `path`, or from `$RECIPEBOOK_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed, or
    /// if a value fails validation. An unset environment variable is not
    /// an error (defaults are used).
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with_env(path, std::env::var_os(CONFIG_ENV_VAR))
    }

    fn load_with_env(path: Option<&Path>, env: Option<OsString>) -> Result<Config, ConfigError> {
        let chosen = match (path, env) {
            (Some(path), _) => Some(path.to_path_buf()),
            (None, Some(env)) if !env.is_empty() => Some(PathBuf::from(env)),
            _ => None,
        };

        let Some(chosen) = chosen else {
            tracing::debug!("no config file, using defaults");
            return Ok(Config::default());
        };

        let catalog = Self::read_config(&chosen)?;
        catalog.validate()?;
        tracing::debug!(path = %chosen.display(), seed = ?catalog.seed, "loaded config");

        Ok(Config {
            catalog,
            path: Some(chosen),
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Config, ConfigError> {
        let catalog: CatalogConfig =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                path: PathBuf::from("<string>"),
                message: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(Config {
            catalog,
            path: None,
        })
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build storage with the configured seed and key floor.
    pub fn build_storage(&self) -> Storage {
        let mut storage = match self.catalog.seed {
            SeedMode::Empty => Storage::new(),
            SeedMode::Fixture => Storage::seeded(),
        };
        if let Some(first_key) = self.catalog.first_key {
            storage.reserve_keys_below(RecordId::new(first_key));
        }
        storage
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_path_no_env_uses_defaults() {
        let config = Config::load_with_env(None, None).unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn empty_env_is_ignored() {
        let config = Config::load_with_env(None, Some(OsString::new())).unwrap();
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_env_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("recipebook.toml");
        fs::write(&config_path, "seed = \"fixture\"\n").unwrap();

        let config =
            Config::load_with_env(None, Some(config_path.clone().into_os_string())).unwrap();

        assert_eq!(config.catalog.seed, SeedMode::Fixture);
        assert_eq!(config.loaded_from(), Some(config_path.as_path()));
    }

    #[test]
    fn explicit_path_beats_env() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.toml");
        let from_env = temp.path().join("env.toml");
        fs::write(&explicit, "first_key = 300\n").unwrap();
        fs::write(&from_env, "first_key = 900\n").unwrap();

        let config =
            Config::load_with_env(Some(&explicit), Some(from_env.into_os_string())).unwrap();

        assert_eq!(config.catalog.first_key, Some(300));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let result = Config::load_with_env(Some(&missing), None);
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("recipebook.toml");
        fs::write(
            &config_path,
            r#"
            seed = "empty"
            unknown_field = true
            "#,
        )
        .unwrap();

        let result = Config::load_with_env(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn invalid_first_key_rejected_from_string() {
        let result = Config::from_toml_str("first_key = -4");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn build_storage_honors_seed_and_key_floor() {
        let config = Config::from_toml_str("seed = \"fixture\"\nfirst_key = 1000").unwrap();
        let mut storage = config.build_storage();

        assert!(!storage.recipes().is_empty());
        assert_eq!(storage.next_key(), Some(RecordId::new(1000)));
    }

    #[test]
    fn max_first_key_leaves_exactly_one_key() {
        let config = Config::from_toml_str(&format!("first_key = {}", i64::MAX)).unwrap();
        let mut storage = config.build_storage();

        assert_eq!(storage.keys_remaining(), 1);
        assert_eq!(storage.next_key(), Some(RecordId::new(i64::MAX)));
        assert_eq!(storage.next_key(), None);
    }

    #[test]
    fn key_floor_below_seeded_keys_is_ignored() {
        let config = Config::from_toml_str("seed = \"fixture\"\nfirst_key = 2").unwrap();
        let storage = config.build_storage();

        let max_seeded = storage
            .ingredients()
            .iter()
            .map(|i| i.id)
            .max()
            .unwrap();
        assert!(storage.peek_key().is_some_and(|key| key > max_seeded));
    }
}
