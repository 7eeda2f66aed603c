//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they are usable
//! (e.g., `first_key` must be a positive key).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// What the catalog's storage starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// No records at all.
    #[default]
    Empty,
    /// The reference recipe set from [`crate::store::fixture`].
    Fixture,
}

/// Catalog configuration.
///
/// # Example
///
/// ```toml
/// seed = "fixture"
/// first_key = 100
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Initial contents of storage
    pub seed: SeedMode,

    /// Lower bound for generated keys
    pub first_key: Option<i64>,
}

impl CatalogConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(first_key) = self.first_key {
            if first_key < 1 {
                return Err(ConfigError::InvalidValue(format!(
                    "first_key must be at least 1, got {}",
                    first_key
                )));
            }
        }

        Ok(())
    }
}
