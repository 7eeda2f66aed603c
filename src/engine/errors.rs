//! engine::errors
//!
//! Failures raised by catalog mutations.
//!
//! Read operations never raise: a lookup that finds nothing returns `None`.
//! Mutations must tell the caller that nothing happened, so they raise
//! [`CatalogError`] instead.
//!
//! # Example
//!
//! ```
//! use recipebook::core::lookup::Lookup;
//! use recipebook::core::types::EntityKind;
//! use recipebook::engine::CatalogError;
//!
//! let err = CatalogError::NotFound {
//!     kind: EntityKind::Recipe,
//!     lookup: Lookup::by_name("Poutine"),
//! };
//! assert_eq!(err.to_string(), "recipe not found: name 'Poutine'");
//! ```

use thiserror::Error;

use crate::core::lookup::Lookup;
use crate::core::types::EntityKind;

/// Errors from catalog mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No record matched the lookup.
    #[error("{kind} not found: {lookup}")]
    NotFound { kind: EntityKind, lookup: Lookup },

    /// A record with this name already exists.
    #[error("{kind} named '{name}' already exists")]
    DuplicateName { kind: EntityKind, name: String },

    /// The ingredient is used by more than one recipe.
    #[error("ingredient '{name}' is used by {recipes} recipes and cannot be deleted")]
    InUse { name: String, recipes: usize },

    /// The key space cannot cover the records this mutation would create.
    #[error("key space exhausted: {needed} keys needed, {remaining} remaining")]
    KeysExhausted { needed: u64, remaining: u64 },

    /// A holder of the shared catalog panicked mid-operation.
    #[error("catalog lock poisoned by a panicked operation")]
    Poisoned,
}

impl CatalogError {
    /// Whether this error means the target record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
