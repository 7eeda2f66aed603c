//! engine::shared
//!
//! Thread-safe handle to a single [`Catalog`].
//!
//! # Design
//!
//! All clones share one `Arc<Mutex<Catalog>>`. Every operation takes the
//! lock once and runs its whole check-then-act sequence under it, so a
//! uniqueness check and the insert that follows it (or a reference count
//! and the cascade that follows it) can never interleave with another
//! caller.
//!
//! # Example
//!
//! ```
//! use recipebook::core::lookup::Lookup;
//! use recipebook::engine::SharedCatalog;
//! use recipebook::store::Storage;
//!
//! let catalog = SharedCatalog::new(Storage::seeded());
//! let other = catalog.clone();
//!
//! other.delete_recipe(&Lookup::by_name("Chicken Alfredo")).unwrap();
//! assert!(catalog.recipes(&Lookup::by_name("Chicken Alfredo")).is_none());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::catalog::Catalog;
use super::errors::CatalogError;
use crate::core::lookup::Lookup;
use crate::core::types::{Ingredient, NewRecipe, Recipe};
use crate::store::Storage;

/// Cloneable, mutex-guarded catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    /// Create a shared catalog over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self::from_catalog(Catalog::new(storage))
    }

    /// Wrap an existing catalog, such as one built with
    /// [`Catalog::from_config`].
    ///
    /// ```
    /// use recipebook::core::lookup::Lookup;
    /// use recipebook::engine::{Catalog, SharedCatalog};
    /// use recipebook::store::Storage;
    ///
    /// let shared = SharedCatalog::from_catalog(Catalog::new(Storage::seeded()));
    /// assert!(shared.recipes(&Lookup::by_name("Chicken Alfredo")).is_some());
    /// ```
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Lock for reading.
    ///
    /// Reads cannot report errors, so a poisoned lock is recovered.
    fn read(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> Result<MutexGuard<'_, Catalog>, CatalogError> {
        self.inner.lock().map_err(|_| CatalogError::Poisoned)
    }

    /// See [`Catalog::recipes_by_ingredient`].
    pub fn recipes_by_ingredient(&self, lookup: &Lookup) -> Option<HashSet<Recipe>> {
        self.read().recipes_by_ingredient(lookup)
    }

    /// See [`Catalog::recipes_by_diet`].
    pub fn recipes_by_diet(&self, lookup: &Lookup) -> Option<HashSet<Recipe>> {
        self.read().recipes_by_diet(lookup)
    }

    /// See [`Catalog::recipes`].
    pub fn recipes(&self, lookup: &Lookup) -> Option<HashSet<Recipe>> {
        self.read().recipes(lookup)
    }

    /// See [`Catalog::create_recipe`].
    pub fn create_recipe(&self, new: NewRecipe) -> Result<Recipe, CatalogError> {
        self.write()?.create_recipe(new)
    }

    /// See [`Catalog::delete_ingredient`].
    pub fn delete_ingredient(&self, lookup: &Lookup) -> Result<Ingredient, CatalogError> {
        self.write()?.delete_ingredient(lookup)
    }

    /// See [`Catalog::delete_recipe`].
    pub fn delete_recipe(&self, lookup: &Lookup) -> Result<Recipe, CatalogError> {
        self.write()?.delete_recipe(lookup)
    }

    /// Run `f` with read access to the underlying storage.
    pub fn with_storage<T>(&self, f: impl FnOnce(&Storage) -> T) -> T {
        f(self.read().storage())
    }
}
