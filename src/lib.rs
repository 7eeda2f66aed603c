//! recipebook - an in-memory recipe catalog
//!
//! Recipes, ingredients, and dietary restrictions are held in memory and
//! linked through association tables. The catalog answers "which recipes
//! use this ingredient", "which recipes fit this diet", and "find this
//! recipe", and supports creating recipes and deleting recipes or
//! ingredients with cascading cleanup.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, lookup keys, key generation, configuration
//! - [`store`] - Plain in-memory collections plus the key generator
//! - [`engine`] - Query/mutation logic over the store
//!
//! # Correctness Invariants
//!
//! 1. Recipe names are unique; ingredient names are unique
//! 2. Every recipe-ingredient link references an existing recipe and ingredient
//! 3. Generated keys are never reused
//! 4. A failed mutation leaves storage unchanged
//!
//! # Example
//!
//! ```
//! use recipebook::core::lookup::Lookup;
//! use recipebook::core::types::NewRecipe;
//! use recipebook::engine::{Catalog, CatalogError};
//! use recipebook::store::Storage;
//!
//! let mut catalog = Catalog::new(Storage::seeded());
//!
//! let err = catalog
//!     .create_recipe(NewRecipe::new("Chicken Alfredo", "again", 4))
//!     .unwrap_err();
//! assert!(matches!(err, CatalogError::DuplicateName { .. }));
//!
//! let salmon = catalog.recipes_by_ingredient(&Lookup::by_name("Salmon")).unwrap();
//! assert_eq!(salmon.len(), 2);
//! ```

pub mod core;
pub mod engine;
pub mod store;
