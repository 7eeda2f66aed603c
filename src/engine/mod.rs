//! engine
//!
//! Query and mutation logic for the catalog.
//!
//! # Architecture
//!
//! The engine holds no state of its own beyond the [`Storage`] it owns.
//! It exposes six operations:
//!
//! - [`Catalog::recipes_by_ingredient`] - recipes using an ingredient
//! - [`Catalog::recipes_by_diet`] - recipes satisfying a dietary restriction
//! - [`Catalog::recipes`] - one recipe, as a set
//! - [`Catalog::create_recipe`] - store a recipe, creating missing ingredients
//! - [`Catalog::delete_ingredient`] - delete, cascading to a sole recipe
//! - [`Catalog::delete_recipe`] - delete a recipe and its links
//!
//! Reads report a missing target as `None`. Mutations report it as
//! [`CatalogError::NotFound`].
//!
//! [`SharedCatalog`] offers the same operations behind a mutex.
//!
//! [`Storage`]: crate::store::Storage

pub mod catalog;
pub mod errors;
pub mod mutate;
pub mod shared;

pub use catalog::Catalog;
pub use errors::CatalogError;
pub use shared::SharedCatalog;
