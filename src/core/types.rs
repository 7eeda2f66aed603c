//! core::types
//!
//! Strong types for catalog records.
//!
//! # Types
//!
//! - [`RecordId`] - Primary key shared by every entity kind
//! - [`EntityKind`] - Which collection a record lives in
//! - [`Recipe`], [`Ingredient`], [`DietaryRestriction`] - Entity records
//! - [`RecipeIngredient`], [`IngredientRestriction`] - Association rows
//! - [`NewRecipe`] - Input for recipe creation
//!
//! # Example
//!
//! ```
//! use recipebook::core::types::{NewRecipe, RecordId};
//!
//! let id = RecordId::new(7);
//! assert_eq!(id.get(), 7);
//! assert_eq!(id.to_string(), "7");
//!
//! let poutine = NewRecipe::new("Poutine", "Fries, curds, gravy", 2)
//!     .with_ingredients(["Potatoes", "Cheese Curds", "Gravy"]);
//! assert_eq!(poutine.ingredients.len(), 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary key of a catalog record.
///
/// Keys are plain integers. Keys issued by the
/// [`KeyGenerator`](crate::core::keys::KeyGenerator) are unique across all
/// entity kinds; seeded keys are only unique within their own collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw key.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of entity a lookup or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Recipe,
    Ingredient,
    DietaryRestriction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Recipe => "recipe",
            EntityKind::Ingredient => "ingredient",
            EntityKind::DietaryRestriction => "dietary restriction",
        };
        write!(f, "{}", s)
    }
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecordId,
    /// Unique across recipes.
    pub name: String,
    pub description: String,
    pub servings: u32,
}

/// A stored ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: RecordId,
    /// Unique across ingredients.
    pub name: String,
}

/// A dietary restriction such as "Vegetarian".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietaryRestriction {
    pub id: RecordId,
    pub name: String,
}

/// Association row: the recipe uses the ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub recipe_id: RecordId,
    pub ingredient_id: RecordId,
}

/// Association row: the ingredient is allowed under the restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientRestriction {
    pub ingredient_id: RecordId,
    pub restriction_id: RecordId,
}

/// Input for [`Catalog::create_recipe`](crate::engine::Catalog::create_recipe).
///
/// Ingredients are given by name. Names that already exist in the catalog
/// are reused; the rest are created.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
}

impl NewRecipe {
    /// Start a recipe with no ingredients.
    pub fn new(name: impl Into<String>, description: impl Into<String>, servings: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Append ingredient names.
    pub fn with_ingredients<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients.extend(names.into_iter().map(Into::into));
        self
    }
}
