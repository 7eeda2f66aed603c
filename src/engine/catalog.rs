//! engine::catalog
//!
//! The catalog engine and its read operations.
//!
//! # Lookups
//!
//! Each read resolves a [`Lookup`] against one collection first. If the
//! target does not exist the read returns `None`, which is distinct from
//! `Some` of an empty set ("exists, but no recipes match").
//!
//! # Diet compliance
//!
//! A recipe satisfies a restriction iff every ingredient linked to it is in
//! the restriction's allowed-ingredient set. A recipe with no ingredients
//! satisfies every restriction.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::config::Config;
use crate::core::lookup::Lookup;
use crate::core::types::{Recipe, RecordId};
use crate::store::Storage;

/// Query and mutation logic over a [`Storage`].
///
/// Mutations take `&mut self`, so each check-then-act sequence runs without
/// interleaving. Wrap in [`SharedCatalog`](super::SharedCatalog) to share
/// across threads.
///
/// # Example
///
/// ```
/// use recipebook::core::lookup::Lookup;
/// use recipebook::engine::Catalog;
/// use recipebook::store::Storage;
///
/// let catalog = Catalog::new(Storage::seeded());
///
/// let vegetarian = catalog.recipes_by_diet(&Lookup::by_name("Vegetarian")).unwrap();
/// assert_eq!(vegetarian.len(), 3);
///
/// // Unknown restriction: not found, not "no recipes"
/// assert!(catalog.recipes_by_diet(&Lookup::by_name("Pescatarian")).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(super) storage: Storage,
}

impl Catalog {
    /// Create a catalog over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Create a catalog from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.build_storage())
    }

    /// Read access to the underlying collections.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> Storage {
        self.storage
    }

    /// Recipes that use an ingredient.
    ///
    /// Returns `None` if the ingredient does not exist.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn recipes_by_ingredient(&self, lookup: &Lookup) -> Option<HashSet<Recipe>> {
        let Some(ingredient) = self.storage.find_ingredient(lookup) else {
            debug!("ingredient not found");
            return None;
        };

        let recipe_ids: HashSet<RecordId> = self
            .storage
            .recipe_ingredients()
            .iter()
            .filter(|link| link.ingredient_id == ingredient.id)
            .map(|link| link.recipe_id)
            .collect();

        let recipes = self.recipes_with_ids(&recipe_ids);
        debug!(ingredient_id = %ingredient.id, count = recipes.len(), "matched recipes");
        Some(recipes)
    }

    /// Recipes whose every ingredient is allowed under a dietary restriction.
    ///
    /// Returns `None` if the restriction does not exist.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn recipes_by_diet(&self, lookup: &Lookup) -> Option<HashSet<Recipe>> {
        let Some(restriction) = self.storage.find_dietary_restriction(lookup) else {
            debug!("dietary restriction not found");
            return None;
        };

        let allowed: HashSet<RecordId> = self
            .storage
            .ingredient_restrictions()
            .iter()
            .filter(|link| link.restriction_id == restriction.id)
            .map(|link| link.ingredient_id)
            .collect();

        let mut links: HashMap<RecordId, Vec<RecordId>> = HashMap::new();
        for link in self.storage.recipe_ingredients() {
            links
                .entry(link.recipe_id)
                .or_default()
                .push(link.ingredient_id);
        }

        let recipes: HashSet<Recipe> = self
            .storage
            .recipes()
            .iter()
            .filter(|recipe| {
                links
                    .get(&recipe.id)
                    .map_or(true, |ids| ids.iter().all(|id| allowed.contains(id)))
            })
            .cloned()
            .collect();

        debug!(
            restriction_id = %restriction.id,
            allowed = allowed.len(),
            count = recipes.len(),
            "matched recipes"
        );
        Some(recipes)
    }

    /// The recipe identified by `lookup`, as a singleton set.
    ///
    /// Returns `None` if the recipe does not exist.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn recipes(&self, lookup: &Lookup) -> Option<HashSet<Recipe>> {
        let recipe = self.storage.find_recipe(lookup)?;
        Some(HashSet::from([recipe.clone()]))
    }

    /// Ids of the recipes that use `ingredient_id`, deduplicated.
    pub(super) fn recipes_using(&self, ingredient_id: RecordId) -> HashSet<RecordId> {
        self.storage
            .recipe_ingredients()
            .iter()
            .filter(|link| link.ingredient_id == ingredient_id)
            .map(|link| link.recipe_id)
            .collect()
    }

    fn recipes_with_ids(&self, ids: &HashSet<RecordId>) -> HashSet<Recipe> {
        self.storage
            .recipes()
            .iter()
            .filter(|recipe| ids.contains(&recipe.id))
            .cloned()
            .collect()
    }
}
