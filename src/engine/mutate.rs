//! engine::mutate
//!
//! Recipe creation and cascading deletion.
//!
//! # Invariants
//!
//! - Every precondition is checked before the first write, so a failed
//!   mutation leaves storage untouched.
//! - No mutation leaves an association row pointing at a missing recipe or
//!   ingredient.
//!
//! # Cascade rules
//!
//! | operation          | referencing recipes | effect                                   |
//! |--------------------|---------------------|------------------------------------------|
//! | delete ingredient  | 0                   | ingredient and its restriction rows removed |
//! | delete ingredient  | 1                   | also that recipe and its links removed   |
//! | delete ingredient  | 2+                  | refused with `InUse`                     |
//! | delete recipe      | any                 | recipe and its links removed, ingredients kept |

use std::collections::HashSet;

use tracing::{info, warn};

use super::catalog::Catalog;
use super::errors::CatalogError;
use crate::core::lookup::Lookup;
use crate::core::types::{EntityKind, Ingredient, NewRecipe, Recipe, RecipeIngredient, RecordId};

impl Catalog {
    /// Store a new recipe and link it to its ingredients.
    ///
    /// Ingredients are matched by exact name: existing ones are reused,
    /// missing ones are created with fresh keys. A name listed twice is
    /// linked once.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateName`] if a recipe with this name exists
    /// - [`CatalogError::KeysExhausted`] if too few keys remain for the recipe
    ///   and its new ingredients
    ///
    /// # Example
    ///
    /// ```
    /// use recipebook::core::lookup::Lookup;
    /// use recipebook::core::types::NewRecipe;
    /// use recipebook::engine::Catalog;
    /// use recipebook::store::Storage;
    ///
    /// let mut catalog = Catalog::new(Storage::seeded());
    /// let recipe = catalog
    ///     .create_recipe(
    ///         NewRecipe::new("Garlic Bread", "Toasted with butter", 4)
    ///             .with_ingredients(["Garlic", "Baguette"]),
    ///     )
    ///     .unwrap();
    ///
    /// let with_garlic = catalog.recipes_by_ingredient(&Lookup::by_name("Garlic")).unwrap();
    /// assert!(with_garlic.contains(&recipe));
    /// ```
    #[tracing::instrument(level = "debug", skip(self, new), fields(name = %new.name))]
    pub fn create_recipe(&mut self, new: NewRecipe) -> Result<Recipe, CatalogError> {
        if self
            .storage
            .find_recipe(&Lookup::by_name(new.name.as_str()))
            .is_some()
        {
            warn!("refusing to create recipe with duplicate name");
            return Err(CatalogError::DuplicateName {
                kind: EntityKind::Recipe,
                name: new.name,
            });
        }

        let new_names: HashSet<&str> = new
            .ingredients
            .iter()
            .map(String::as_str)
            .filter(|name| self.storage.find_ingredient_by_name(name).is_none())
            .collect();
        let needed = new_names.len() as u64 + 1;
        let remaining = self.storage.keys_remaining();
        if needed > remaining {
            warn!(needed, remaining, "not enough keys left to create recipe");
            return Err(CatalogError::KeysExhausted { needed, remaining });
        }
        let exhausted = || CatalogError::KeysExhausted { needed, remaining };

        let mut ingredient_ids: Vec<RecordId> = Vec::with_capacity(new.ingredients.len());
        let mut created = 0usize;
        for name in &new.ingredients {
            let existing = self.storage.find_ingredient_by_name(name).map(|i| i.id);
            let id = match existing {
                Some(id) => id,
                None => {
                    let id = self.storage.next_key().ok_or_else(exhausted)?;
                    self.storage.insert_ingredient(Ingredient {
                        id,
                        name: name.clone(),
                    });
                    created += 1;
                    id
                }
            };
            if !ingredient_ids.contains(&id) {
                ingredient_ids.push(id);
            }
        }

        let recipe = Recipe {
            id: self.storage.next_key().ok_or_else(exhausted)?,
            name: new.name,
            description: new.description,
            servings: new.servings,
        };
        self.storage.insert_recipe(recipe.clone());

        for ingredient_id in &ingredient_ids {
            self.storage.insert_recipe_ingredient(RecipeIngredient {
                recipe_id: recipe.id,
                ingredient_id: *ingredient_id,
            });
        }

        info!(
            recipe_id = %recipe.id,
            ingredients = ingredient_ids.len(),
            new_ingredients = created,
            "created recipe"
        );
        Ok(recipe)
    }

    /// Delete an ingredient, cascading to its recipe if it has exactly one.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if no ingredient matches
    /// - [`CatalogError::InUse`] if more than one recipe uses it
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn delete_ingredient(&mut self, lookup: &Lookup) -> Result<Ingredient, CatalogError> {
        let Some(ingredient) = self.storage.find_ingredient(lookup) else {
            return Err(CatalogError::NotFound {
                kind: EntityKind::Ingredient,
                lookup: lookup.clone(),
            });
        };
        let (ingredient_id, name) = (ingredient.id, ingredient.name.clone());

        let users = self.recipes_using(ingredient_id);
        if users.len() > 1 {
            warn!(ingredient = %name, recipes = users.len(), "ingredient in use");
            return Err(CatalogError::InUse {
                name,
                recipes: users.len(),
            });
        }
        if let Some(&recipe_id) = users.iter().next() {
            let links = self.storage.remove_recipe_links(recipe_id);
            self.storage.remove_recipe(recipe_id);
            info!(
                ingredient_id = %ingredient_id,
                recipe_id = %recipe_id,
                links,
                "cascaded ingredient delete to its only recipe"
            );
        }

        let restrictions = self.storage.remove_ingredient_links(ingredient_id);
        let removed = self
            .storage
            .remove_ingredient(ingredient_id)
            .ok_or_else(|| CatalogError::NotFound {
                kind: EntityKind::Ingredient,
                lookup: lookup.clone(),
            })?;
        info!(ingredient_id = %removed.id, restrictions, "deleted ingredient");
        Ok(removed)
    }

    /// Delete a recipe and its association rows.
    ///
    /// The recipe's ingredients stay in storage even if nothing else uses
    /// them.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if no recipe matches
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn delete_recipe(&mut self, lookup: &Lookup) -> Result<Recipe, CatalogError> {
        let not_found = || CatalogError::NotFound {
            kind: EntityKind::Recipe,
            lookup: lookup.clone(),
        };

        let recipe_id = self.storage.find_recipe(lookup).ok_or_else(not_found)?.id;
        let links = self.storage.remove_recipe_links(recipe_id);
        let removed = self
            .storage
            .remove_recipe(recipe_id)
            .ok_or_else(not_found)?;

        info!(recipe_id = %removed.id, links, "deleted recipe");
        Ok(removed)
    }
}
