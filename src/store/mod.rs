//! store
//!
//! In-memory storage for catalog records.
//!
//! # Architecture
//!
//! [`Storage`] is plain data: three entity collections, two association
//! collections, and the [`KeyGenerator`] that issues primary keys. It
//! enforces no business rules. Name uniqueness, reference counting, and
//! cascading live in [`crate::engine`].
//!
//! Collections keep insertion order so that "first match" is well defined.
//!
//! # Example
//!
//! ```
//! use recipebook::store::Storage;
//! use recipebook::core::types::Ingredient;
//!
//! let mut storage = Storage::new();
//! let id = storage.next_key().expect("fresh storage has keys");
//! storage.insert_ingredient(Ingredient { id, name: "Basil".into() });
//!
//! assert_eq!(storage.find_ingredient_by_name("Basil").map(|i| i.id), Some(id));
//! ```

pub mod fixture;

use crate::core::keys::KeyGenerator;
use crate::core::lookup::Lookup;
use crate::core::types::{
    DietaryRestriction, Ingredient, IngredientRestriction, Recipe, RecipeIngredient, RecordId,
};

/// Collections backing a catalog.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
    restrictions: Vec<DietaryRestriction>,
    recipe_ingredients: Vec<RecipeIngredient>,
    ingredient_restrictions: Vec<IngredientRestriction>,
    keys: KeyGenerator,
}

impl Storage {
    /// Create empty storage whose first key is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding the reference fixture.
    ///
    /// See [`fixture`] for its contents.
    pub fn seeded() -> Self {
        fixture::build()
    }

    // =========================================================================
    // Keys
    // =========================================================================

    /// Issue a fresh primary key, or `None` once the key space is used up.
    pub fn next_key(&mut self) -> Option<RecordId> {
        self.keys.next_key()
    }

    /// The key the next call to [`next_key`](Self::next_key) will return.
    pub fn peek_key(&self) -> Option<RecordId> {
        self.keys.peek()
    }

    /// How many keys can still be issued.
    pub fn keys_remaining(&self) -> u64 {
        self.keys.remaining()
    }

    /// Ensure every key issued from now on is at least `floor`.
    pub fn reserve_keys_below(&mut self, floor: RecordId) {
        if let Some(last) = floor.get().checked_sub(1) {
            self.keys.reserve_through(RecordId::new(last));
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn dietary_restrictions(&self) -> &[DietaryRestriction] {
        &self.restrictions
    }

    pub fn recipe_ingredients(&self) -> &[RecipeIngredient] {
        &self.recipe_ingredients
    }

    pub fn ingredient_restrictions(&self) -> &[IngredientRestriction] {
        &self.ingredient_restrictions
    }

    pub fn find_recipe(&self, lookup: &Lookup) -> Option<&Recipe> {
        self.recipes.iter().find(|r| lookup.matches(r.id, &r.name))
    }

    pub fn find_ingredient(&self, lookup: &Lookup) -> Option<&Ingredient> {
        self.ingredients
            .iter()
            .find(|i| lookup.matches(i.id, &i.name))
    }

    pub fn find_ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    pub fn find_dietary_restriction(&self, lookup: &Lookup) -> Option<&DietaryRestriction> {
        self.restrictions
            .iter()
            .find(|d| lookup.matches(d.id, &d.name))
    }

    // =========================================================================
    // Inserts
    //
    // Inserting a record with an externally chosen key moves the key
    // generator past it, so later keys never collide.
    // =========================================================================

    pub fn insert_recipe(&mut self, recipe: Recipe) {
        self.keys.reserve_through(recipe.id);
        self.recipes.push(recipe);
    }

    pub fn insert_ingredient(&mut self, ingredient: Ingredient) {
        self.keys.reserve_through(ingredient.id);
        self.ingredients.push(ingredient);
    }

    pub fn insert_dietary_restriction(&mut self, restriction: DietaryRestriction) {
        self.keys.reserve_through(restriction.id);
        self.restrictions.push(restriction);
    }

    pub fn insert_recipe_ingredient(&mut self, link: RecipeIngredient) {
        self.recipe_ingredients.push(link);
    }

    pub fn insert_ingredient_restriction(&mut self, link: IngredientRestriction) {
        self.ingredient_restrictions.push(link);
    }

    // =========================================================================
    // Removals
    // =========================================================================

    /// Remove the recipe with `id`, returning it if present.
    pub fn remove_recipe(&mut self, id: RecordId) -> Option<Recipe> {
        let pos = self.recipes.iter().position(|r| r.id == id)?;
        Some(self.recipes.remove(pos))
    }

    /// Remove the ingredient with `id`, returning it if present.
    pub fn remove_ingredient(&mut self, id: RecordId) -> Option<Ingredient> {
        let pos = self.ingredients.iter().position(|i| i.id == id)?;
        Some(self.ingredients.remove(pos))
    }

    /// Remove every association row linking to `recipe_id`.
    ///
    /// Returns the number of rows removed.
    pub fn remove_recipe_links(&mut self, recipe_id: RecordId) -> usize {
        let before = self.recipe_ingredients.len();
        self.recipe_ingredients
            .retain(|link| link.recipe_id != recipe_id);
        before - self.recipe_ingredients.len()
    }

    /// Remove every restriction row naming `ingredient_id` as allowed.
    ///
    /// Returns the number of rows removed.
    pub fn remove_ingredient_links(&mut self, ingredient_id: RecordId) -> usize {
        let before = self.ingredient_restrictions.len();
        self.ingredient_restrictions
            .retain(|link| link.ingredient_id != ingredient_id);
        before - self.ingredient_restrictions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, name: &str) -> Recipe {
        Recipe {
            id: RecordId::new(id),
            name: name.into(),
            description: String::new(),
            servings: 1,
        }
    }

    #[test]
    fn insert_with_explicit_key_advances_generator() {
        let mut storage = Storage::new();
        storage.insert_recipe(recipe(41, "Stew"));
        assert_eq!(storage.next_key(), Some(RecordId::new(42)));
    }

    #[test]
    fn find_recipe_by_id_and_name() {
        let mut storage = Storage::new();
        storage.insert_recipe(recipe(1, "Stew"));
        storage.insert_recipe(recipe(2, "Soup"));

        assert_eq!(
            storage.find_recipe(&Lookup::by_name("Soup")).map(|r| r.id),
            Some(RecordId::new(2))
        );
        assert_eq!(
            storage
                .find_recipe(&Lookup::by_id(RecordId::new(1)))
                .map(|r| r.name.as_str()),
            Some("Stew")
        );
        assert!(storage.find_recipe(&Lookup::by_name("Pie")).is_none());
    }

    #[test]
    fn remove_recipe_links_only_touches_that_recipe() {
        let mut storage = Storage::new();
        for (recipe_id, ingredient_id) in [(1, 10), (1, 11), (2, 10)] {
            storage.insert_recipe_ingredient(RecipeIngredient {
                recipe_id: RecordId::new(recipe_id),
                ingredient_id: RecordId::new(ingredient_id),
            });
        }

        assert_eq!(storage.remove_recipe_links(RecordId::new(1)), 2);
        assert_eq!(storage.recipe_ingredients().len(), 1);
        assert_eq!(storage.recipe_ingredients()[0].recipe_id, RecordId::new(2));
    }

    #[test]
    fn remove_missing_returns_none() {
        let mut storage = Storage::new();
        assert!(storage.remove_recipe(RecordId::new(1)).is_none());
        assert!(storage.remove_ingredient(RecordId::new(1)).is_none());
    }

    #[test]
    fn key_floor_raises_next_key() {
        let mut storage = Storage::new();
        storage.reserve_keys_below(RecordId::new(100));
        assert_eq!(storage.next_key(), Some(RecordId::new(100)));
    }

    #[test]
    fn insert_at_max_key_exhausts_generator() {
        let mut storage = Storage::new();
        storage.insert_recipe(recipe(i64::MAX, "Last"));

        assert_eq!(storage.recipes().len(), 1);
        assert_eq!(storage.keys_remaining(), 0);
        assert_eq!(storage.next_key(), None);
    }

    #[test]
    fn remove_ingredient_links_only_touches_that_ingredient() {
        let mut storage = Storage::new();
        for (ingredient_id, restriction_id) in [(10, 1), (10, 2), (11, 1)] {
            storage.insert_ingredient_restriction(IngredientRestriction {
                ingredient_id: RecordId::new(ingredient_id),
                restriction_id: RecordId::new(restriction_id),
            });
        }

        assert_eq!(storage.remove_ingredient_links(RecordId::new(10)), 2);
        assert_eq!(storage.ingredient_restrictions().len(), 1);
        assert_eq!(
            storage.ingredient_restrictions()[0].ingredient_id,
            RecordId::new(11)
        );
    }
}
