//! store::fixture
//!
//! Reference data set used to seed storage.
//!
//! # Contents
//!
//! | id | recipe                | ingredients                                  |
//! |----|-----------------------|----------------------------------------------|
//! | 1  | Spaghetti Bolognese   | Spaghetti, Ground Beef, Tomato Sauce         |
//! | 2  | Chicken Alfredo       | Chicken, Alfredo Sauce, Parmesan             |
//! | 3  | Lemon Garlic Salmon   | Salmon, Lemon, Garlic                        |
//! | 4  | Salmon Caesar Salad   | Salmon, Romaine Lettuce, Croutons, Parmesan  |
//! | 5  | Caprese Salad         | Tomato, Mozzarella, Basil                    |
//! | 6  | Margherita Pizza      | Pizza Dough, Tomato Sauce, Mozzarella, Basil |
//! | 7  | Vegetable Stir Fry    | Broccoli, Bell Pepper, Soy Sauce, Garlic     |
//!
//! Olive Oil (id 19) is stocked but used by no recipe.
//!
//! Dietary restrictions and the recipes that satisfy them:
//!
//! | id | restriction | satisfied by |
//! |----|-------------|--------------|
//! | 1  | Vegetarian  | 5, 6, 7      |
//! | 2  | Vegan       | 7            |
//! | 3  | Gluten-Free | 2, 3, 5      |
//! | 4  | Dairy-Free  | 1, 3, 7      |
//!
//! Keys are per collection here, so recipe 1 and ingredient 1 coexist.
//! Generated keys start at 20, past every seeded key.

use super::Storage;
use crate::core::types::{
    DietaryRestriction, Ingredient, IngredientRestriction, Recipe, RecipeIngredient, RecordId,
};

const INGREDIENTS: &[(i64, &str)] = &[
    (1, "Spaghetti"),
    (2, "Ground Beef"),
    (3, "Tomato Sauce"),
    (4, "Chicken"),
    (5, "Alfredo Sauce"),
    (6, "Salmon"),
    (7, "Lemon"),
    (8, "Parmesan"),
    (9, "Romaine Lettuce"),
    (10, "Croutons"),
    (11, "Garlic"),
    (12, "Tomato"),
    (13, "Mozzarella"),
    (14, "Basil"),
    (15, "Pizza Dough"),
    (16, "Broccoli"),
    (17, "Bell Pepper"),
    (18, "Soy Sauce"),
    (19, "Olive Oil"),
];

struct SeedRecipe {
    id: i64,
    name: &'static str,
    description: &'static str,
    servings: u32,
    ingredients: &'static [i64],
}

const RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        id: 1,
        name: "Spaghetti Bolognese",
        description: "Pasta with a slow-simmered beef and tomato sauce.",
        servings: 4,
        ingredients: &[1, 2, 3],
    },
    SeedRecipe {
        id: 2,
        name: "Chicken Alfredo",
        description: "Creamy sauce with grilled chicken and Parmesan.",
        servings: 4,
        ingredients: &[4, 5, 8],
    },
    SeedRecipe {
        id: 3,
        name: "Lemon Garlic Salmon",
        description: "Pan-seared salmon finished with lemon and garlic.",
        servings: 2,
        ingredients: &[6, 7, 11],
    },
    SeedRecipe {
        id: 4,
        name: "Salmon Caesar Salad",
        description: "Romaine, croutons, and shaved Parmesan topped with salmon.",
        servings: 2,
        ingredients: &[6, 9, 10, 8],
    },
    SeedRecipe {
        id: 5,
        name: "Caprese Salad",
        description: "Sliced tomato and mozzarella layered with basil.",
        servings: 2,
        ingredients: &[12, 13, 14],
    },
    SeedRecipe {
        id: 6,
        name: "Margherita Pizza",
        description: "Thin crust with tomato sauce, mozzarella, and basil.",
        servings: 3,
        ingredients: &[15, 3, 13, 14],
    },
    SeedRecipe {
        id: 7,
        name: "Vegetable Stir Fry",
        description: "Broccoli and bell pepper tossed in soy sauce and garlic.",
        servings: 3,
        ingredients: &[16, 17, 18, 11],
    },
];

const RESTRICTIONS: &[(i64, &str, &[i64])] = &[
    (
        1,
        "Vegetarian",
        &[1, 3, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
    ),
    (
        2,
        "Vegan",
        &[1, 3, 7, 9, 10, 11, 12, 14, 15, 16, 17, 18, 19],
    ),
    (
        3,
        "Gluten-Free",
        &[2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 16, 17, 19],
    ),
    (
        4,
        "Dairy-Free",
        &[1, 2, 3, 4, 6, 7, 9, 10, 11, 12, 14, 15, 16, 17, 18, 19],
    ),
];

/// Build storage holding the fixture.
pub fn build() -> Storage {
    let mut storage = Storage::new();

    for &(id, name) in INGREDIENTS {
        storage.insert_ingredient(Ingredient {
            id: RecordId::new(id),
            name: name.to_string(),
        });
    }

    for seed in RECIPES {
        storage.insert_recipe(Recipe {
            id: RecordId::new(seed.id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            servings: seed.servings,
        });
        for &ingredient_id in seed.ingredients {
            storage.insert_recipe_ingredient(RecipeIngredient {
                recipe_id: RecordId::new(seed.id),
                ingredient_id: RecordId::new(ingredient_id),
            });
        }
    }

    for &(id, name, allowed) in RESTRICTIONS {
        storage.insert_dietary_restriction(DietaryRestriction {
            id: RecordId::new(id),
            name: name.to_string(),
        });
        for &ingredient_id in allowed {
            storage.insert_ingredient_restriction(IngredientRestriction {
                ingredient_id: RecordId::new(ingredient_id),
                restriction_id: RecordId::new(id),
            });
        }
    }

    storage
}
