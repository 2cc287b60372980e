//! Built-in dataset standing in for a real backend.

use crate::types::{Difficulty, Recipe};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The three recipes the store is seeded with at startup.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Classic Spaghetti Carbonara".to_string(),
            description: "A traditional Italian pasta dish with eggs, cheese, and pancetta."
                .to_string(),
            ingredients: strings(&[
                "400g spaghetti",
                "200g pancetta or guanciale",
                "4 large eggs",
                "100g Pecorino Romano cheese",
                "Black pepper",
                "Salt",
            ]),
            instructions: strings(&[
                "Cook spaghetti in salted boiling water until al dente",
                "Cut pancetta into small cubes and cook until crispy",
                "Beat eggs with grated cheese and black pepper",
                "Drain pasta and mix with pancetta",
                "Remove from heat and quickly mix in egg mixture",
                "Serve immediately with extra cheese",
            ]),
            prep_time: 10,
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Medium,
            image_url: Some(
                "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5".to_string(),
            ),
        },
        Recipe {
            id: 2,
            title: "Chocolate Chip Cookies".to_string(),
            description: "Soft and chewy homemade chocolate chip cookies.".to_string(),
            ingredients: strings(&[
                "2 1/4 cups all-purpose flour",
                "1 tsp baking soda",
                "1 tsp salt",
                "1 cup butter, softened",
                "3/4 cup granulated sugar",
                "3/4 cup brown sugar",
                "2 large eggs",
                "2 tsp vanilla extract",
                "2 cups chocolate chips",
            ]),
            instructions: strings(&[
                "Preheat oven to 375°F (190°C)",
                "Mix flour, baking soda, and salt in a bowl",
                "Cream butter and both sugars until fluffy",
                "Beat in eggs and vanilla",
                "Gradually mix in flour mixture",
                "Stir in chocolate chips",
                "Drop rounded tablespoons onto ungreased baking sheets",
                "Bake 9-11 minutes until golden brown",
            ]),
            prep_time: 20,
            cook_time: 11,
            servings: 24,
            difficulty: Difficulty::Easy,
            image_url: Some(
                "https://images.unsplash.com/photo-1499636136210-6f4ee915583e".to_string(),
            ),
        },
        Recipe {
            id: 3,
            title: "Beef Wellington".to_string(),
            description: "An elegant dish of beef tenderloin wrapped in puff pastry.".to_string(),
            ingredients: strings(&[
                "2 lb beef tenderloin",
                "1 lb puff pastry",
                "8 oz mushrooms",
                "2 shallots",
                "2 cloves garlic",
                "2 tbsp Dijon mustard",
                "2 slices prosciutto",
                "1 egg yolk",
                "Salt and pepper",
            ]),
            instructions: strings(&[
                "Season beef and sear on all sides",
                "Brush with mustard and let cool",
                "Sauté mushrooms, shallots, and garlic",
                "Roll out pastry and layer with prosciutto",
                "Wrap beef in mushroom mixture and pastry",
                "Brush with egg yolk and bake at 400°F for 25-30 minutes",
                "Rest before slicing",
            ]),
            prep_time: 45,
            cook_time: 30,
            servings: 6,
            difficulty: Difficulty::Hard,
            image_url: Some(
                "https://images.unsplash.com/photo-1546833999-b9f581a1996d".to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let recipes = sample_recipes();
        let ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn seed_covers_every_difficulty() {
        let recipes = sample_recipes();
        assert_eq!(recipes[0].difficulty, Difficulty::Medium);
        assert_eq!(recipes[1].difficulty, Difficulty::Easy);
        assert_eq!(recipes[2].difficulty, Difficulty::Hard);
    }
}
