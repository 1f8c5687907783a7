// Built-in sample catalog - 18 recipes across cuisines and diets
use crate::models::{RecipeDetail, RecipeSummary};

/// Local placeholder thumbnail, no network needed to render a card
pub const THUMB_PLACEHOLDER: &str = "data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%22640%22%20height%3D%22400%22%3E%3Crect%20width%3D%22640%22%20height%3D%22400%22%20fill%3D%22%23F9FAFB%22%2F%3E%3Ctext%20x%3D%2250%25%22%20y%3D%2250%25%22%20text-anchor%3D%22middle%22%3ERecipe%3C%2Ftext%3E%3C%2Fsvg%3E";

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: &str,
    title: &str,
    tags: &[&str],
    rating: f64,
    description: &str,
    ingredients: &[&str],
    steps: &[&str],
    times: (u32, u32),
    servings: u32,
    author: &str,
) -> RecipeDetail {
    RecipeDetail {
        summary: RecipeSummary {
            id: id.to_string(),
            title: title.to_string(),
            image_url: THUMB_PLACEHOLDER.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            rating,
        },
        description: description.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        prep_time_minutes: Some(times.0),
        cook_time_minutes: Some(times.1),
        servings: Some(servings),
        author: Some(author.to_string()),
    }
}

pub fn sample_recipes() -> Vec<RecipeDetail> {
    vec![
        recipe(
            "1",
            "Lemon Herb Grilled Salmon",
            &["seafood", "grill", "healthy", "mediterranean"],
            4.6,
            "Succulent salmon marinated with lemon and fresh herbs, grilled to perfection. Cuisine: Mediterranean; Diet: Pescatarian; Prep: 15m.",
            &["2 salmon fillets", "1 lemon", "2 tbsp olive oil", "1 tsp sea salt", "1 tsp black pepper", "Fresh dill"],
            &[
                "Whisk lemon juice, olive oil, salt, pepper, and dill.",
                "Marinate salmon for 15 minutes.",
                "Grill skin-side down for 6-8 minutes until flaky.",
            ],
            (15, 10),
            2,
            "Chef Marina",
        ),
        recipe(
            "2",
            "Creamy Mushroom Pasta",
            &["vegetarian", "pasta", "comfort", "italian"],
            4.8,
            "Al dente pasta coated in a rich, creamy mushroom sauce. Cuisine: Italian; Diet: Vegetarian; Prep: 10m.",
            &["200g pasta", "200g mixed mushrooms", "1 cup cream", "2 cloves garlic", "Parmesan", "Butter"],
            &[
                "Cook pasta until al dente.",
                "Sauté mushrooms and garlic in butter.",
                "Add cream and simmer; toss with pasta and parmesan.",
            ],
            (10, 20),
            2,
            "Chef Bella",
        ),
        recipe(
            "3",
            "Citrus Avocado Salad",
            &["salad", "vegan", "fresh", "gluten-free"],
            4.2,
            "A refreshing salad with citrus segments, avocado, and a light vinaigrette. Diet: Vegan/Gluten-free; Prep: 12m.",
            &["2 oranges", "1 grapefruit", "1 avocado", "Mixed greens", "Olive oil", "Salt", "Pepper"],
            &["Segment citrus", "Slice avocado", "Dress greens and assemble"],
            (12, 0),
            2,
            "Chef Green",
        ),
        recipe(
            "4",
            "Spicy Chicken Tacos",
            &["chicken", "spicy", "mexican", "street-food"],
            4.5,
            "Juicy chicken seasoned with spices, served in warm tortillas with fresh toppings. Cuisine: Mexican; Prep: 15m.",
            &["Chicken breast", "Tortillas", "Chili powder", "Cumin", "Lime", "Cilantro"],
            &["Season and cook chicken", "Warm tortillas", "Assemble with toppings"],
            (15, 15),
            3,
            "Chef Rio",
        ),
        recipe(
            "5",
            "Margherita Pizza",
            &["pizza", "vegetarian", "italian", "baked"],
            4.7,
            "Classic pizza with tomato, fresh mozzarella, and basil. Cuisine: Italian; Diet: Vegetarian; Prep: 20m.",
            &["Pizza dough", "Tomato sauce", "Fresh mozzarella", "Basil", "Olive oil", "Salt"],
            &["Stretch dough", "Spread sauce and toppings", "Bake at high temp until bubbly"],
            (20, 12),
            2,
            "Chef Napoli",
        ),
        recipe(
            "6",
            "Thai Green Curry",
            &["thai", "curry", "spicy", "gluten-free"],
            4.4,
            "Coconut-based curry with green chilies, veggies, and your choice of protein. Cuisine: Thai; Prep: 15m.",
            &["Green curry paste", "Coconut milk", "Chicken or tofu", "Vegetables", "Fish sauce", "Basil"],
            &["Fry paste", "Add coconut milk and simmer", "Add protein & veg; finish with basil"],
            (15, 20),
            3,
            "Chef Suri",
        ),
        recipe(
            "7",
            "Beef Stir-Fry with Broccoli",
            &["beef", "stir-fry", "asian", "quick"],
            4.1,
            "Tender beef with crisp broccoli in a savory sauce. Cuisine: Chinese-inspired; Prep: 10m.",
            &["Beef strips", "Broccoli florets", "Soy sauce", "Garlic", "Ginger", "Cornstarch"],
            &["Marinate beef", "Stir-fry beef and broccoli", "Add sauce and thicken"],
            (10, 12),
            2,
            "Chef Wok",
        ),
        recipe(
            "8",
            "Shakshuka",
            &["eggs", "breakfast", "middle-eastern", "vegetarian"],
            4.3,
            "Poached eggs in a spiced tomato and pepper sauce. Cuisine: Middle Eastern; Diet: Vegetarian.",
            &["Eggs", "Tomatoes", "Bell pepper", "Onion", "Garlic", "Cumin", "Paprika"],
            &["Sauté veg & spices", "Simmer tomatoes", "Crack eggs and poach"],
            (10, 18),
            2,
            "Chef Lev",
        ),
        recipe(
            "9",
            "Quinoa Veggie Bowl",
            &["healthy", "vegan", "gluten-free", "bowl"],
            4.0,
            "Protein-packed quinoa with roasted veggies and tahini dressing. Diet: Vegan/Gluten-free.",
            &["Quinoa", "Mixed vegetables", "Olive oil", "Tahini", "Lemon", "Salt"],
            &["Cook quinoa", "Roast vegetables", "Assemble and drizzle dressing"],
            (12, 20),
            2,
            "Chef Fit",
        ),
        recipe(
            "10",
            "Butter Chicken",
            &["indian", "chicken", "curry", "comfort"],
            4.9,
            "Creamy tomato-based curry with tender chicken. Cuisine: Indian; Prep: 20m.",
            &["Chicken", "Tomato puree", "Cream", "Butter", "Garam masala", "Garlic", "Ginger"],
            &["Marinate and cook chicken", "Simmer sauce", "Combine and finish with cream"],
            (20, 25),
            3,
            "Chef Delhi",
        ),
        recipe(
            "11",
            "Sushi Bowl",
            &["japanese", "seafood", "bowl", "fresh"],
            4.1,
            "Deconstructed sushi with rice, fish, and toppings. Cuisine: Japanese.",
            &["Sushi rice", "Salmon or tuna", "Cucumber", "Avocado", "Soy sauce", "Nori"],
            &["Cook rice", "Prepare toppings", "Assemble bowl and season"],
            (15, 18),
            2,
            "Chef Maki",
        ),
        recipe(
            "12",
            "Falafel Wraps",
            &["vegan", "middle-eastern", "wrap", "street-food"],
            4.3,
            "Crispy falafels with tahini sauce wrapped in warm pita. Diet: Vegan.",
            &["Chickpeas", "Herbs", "Spices", "Pita", "Tahini", "Lemon", "Garlic"],
            &["Blend mixture", "Fry or bake", "Assemble wraps with sauce"],
            (25, 15),
            3,
            "Chef Nura",
        ),
        recipe(
            "13",
            "French Onion Soup",
            &["soup", "french", "comfort", "vegetarian"],
            4.2,
            "Deeply caramelized onions in rich broth, topped with cheesy toast. Cuisine: French.",
            &["Onions", "Butter", "Beef or veg broth", "Thyme", "Baguette", "Gruyère"],
            &["Caramelize onions", "Deglaze and simmer", "Top with toast and broil"],
            (20, 40),
            3,
            "Chef Lyon",
        ),
        recipe(
            "14",
            "Caprese Salad",
            &["salad", "italian", "vegetarian", "fresh"],
            3.9,
            "Tomato, mozzarella, and basil drizzled with balsamic glaze. Cuisine: Italian.",
            &["Tomatoes", "Fresh mozzarella", "Basil", "Olive oil", "Balsamic glaze", "Salt"],
            &["Slice tomatoes and mozzarella", "Assemble with basil", "Drizzle and season"],
            (8, 0),
            2,
            "Chef Capri",
        ),
        recipe(
            "15",
            "Veggie Fried Rice",
            &["rice", "asian", "vegetarian", "quick"],
            4.0,
            "Wok-tossed rice with mixed veggies and soy sauce. Cuisine: Chinese-inspired.",
            &["Cooked rice", "Carrots", "Peas", "Eggs (optional)", "Soy sauce", "Sesame oil"],
            &["Scramble eggs (optional)", "Stir-fry veg", "Add rice & sauce, toss well"],
            (10, 10),
            2,
            "Chef Pan",
        ),
        recipe(
            "16",
            "BBQ Pulled Pork Sandwich",
            &["pork", "bbq", "american", "sandwich"],
            4.5,
            "Slow-cooked pork shoulder with tangy BBQ sauce in a soft bun. Cuisine: American.",
            &["Pork shoulder", "BBQ sauce", "Buns", "Cole slaw", "Spices"],
            &["Slow-cook pork", "Shred and sauce", "Assemble sandwiches"],
            (20, 240),
            6,
            "Pitmaster Joe",
        ),
        recipe(
            "17",
            "Tofu Stir-Fry with Peanut Sauce",
            &["tofu", "vegan", "stir-fry", "protein"],
            4.1,
            "Crispy tofu tossed in a creamy peanut sauce with veggies. Diet: Vegan.",
            &["Firm tofu", "Mixed vegetables", "Peanut butter", "Soy sauce", "Lime", "Garlic"],
            &["Crisp tofu", "Stir-fry veg", "Toss with peanut sauce"],
            (12, 14),
            2,
            "Chef Plant",
        ),
        recipe(
            "18",
            "Blueberry Pancakes",
            &["breakfast", "sweet", "vegetarian", "american"],
            4.6,
            "Fluffy pancakes loaded with blueberries and served with maple syrup.",
            &["Flour", "Baking powder", "Milk", "Eggs", "Blueberries", "Butter", "Maple syrup"],
            &["Whisk batter", "Fold in blueberries", "Cook on griddle & serve"],
            (10, 12),
            3,
            "Chef Maple",
        ),
    ]
}
