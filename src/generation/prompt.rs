const INGREDIENT_INSTRUCTIONS: &str = "\
I am making this dish. Give me only the ingredients, in exactly this format:
1. Ingredient 1 (Quantity)
2. Ingredient 2 (Quantity)
Do not add any other description. Every quantity must be in grams or milliliters.
This is for my shopping list, so list everything I need to buy.
";

/// Build the ingredient-list request for a dish
pub fn ingredient_prompt(dish: &str) -> String {
    format!("Give me a recipe for {}.\n{}", dish.trim(), INGREDIENT_INSTRUCTIONS)
}
