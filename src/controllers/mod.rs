mod recipe_controller;
mod shopping_list_controller;

pub use recipe_controller::generate_ingredients;
pub use shopping_list_controller::{
    AddOutcome, SHOPPING_LIST_BACKUP_KEY, SHOPPING_LIST_KEY, ShoppingListAggregator,
};
