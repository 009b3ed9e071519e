mod cart;
mod ingredient_line;
mod shopping_list_item;

#[cfg(test)]
pub mod test_fixtures;

pub use cart::{Bill, Cart, CartItem, DEFAULT_DISCOUNT};
pub use ingredient_line::{IngredientLine, QUANTITY_NOT_SPECIFIED};
pub use shopping_list_item::ShoppingListItem;
