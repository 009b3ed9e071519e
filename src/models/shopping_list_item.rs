use std::fmt;

use serde::{Deserialize, Serialize};

use super::IngredientLine;

/// A dish-tagged entry of the persisted shopping list.
///
/// Entries carry no identity: two items with the same name, quantity and dish
/// are separate entries and both stay in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub quantity: String,
    pub dish: String,
}

impl ShoppingListItem {
    /// Promote a confirmed ingredient line, stamping it with the active dish
    pub fn from_line(line: &IngredientLine, dish: &str) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity.clone(),
            dish: dish.to_string(),
        }
    }
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.name, self.quantity, self.dish)
    }
}
