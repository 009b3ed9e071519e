/// Quantity used when a generated line carries no parenthesised amount.
pub const QUANTITY_NOT_SPECIFIED: &str = "quantity not specified";

/// A single ingredient candidate parsed out of a generated reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: String,
    pub selected: bool,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            selected: false,
        }
    }

    /// Line with no known quantity
    pub fn unquantified(name: impl Into<String>) -> Self {
        Self::new(name, QUANTITY_NOT_SPECIFIED)
    }

    pub fn has_quantity(&self) -> bool {
        self.quantity != QUANTITY_NOT_SPECIFIED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_is_unselected() {
        let line = IngredientLine::new("Carrots", "200 g");

        assert_eq!(line.name, "Carrots");
        assert_eq!(line.quantity, "200 g");
        assert!(!line.selected);
        assert!(line.has_quantity());
    }

    #[test]
    fn test_unquantified_line_uses_sentinel() {
        let line = IngredientLine::unquantified("Olive oil");

        assert_eq!(line.quantity, "quantity not specified");
        assert!(!line.has_quantity());
    }
}
