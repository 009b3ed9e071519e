mod ingredient_parser;

pub use ingredient_parser::{fallback_split, is_enumerated, produce, try_structured_match};
