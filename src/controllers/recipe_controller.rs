use crate::error::{GoKartsError, Result};
use crate::generation::{TextGenerator, ingredient_prompt};
use crate::models::IngredientLine;
use crate::parsing;

/// Ask the generator for a dish's ingredients and parse the reply.
///
/// A failed or blank reply is a `GenerationFailure` and never reaches the parser.
pub async fn generate_ingredients<G: TextGenerator>(
    generator: &G,
    dish: &str,
) -> Result<Vec<IngredientLine>> {
    let dish = dish.trim();
    if dish.is_empty() {
        return Err(GoKartsError::InvalidDish);
    }

    let reply = generator.generate(&ingredient_prompt(dish)).await?;
    if reply.trim().is_empty() {
        tracing::error!(dish, "generator returned an empty reply");
        return Err(GoKartsError::GenerationFailure(
            "empty reply from generator".to_string(),
        ));
    }

    let lines = parsing::produce(&reply);
    tracing::debug!(dish, count = lines.len(), "generated ingredients");

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Replays a canned reply and remembers the prompts it saw
    struct CannedGenerator {
        reply: Result<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(GoKartsError::GenerationFailure("503".to_string())),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().expect("prompt log poisoned").clone()
        }
    }

    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts
                .lock()
                .expect("prompt log poisoned")
                .push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(GoKartsError::GenerationFailure(e.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_generate_ingredients_parses_reply() {
        let generator = CannedGenerator::replying(
            "Sure! Here you go:\n1. Basmati rice (300 g)\n2. Chicken (500 g)\n3. Saffron",
        );

        let lines = generate_ingredients(&generator, "Biryani")
            .await
            .expect("Failed to generate ingredients");

        assert_eq!(
            lines,
            vec![
                IngredientLine::new("Basmati rice", "300 g"),
                IngredientLine::new("Chicken", "500 g"),
                IngredientLine::unquantified("Saffron"),
            ]
        );
        assert_eq!(generator.prompts(), vec![ingredient_prompt("Biryani")]);
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let generator = CannedGenerator::failing();

        let result = generate_ingredients(&generator, "Soup").await;

        assert!(matches!(result, Err(GoKartsError::GenerationFailure(_))));
    }

    #[tokio::test]
    async fn test_blank_reply_is_a_failure() {
        let generator = CannedGenerator::replying("   \n  ");

        let result = generate_ingredients(&generator, "Soup").await;

        assert!(matches!(result, Err(GoKartsError::GenerationFailure(_))));
    }

    #[tokio::test]
    async fn test_blank_dish_is_rejected_without_calling_generator() {
        let generator = CannedGenerator::replying("1. Salt (5 g)");

        let result = generate_ingredients(&generator, "   ").await;

        assert!(matches!(result, Err(GoKartsError::InvalidDish)));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_reply_without_enumerated_lines_yields_nothing() {
        let generator = CannedGenerator::replying("I'm not sure what that dish is.");

        let lines = generate_ingredients(&generator, "Mystery stew")
            .await
            .expect("Non-empty reply should parse");

        assert!(lines.is_empty());
    }
}
