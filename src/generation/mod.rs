use std::future::Future;

use crate::error::Result;

mod gemini;
mod prompt;

pub use gemini::GeminiClient;
pub use prompt::ingredient_prompt;

/// Prompt in, free-form text out
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}
