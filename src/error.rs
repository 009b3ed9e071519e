use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoKartsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Ingredient generation failed: {0}")]
    GenerationFailure(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Dish name must not be empty")]
    InvalidDish,

    #[error("There is no ingredient numbered {0}")]
    NoSuchIngredient(usize),
}

pub type Result<T> = std::result::Result<T, GoKartsError>;
