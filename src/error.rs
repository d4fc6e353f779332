use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Recipe not found: {0}")]
    UnknownRecipe(String),

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Unknown preference field: {0}")]
    UnknownField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Day {0} has no meals")]
    EmptyDay(String),

    #[error("Meal plan generation failed: {0}")]
    GenerationFailed(String),

    #[error("Meal plan generation timed out after {0} ms")]
    GenerationTimedOut(u64),

    #[error("Meal plan generation was cancelled")]
    GenerationCancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
