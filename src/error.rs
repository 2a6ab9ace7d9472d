use thiserror::Error;

/// Errors that can occur while configuring or parsing recipe data
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A structured generation reply could not be parsed as recipe JSON
    #[error("Failed to parse recipe reply: {0}")]
    ReplyParse(#[from] serde_json::Error),
}
