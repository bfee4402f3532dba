use thiserror::Error;

/// Errors that can occur while searching for and displaying recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned status {0}")]
    Status(u16),

    /// The recipe API answered with a body we could not parse
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// User input that cannot be applied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A recipe lacks data a view needs
    #[error("Malformed recipe: {0}")]
    MalformedRecipe(String),

    /// Writing a page failed
    #[error("Render error: {0}")]
    RenderError(#[from] std::fmt::Error),
}
