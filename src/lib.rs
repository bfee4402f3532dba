//! Interactive recipe search over the Spoonacular API.
//!
//! Raw filter input goes through [`SearchFilters::builder`], is sent by a
//! [`RecipeSource`] (normally [`SpoonacularClient`] behind a [`CachedSource`]),
//! and the results are rendered by an [`App`] that keeps the per-session
//! selection and starred titles.

pub mod app;
pub mod builder;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod model;
pub mod render;
pub mod session;
pub mod sources;

pub use app::{App, Frame, Notice, Page};
pub use builder::FilterBuilder;
pub use command::Command;
pub use config::FinderConfig;
pub use controller::Action;
pub use error::FinderError;
pub use filters::{Diet, SearchFilters};
pub use model::Recipe;
pub use session::{SessionState, ViewMode};
pub use sources::{fetch_recipes, CachedSource, FetchOutcome, RecipeSource, SpoonacularClient};

/// Run a single search with configuration from `config.toml` and the environment
///
/// # Example
/// ```no_run
/// # use recipe_finder::{search_recipes, SearchFilters};
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_finder::FinderError> {
/// let filters = SearchFilters::builder().query("garlic soup").build()?;
/// let recipes = search_recipes(&filters).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(filters: &SearchFilters) -> Result<Vec<Recipe>, FinderError> {
    let config = FinderConfig::load()?;
    SpoonacularClient::new(&config.api)?.search(filters).await
}
