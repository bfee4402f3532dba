mod cached;
mod spoonacular;

pub use cached::CachedSource;
pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use crate::filters::SearchFilters;
use crate::model::Recipe;
use crate::FinderError;

/// Warning shown when a search could not be completed
pub const FETCH_WARNING: &str = "Error fetching recipes from the API. Please try again later.";

/// Anything that can answer a recipe search
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short name used in logs (e.g. "spoonacular")
    fn source_name(&self) -> &str;

    /// Run one search with the given filters
    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Recipe>, FinderError>;
}

#[async_trait]
impl<S: RecipeSource + ?Sized> RecipeSource for Arc<S> {
    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Recipe>, FinderError> {
        (**self).search(filters).await
    }
}

/// Results of one render cycle's search
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub recipes: Vec<Recipe>,
    /// User-visible warning when the search failed
    pub warning: Option<String>,
}

/// Search without failing: errors become an empty result set plus a warning
pub async fn fetch_recipes(source: &dyn RecipeSource, filters: &SearchFilters) -> FetchOutcome {
    match source.search(filters).await {
        Ok(recipes) => FetchOutcome {
            recipes,
            warning: None,
        },
        Err(e) => {
            warn!("Search via {} failed: {}", source.source_name(), e);
            FetchOutcome {
                recipes: Vec::new(),
                warning: Some(FETCH_WARNING.to_string()),
            }
        }
    }
}
