use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::config::ApiConfig;
use crate::filters::SearchFilters;
use crate::model::{Recipe, SearchResponse};
use crate::sources::RecipeSource;
use crate::FinderError;

/// Client for the Spoonacular `complexSearch` endpoint
pub struct SpoonacularClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    result_count: u32,
}

impl SpoonacularClient {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let api_key = config.resolved_api_key();
        if api_key.is_none() {
            warn!("No API key configured; set RECIPE_FINDER__API__API_KEY or SPOONACULAR_API_KEY");
        }

        Ok(SpoonacularClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            result_count: config.result_count,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/recipes/complexSearch", self.base_url)
    }

    /// Full parameter list of one search request
    fn request_params(&self, filters: &SearchFilters) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(key) = &self.api_key {
            params.push(("apiKey", key.clone()));
        }
        params.extend(filters.to_params());
        params.push(("number", self.result_count.to_string()));
        params.push(("addRecipeInformation", "true".to_string()));
        params.push(("instructionsRequired", "true".to_string()));
        params
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    fn source_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Recipe>, FinderError> {
        debug!("Searching recipes with {:?}", filters.to_params());

        let response = self
            .client
            .get(self.endpoint())
            .query(&self.request_params(filters))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!("Received {} recipes", parsed.results.len());
        Ok(parsed.results)
    }
}
