use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FinderConfig {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Bounds of the calorie range widget
    #[serde(default)]
    pub calories: CalorieBounds,
}

/// Configuration for the recipe-search API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the API (overridable for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Maximum number of results per search
    #[serde(default = "default_result_count")]
    pub result_count: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            result_count: default_result_count(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// API key from config, falling back to the SPOONACULAR_API_KEY environment variable
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Lower and upper limit of the calorie range selector
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CalorieBounds {
    #[serde(default = "default_min_calories")]
    pub min: u32,
    #[serde(default = "default_max_calories")]
    pub max: u32,
}

impl CalorieBounds {
    /// Check that the range selector has a non-empty range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::Message(format!(
                "calories.min ({}) must not exceed calories.max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for CalorieBounds {
    fn default() -> Self {
        Self {
            min: default_min_calories(),
            max: default_max_calories(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_result_count() -> u32 {
    10
}

fn default_timeout() -> u64 {
    30
}

fn default_min_calories() -> u32 {
    50
}

fn default_max_calories() -> u32 {
    2000
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the precedence rules.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_FINDER__API__BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: FinderConfig = settings.try_deserialize()?;
    config.calories.validate()?;
    Ok(config)
}
