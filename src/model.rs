//! Response types of the recipe-search API.
//!
//! Only the fields the views consume are modelled; everything else in the
//! payload is ignored. Lists default to empty so partial payloads still parse.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Top-level body of a search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching recipes; missing means no matches
    #[serde(default)]
    pub results: Vec<Recipe>,
}

/// A recipe as returned with `addRecipeInformation=true`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionSet>,
}

impl Recipe {
    /// Calorie amount as the API wrote it, taken from the first nutrient reported
    pub fn calorie_amount(&self) -> Option<&Number> {
        self.nutrition
            .as_ref()
            .and_then(|n| n.nutrients.first())
            .and_then(|nutrient| nutrient.amount.as_ref())
    }

    pub fn calories(&self) -> Option<f64> {
        self.calorie_amount().and_then(Number::as_f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(default)]
    pub name: String,
    /// Kept as received so whole and fractional values display as sent
    #[serde(default)]
    pub amount: Option<Number>,
    #[serde(default)]
    pub unit: String,
}

/// One ingredient line; `original` is the text as written in the source recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub original: Option<String>,
}

/// A named group of numbered steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub step: Option<String>,
}
