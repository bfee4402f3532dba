//! Normalized search constraints sent to the recipe API.
//!
//! Every free-text field goes through the same rules: split on commas, trim,
//! lower-case, drop empty items. A field with nothing left is absent, so the
//! API applies its own default instead of filtering on an empty string.

use std::fmt;
use std::str::FromStr;

use crate::builder::FilterBuilder;
use crate::FinderError;

/// Dietary preference offered by the diet selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Keto,
    LowCarb,
}

impl Diet {
    /// All options in selector order
    pub const ALL: [Diet; 5] = [
        Diet::None,
        Diet::Vegetarian,
        Diet::Vegan,
        Diet::Keto,
        Diet::LowCarb,
    ];

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            Diet::None => "None",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::Keto => "Keto",
            Diet::LowCarb => "Low-Carb",
        }
    }

    /// Value of the `diet` request parameter; `None` sends nothing
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            Diet::None => None,
            Diet::Vegetarian => Some("vegetarian"),
            Diet::Vegan => Some("vegan"),
            Diet::Keto => Some("keto"),
            Diet::LowCarb => Some("low-carb"),
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Diet {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(' ', "-");
        Diet::ALL
            .into_iter()
            .find(|diet| diet.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                let options: Vec<&str> = Diet::ALL.iter().map(Diet::label).collect();
                FinderError::InvalidInput(format!(
                    "unknown diet '{}', choose one of: {}",
                    s.trim(),
                    options.join(", ")
                ))
            })
    }
}

/// The normalized filter set; also the key of the query cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub min_calories: u32,
    pub max_calories: u32,
    pub diet: Diet,
    pub intolerances: Option<Vec<String>>,
    pub include_ingredients: Option<Vec<String>>,
}

impl SearchFilters {
    /// Creates a new builder over raw widget values
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    /// Filter-dependent request parameters, in a stable order.
    ///
    /// Absent filters produce no entry at all.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        params.push(("minCalories", self.min_calories.to_string()));
        params.push(("maxCalories", self.max_calories.to_string()));
        if let Some(diet) = self.diet.as_param() {
            params.push(("diet", diet.to_string()));
        }
        if let Some(intolerances) = &self.intolerances {
            params.push(("intolerances", intolerances.join(",")));
        }
        if let Some(ingredients) = &self.include_ingredients {
            params.push(("includeIngredients", ingredients.join(",")));
        }
        params
    }
}

/// Split a comma-separated field into trimmed, lower-cased items.
///
/// Returns `None` when no item survives, never an empty list.
pub fn parse_list(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_lowercase)
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Normalize the free-text query: same rules as lists, items joined by a space
pub fn parse_query(raw: &str) -> Option<String> {
    parse_list(raw).map(|items| items.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_lowercases() {
        assert_eq!(
            parse_list(" Peanuts, SHELLFISH "),
            Some(vec!["peanuts".to_string(), "shellfish".to_string()])
        );
    }

    #[test]
    fn test_parse_list_preserves_order() {
        assert_eq!(
            parse_list("Tomato,basil , Garlic"),
            Some(vec![
                "tomato".to_string(),
                "basil".to_string(),
                "garlic".to_string()
            ])
        );
    }

    #[test]
    fn test_empty_fields_are_absent() {
        assert_eq!(parse_list(""), None);
        assert_eq!(parse_list("   \t "), None);
        assert_eq!(parse_list(" , ,"), None);
        assert_eq!(parse_query("  "), None);
    }

    #[test]
    fn test_parse_query_joins_with_space() {
        assert_eq!(parse_query("Pasta, Tomato "), Some("pasta tomato".to_string()));
    }

    #[test]
    fn test_diet_from_str() {
        assert_eq!("None".parse::<Diet>().unwrap(), Diet::None);
        assert_eq!("vegan".parse::<Diet>().unwrap(), Diet::Vegan);
        assert_eq!("Low-Carb".parse::<Diet>().unwrap(), Diet::LowCarb);
        assert_eq!("low carb".parse::<Diet>().unwrap(), Diet::LowCarb);
        assert!("paleo".parse::<Diet>().is_err());
    }

    #[test]
    fn test_diet_none_has_no_param() {
        assert_eq!(Diet::None.as_param(), None);
        assert_eq!(Diet::Keto.as_param(), Some("keto"));
    }

    #[test]
    fn test_to_params_omits_absent_filters() {
        let filters = SearchFilters {
            query: None,
            min_calories: 50,
            max_calories: 2000,
            diet: Diet::None,
            intolerances: None,
            include_ingredients: None,
        };

        let params = filters.to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["minCalories", "maxCalories"]);
        assert!(params.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn test_to_params_joins_lists() {
        let filters = SearchFilters {
            query: Some("soup".to_string()),
            min_calories: 100,
            max_calories: 600,
            diet: Diet::Vegetarian,
            intolerances: Some(vec!["peanuts".to_string(), "shellfish".to_string()]),
            include_ingredients: Some(vec!["garlic".to_string()]),
        };

        assert_eq!(
            filters.to_params(),
            vec![
                ("query", "soup".to_string()),
                ("minCalories", "100".to_string()),
                ("maxCalories", "600".to_string()),
                ("diet", "vegetarian".to_string()),
                ("intolerances", "peanuts,shellfish".to_string()),
                ("includeIngredients", "garlic".to_string()),
            ]
        );
    }
}
