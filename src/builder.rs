use crate::config::CalorieBounds;
use crate::filters::{parse_list, parse_query, Diet, SearchFilters};
use crate::FinderError;

/// Raw values of the search widgets, turned into [`SearchFilters`] on every render
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    query: String,
    ingredients: String,
    diet: Diet,
    allergies: String,
    calories: Option<(u32, u32)>,
    bounds: CalorieBounds,
}

impl FilterBuilder {
    /// Set the recipe name search text
    ///
    /// # Example
    /// ```
    /// use recipe_finder::SearchFilters;
    ///
    /// let filters = SearchFilters::builder().query(" Pasta ").build().unwrap();
    /// assert_eq!(filters.query.as_deref(), Some("pasta"));
    /// ```
    pub fn query(mut self, text: impl Into<String>) -> Self {
        self.query = text.into();
        self
    }

    /// Set the comma-separated ingredients the recipes must use
    pub fn ingredients(mut self, text: impl Into<String>) -> Self {
        self.ingredients = text.into();
        self
    }

    /// Set the dietary preference
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{Diet, SearchFilters};
    ///
    /// let filters = SearchFilters::builder().diet(Diet::None).build().unwrap();
    /// assert!(filters.to_params().iter().all(|(key, _)| *key != "diet"));
    /// ```
    pub fn diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Set the comma-separated list of ingredients the user is allergic to
    pub fn allergies(mut self, text: impl Into<String>) -> Self {
        self.allergies = text.into();
        self
    }

    /// Select a calorie range
    pub fn calories(mut self, min: u32, max: u32) -> Self {
        self.calories = Some((min, max));
        self
    }

    /// Set the limits of the calorie range selector
    pub fn bounds(mut self, bounds: CalorieBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Currently selected calorie range, defaulting to the full bounds
    pub fn current_calories(&self) -> (u32, u32) {
        self.calories.unwrap_or((self.bounds.min, self.bounds.max))
    }

    /// Normalize the widget values into a filter set
    ///
    /// # Errors
    /// Returns `FinderError::InvalidInput` if the calorie range or the selector
    /// limits are inverted. Values outside the limits are clamped, as a slider would.
    pub fn build(&self) -> Result<SearchFilters, FinderError> {
        self.bounds
            .validate()
            .map_err(|e| FinderError::InvalidInput(e.to_string()))?;
        let (min, max) = self.current_calories();
        if min > max {
            return Err(FinderError::InvalidInput(format!(
                "minimum calories ({}) must not exceed maximum ({})",
                min, max
            )));
        }
        let clamp = |value: u32| value.clamp(self.bounds.min, self.bounds.max);

        Ok(SearchFilters {
            query: parse_query(&self.query),
            min_calories: clamp(min),
            max_calories: clamp(max),
            diet: self.diet,
            intolerances: parse_list(&self.allergies),
            include_ingredients: parse_list(&self.ingredients),
        })
    }
}
