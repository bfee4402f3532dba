//! Markdown pages for the listing, detail and saved-recipes views.

use std::borrow::Cow;
use std::fmt::Write;

use crate::filters::SearchFilters;
use crate::model::Recipe;
use crate::session::SessionState;
use crate::FinderError;

pub const NO_RESULTS_WARNING: &str =
    "No recipes found matching your criteria. Try adjusting the filters.";
pub const NO_INSTRUCTIONS: &str = "No instructions available.";
pub const NO_SAVED_RECIPES: &str = "No saved recipes yet.";

const STARRED: &str = "⭐";
const UNSTARRED: &str = "☆";

/// API text may carry HTML entities such as `&amp;`
fn display(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

fn calories_label(recipe: &Recipe) -> String {
    recipe
        .calorie_amount()
        .map(|amount| amount.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn render_header(out: &mut String) -> Result<(), FinderError> {
    writeln!(out, "# Personalized Recipe Recommendation System")?;
    writeln!(
        out,
        "Get recipe suggestions based on your preferences and allergies!"
    )?;
    writeln!(
        out,
        "This app helps solve the common dilemma of 'What to cook?' with personalized \
         recipe suggestions that match your preferences, available ingredients, and \
         dietary needs. It also ensures safety by taking allergies into account, making \
         it inclusive for everyone."
    )?;
    writeln!(out)?;
    Ok(())
}

/// One-line summary of the active filters
pub fn render_filters(out: &mut String, filters: &SearchFilters) -> Result<(), FinderError> {
    let list = |items: &Option<Vec<String>>| {
        items
            .as_ref()
            .map(|items| items.join(", "))
            .unwrap_or_else(|| "-".to_string())
    };
    writeln!(
        out,
        "_Search: {} | Ingredients: {} | Diet: {} | Allergies: {} | Calories: {}-{}_",
        filters.query.as_deref().unwrap_or("-"),
        list(&filters.include_ingredients),
        filters.diet,
        list(&filters.intolerances),
        filters.min_calories,
        filters.max_calories
    )?;
    writeln!(out)?;
    Ok(())
}

/// Result list with per-result star marker and actions
pub fn render_listing(
    out: &mut String,
    recipes: &[Recipe],
    session: &SessionState,
) -> Result<(), FinderError> {
    writeln!(out, "## Recommended Recipes")?;
    for (index, recipe) in recipes.iter().enumerate() {
        let position = index + 1;
        let marker = if session.is_starred(&recipe.title) {
            STARRED
        } else {
            UNSTARRED
        };
        writeln!(
            out,
            "{}. **{}** - {} kcal {}",
            position,
            display(&recipe.title),
            calories_label(recipe),
            marker
        )?;
        if let Some(image) = &recipe.image {
            writeln!(out, "   {}", image)?;
        }
        writeln!(out, "   [view {0}] [star {0}]", position)?;
    }
    Ok(())
}

/// Ingredients and numbered steps of one recipe
pub fn render_detail(out: &mut String, recipe: &Recipe) -> Result<(), FinderError> {
    writeln!(out, "## Recipe: {}", display(&recipe.title))?;
    if let Some(image) = &recipe.image {
        writeln!(out, "{}", image)?;
    }

    if !recipe.extended_ingredients.is_empty() {
        writeln!(out, "### Ingredients:")?;
        for (index, ingredient) in recipe.extended_ingredients.iter().enumerate() {
            let text = ingredient.original.as_deref().ok_or_else(|| {
                FinderError::MalformedRecipe(format!(
                    "ingredient {} of '{}' has no text",
                    index + 1,
                    recipe.title
                ))
            })?;
            writeln!(out, "- {}", display(text))?;
        }
    }

    writeln!(out, "### Directions to Cook:")?;
    if recipe.analyzed_instructions.is_empty() {
        writeln!(out, "{}", NO_INSTRUCTIONS)?;
    } else {
        for step in recipe
            .analyzed_instructions
            .iter()
            .flat_map(|set| set.steps.iter())
        {
            let text = step.step.as_deref().ok_or_else(|| {
                FinderError::MalformedRecipe(format!(
                    "step {} of '{}' has no text",
                    step.number, recipe.title
                ))
            })?;
            writeln!(out, "**{}. {}**", step.number, display(text))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "[back] Back to Recipes")?;
    Ok(())
}

pub fn render_saved(out: &mut String, starred: &[String]) -> Result<(), FinderError> {
    writeln!(out, "# Saved Recipes")?;
    if starred.is_empty() {
        writeln!(out, "{}", NO_SAVED_RECIPES)?;
    } else {
        for title in starred {
            writeln!(out, "{} **{}**", STARRED, display(title))?;
        }
    }
    writeln!(out)?;
    writeln!(out, "[main] Back to Main")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, InstructionSet, Nutrient, Nutrition, Step};
    use crate::sources::testing::recipe;

    fn soup() -> Recipe {
        let mut soup = recipe(42, "Garlic Soup");
        soup.image = Some("https://img.example/42.jpg".to_string());
        soup.nutrition = Some(Nutrition {
            nutrients: vec![Nutrient {
                name: "Calories".to_string(),
                amount: serde_json::Number::from_f64(310.5),
                unit: "kcal".to_string(),
            }],
        });
        soup.extended_ingredients = vec![Ingredient {
            original: Some("6 cloves garlic".to_string()),
        }];
        soup.analyzed_instructions = vec![InstructionSet {
            name: String::new(),
            steps: vec![
                Step {
                    number: 1,
                    step: Some("Roast the garlic.".to_string()),
                },
                Step {
                    number: 2,
                    step: Some("Simmer with stock.".to_string()),
                },
            ],
        }];
        soup
    }

    #[test]
    fn test_listing_shows_calories_and_star_marker() {
        let mut session = SessionState::new();
        session.toggle_star("Garlic Soup");
        let recipes = vec![soup(), recipe(7, "Tomato Salad")];

        let mut out = String::new();
        render_listing(&mut out, &recipes, &session).unwrap();

        assert!(out.contains("1. **Garlic Soup** - 310.5 kcal ⭐"));
        assert!(out.contains("2. **Tomato Salad** - N/A kcal ☆"));
        assert!(out.contains("[view 2] [star 2]"));
    }

    #[test]
    fn test_detail_lists_ingredients_and_steps() {
        let mut out = String::new();
        render_detail(&mut out, &soup()).unwrap();

        assert!(out.contains("## Recipe: Garlic Soup"));
        assert!(out.contains("### Ingredients:\n- 6 cloves garlic"));
        assert!(out.contains("**1. Roast the garlic.**\n**2. Simmer with stock.**"));
        assert!(!out.contains(NO_INSTRUCTIONS));
    }

    #[test]
    fn test_detail_without_instructions_uses_fallback() {
        let mut out = String::new();
        render_detail(&mut out, &recipe(1, "Plain Toast")).unwrap();

        assert!(out.contains(&format!("### Directions to Cook:\n{}", NO_INSTRUCTIONS)));
        assert!(!out.contains("### Ingredients:"));
    }

    #[test]
    fn test_detail_with_missing_step_text_fails() {
        let mut broken = soup();
        broken.analyzed_instructions[0].steps[1].step = None;

        let mut out = String::new();
        let result = render_detail(&mut out, &broken);
        assert!(matches!(result, Err(FinderError::MalformedRecipe(_))));
    }

    #[test]
    fn test_html_entities_are_decoded() {
        let mut out = String::new();
        let recipes = vec![recipe(3, "Mac &amp; Cheese")];
        render_listing(&mut out, &recipes, &SessionState::new()).unwrap();
        assert!(out.contains("**Mac & Cheese**"));
    }

    #[test]
    fn test_header_has_both_intro_paragraphs() {
        let mut out = String::new();
        render_header(&mut out).unwrap();
        assert!(out.starts_with("# Personalized Recipe Recommendation System\n"));
        assert!(out.contains("based on your preferences and allergies!"));
        assert!(out.contains(
            "the common dilemma of 'What to cook?' with personalized recipe suggestions"
        ));
    }

    #[test]
    fn test_nutrient_without_amount_renders_na() {
        let mut salad = recipe(7, "Tomato Salad");
        salad.nutrition = Some(Nutrition {
            nutrients: vec![Nutrient {
                name: "Calories".to_string(),
                amount: None,
                unit: "kcal".to_string(),
            }],
        });
        let mut out = String::new();
        render_listing(&mut out, &[soup(), salad], &SessionState::new()).unwrap();
        assert!(out.contains("1. **Garlic Soup** - 310.5 kcal ☆"));
        assert!(out.contains("2. **Tomato Salad** - N/A kcal ☆"));
    }

    #[test]
    fn test_filter_summary() {
        let filters = SearchFilters::builder()
            .query("Soup")
            .allergies("Peanuts, SHELLFISH")
            .build()
            .unwrap();

        let mut out = String::new();
        render_filters(&mut out, &filters).unwrap();
        assert!(out.contains(
            "_Search: soup | Ingredients: - | Diet: None | Allergies: peanuts, shellfish | Calories: 50-2000_"
        ));
    }

    #[test]
    fn test_saved_page() {
        let mut out = String::new();
        render_saved(&mut out, &[]).unwrap();
        assert!(out.contains(NO_SAVED_RECIPES));

        let mut out = String::new();
        render_saved(&mut out, &["Garlic Soup".to_string()]).unwrap();
        assert!(out.contains("⭐ **Garlic Soup**"));
        assert!(out.contains("Back to Main"));
    }
}
