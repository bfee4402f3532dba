use crate::model::Recipe;

/// Which primary view the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// No recipe selected; the result list is shown
    Listing,
    /// One recipe selected; its details are shown
    Detail,
}

/// Per-session state surviving across render cycles.
///
/// Stars are keyed by title only: two different recipes with the same title
/// share one star.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    selected: Option<Recipe>,
    starred: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        match self.selected {
            Some(_) => ViewMode::Detail,
            None => ViewMode::Listing,
        }
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    /// Starred titles in the order they were starred
    pub fn starred(&self) -> &[String] {
        &self.starred
    }

    pub fn is_starred(&self, title: &str) -> bool {
        self.starred.iter().any(|t| t == title)
    }

    pub(crate) fn select(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Add the title if absent, remove it if present
    pub(crate) fn toggle_star(&mut self, title: &str) {
        match self.starred.iter().position(|t| t == title) {
            Some(index) => {
                self.starred.remove(index);
            }
            None => self.starred.push(title.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testing::recipe;

    #[test]
    fn test_new_session_is_listing() {
        let session = SessionState::new();
        assert_eq!(session.mode(), ViewMode::Listing);
        assert!(session.starred().is_empty());
    }

    #[test]
    fn test_star_then_unstar_restores_set() {
        let mut session = SessionState::new();
        session.toggle_star("Tomato Salad");
        let before = session.clone();

        session.toggle_star("Garlic Soup");
        assert!(session.is_starred("Garlic Soup"));
        session.toggle_star("Garlic Soup");

        assert_eq!(session, before);
    }

    #[test]
    fn test_stars_keep_insertion_order() {
        let mut session = SessionState::new();
        session.toggle_star("B");
        session.toggle_star("A");
        session.toggle_star("C");
        session.toggle_star("A");
        assert_eq!(session.starred(), ["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_selection_drives_mode() {
        let mut session = SessionState::new();
        session.select(recipe(42, "Garlic Soup"));
        assert_eq!(session.mode(), ViewMode::Detail);
        session.clear_selection();
        assert_eq!(session.mode(), ViewMode::Listing);
    }
}
