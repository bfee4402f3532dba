//! Named transitions of the session state machine.
//!
//! `Listing --View(id)--> Detail --Back--> Listing`; `ToggleStar` stays in
//! `Listing`. The saved-recipes page sits outside the machine and never
//! touches the selection.

use log::debug;

use crate::model::Recipe;
use crate::session::{SessionState, ViewMode};

/// A user action on the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the detail view of the result with this id
    View(u64),
    /// Return from the detail view to the listing
    Back,
    /// Star or unstar the result with this id
    ToggleStar(u64),
    /// Open the saved-recipes page
    ShowSaved,
    /// Leave the saved-recipes page
    BackToMain,
}

/// Pure update function: applies an action against the current results.
///
/// Actions that do not apply to the current mode, or reference an id not in
/// `results`, leave the state untouched.
pub fn update(mut state: SessionState, action: Action, results: &[Recipe]) -> SessionState {
    match (state.mode(), action) {
        (ViewMode::Listing, Action::View(id)) => {
            if let Some(recipe) = find(results, id) {
                state.select(recipe.clone());
            } else {
                debug!("Ignoring view of unknown recipe {}", id);
            }
        }
        (ViewMode::Detail, Action::Back) => state.clear_selection(),
        (ViewMode::Listing, Action::ToggleStar(id)) => {
            if let Some(recipe) = find(results, id) {
                state.toggle_star(&recipe.title);
            } else {
                debug!("Ignoring star of unknown recipe {}", id);
            }
        }
        _ => {}
    }
    state
}

/// Drop a selection that is no longer part of the latest results
pub fn reconcile(mut state: SessionState, results: &[Recipe]) -> SessionState {
    let stale = state
        .selected()
        .is_some_and(|selected| find(results, selected.id).is_none());
    if stale {
        debug!("Selected recipe left the result set; returning to listing");
        state.clear_selection();
    }
    state
}

fn find(results: &[Recipe], id: u64) -> Option<&Recipe> {
    results.iter().find(|recipe| recipe.id == id)
}
