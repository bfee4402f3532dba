use log::{debug, error};
use std::fmt;

use crate::builder::FilterBuilder;
use crate::command::Command;
use crate::config::FinderConfig;
use crate::controller::{reconcile, update, Action};
use crate::filters::SearchFilters;
use crate::model::Recipe;
use crate::render::{
    render_detail, render_filters, render_header, render_listing, render_saved,
    NO_RESULTS_WARNING,
};
use crate::session::{SessionState, ViewMode};
use crate::sources::{fetch_recipes, CachedSource, RecipeSource, SpoonacularClient};
use crate::FinderError;

/// Shown when a view fails to render
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";

/// Which page a frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Listing,
    Detail,
    Saved,
}

/// A message displayed above the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Warning(text) => write!(f, "⚠ {}", text),
            Notice::Error(text) => write!(f, "✖ {}", text),
        }
    }
}

/// Output of one render cycle
#[derive(Debug, Clone)]
pub struct Frame {
    pub page: Page,
    pub text: String,
    pub notices: Vec<Notice>,
}

impl Frame {
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().filter_map(|notice| match notice {
            Notice::Warning(text) => Some(text.as_str()),
            Notice::Error(_) => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().filter_map(|notice| match notice {
            Notice::Error(text) => Some(text.as_str()),
            Notice::Warning(_) => None,
        })
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for notice in &self.notices {
            writeln!(f, "{}", notice)?;
        }
        write!(f, "{}", self.text)
    }
}

/// One user session: widget values, session state and the latest results.
///
/// Every interaction runs a full render cycle from the top.
pub struct App {
    source: Box<dyn RecipeSource>,
    widgets: FilterBuilder,
    session: SessionState,
    results: Vec<Recipe>,
    showing_saved: bool,
}

impl App {
    pub fn new(source: Box<dyn RecipeSource>, widgets: FilterBuilder) -> Self {
        App {
            source,
            widgets,
            session: SessionState::new(),
            results: Vec::new(),
            showing_saved: false,
        }
    }

    /// App backed by the configured API behind a query cache
    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = SpoonacularClient::new(&config.api)?;
        let widgets = SearchFilters::builder().bounds(config.calories);
        Ok(App::new(Box::new(CachedSource::new(client)), widgets))
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Results of the most recent render cycle
    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn widgets(&self) -> &FilterBuilder {
        &self.widgets
    }

    /// Apply one user command, then re-render.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidInput` for commands that cannot be
    /// applied (position out of range, inverted calorie range). Nothing is
    /// changed and no render happens in that case.
    pub async fn apply(&mut self, command: Command) -> Result<Frame, FinderError> {
        debug!("Applying {:?}", command);
        let mut showing_saved = false;

        match command {
            Command::Search(text) => self.widgets = self.widgets.clone().query(text),
            Command::Ingredients(text) => {
                self.widgets = self.widgets.clone().ingredients(text)
            }
            Command::Diet(diet) => self.widgets = self.widgets.clone().diet(diet),
            Command::Allergies(text) => self.widgets = self.widgets.clone().allergies(text),
            Command::Calories(min, max) => {
                let widgets = self.widgets.clone().calories(min, max);
                widgets.build()?;
                self.widgets = widgets;
            }
            Command::View(position) => {
                let id = self.id_at(position)?;
                self.dispatch(Action::View(id));
            }
            Command::Star(position) => {
                let id = self.id_at(position)?;
                self.dispatch(Action::ToggleStar(id));
            }
            Command::Back => self.dispatch(Action::Back),
            Command::Saved => {
                self.dispatch(Action::ShowSaved);
                showing_saved = true;
            }
            Command::Main => self.dispatch(Action::BackToMain),
            Command::Refresh | Command::Help | Command::Quit => {}
        }

        self.showing_saved = showing_saved;
        Ok(self.render().await)
    }

    fn dispatch(&mut self, action: Action) {
        let session = std::mem::take(&mut self.session);
        self.session = update(session, action, &self.results);
    }

    fn id_at(&self, position: usize) -> Result<u64, FinderError> {
        position
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
            .map(|recipe| recipe.id)
            .ok_or_else(|| {
                FinderError::InvalidInput(format!(
                    "there is no result {} (showing {})",
                    position,
                    self.results.len()
                ))
            })
    }

    /// Run one render cycle against the current widgets and session
    pub async fn render(&mut self) -> Frame {
        let mut text = String::new();
        let mut notices = Vec::new();

        if self.showing_saved {
            let rendered = render_header(&mut text)
                .and_then(|_| render_saved(&mut text, self.session.starred()));
            if let Err(e) = rendered {
                error!("Failed to render saved recipes: {}", e);
                notices.push(Notice::Error(UNEXPECTED_ERROR.to_string()));
            }
            return Frame {
                page: Page::Saved,
                text,
                notices,
            };
        }

        let filters = match self.widgets.build() {
            Ok(filters) => filters,
            Err(e) => {
                notices.push(Notice::Error(e.to_string()));
                return Frame {
                    page: self.current_page(),
                    text,
                    notices,
                };
            }
        };

        let outcome = fetch_recipes(self.source.as_ref(), &filters).await;
        if let Some(warning) = outcome.warning {
            notices.push(Notice::Warning(warning));
        }
        if outcome.recipes.is_empty() {
            notices.push(Notice::Warning(NO_RESULTS_WARNING.to_string()));
        }
        self.results = outcome.recipes;

        let session = std::mem::take(&mut self.session);
        self.session = reconcile(session, &self.results);

        match self.render_view(&filters) {
            Ok(body) => text = body,
            Err(e) => {
                error!("Failed to render page: {}", e);
                notices.push(Notice::Error(UNEXPECTED_ERROR.to_string()));
            }
        }

        Frame {
            page: self.current_page(),
            text,
            notices,
        }
    }

    fn current_page(&self) -> Page {
        match self.session.mode() {
            ViewMode::Listing => Page::Listing,
            ViewMode::Detail => Page::Detail,
        }
    }

    fn render_view(&self, filters: &SearchFilters) -> Result<String, FinderError> {
        let mut out = String::new();
        render_header(&mut out)?;
        render_filters(&mut out, filters)?;
        match self.session.selected() {
            Some(recipe) => render_detail(&mut out, recipe)?,
            None => render_listing(&mut out, &self.results, &self.session)?,
        }
        Ok(out)
    }
}
