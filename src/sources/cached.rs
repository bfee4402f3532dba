use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::filters::SearchFilters;
use crate::model::Recipe;
use crate::sources::RecipeSource;
use crate::FinderError;

/// Memoizes successful searches keyed on the normalized filter set.
///
/// Entries are never evicted: the cache grows by one entry per distinct
/// filter set for the lifetime of the process. Failed searches are not stored.
/// Two concurrent misses on the same key both hit the inner source and the
/// second write replaces the first with an equal value.
pub struct CachedSource<S> {
    inner: S,
    entries: RwLock<HashMap<SearchFilters, Vec<Recipe>>>,
}

impl<S: RecipeSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        CachedSource {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct filter sets stored
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn lookup(&self, filters: &SearchFilters) -> Option<Vec<Recipe>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(filters)
            .cloned()
    }

    fn store(&self, filters: SearchFilters, recipes: Vec<Recipe>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(filters, recipes);
    }
}

#[async_trait]
impl<S: RecipeSource> RecipeSource for CachedSource<S> {
    fn source_name(&self) -> &str {
        self.inner.source_name()
    }

    async fn search(&self, filters: &SearchFilters) -> Result<Vec<Recipe>, FinderError> {
        if let Some(recipes) = self.lookup(filters) {
            debug!("Cache hit for {:?}", filters);
            return Ok(recipes);
        }

        let recipes = self.inner.search(filters).await?;
        self.store(filters.clone(), recipes.clone());
        Ok(recipes)
    }
}
