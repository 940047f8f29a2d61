use crate::core::{Fetcher, Recipe, RecipeCollection, RecipeStore, SourceList, CACHE_KEY};
use crate::utils::error::{RecipeError, Result};

/// Cache-or-fetch loader for the recipe collection.
///
/// A warm cache entry is returned as stored. On a miss every source is
/// fetched in order, one request at a time, and the full collection is
/// written back under [`CACHE_KEY`]. The first failing source aborts the
/// load; nothing is cached in that case. Requests are not retried and no
/// timeout is applied here, so a stalled source stalls the load unless the
/// fetcher enforces one.
pub struct RecipeLoader<S: RecipeStore, F: Fetcher> {
    store: S,
    fetcher: F,
    sources: SourceList,
}

impl<S: RecipeStore, F: Fetcher> RecipeLoader<S, F> {
    pub fn new(store: S, fetcher: F, sources: SourceList) -> Self {
        Self {
            store,
            fetcher,
            sources,
        }
    }

    /// Every failure comes back as [`RecipeError::LoadError`] wrapping the cause.
    pub async fn load(&self) -> Result<RecipeCollection> {
        self.load_inner().await.map_err(RecipeError::load)
    }

    async fn load_inner(&self) -> Result<RecipeCollection> {
        if let Some(cached) = self.read_cache().await? {
            tracing::info!("Loaded {} recipes from cache", cached.len());
            return Ok(cached);
        }

        tracing::info!(
            "No cached recipes, fetching {} sources",
            self.sources.len()
        );
        let recipes = self.fetch_all().await?;

        self.write_cache(&recipes).await?;
        tracing::info!("Cached {} recipes under '{}'", recipes.len(), CACHE_KEY);

        Ok(recipes)
    }

    async fn read_cache(&self) -> Result<Option<RecipeCollection>> {
        let stored = match self.store.get(CACHE_KEY).await? {
            Some(stored) if !stored.is_empty() => stored,
            _ => return Ok(None),
        };

        let recipes = serde_json::from_str(&stored).map_err(|source| RecipeError::ParseError {
            origin: format!("cache:{}", CACHE_KEY),
            source,
        })?;
        Ok(Some(recipes))
    }

    async fn fetch_all(&self) -> Result<RecipeCollection> {
        let mut recipes = Vec::with_capacity(self.sources.len());

        for url in self.sources.iter() {
            tracing::debug!("Fetching recipe from: {}", url);
            let body = self.fetcher.fetch(url).await?;

            let recipe: Recipe =
                serde_json::from_slice(&body).map_err(|source| RecipeError::ParseError {
                    origin: url.to_string(),
                    source,
                })?;
            recipes.push(recipe);
        }

        Ok(recipes)
    }

    async fn write_cache(&self, recipes: &RecipeCollection) -> Result<()> {
        let serialized = serde_json::to_string(recipes)?;
        self.store
            .set(CACHE_KEY, &serialized)
            .await
            .map_err(|e| match e {
                RecipeError::StorageError { .. } => e,
                other => RecipeError::StorageError {
                    key: CACHE_KEY.to_string(),
                    message: other.to_string(),
                },
            })
    }
}
