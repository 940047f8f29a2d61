pub mod engine;
pub mod loader;

pub use crate::domain::model::{Recipe, RecipeCollection, SourceList, CACHE_KEY};
pub use crate::domain::ports::{ConfigProvider, Fetcher, OfflineRegistrar, RecipeSink, RecipeStore};
pub use crate::utils::error::Result;
