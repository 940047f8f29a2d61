use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::model::{RecipeCollection, SourceList};
use crate::utils::error::Result;

/// Persistent key-value storage for serialized values.
pub trait RecipeStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Retrieves the raw body behind a URL. Failures are network errors; the
/// caller is responsible for parsing.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Turns a recipe collection into displayed units. `None` means nothing
/// was loaded and must leave the sink untouched.
pub trait RecipeSink {
    fn render(&mut self, recipes: Option<&RecipeCollection>);
}

#[async_trait]
pub trait OfflineRegistrar: Send + Sync {
    /// Registers the worker script and returns the scope it controls.
    async fn register(&self, script: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn sources(&self) -> SourceList;
    fn cache_dir(&self) -> PathBuf;
    fn output_path(&self) -> PathBuf;
    fn request_timeout(&self) -> Option<Duration>;
    fn offline_enabled(&self) -> bool;
    fn site_root(&self) -> PathBuf;
    fn worker_script(&self) -> &str;
}
