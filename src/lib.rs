pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileStore, HtmlRenderer, HttpFetcher, MemoryStore, WorkerRegistrar};
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::RecipeEngine, engine::RunReport, loader::RecipeLoader};
pub use domain::model::{Recipe, RecipeCollection, SourceList, CACHE_KEY};
pub use utils::error::{RecipeError, Result};

use domain::ports::ConfigProvider;

/// Builds the engine the binaries run: a file-backed cache, an HTTP fetcher
/// and, when enabled, the offline worker registrar.
pub fn build_engine(config: &impl ConfigProvider) -> Result<RecipeEngine<FileStore, HttpFetcher>> {
    let store = FileStore::new(config.cache_dir());
    let fetcher = HttpFetcher::with_timeout(config.request_timeout())?;
    let loader = RecipeLoader::new(store, fetcher, config.sources());

    let engine = RecipeEngine::new(loader);
    if config.offline_enabled() {
        Ok(engine.with_offline_worker(
            WorkerRegistrar::new(config.site_root()),
            config.worker_script(),
        ))
    } else {
        Ok(engine)
    }
}

/// Renders with a fresh [`HtmlRenderer`] and writes the page to the
/// configured output path.
pub async fn run_to_file(
    engine: &RecipeEngine<FileStore, HttpFetcher>,
    config: &impl ConfigProvider,
    title: &str,
) -> Result<RunReport> {
    let mut renderer = HtmlRenderer::new();
    let report = engine.run(&mut renderer).await;

    let output_path = config.output_path();
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, renderer.document().to_html(title))?;
    tracing::debug!("Wrote {}", output_path.display());

    Ok(report)
}
