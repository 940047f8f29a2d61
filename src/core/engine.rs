use std::time::Instant;

use crate::core::loader::RecipeLoader;
use crate::core::{Fetcher, OfflineRegistrar, RecipeSink, RecipeStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Scope returned by the offline registrar, if registration ran and succeeded.
    pub worker_scope: Option<String>,
    pub recipes_rendered: usize,
    pub load_failed: bool,
}

/// Page start-up: register the offline worker, load the recipes, hand them
/// to the sink. Neither a failed registration nor a failed load stops the run;
/// both are logged and the sink receives `None` when loading failed.
pub struct RecipeEngine<S: RecipeStore, F: Fetcher> {
    loader: RecipeLoader<S, F>,
    registrar: Option<Box<dyn OfflineRegistrar>>,
    worker_script: String,
}

impl<S: RecipeStore, F: Fetcher> RecipeEngine<S, F> {
    pub fn new(loader: RecipeLoader<S, F>) -> Self {
        Self {
            loader,
            registrar: None,
            worker_script: String::new(),
        }
    }

    pub fn with_offline_worker(
        mut self,
        registrar: impl OfflineRegistrar + 'static,
        worker_script: impl Into<String>,
    ) -> Self {
        self.registrar = Some(Box::new(registrar));
        self.worker_script = worker_script.into();
        self
    }

    pub async fn run(&self, sink: &mut impl RecipeSink) -> RunReport {
        let started = Instant::now();
        let mut report = RunReport {
            worker_scope: self.register_worker().await,
            ..RunReport::default()
        };

        let recipes = match self.loader.load().await {
            Ok(recipes) => Some(recipes),
            Err(e) => {
                tracing::error!("{}", e);
                if let Some(source) = std::error::Error::source(e.cause()) {
                    tracing::debug!("Caused by: {}", source);
                }
                report.load_failed = true;
                None
            }
        };

        sink.render(recipes.as_ref());
        report.recipes_rendered = recipes.as_ref().map_or(0, Vec::len);

        tracing::debug!(
            "Rendered {} recipes in {:?}",
            report.recipes_rendered,
            started.elapsed()
        );
        report
    }

    async fn register_worker(&self) -> Option<String> {
        let registrar = self.registrar.as_ref()?;

        match registrar.register(&self.worker_script).await {
            Ok(scope) => {
                tracing::info!("Offline worker registered, scope: {}", scope);
                Some(scope)
            }
            Err(e) => {
                tracing::info!("Offline worker registration failed: {}", e);
                None
            }
        }
    }
}
