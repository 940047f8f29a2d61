use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::core::OfflineRegistrar;
use crate::utils::error::{RecipeError, Result};

/// Registers a worker script served from a local site directory.
///
/// Registration succeeds when the script exists under the site root. The
/// scope is the directory the script is served from, relative to the root,
/// so `./sw.js` controls `./` and `./app/sw.js` controls `./app/`.
#[derive(Debug, Clone)]
pub struct WorkerRegistrar {
    site_root: PathBuf,
}

impl WorkerRegistrar {
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }

    fn scope_for(script: &Path) -> String {
        let parent = script.parent().unwrap_or_else(|| Path::new(""));
        let parts: Vec<String> = parent
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            "./".to_string()
        } else {
            format!("./{}/", parts.join("/"))
        }
    }
}

#[async_trait]
impl OfflineRegistrar for WorkerRegistrar {
    async fn register(&self, script: &str) -> Result<String> {
        let relative = Path::new(script);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(RecipeError::InvalidConfigValueError {
                field: "worker_script".to_string(),
                value: script.to_string(),
                reason: "Worker script must be a relative path inside the site root".to_string(),
            });
        }

        let full_path = self.site_root.join(relative);
        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.is_file() => Ok(Self::scope_for(relative)),
            Ok(_) => Err(RecipeError::InvalidConfigValueError {
                field: "worker_script".to_string(),
                value: script.to_string(),
                reason: "Worker script is not a file".to_string(),
            }),
            Err(e) => Err(RecipeError::IoError(e)),
        }
    }
}
