use crate::core::{ConfigProvider, SourceList};
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CACHE_DIR: &str = "./cache";
const DEFAULT_OUTPUT_PATH: &str = "./index.html";
const DEFAULT_WORKER_SCRIPT: &str = "./sw.js";
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub loader: LoaderConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub offline: OfflineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Falls back to the built-in list when omitted.
    pub sources: Option<Vec<String>>,
    pub cache_dir: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub output_path: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineConfig {
    pub enabled: bool,
    pub site_root: Option<String>,
    pub worker_script: Option<String>,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            site_root: None,
            worker_script: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecipeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecipeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RECIPE_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecipeError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_sources("loader.sources", self.sources().as_slice())?;

        if let Some(dir) = &self.loader.cache_dir {
            validation::validate_path("loader.cache_dir", dir)?;
        }
        if let Some(secs) = self.loader.timeout_seconds {
            validation::validate_positive_number("loader.timeout_seconds", secs, 1)?;
        }
        if let Some(path) = &self.render.output_path {
            validation::validate_path("render.output_path", path)?;
        }
        if self.offline.enabled {
            if let Some(root) = &self.offline.site_root {
                validation::validate_path("offline.site_root", root)?;
            }
            if let Some(script) = &self.offline.worker_script {
                validation::validate_path("offline.worker_script", script)?;
            }
        }
        if let Some(format) = &self.logging.format {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }

    pub fn title(&self) -> &str {
        self.render.title.as_deref().unwrap_or("Recipes")
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl ConfigProvider for TomlConfig {
    fn sources(&self) -> SourceList {
        match &self.loader.sources {
            Some(urls) => SourceList::new(urls.clone()),
            None => SourceList::default(),
        }
    }

    fn cache_dir(&self) -> PathBuf {
        PathBuf::from(self.loader.cache_dir.as_deref().unwrap_or(DEFAULT_CACHE_DIR))
    }

    fn output_path(&self) -> PathBuf {
        PathBuf::from(
            self.render
                .output_path
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_PATH),
        )
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.loader.timeout_seconds.map(Duration::from_secs)
    }

    fn offline_enabled(&self) -> bool {
        self.offline.enabled
    }

    fn site_root(&self) -> PathBuf {
        PathBuf::from(self.offline.site_root.as_deref().unwrap_or("."))
    }

    fn worker_script(&self) -> &str {
        self.offline
            .worker_script
            .as_deref()
            .unwrap_or(DEFAULT_WORKER_SCRIPT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
