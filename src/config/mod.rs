pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;
    use serde::{Deserialize, Serialize};

    use crate::core::{ConfigProvider, SourceList};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "recipe-loader")]
    #[command(about = "Load recipes from the cache or the network and render them as HTML")]
    pub struct CliConfig {
        /// Recipe URLs in display order; the built-in list when omitted
        #[arg(long, value_delimiter = ',')]
        pub sources: Vec<String>,

        #[arg(long, default_value = "./cache")]
        pub cache_dir: String,

        #[arg(long, default_value = "./index.html")]
        pub output: String,

        #[arg(long, default_value = ".")]
        pub site_root: String,

        #[arg(long, default_value = "./sw.js")]
        pub worker_script: String,

        #[arg(long, help = "Skip offline worker registration")]
        pub no_offline: bool,

        /// Per-request timeout; requests wait indefinitely when omitted
        #[arg(long)]
        pub timeout_secs: Option<u64>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn sources(&self) -> SourceList {
            if self.sources.is_empty() {
                SourceList::default()
            } else {
                SourceList::new(self.sources.clone())
            }
        }

        fn cache_dir(&self) -> PathBuf {
            PathBuf::from(&self.cache_dir)
        }

        fn output_path(&self) -> PathBuf {
            PathBuf::from(&self.output)
        }

        fn request_timeout(&self) -> Option<Duration> {
            self.timeout_secs.map(Duration::from_secs)
        }

        fn offline_enabled(&self) -> bool {
            !self.no_offline
        }

        fn site_root(&self) -> PathBuf {
            PathBuf::from(&self.site_root)
        }

        fn worker_script(&self) -> &str {
            &self.worker_script
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_sources("sources", self.sources().as_slice())?;
            validation::validate_path("cache_dir", &self.cache_dir)?;
            validation::validate_path("output", &self.output)?;
            if self.offline_enabled() {
                validation::validate_path("site_root", &self.site_root)?;
                validation::validate_path("worker_script", &self.worker_script)?;
            }
            if let Some(secs) = self.timeout_secs {
                validation::validate_positive_number("timeout_secs", secs, 1)?;
            }
            Ok(())
        }
    }

}
