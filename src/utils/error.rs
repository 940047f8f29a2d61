use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Network error fetching {url}: {message}")]
    NetworkError { url: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error in {origin}: {source}")]
    ParseError {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error for key '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to load recipes: {0}")]
    LoadError(#[source] Box<RecipeError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Storage,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecipeError {
    /// Wraps `cause` as a load failure. An error that is already a load
    /// failure is returned unchanged.
    pub fn load(cause: RecipeError) -> Self {
        match cause {
            RecipeError::LoadError(_) => cause,
            other => RecipeError::LoadError(Box::new(other)),
        }
    }

    /// The underlying error of a load failure, or `self` for any other variant.
    pub fn cause(&self) -> &RecipeError {
        match self {
            RecipeError::LoadError(inner) => inner.cause(),
            other => other,
        }
    }

    pub fn is_load_error(&self) -> bool {
        matches!(self, RecipeError::LoadError(_))
    }

    pub fn category(&self) -> ErrorCategory {
        match self.cause() {
            RecipeError::NetworkError { .. } | RecipeError::HttpError(_) => ErrorCategory::Network,
            RecipeError::ParseError { .. } | RecipeError::SerializationError(_) => {
                ErrorCategory::Parse
            }
            RecipeError::StorageError { .. } => ErrorCategory::Storage,
            RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. }
            | RecipeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RecipeError::IoError(_) | RecipeError::LoadError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and that every source URL is reachable",
            ErrorCategory::Parse => match self.cause() {
                RecipeError::ParseError { origin, .. } if origin.starts_with("cache:") => {
                    "The cached recipes are corrupt; remove the cache file and run again"
                }
                _ => "Make sure every source returns a valid JSON document",
            },
            ErrorCategory::Storage => "Check that the cache directory exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.cause() {
            RecipeError::NetworkError { url, .. } => {
                format!("Could not download a recipe from {}", url)
            }
            RecipeError::ParseError { origin, .. } => {
                format!("Could not read recipe data from {}", origin)
            }
            RecipeError::StorageError { key, .. } => {
                format!("Could not save recipes to the cache entry '{}'", key)
            }
            RecipeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            RecipeError::MissingConfigError { field } => {
                format!("Missing setting: {}", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
