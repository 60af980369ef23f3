use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("Catalog store unavailable: {message}")]
    CatalogUnavailable { message: String },

    #[error("Search for report term '{term}' failed: {source}")]
    TermSearchFailed {
        term: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something unusable (e.g. no query at all).
    ClientInput,
    /// The catalog store could not be read.
    Collaborator,
    Configuration,
    Internal,
}

impl CatalogError {
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            reason: reason.into(),
        }
    }

    pub fn term_failed(term: impl Into<String>, source: CatalogError) -> Self {
        Self::TermSearchFailed {
            term: term.into(),
            source: Box::new(source),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidQuery { .. } => ErrorCategory::ClientInput,
            Self::CatalogUnavailable { .. }
            | Self::HttpError(_)
            | Self::CsvError(_)
            | Self::IoError(_) => ErrorCategory::Collaborator,
            Self::TermSearchFailed { source, .. } => source.category(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::ClientInput => "Pass a query string, e.g. `search widget` or `search '\"Widget\"'`",
            ErrorCategory::Collaborator => {
                "Check that the catalog file or endpoint is reachable and well formed"
            }
            ErrorCategory::Configuration => "Review the configuration file and command line flags",
            ErrorCategory::Internal => "Re-run with --verbose and report the log output",
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::ClientInput => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::Collaborator => 4,
            ErrorCategory::Internal => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
